//! Access to the application's SQLite database.
//!
//! There is no long-lived connection: [Database::with_connection] opens a
//! connection for a single operation and closes it again afterwards.

use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::{Error, transaction::create_transaction_table};

/// A handle to the SQLite database file.
#[derive(Debug, Clone, PartialEq)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    /// Create a handle for the database file at `path`.
    ///
    /// The file is not touched until the first call to
    /// [Database::with_connection], which creates it if it does not exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path to the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a connection, make sure the schema exists, run `operation` and
    /// close the connection.
    ///
    /// # Errors
    /// Returns an [Error::Storage] if the database cannot be opened or the
    /// tables cannot be created, otherwise the result of `operation`.
    pub fn with_connection<T>(
        &self,
        operation: impl FnOnce(&Connection) -> Result<T, Error>,
    ) -> Result<T, Error> {
        let connection = Connection::open(&self.path)?;
        initialize(&connection)?;

        let result = operation(&connection);

        if let Err((_, error)) = connection.close() {
            tracing::warn!("could not close connection to {:?}: {error}", self.path);
        }

        result
    }
}

/// Create the application tables if they do not already exist.
///
/// Safe to call on every connection: existing tables and rows are left as is.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    create_transaction_table(connection)?;

    Ok(())
}
