//! Implements a struct that holds the state of the REST server.

use axum::extract::FromRef;

use crate::db::Database;

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The handle to the database that stores transactions.
    pub database: Database,
}

impl AppState {
    /// Create a new [AppState] backed by `database`.
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

// Handlers only need the database, so they extract it directly.
impl FromRef<AppState> for Database {
    fn from_ref(state: &AppState) -> Self {
        state.database.clone()
    }
}
