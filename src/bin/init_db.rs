use std::error::Error;
use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use sentinel_stream::initialize_db;

/// A utility for creating the tables of the sentinel_stream database.
///
/// Running it against an existing database leaves the existing tables and
/// rows untouched.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the SQLite database, created if it does not exist.
    #[arg(long, default_value = "transactions.db")]
    db_path: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    if args.db_path.is_dir() {
        eprintln!("{:#?} is a directory, expected a database file.", args.db_path);
        exit(1);
    }

    let conn = Connection::open(&args.db_path)?;
    initialize_db(&conn)?;
    conn.close().map_err(|(_, error)| error)?;

    println!("Database initialized");

    Ok(())
}
