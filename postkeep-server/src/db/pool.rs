//! SQLite connection pool management
//!
//! Uses sqlx SqlitePool with explicit connection limits. The pool is
//! created once at startup and handed to the router state; handlers
//! check connections out per query and release them on drop.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Default maximum connections for the pool.
/// Kept low for a single-table service.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a SQLite connection pool.
///
/// The database file is created if it does not exist yet.
///
/// # Arguments
///
/// * `database_url` - SQLite connection string, e.g. `sqlite://posts.db`
///
/// # Errors
///
/// Returns an error if the URL does not parse or the file cannot be
/// opened.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a SQLite connection pool with a custom connection cap.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}
