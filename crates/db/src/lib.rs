//! SQLite persistence for todo items.
//!
//! [`create_pool`] opens the database (creating the file when missing) and
//! [`initialize`] bootstraps the schema. Every repository call checks a
//! connection out of the pool for the duration of one operation; the pooled
//! connection returns to the pool when the guard drops, on every exit path.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::SqlitePool;

/// Schema for the `todos` table.
///
/// `AUTOINCREMENT` keeps SQLite from handing out the rowid of a deleted row
/// again.
const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    content TEXT NOT NULL,
    completed BOOLEAN NOT NULL DEFAULT 0
)";

/// Create a connection pool from a database URL such as `sqlite://todos.db`.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Ensure the `todos` table exists. Safe to call more than once.
pub async fn initialize(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(SCHEMA).execute(pool).await?;
    tracing::debug!("todos schema ensured");
    Ok(())
}
