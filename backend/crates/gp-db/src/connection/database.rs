use crate::{DbError, Result};

use std::panic::Location;
use std::path::PathBuf;
use std::time::Duration;

use error_location::ErrorLocation;
use log::{debug, info};
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Where the sprints database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    File(PathBuf),
    /// Private to the pool; gone when the pool closes.
    InMemory,
}

impl DatabaseLocation {
    pub fn describe(&self) -> String {
        match self {
            DatabaseLocation::File(path) => path.display().to_string(),
            DatabaseLocation::InMemory => ":memory:".to_string(),
        }
    }
}

/// Open the connection pool shared by every request.
///
/// An in-memory database exists per connection, so that case is pinned to
/// a single connection that is never recycled.
pub async fn connect(location: &DatabaseLocation, max_connections: u32) -> Result<SqlitePool> {
    let pool = match location {
        DatabaseLocation::File(path) => {
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| DbError::Initialization {
                        message: format!(
                            "Failed to create database directory {}: {}",
                            parent.display(),
                            e
                        ),
                        location: ErrorLocation::from(Location::caller()),
                    })?;
            }

            let options = SqliteConnectOptions::new()
                .filename(path)
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .busy_timeout(BUSY_TIMEOUT);

            SqlitePoolOptions::new()
                .max_connections(max_connections)
                .connect_with(options)
                .await?
        }
        DatabaseLocation::InMemory => {
            let options = SqliteConnectOptions::new()
                .filename(":memory:")
                .create_if_missing(true);

            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        }
    };

    info!("Database connection established: {}", location.describe());

    Ok(pool)
}

/// Apply the embedded migrations. Safe to call on an up-to-date database.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    debug!("Running database migrations...");

    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DbError::Migration {
            message: format!("Migration failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    debug!("Migrations complete");

    Ok(())
}
