//! SQLite access for the European Soccer Database layout.
//!
//! Only reads are performed: match rows from `Match` and id -> name lookups
//! from `Player` and `Team`.

pub mod matches;
pub mod name_cache;
pub mod names;

pub use matches::{MatchRepository, MatchRow};
pub use names::{IdentifierColumns, NameDirectory, NameLookup, Named};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use tracing::{debug, info};

use crate::constants::database::MAX_CONNECTIONS;
use crate::error::AppError;

/// Opens a read-only connection pool to an existing database file.
///
/// # Errors
/// * `AppError::Config` - The file does not exist
/// * `AppError::Database` - SQLite refused to open it
pub async fn connect(path: &str) -> Result<SqlitePool, AppError> {
    if !Path::new(path).exists() {
        return Err(AppError::config_error(format!(
            "Database file '{path}' does not exist"
        )));
    }

    debug!("Opening database {path} (read-only)");
    let options = SqliteConnectOptions::new().filename(path).read_only(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(options)
        .await?;

    info!("Connected to database {path}");
    Ok(pool)
}
