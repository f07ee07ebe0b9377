//! Mixtape Storage
//!
//! `SQLite` track catalogue and JSON compilation definitions for Mixtape.
//!
//! # Architecture
//!
//! - **tracks**: query functions over the `tracks` table
//! - **SqliteCatalogue**: the `Catalogue` / `CatalogueIndex` implementation
//!   the builder and indexer talk to
//! - **compilations**: load and save saved compilation definitions
//!
//! # Example
//!
//! ```rust,no_run
//! use mixtape_core::Catalogue;
//! use mixtape_storage::SqliteCatalogue;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Open a read handle for one build
//! let catalogue = SqliteCatalogue::open_read_only("sqlite://music_library.db").await?;
//! let tracks = catalogue.list_all_tracks().await?;
//! println!("{} tracks indexed", tracks.len());
//! catalogue.close().await;
//! # Ok(())
//! # }
//! ```

mod catalogue;
mod error;

pub mod compilations;
pub mod tracks;

pub use catalogue::SqliteCatalogue;
pub use error::{Result, StorageError};

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// Called by writers before indexing so the `tracks` table exists.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    MIGRATOR.run(pool).await?;
    Ok(())
}

/// Create a read-write `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://music_library.db>`)
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    tracing::debug!("Creating catalogue pool for {}", database_url);

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Open a read-only `SQLite` pool on an existing catalogue
///
/// Fails if the database file does not exist.
pub async fn open_read_only(database_url: &str) -> Result<SqlitePool> {
    tracing::debug!("Opening read-only catalogue handle for {}", database_url);

    let options = SqliteConnectOptions::from_str(database_url)?
        .read_only(true)
        .busy_timeout(Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .map_err(|e| StorageError::Connection(format!("{}: {}", database_url, e)))?;

    Ok(pool)
}
