use crate::{tracks, Result};
use mixtape_core::{Catalogue, CatalogueIndex, TrackRecord, UpsertOutcome};
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};

/// `SQLite`-backed track catalogue
///
/// A build opens its own read-only handle with [`SqliteCatalogue::open_read_only`]
/// and releases it with [`SqliteCatalogue::close`]; the indexer uses a
/// read-write pool from [`crate::create_pool`].
pub struct SqliteCatalogue {
    pool: SqlitePool,
}

impl SqliteCatalogue {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a read-only handle on an existing catalogue
    pub async fn open_read_only(database_url: &str) -> Result<Self> {
        let pool = crate::open_read_only(database_url).await?;
        Ok(Self::new(pool))
    }

    /// Open a read-write handle, creating the schema if needed
    pub async fn open_for_indexing(database_url: &str) -> Result<Self> {
        let pool = crate::create_pool(database_url).await?;
        crate::run_migrations(&pool).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every connection held by this handle
    pub async fn close(self) {
        self.pool.close().await;
    }
}

impl Catalogue for SqliteCatalogue {
    async fn list_all_tracks(&self) -> mixtape_core::Result<Vec<TrackRecord>> {
        Ok(tracks::get_all(&self.pool).await?)
    }
}

impl CatalogueIndex for SqliteCatalogue {
    async fn modified_at(&self, path: &Path) -> mixtape_core::Result<Option<f64>> {
        Ok(tracks::find_mtime(&self.pool, path).await?)
    }

    async fn upsert(&self, record: &TrackRecord) -> mixtape_core::Result<UpsertOutcome> {
        Ok(tracks::upsert(&self.pool, record).await?)
    }

    async fn indexed_paths(&self) -> mixtape_core::Result<Vec<PathBuf>> {
        Ok(tracks::all_paths(&self.pool).await?)
    }

    async fn remove(&self, path: &Path) -> mixtape_core::Result<()> {
        Ok(tracks::delete_by_path(&self.pool, path).await?)
    }
}
