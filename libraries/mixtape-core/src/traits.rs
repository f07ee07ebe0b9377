//! Core traits for Mixtape
use crate::error::Result;
use crate::types::{AudioProperties, TrackRecord};
use std::path::{Path, PathBuf};

/// Read side of the track catalogue
///
/// The builder performs all filtering and scoring in memory, so the only
/// query it needs is "every record".
#[allow(async_fn_in_trait)]
pub trait Catalogue: Send + Sync {
    /// List every indexed track
    async fn list_all_tracks(&self) -> Result<Vec<TrackRecord>>;
}

/// Outcome of writing one record into the catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// No record existed for the path
    Added,
    /// An existing record was replaced
    Updated,
}

/// Write side of the track catalogue, used only by the indexer
#[allow(async_fn_in_trait)]
pub trait CatalogueIndex: Send + Sync {
    /// Stored modification time for `path`, if the path is indexed
    async fn modified_at(&self, path: &Path) -> Result<Option<f64>>;

    /// Insert or replace the record keyed by its path
    async fn upsert(&self, record: &TrackRecord) -> Result<UpsertOutcome>;

    /// Every path currently in the catalogue
    async fn indexed_paths(&self) -> Result<Vec<PathBuf>>;

    /// Remove the record for `path`
    async fn remove(&self, path: &Path) -> Result<()>;
}

/// Metadata reader trait
///
/// Implementers extract the audio properties the catalogue stores.
pub trait MetadataReader: Send + Sync {
    /// Read duration, bitrate and album from an audio file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    fn read_properties(&self, path: &Path) -> Result<AudioProperties>;
}
