//! Library indexer: keeps the catalogue in step with a music folder
use crate::error::{MetadataError, Result};
use crate::reader::LoftyMetadataReader;
use mixtape_core::extensions::{default_extensions, has_accepted_extension};
use mixtape_core::{CatalogueIndex, IndexStats, MetadataReader, TrackRecord, UpsertOutcome};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::UNIX_EPOCH;
use walkdir::WalkDir;

/// Files whose stored modification time is this close are considered unchanged
const MTIME_TOLERANCE_SECS: f64 = 1.0;

/// Indexing configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Audio file extensions to index (case-insensitive, dot optional)
    pub extensions: Vec<String>,

    /// Files whose lowercase name contains any of these are ignored
    pub exclude_keywords: Vec<String>,

    /// Whether to follow symbolic links while walking
    pub follow_links: bool,

    /// Drop catalogue records under the root whose file is gone
    pub remove_missing: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude_keywords: Vec::new(),
            follow_links: false,
            remove_missing: true,
        }
    }
}

/// Library indexer
pub struct LibraryIndexer<S: CatalogueIndex, R: MetadataReader = LoftyMetadataReader> {
    reader: R,
    db: Arc<S>,
    config: IndexConfig,
}

impl<S: CatalogueIndex> LibraryIndexer<S> {
    /// Create an indexer with the lofty reader and default configuration
    pub fn new(db: Arc<S>) -> Self {
        Self::with_reader(db, LoftyMetadataReader::new(), IndexConfig::default())
    }

    /// Create an indexer with custom configuration
    pub fn with_config(db: Arc<S>, config: IndexConfig) -> Self {
        Self::with_reader(db, LoftyMetadataReader::new(), config)
    }
}

impl<S: CatalogueIndex, R: MetadataReader> LibraryIndexer<S, R> {
    /// Create an indexer with a custom tag reader
    pub fn with_reader(db: Arc<S>, reader: R, config: IndexConfig) -> Self {
        Self { reader, db, config }
    }

    /// Index every accepted audio file under `root`
    ///
    /// Counters are accumulated into the returned stats; per-file failures
    /// are recorded there and never abort the run.
    pub async fn index(&self, root: &Path) -> Result<IndexStats> {
        if !root.exists() {
            return Err(MetadataError::FileNotFound(root.display().to_string()));
        }
        if !root.is_dir() {
            return Err(MetadataError::InvalidPath(format!(
                "{} is not a directory",
                root.display()
            )));
        }

        tracing::info!("Indexing library at {}", root.display());

        let mut stats = IndexStats::default();
        let files = self.discover_files(root, &mut stats);
        stats.discovered = files.len();

        let mut seen: HashSet<PathBuf> = HashSet::with_capacity(files.len());

        for path in files {
            seen.insert(path.clone());

            match self.process_file(&path).await {
                Ok(Some(UpsertOutcome::Added)) => stats.added += 1,
                Ok(Some(UpsertOutcome::Updated)) => stats.updated += 1,
                Ok(None) => stats.skipped += 1,
                Err(e) => {
                    tracing::warn!("Failed to index {}: {}", path.display(), e);
                    stats.errors.push((path, e.to_string()));
                }
            }
        }

        if self.config.remove_missing {
            stats.removed = self.remove_missing(root, &seen).await?;
        }

        tracing::info!("{}", stats.summary_text());
        Ok(stats)
    }

    /// Walk `root` and collect accepted audio files in file-name order
    fn discover_files(&self, root: &Path, stats: &mut IndexStats) -> Vec<PathBuf> {
        let mut files = Vec::new();

        let walker = WalkDir::new(root)
            .follow_links(self.config.follow_links)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().map_or_else(|| root.to_path_buf(), Path::to_path_buf);
                    tracing::warn!("Skipping unreadable entry {}: {}", path.display(), e);
                    stats.errors.push((path, e.to_string()));
                    continue;
                }
            };

            let path = entry.path();
            if !entry.file_type().is_file() {
                continue;
            }
            if !has_accepted_extension(path, &self.config.extensions) || self.is_excluded(path) {
                continue;
            }

            files.push(path.to_path_buf());
        }

        files
    }

    fn is_excluded(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().map(|n| n.to_string_lossy().to_lowercase()) else {
            return false;
        };

        self.config
            .exclude_keywords
            .iter()
            .map(|k| k.trim().to_lowercase())
            .any(|k| !k.is_empty() && name.contains(&k))
    }

    /// Index one file
    ///
    /// Returns `None` when the stored record is already current.
    async fn process_file(&self, path: &Path) -> Result<Option<UpsertOutcome>> {
        let fs_meta = std::fs::metadata(path)?;
        let size = fs_meta.len();
        let modified_at = fs_meta
            .modified()?
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0);

        if let Some(stored) = self.db.modified_at(path).await? {
            if (stored - modified_at).abs() < MTIME_TOLERANCE_SECS {
                return Ok(None);
            }
        }

        let properties = match self.reader.read_properties(path) {
            Ok(properties) => properties,
            Err(e) => {
                tracing::warn!("Could not read audio metadata for {}: {}", path.display(), e);
                Default::default()
            }
        };

        let record = TrackRecord::new(path, size, modified_at).with_properties(properties);
        let outcome = self.db.upsert(&record).await?;
        tracing::debug!("{:?} {}", outcome, path.display());

        Ok(Some(outcome))
    }

    /// Remove records under `root` that were not seen on disk
    async fn remove_missing(&self, root: &Path, seen: &HashSet<PathBuf>) -> Result<usize> {
        let mut removed = 0;

        for path in self.db.indexed_paths().await? {
            if path.starts_with(root) && !seen.contains(&path) {
                self.db.remove(&path).await?;
                tracing::debug!("Removed missing track {}", path.display());
                removed += 1;
            }
        }

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_accepts_standard_extensions() {
        let config = IndexConfig::default();
        assert_eq!(config.extensions.len(), 6);
        assert!(config.exclude_keywords.is_empty());
        assert!(config.remove_missing);
    }
}
