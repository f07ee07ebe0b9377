//! Catalogue and match types
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One indexed audio file in the catalogue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackRecord {
    /// Absolute path, unique within the catalogue
    pub path: PathBuf,

    /// File name including extension
    pub filename: String,

    /// Lowercase extension including the leading dot (e.g. `.mp3`)
    pub extension: String,

    /// File size in bytes
    pub size: u64,

    /// Duration in seconds
    pub duration: f64,

    /// Bitrate in kbps
    pub bitrate: u32,

    /// Album tag, empty when absent
    pub album: String,

    /// Modification time in seconds since the Unix epoch
    pub modified_at: f64,
}

impl TrackRecord {
    /// Build a record for `path` with empty metadata
    ///
    /// `filename` and `extension` are derived from the path.
    pub fn new(path: impl Into<PathBuf>, size: u64, modified_at: f64) -> Self {
        let path = path.into();
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = dotted_extension(&path);

        Self {
            path,
            filename,
            extension,
            size,
            duration: 0.0,
            bitrate: 0,
            album: String::new(),
            modified_at,
        }
    }

    /// Apply tag-derived properties
    pub fn with_properties(mut self, properties: AudioProperties) -> Self {
        self.duration = properties.duration;
        self.bitrate = properties.bitrate;
        self.album = properties.album;
        self
    }
}

/// Lowercase extension of `path` with its leading dot, or empty
fn dotted_extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty())
        .map(|e| format!(".{}", e.to_lowercase()))
        .unwrap_or_default()
}

/// A candidate file for a requested track
///
/// Produced fresh for every lookup and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackMatch {
    /// Similarity between the requested title and the filename (0.0 - 1.0)
    pub score: f64,

    /// Absolute path of the candidate file
    pub path: PathBuf,

    /// File name including extension
    pub filename: String,

    /// Duration in seconds
    pub duration: f64,

    /// File size in bytes
    pub size: u64,

    /// Bitrate in kbps
    pub bitrate: u32,

    /// Album tag, empty when absent
    pub album: String,
}

impl TrackMatch {
    /// Candidate built from a catalogue record
    pub fn from_record(score: f64, record: &TrackRecord) -> Self {
        Self {
            score,
            path: record.path.clone(),
            filename: record.filename.clone(),
            duration: record.duration,
            size: record.size,
            bitrate: record.bitrate,
            album: record.album.clone(),
        }
    }

    /// Duration rendered as `m:ss`
    pub fn duration_display(&self) -> String {
        let total = self.duration.max(0.0) as u64;
        format!("{}:{:02}", total / 60, total % 60)
    }

    /// Size in mebibytes
    pub fn size_mb(&self) -> f64 {
        self.size as f64 / (1024.0 * 1024.0)
    }
}

/// Properties read from an audio file's header and tags
///
/// `Default` is what a failed read degrades to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioProperties {
    /// Duration in seconds
    pub duration: f64,

    /// Bitrate in kbps
    pub bitrate: u32,

    /// Album tag, empty when absent
    pub album: String,
}

/// Statistics from one indexing run
#[derive(Debug, Clone, Default)]
pub struct IndexStats {
    /// Audio files found under the root
    pub discovered: usize,

    /// Records inserted
    pub added: usize,

    /// Records rewritten because the file changed
    pub updated: usize,

    /// Files left alone because their modification time matched
    pub skipped: usize,

    /// Records dropped because the file disappeared
    pub removed: usize,

    /// Files that could not be indexed
    pub errors: Vec<(PathBuf, String)>,
}

impl IndexStats {
    /// One-line human readable summary
    pub fn summary_text(&self) -> String {
        format!(
            "Indexing complete: {} added, {} updated, {} skipped, {} removed, {} errors",
            self.added,
            self.updated,
            self.skipped,
            self.removed,
            self.errors.len()
        )
    }
}
