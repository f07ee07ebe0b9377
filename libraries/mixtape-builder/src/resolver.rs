//! Candidate resolution: catalogue first, fallback folder second

use crate::normalize::normalize;
use crate::similarity::similarity;
use mixtape_core::extensions::has_accepted_extension;
use mixtape_core::{Catalogue, MetadataReader, TrackMatch};
use mixtape_metadata::LoftyMetadataReader;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Score `filename` against a normalized artist and title
///
/// Returns `None` unless the normalized filename contains both.
fn candidate_score(filename: &str, artist: &str, title: &str) -> Option<f64> {
    let name = normalize(filename);
    if name.contains(artist) && name.contains(title) {
        Some(similarity(title, &name))
    } else {
        None
    }
}

/// Order candidates best first: score descending, then size descending
///
/// The sort is stable so ties keep their discovery order.
pub fn rank(candidates: &mut [TrackMatch]) {
    candidates.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| b.size.cmp(&a.size))
    });
}

/// Find candidates for `artist - title` in the catalogue
///
/// A catalogue read failure is logged and yields no candidates.
pub async fn find_in_catalogue<C: Catalogue>(
    catalogue: &C,
    artist: &str,
    title: &str,
) -> Vec<TrackMatch> {
    let records = match catalogue.list_all_tracks().await {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!("Catalogue lookup failed for {} - {}: {}", artist, title, e);
            return Vec::new();
        }
    };

    let artist = normalize(artist);
    let title = normalize(title);

    let mut matches: Vec<TrackMatch> = records
        .iter()
        .filter_map(|record| {
            candidate_score(&record.filename, &artist, &title)
                .map(|score| TrackMatch::from_record(score, record))
        })
        .collect();

    rank(&mut matches);
    tracing::debug!("Catalogue: {} candidate(s) for {} - {}", matches.len(), artist, title);
    matches
}

/// Source consulted when the catalogue has nothing
pub trait FallbackSource {
    fn find_matches(&self, artist: &str, title: &str) -> Vec<TrackMatch>;
}

impl<T: FallbackSource> FallbackSource for Option<T> {
    fn find_matches(&self, artist: &str, title: &str) -> Vec<TrackMatch> {
        self.as_ref()
            .map(|source| source.find_matches(artist, title))
            .unwrap_or_default()
    }
}

impl<T: FallbackSource + ?Sized> FallbackSource for &T {
    fn find_matches(&self, artist: &str, title: &str) -> Vec<TrackMatch> {
        (**self).find_matches(artist, title)
    }
}

/// Recursive scan of a plain folder of audio files
pub struct FolderScanner<R: MetadataReader = LoftyMetadataReader> {
    folder: PathBuf,
    extensions: Vec<String>,
    follow_links: bool,
    reader: R,
}

impl FolderScanner {
    /// Scan `folder` with the default extensions and the lofty tag reader
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self::with_reader(folder, LoftyMetadataReader::new())
    }
}

impl<R: MetadataReader> FolderScanner<R> {
    pub fn with_reader(folder: impl Into<PathBuf>, reader: R) -> Self {
        Self {
            folder: folder.into(),
            extensions: mixtape_core::extensions::default_extensions(),
            follow_links: false,
            reader,
        }
    }

    /// Set the accepted audio extensions
    pub fn extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    /// Set whether to follow symbolic links
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Walk the folder and collect candidates for `artist - title`
    ///
    /// A missing folder yields no candidates. Unreadable entries are logged
    /// and skipped.
    pub fn find_in_fallback_folder(&self, artist: &str, title: &str) -> Vec<TrackMatch> {
        if !self.folder.is_dir() {
            tracing::warn!(
                "Fallback folder {} does not exist or is not a directory",
                self.folder.display()
            );
            return Vec::new();
        }

        let artist = normalize(artist);
        let title = normalize(title);
        let mut matches = Vec::new();
        let mut walk_errors = 0usize;

        let walker = WalkDir::new(&self.folder)
            .follow_links(self.follow_links)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    walk_errors += 1;
                    tracing::warn!("Skipping unreadable entry in fallback folder: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if !has_accepted_extension(path, &self.extensions) {
                continue;
            }

            let filename = entry.file_name().to_string_lossy().into_owned();
            let Some(score) = candidate_score(&filename, &artist, &title) else {
                continue;
            };

            let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
            let properties = match self.reader.read_properties(path) {
                Ok(properties) => properties,
                Err(e) => {
                    tracing::warn!("Could not read audio metadata for {}: {}", path.display(), e);
                    Default::default()
                }
            };

            matches.push(TrackMatch {
                score,
                path: path.to_path_buf(),
                filename,
                duration: properties.duration,
                size,
                bitrate: properties.bitrate,
                album: properties.album,
            });
        }

        if walk_errors > 0 {
            tracing::warn!(
                "{} entries in {} could not be read",
                walk_errors,
                self.folder.display()
            );
        }

        rank(&mut matches);
        tracing::debug!("Fallback: {} candidate(s) for {} - {}", matches.len(), artist, title);
        matches
    }
}

impl<R: MetadataReader> FallbackSource for FolderScanner<R> {
    fn find_matches(&self, artist: &str, title: &str) -> Vec<TrackMatch> {
        self.find_in_fallback_folder(artist, title)
    }
}

/// Combines the catalogue with a fallback source
pub struct CandidateResolver<'a, C: Catalogue, F: FallbackSource> {
    catalogue: &'a C,
    fallback: F,
}

impl<'a, C: Catalogue, F: FallbackSource> CandidateResolver<'a, C, F> {
    pub fn new(catalogue: &'a C, fallback: F) -> Self {
        Self { catalogue, fallback }
    }

    /// Candidates for one requested track, best first
    ///
    /// The fallback is consulted only when the catalogue returns nothing.
    pub async fn resolve(&self, artist: &str, title: &str) -> Vec<TrackMatch> {
        let matches = find_in_catalogue(self.catalogue, artist, title).await;
        if !matches.is_empty() {
            return matches;
        }

        self.fallback.find_matches(artist, title)
    }
}
