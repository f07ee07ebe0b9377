//! Build orchestration: search, select, copy, finalize

use crate::config::BuildConfig;
use crate::copy::{copy_into, destination_filename, dotted_extension};
use crate::resolver::{CandidateResolver, FallbackSource, FolderScanner};
use crate::selector::{select, ChoiceFn};
use crate::tracklist::{write_not_found_report, write_tracklist};
use mixtape_core::{BuildResult, Catalogue, CompilationRequest, TrackMatch};
use std::fs;
use std::path::{Path, PathBuf};

/// Progress observer: `(current, total, message)`
pub type ProgressFn<'a> = dyn FnMut(usize, usize, &str) + 'a;

/// Stage of a running build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildPhase {
    Created,
    Searching,
    Selecting,
    Copying,
    Finalizing,
    Done,
}

/// A track that produced candidates during the search phase
struct Found {
    /// 1-based position in the request
    index: usize,
    artist: String,
    title: String,
    candidates: Vec<TrackMatch>,
}

struct PendingCopy {
    source: PathBuf,
    dest_name: String,
}

/// Builds compilation folders from a catalogue and a fallback source
pub struct CompilationBuilder<'a, C: Catalogue, F: FallbackSource = Option<FolderScanner>> {
    resolver: CandidateResolver<'a, C, F>,
    write_not_found_report: bool,
}

impl<'a, C: Catalogue> CompilationBuilder<'a, C> {
    /// Builder configured from `config`; the fallback folder is optional
    pub fn from_config(catalogue: &'a C, config: &BuildConfig) -> Self {
        Self::new(catalogue, config.fallback_scanner()).write_not_found_report(config.write_not_found_report)
    }
}

impl<'a, C: Catalogue, F: FallbackSource> CompilationBuilder<'a, C, F> {
    pub fn new(catalogue: &'a C, fallback: F) -> Self {
        Self {
            resolver: CandidateResolver::new(catalogue, fallback),
            write_not_found_report: false,
        }
    }

    /// Also write `not_found_tracks.txt` when tracks are missing
    pub fn write_not_found_report(mut self, enabled: bool) -> Self {
        self.write_not_found_report = enabled;
        self
    }

    /// Run a build
    ///
    /// Only failing to create the destination folder aborts the build; every
    /// other failure is recorded in the returned result.
    pub async fn build(
        &self,
        request: &CompilationRequest,
        mut progress: Option<&mut ProgressFn<'_>>,
        mut choice: Option<&mut ChoiceFn<'_>>,
    ) -> BuildResult {
        let mut phase = BuildPhase::Created;
        let dest = request.destination();

        if let Err(e) = fs::create_dir_all(&dest) {
            tracing::error!("Could not create destination {}: {}", dest.display(), e);
            return BuildResult::aborted(format!(
                "Could not create destination {}: {}",
                dest.display(),
                e
            ));
        }

        let mut result = BuildResult::default();

        advance(&mut phase, BuildPhase::Searching);
        let found = self
            .search(request, &mut progress, &mut result.not_found)
            .await;

        advance(&mut phase, BuildPhase::Selecting);
        let mut copies = Vec::with_capacity(found.len());
        for entry in &found {
            let Some(path) = select(
                &entry.artist,
                &entry.title,
                &entry.candidates,
                choice.as_deref_mut(),
            ) else {
                tracing::info!("Skipped {} - {}: no file chosen", entry.artist, entry.title);
                continue;
            };

            let ext = entry
                .candidates
                .iter()
                .find(|c| c.path == path)
                .map_or_else(|| dotted_extension(&path), |c| dotted_extension(&c.filename));

            copies.push(PendingCopy {
                source: path.clone(),
                dest_name: destination_filename(entry.index, &entry.artist, &entry.title, &ext),
            });
            result.selected_paths.push(path);
        }

        advance(&mut phase, BuildPhase::Copying);
        copy_all(&copies, &dest, &mut progress, &mut result.not_copied);

        advance(&mut phase, BuildPhase::Finalizing);
        self.finalize(request, &dest, &result.not_found);

        advance(&mut phase, BuildPhase::Done);
        tracing::info!("{}: {}", request.name, result.summary_text());
        result
    }

    async fn search(
        &self,
        request: &CompilationRequest,
        progress: &mut Option<&mut ProgressFn<'_>>,
        not_found: &mut Vec<String>,
    ) -> Vec<Found> {
        let total = request.tracks.len();
        report(progress, 0, total, "Searching for tracks...");

        let mut found = Vec::new();
        for (i, track) in request.tracks.iter().enumerate() {
            report(progress, i + 1, total, &format!("Searching: {track}"));

            let candidates = self.resolver.resolve(&track.artist, &track.title).await;
            if candidates.is_empty() {
                tracing::info!("Not found: {}", track);
                not_found.push(track.to_string());
                continue;
            }

            tracing::debug!("{} candidate(s) for {}", candidates.len(), track);
            found.push(Found {
                index: i + 1,
                artist: track.artist.clone(),
                title: track.title.clone(),
                candidates,
            });
        }

        found
    }

    fn finalize(&self, request: &CompilationRequest, dest: &Path, not_found: &[String]) {
        if let Err(e) = write_tracklist(dest, &request.tracks) {
            tracing::error!("Failed to write tracklist in {}: {}", dest.display(), e);
        }

        if self.write_not_found_report && !not_found.is_empty() {
            if let Err(e) = write_not_found_report(dest, not_found) {
                tracing::error!("Failed to write not-found report in {}: {}", dest.display(), e);
            }
        }
    }
}

fn advance(phase: &mut BuildPhase, next: BuildPhase) {
    tracing::debug!("Build phase {:?} -> {:?}", phase, next);
    *phase = next;
}

fn report(progress: &mut Option<&mut ProgressFn<'_>>, current: usize, total: usize, message: &str) {
    if let Some(observer) = progress.as_mut() {
        observer(current, total, message);
    }
}

fn copy_all(
    copies: &[PendingCopy],
    dest: &Path,
    progress: &mut Option<&mut ProgressFn<'_>>,
    not_copied: &mut Vec<String>,
) {
    let total = copies.len();
    report(progress, 0, total, "Copying files...");

    for (i, copy) in copies.iter().enumerate() {
        report(progress, i + 1, total, &format!("Copying: {}", copy.dest_name));

        match copy_into(&copy.source, dest, &copy.dest_name) {
            Ok(path) => tracing::debug!("Copied {} -> {}", copy.source.display(), path.display()),
            Err(e) => {
                tracing::error!("Failed to copy {}: {}", copy.source.display(), e);
                not_copied.push(format!("{} (Error: {})", copy.dest_name, e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_moves_phase() {
        let mut phase = BuildPhase::Created;
        advance(&mut phase, BuildPhase::Searching);
        assert_eq!(phase, BuildPhase::Searching);
    }
}
