//! Compilation request and result types
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// A track the caller wants in the compilation
///
/// Serialized as a two-element array `["artist", "title"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct RequestedTrack {
    /// Artist as typed by the caller
    pub artist: String,

    /// Title as typed by the caller
    pub title: String,
}

impl RequestedTrack {
    /// Create a requested track
    pub fn new(artist: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            title: title.into(),
        }
    }
}

impl fmt::Display for RequestedTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.artist, self.title)
    }
}

impl From<(String, String)> for RequestedTrack {
    fn from((artist, title): (String, String)) -> Self {
        Self { artist, title }
    }
}

impl From<RequestedTrack> for (String, String) {
    fn from(track: RequestedTrack) -> Self {
        (track.artist, track.title)
    }
}

/// Everything needed to build one compilation
#[derive(Debug, Clone, PartialEq)]
pub struct CompilationRequest {
    /// Folder the compilation folder is created in
    pub dest_base: PathBuf,

    /// Compilation name, used as the folder name
    pub name: String,

    /// Requested tracks in output order
    pub tracks: Vec<RequestedTrack>,
}

impl CompilationRequest {
    /// Create a compilation request
    pub fn new(dest_base: impl Into<PathBuf>, name: impl Into<String>, tracks: Vec<RequestedTrack>) -> Self {
        Self {
            dest_base: dest_base.into(),
            name: name.into(),
            tracks,
        }
    }

    /// `<dest_base>/<name>`
    pub fn destination(&self) -> PathBuf {
        self.dest_base.join(&self.name)
    }
}

/// Outcome of a build
///
/// Returned even when individual tracks fail; only a setup failure leaves
/// all three lists empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildResult {
    /// `"artist - title"` for each track with no candidates
    pub not_found: Vec<String>,

    /// `"<destination filename> (Error: <message>)"` for each failed copy
    pub not_copied: Vec<String>,

    /// Chosen source path per matched track, in request order
    pub selected_paths: Vec<PathBuf>,

    /// Why the build aborted before searching, if it did
    pub setup_error: Option<String>,
}

impl BuildResult {
    /// Result of a build that could not create its destination folder
    pub fn aborted(reason: impl Into<String>) -> Self {
        Self {
            setup_error: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Whether every requested track was found and copied
    pub fn is_complete(&self) -> bool {
        self.setup_error.is_none() && self.not_found.is_empty() && self.not_copied.is_empty()
    }

    /// One-line summary for logs and the terminal
    pub fn summary_text(&self) -> String {
        format!(
            "Build complete: {} selected, {} not found, {} not copied",
            self.selected_paths.len(),
            self.not_found.len(),
            self.not_copied.len()
        )
    }
}

/// A saved compilation definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompilationDefinition {
    /// Compilation name, unique within a definitions file
    pub name: String,

    /// Folder the compilation folder is created in
    pub dest_base: PathBuf,

    /// Requested tracks in output order
    pub tracklist: Vec<RequestedTrack>,

    /// Paths chosen the last time this compilation was built
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_paths: Option<Vec<PathBuf>>,
}

impl CompilationDefinition {
    /// Turn the definition into a build request
    pub fn to_request(&self) -> CompilationRequest {
        CompilationRequest::new(self.dest_base.clone(), self.name.clone(), self.tracklist.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requested_track_serializes_as_pair() {
        let track = RequestedTrack::new("Queen", "Bohemian Rhapsody");
        let json = serde_json::to_string(&track).unwrap();
        assert_eq!(json, r#"["Queen","Bohemian Rhapsody"]"#);
    }

    #[test]
    fn definition_reads_legacy_json() {
        let json = r#"{
            "dest_base": "/tmp/out",
            "name": "Party",
            "tracklist": [["A", "X"], ["B", "Y"]]
        }"#;
        let def: CompilationDefinition = serde_json::from_str(json).unwrap();

        assert_eq!(def.tracklist.len(), 2);
        assert_eq!(def.tracklist[1], RequestedTrack::new("B", "Y"));
        assert!(def.selected_paths.is_none());
        assert_eq!(def.to_request().destination(), PathBuf::from("/tmp/out/Party"));
    }

    #[test]
    fn aborted_result_is_empty() {
        let result = BuildResult::aborted("permission denied");
        assert!(result.not_found.is_empty());
        assert!(result.not_copied.is_empty());
        assert!(result.selected_paths.is_empty());
        assert!(!result.is_complete());
    }
}
