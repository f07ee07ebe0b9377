//! Data types shared across Mixtape crates

mod compilation;
mod track;

pub use compilation::{BuildResult, CompilationDefinition, CompilationRequest, RequestedTrack};
pub use track::{AudioProperties, IndexStats, TrackMatch, TrackRecord};
