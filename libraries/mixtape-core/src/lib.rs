//! Mixtape Core
//!
//! Domain types, traits, and error handling shared by every Mixtape crate.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `TrackRecord`, `TrackMatch`, `RequestedTrack`, `CompilationRequest`, `BuildResult`
//! - **Core Traits**: `Catalogue`, `CatalogueIndex`, `MetadataReader`
//! - **Error Handling**: Unified `MixtapeError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use mixtape_core::types::{CompilationRequest, RequestedTrack};
//! use std::path::PathBuf;
//!
//! let request = CompilationRequest::new(
//!     PathBuf::from("/tmp/compilations"),
//!     "Summer 2024",
//!     vec![RequestedTrack::new("Daft Punk", "One More Time")],
//! );
//!
//! assert_eq!(request.destination(), PathBuf::from("/tmp/compilations/Summer 2024"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod extensions;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{MixtapeError, Result};
pub use traits::{Catalogue, CatalogueIndex, MetadataReader, UpsertOutcome};

pub use types::{
    AudioProperties, BuildResult, CompilationDefinition, CompilationRequest, IndexStats,
    RequestedTrack, TrackMatch, TrackRecord,
};
