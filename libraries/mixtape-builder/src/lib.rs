//! Mixtape Builder - assembles compilation folders from a music catalogue
//!
//! A build takes a list of `Artist - Title` requests and, for each one:
//! - Finds candidate files in the catalogue (or a fallback folder)
//! - Picks one candidate, optionally asking the caller
//! - Copies it into the compilation folder under a numbered name
//!
//! and finally writes `tracklist.txt` next to the copies.
//!
//! # Example
//!
//! ```rust,ignore
//! use mixtape_builder::{BuildConfig, CompilationBuilder};
//! use mixtape_core::{CompilationRequest, RequestedTrack};
//! use mixtape_storage::SqliteCatalogue;
//!
//! let catalogue = SqliteCatalogue::open_read_only("sqlite://music_library.db").await?;
//! let builder = CompilationBuilder::from_config(&catalogue, &BuildConfig::default());
//!
//! let request = CompilationRequest::new(
//!     "/tmp/compilations",
//!     "Road Trip",
//!     vec![RequestedTrack::new("Queen", "Bohemian Rhapsody")],
//! );
//! let result = builder.build(&request, None, None).await;
//! catalogue.close().await;
//! ```

#![forbid(unsafe_code)]

mod builder;
mod config;
pub mod copy;
mod error;
pub mod normalize;
pub mod resolver;
pub mod selector;
pub mod similarity;
pub mod tracklist;

pub use builder::{BuildPhase, CompilationBuilder, ProgressFn};
pub use config::BuildConfig;
pub use error::{BuildError, Result};
pub use normalize::normalize;
pub use resolver::{find_in_catalogue, CandidateResolver, FallbackSource, FolderScanner};
pub use selector::{select, ChoiceFn};
pub use similarity::similarity;
pub use tracklist::{parse_tracklist, read_tracklist_file, ParsedTracklist, RejectedLine};
