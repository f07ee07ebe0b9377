//! Mixtape Metadata
//!
//! Tag reading and catalogue indexing for Mixtape.
//!
//! This crate provides:
//! - Audio property reading (duration, bitrate, album) via lofty
//! - Library indexing with modification-time change detection
//!
//! # Example
//!
//! ```rust,no_run
//! use mixtape_metadata::{LibraryIndexer, LoftyMetadataReader};
//! use mixtape_core::MetadataReader;
//! use mixtape_storage::SqliteCatalogue;
//! use std::path::Path;
//! use std::sync::Arc;
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Read properties from a file
//! let reader = LoftyMetadataReader::new();
//! let properties = reader.read_properties(Path::new("/music/song.mp3"))?;
//!
//! // Index a library into the catalogue
//! let catalogue = Arc::new(SqliteCatalogue::open_for_indexing("sqlite://music_library.db").await?);
//! let indexer = LibraryIndexer::new(catalogue);
//! let stats = indexer.index(Path::new("/music")).await?;
//! println!("{}", stats.summary_text());
//! # Ok(())
//! # }
//! ```

mod error;
mod indexer;
mod reader;

pub use error::{MetadataError, Result};
pub use indexer::{IndexConfig, LibraryIndexer};
pub use reader::LoftyMetadataReader;
