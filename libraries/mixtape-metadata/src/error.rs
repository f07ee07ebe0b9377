//! Metadata-specific errors
use thiserror::Error;

/// Result type alias using `MetadataError`
pub type Result<T> = std::result::Result<T, MetadataError>;

/// Metadata error types
#[derive(Error, Debug)]
pub enum MetadataError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Path exists but cannot be used
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Tag parsing error
    #[error("Tag parsing error: {0}")]
    ParseError(String),

    /// Catalogue rejected a read or write
    #[error("Catalogue error: {0}")]
    Catalogue(#[from] mixtape_core::MixtapeError),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Lofty error
    #[error(transparent)]
    Lofty(#[from] lofty::error::LoftyError),
}

impl From<MetadataError> for mixtape_core::MixtapeError {
    fn from(err: MetadataError) -> Self {
        match err {
            MetadataError::Catalogue(inner) => inner,
            other => mixtape_core::MixtapeError::metadata(other.to_string()),
        }
    }
}
