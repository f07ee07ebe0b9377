//! Error types for the compilation builder

use mixtape_core::MixtapeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Catalogue error: {0}")]
    Catalogue(#[from] MixtapeError),

    #[error("Invalid tracklist: {0}")]
    InvalidTracklist(String),

    #[error("Invalid file path: {0}")]
    InvalidPath(String),
}

pub type Result<T> = std::result::Result<T, BuildError>;

impl From<BuildError> for MixtapeError {
    fn from(err: BuildError) -> Self {
        match err {
            BuildError::Catalogue(inner) => inner,
            BuildError::Io(e) => MixtapeError::Io(e),
            other => MixtapeError::invalid_input(other.to_string()),
        }
    }
}
