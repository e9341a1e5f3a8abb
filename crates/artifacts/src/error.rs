use thiserror::Error;

pub type Result<T> = std::result::Result<T, ArtifactError>;

/// Artifact storage errors
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// No artifact with this name exists, or the name is not servable
    #[error("Artifact '{0}' not found")]
    NotFound(String),

    /// Filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The upstream byte stream failed mid-write
    #[error("Audio stream failed: {0}")]
    Stream(Box<dyn std::error::Error + Send + Sync>),

    /// The upstream stream ended without producing any bytes
    #[error("Audio stream was empty")]
    EmptyStream,

    /// Every collision suffix for a name was already taken
    #[error("No free filename for '{0}'")]
    Exhausted(String),
}
