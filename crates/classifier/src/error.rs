use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClassifierError>;

/// Emotion classification errors
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// Provider rejected the input
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Authentication failed (missing or invalid API key)
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Provider quota or rate limit exhausted
    #[error("Quota exceeded: {0}")]
    QuotaExceeded(String),

    /// Provider not found in configuration
    #[error("Provider '{0}' not found")]
    ProviderNotFound(String),

    /// Provider API returned an error
    #[error("Provider API error ({status}): {message}")]
    ProviderApiError { status: u16, message: String },

    /// Network or connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Provider answered with a body we could not interpret
    #[error("Malformed classifier response: {0}")]
    MalformedResponse(String),

    /// Provider returned no labels at all
    #[error("Classifier returned no labels")]
    EmptyRanking,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl ClassifierError {
    /// Classify a non-success provider response
    pub(crate) fn from_status(status: u16, message: String) -> Self {
        match status {
            400 => Self::InvalidRequest(message),
            401 => Self::AuthenticationFailed(message),
            429 => Self::QuotaExceeded(message),
            _ => Self::ProviderApiError { status, message },
        }
    }
}
