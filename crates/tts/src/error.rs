use thiserror::Error;

pub type Result<T> = std::result::Result<T, TtsError>;

/// Speech synthesis errors
#[derive(Debug, Error)]
pub enum TtsError {
    /// Provider rejected the request parameters
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

    /// Network or connection error, including a body stream cut short
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Provider answered with a body that is not a known audio format
    #[error("Unsupported audio format: {0}")]
    UnsupportedAudio(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Writing the audio artifact failed
    #[error("Storage error: {0}")]
    Storage(#[from] artifacts::ArtifactError),
}

impl TtsError {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert!(matches!(TtsError::from_status(400, String::new()), TtsError::InvalidRequest(_)));
        assert!(matches!(
            TtsError::from_status(401, String::new()),
            TtsError::AuthenticationFailed(_)
        ));
        assert!(matches!(TtsError::from_status(429, String::new()), TtsError::QuotaExceeded(_)));
        assert!(matches!(
            TtsError::from_status(503, "overloaded".into()),
            TtsError::ProviderApiError { status: 503, .. }
        ));
    }

    #[test]
    fn provider_error_message() {
        let err = TtsError::from_status(502, "bad gateway".into());
        assert_eq!(err.to_string(), "Provider API error (502): bad gateway");
    }
}
