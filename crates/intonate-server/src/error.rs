use axum::{
    Json,
    extract::rejection::BytesRejection,
    response::{IntoResponse, Response},
};
use http::StatusCode;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced to HTTP clients
///
/// Every variant renders as `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body is not a JSON object with a string `text` field
    #[error("Missing \"text\" field in request body")]
    MissingField,

    /// `text` is empty after trimming
    #[error("Text field cannot be empty")]
    EmptyInput,

    /// Body exceeds `server.body_limit_bytes`
    #[error("Request body too large")]
    PayloadTooLarge,

    /// Requested audio file does not exist
    #[error("Audio file not found")]
    NotFound,

    /// Classification or synthesis failed
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingField | Self::EmptyInput => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge
        } else {
            tracing::debug!(error = %rejection, "failed to read request body");
            Self::MissingField
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
