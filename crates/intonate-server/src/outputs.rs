use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use http::header;

use crate::{error::ApiError, state::AppState};

/// Serve a generated audio file by name
pub async fn outputs_handler(State(state): State<AppState>, Path(filename): Path<String>) -> Result<Response, ApiError> {
    match state.store.read(&filename).await {
        Ok(artifact) => Ok(([(header::CONTENT_TYPE, artifact.content_type)], artifact.bytes).into_response()),
        Err(artifacts::ArtifactError::NotFound(_)) => {
            tracing::debug!(%filename, "audio file not found");
            Err(ApiError::NotFound)
        }
        Err(e) => {
            tracing::error!(%filename, error = %e, "failed to read audio file");
            Err(ApiError::Internal(e.to_string()))
        }
    }
}
