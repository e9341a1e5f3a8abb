use std::time::Instant;

use axum::{
    Json,
    extract::{State, rejection::BytesRejection},
};
use bytes::Bytes;
use intonate_telemetry::{KeyValue, metrics::record_duration};
use serde::Serialize;
use serde_json::Value;

use crate::{error::ApiError, state::AppState};

/// Successful `/process` response
#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    pub emotion: String,
    pub confidence: f64,
    pub audio_url: String,
    pub text: String,
}

/// Pull the trimmed `text` field out of a raw request body
///
/// Anything other than a JSON object carrying a string `text` counts as a
/// missing field.
fn extract_text(body: &[u8]) -> Result<String, ApiError> {
    let value: Value = serde_json::from_slice(body).map_err(|_| ApiError::MissingField)?;

    let text = value
        .get("text")
        .and_then(Value::as_str)
        .ok_or(ApiError::MissingField)?
        .trim();

    if text.is_empty() {
        return Err(ApiError::EmptyInput);
    }

    Ok(text.to_string())
}

/// Classify the text, synthesize matching speech, and point at the result
pub async fn process_handler(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ProcessResponse>, ApiError> {
    let start = Instant::now();

    let result = match body {
        Ok(body) => process(&state, &body).await,
        Err(rejection) => Err(rejection.into()),
    };

    let (emotion, outcome) = match &result {
        Ok(response) => (response.emotion.clone(), "success"),
        Err(ApiError::Internal(_)) => (String::new(), "error"),
        Err(_) => (String::new(), "rejected"),
    };
    let attributes = [KeyValue::new("emotion", emotion), KeyValue::new("outcome", outcome)];
    record_duration(&state.metrics.process_duration, start, &attributes);
    state.metrics.process_count.add(1, &attributes);

    result.map(Json)
}

async fn process(state: &AppState, body: &[u8]) -> Result<ProcessResponse, ApiError> {
    let text = extract_text(body)?;

    let started = Instant::now();
    let classification = state.classifier.classify(&text).await.map_err(|e| {
        tracing::error!(stage = "classification", error = %e, "processing failed");
        ApiError::Internal(e.to_string())
    })?;
    record_duration(
        &state.metrics.classification_duration,
        started,
        &[KeyValue::new("emotion", classification.label.clone())],
    );

    let started = Instant::now();
    let filename = state
        .speech
        .synthesize(&text, &classification.label, classification.score)
        .await
        .map_err(|e| {
            tracing::error!(stage = "synthesis", emotion = %classification.label, error = %e, "processing failed");
            ApiError::Internal(e.to_string())
        })?;
    record_duration(
        &state.metrics.synthesis_duration,
        started,
        &[KeyValue::new("emotion", classification.label.clone())],
    );

    tracing::info!(
        emotion = %classification.label,
        confidence = classification.score,
        %filename,
        "speech synthesized"
    );

    Ok(ProcessResponse {
        emotion: classification.label,
        confidence: classification.score,
        audio_url: format!("/outputs/{filename}"),
        text,
    })
}
