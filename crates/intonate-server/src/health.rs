use axum::Json;
use serde_json::{Value, json};

/// Greeting served at `/`
pub const WELCOME_MESSAGE: &str = "Welcome to Emotion Detection & Speech Synthesis API";

/// Health check handler
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// Root handler
pub async fn root_handler() -> Json<Value> {
    Json(json!({ "message": WELCOME_MESSAGE }))
}
