//! Mock Hugging Face inference backend for integration tests
//!
//! Answers `POST /models/{model}` with a fixed text-classification ranking

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;

/// Mock classifier backend returning a canned ranking
pub struct MockClassifier {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockClassifierState>,
}

struct MockClassifierState {
    request_count: AtomicU32,
    /// Ranking returned in the nested pipeline shape
    ranking: Vec<(String, f64)>,
    /// Answer every request with this status instead
    fail_status: Option<StatusCode>,
    last_input: Mutex<Option<String>>,
    last_model: Mutex<Option<String>>,
    last_authorization: Mutex<Option<String>>,
}

impl MockClassifier {
    /// Start a mock that ranks `label` first with `score`
    pub async fn start(label: &str, score: f64) -> anyhow::Result<Self> {
        let rest = (1.0 - score) / 2.0;
        let filler = if label == "neutral" { "surprise" } else { "neutral" };

        Self::start_inner(
            vec![
                (filler.to_owned(), rest),
                (label.to_owned(), score),
                ("fear".to_owned(), rest / 2.0),
            ],
            None,
        )
        .await
    }

    /// Start a mock that fails every request with `status`
    pub async fn start_failing(status: StatusCode) -> anyhow::Result<Self> {
        Self::start_inner(Vec::new(), Some(status)).await
    }

    async fn start_inner(ranking: Vec<(String, f64)>, fail_status: Option<StatusCode>) -> anyhow::Result<Self> {
        let state = Arc::new(MockClassifierState {
            request_count: AtomicU32::new(0),
            ranking,
            fail_status,
            last_input: Mutex::new(None),
            last_model: Mutex::new(None),
            last_authorization: Mutex::new(None),
        });

        let app = Router::new()
            .route("/models/{*model}", routing::post(handle_classify))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as a provider
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Number of classification requests received
    pub fn request_count(&self) -> u32 {
        self.state.request_count.load(Ordering::Relaxed)
    }

    /// `inputs` of the most recent request
    pub fn last_input(&self) -> Option<String> {
        self.state.last_input.lock().unwrap().clone()
    }

    /// Model path of the most recent request
    pub fn last_model(&self) -> Option<String> {
        self.state.last_model.lock().unwrap().clone()
    }

    /// `Authorization` header of the most recent request
    pub fn last_authorization(&self) -> Option<String> {
        self.state.last_authorization.lock().unwrap().clone()
    }
}

impl Drop for MockClassifier {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_classify(
    State(state): State<Arc<MockClassifierState>>,
    Path(model): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    state.request_count.fetch_add(1, Ordering::Relaxed);
    *state.last_input.lock().unwrap() = body["inputs"].as_str().map(str::to_owned);
    *state.last_model.lock().unwrap() = Some(model);
    *state.last_authorization.lock().unwrap() = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    if let Some(status) = state.fail_status {
        return (status, Json(json!({ "error": "Model is currently loading" })));
    }

    let ranking: Vec<Value> = state
        .ranking
        .iter()
        .map(|(label, score)| json!({ "label": label, "score": score }))
        .collect();

    (StatusCode::OK, Json(json!([ranking])))
}
