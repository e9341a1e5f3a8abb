//! Mock TTS bridge for integration tests
//!
//! Accepts the HTTP bridge request shape and streams back a fixed audio body

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use bytes::Bytes;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

/// Audio returned by the mock, split across several chunks
pub const MOCK_AUDIO: &[&[u8]] = &[b"ID3\x04\x00", b"\xff\xfb\x90\x64", b"mock-mp3-frames"];

/// Mock TTS backend
pub struct MockTts {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockTtsState>,
}

struct MockTtsState {
    request_count: AtomicU32,
    /// Answer every request with this status instead
    fail_status: Option<StatusCode>,
    last_body: Mutex<Option<Value>>,
}

impl MockTts {
    /// Start a mock that synthesizes successfully
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(None).await
    }

    /// Start a mock that fails every request with `status`
    pub async fn start_failing(status: StatusCode) -> anyhow::Result<Self> {
        Self::start_inner(Some(status)).await
    }

    async fn start_inner(fail_status: Option<StatusCode>) -> anyhow::Result<Self> {
        let state = Arc::new(MockTtsState {
            request_count: AtomicU32::new(0),
            fail_status,
            last_body: Mutex::new(None),
        });

        let app = Router::new()
            .route("/v1/speech", routing::post(handle_speech))
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

    /// Full endpoint URL for the HTTP bridge provider
    pub fn url(&self) -> String {
        format!("http://{}/v1/speech", self.addr)
    }

    /// Number of synthesis requests received
    pub fn request_count(&self) -> u32 {
        self.state.request_count.load(Ordering::Relaxed)
    }

    /// JSON body of the most recent request
    pub fn last_body(&self) -> Option<Value> {
        self.state.last_body.lock().unwrap().clone()
    }

    /// The complete audio body the mock streams back
    pub fn audio() -> Vec<u8> {
        MOCK_AUDIO.concat()
    }
}

impl Drop for MockTts {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_speech(State(state): State<Arc<MockTtsState>>, Json(body): Json<Value>) -> Response {
    state.request_count.fetch_add(1, Ordering::Relaxed);
    *state.last_body.lock().unwrap() = Some(body);

    if let Some(status) = state.fail_status {
        return (status, "synthesis backend unavailable").into_response();
    }

    let chunks = MOCK_AUDIO
        .iter()
        .map(|&chunk| Ok::<_, std::convert::Infallible>(Bytes::from_static(chunk)));

    Response::builder()
        .header(header::CONTENT_TYPE, "audio/mpeg")
        .body(Body::from_stream(futures_util::stream::iter(chunks)))
        .unwrap()
}
