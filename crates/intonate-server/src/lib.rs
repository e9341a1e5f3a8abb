//! HTTP surface of Intonate
//!
//! Routes:
//! - `GET /` greeting
//! - `GET <health.path>` liveness
//! - `POST /process` classify text and synthesize speech
//! - `GET /outputs/{filename}` fetch generated audio

mod cors;
mod error;
mod health;
mod outputs;
mod process;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use artifacts::ArtifactStore;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use intonate_config::Config;
use intonate_telemetry::metrics;
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use health::WELCOME_MESSAGE;
pub use process::ProcessResponse;
use state::{AppState, ProcessMetrics};

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
    sweeper: Option<tokio::task::JoinHandle<()>>,
}

impl Server {
    /// Build the server from configuration
    ///
    /// Opens the output directory, builds the classifier and TTS provider,
    /// and starts the retention sweeper when `storage.retention` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the output directory cannot be created or a
    /// collaborator fails to initialize
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 5000)));

        let store = ArtifactStore::open(&config.storage.output_dir).await.map_err(|e| {
            anyhow::anyhow!(
                "failed to open output directory {}: {e}",
                config.storage.output_dir.display()
            )
        })?;

        let classifier = classifier::build_classifier(&config)?;
        let speech = tts::build_requester(&config, store.clone())?;

        tracing::info!(
            classifier = classifier.provider_name(),
            tts = speech.provider_name(),
            output_dir = %store.dir().display(),
            "collaborators ready"
        );

        let sweeper = config.storage.retention.map(|retention| {
            let interval = config.storage.sweep_interval;
            tracing::info!(?retention, ?interval, "artifact retention enabled");

            let swept = metrics::meter()
                .u64_counter(metrics::ARTIFACTS_SWEPT)
                .with_description("Expired artifacts removed")
                .build();

            artifacts::spawn_sweeper(store.clone(), retention, interval, move |removed| {
                swept.add(u64::try_from(removed).unwrap_or(u64::MAX), &[]);
            })
        });

        let state = AppState {
            classifier,
            speech,
            store,
            metrics: Arc::new(ProcessMetrics::new()),
        };

        let mut app = Router::new()
            .route("/", get(health::root_handler))
            .route("/process", post(process::process_handler))
            .route("/outputs/{filename}", get(outputs::outputs_handler));

        if config.server.health.enabled {
            app = app.route(&config.server.health.path, get(health::health_handler));
        }

        let mut app = app
            .layer(DefaultBodyLimit::max(config.server.body_limit_bytes))
            .with_state(state)
            .layer(TraceLayer::new_for_http());

        if let Some(ref cors_config) = config.server.cors {
            app = app.layer(cors::cors_layer(cors_config));
        }

        Ok(Self {
            router: app,
            listen_address,
            sweeper,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener. The
    /// retention sweeper, if any, is detached and runs until the runtime
    /// shuts down.
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let Self {
            router,
            listen_address,
            sweeper,
        } = self;

        let listener = tokio::net::TcpListener::bind(listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        if let Some(sweeper) = sweeper {
            sweeper.abort();
        }

        Ok(())
    }
}
