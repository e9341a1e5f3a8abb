#![allow(clippy::must_use_candidate)]

pub mod classifier;
pub mod cors;
mod env;
pub mod health;
mod loader;
pub mod server;
pub mod storage;
pub mod telemetry;
pub mod tts;

use serde::Deserialize;

pub use classifier::*;
pub use cors::*;
pub use health::*;
pub use server::*;
pub use storage::*;
pub use telemetry::TelemetryConfig;
pub use tts::*;

/// Top-level Intonate configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Emotion classifier configuration
    #[serde(default)]
    pub classifier: ClassifierConfig,
    /// TTS provider configuration
    #[serde(default)]
    pub tts: TtsConfig,
    /// Generated audio storage
    #[serde(default)]
    pub storage: StorageConfig,
    /// Telemetry configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}
