//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use intonate_config::{
    ClassifierConfig, ClassifierProviderConfig, ClassifierProviderType, Config, CorsConfig, HealthConfig,
    ServerConfig, StorageConfig, TtsConfig, TtsProviderConfig, TtsProviderType,
};
use secrecy::SecretString;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder writing audio into `output_dir`
    pub fn new(output_dir: &Path) -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig {
                        enabled: true,
                        ..HealthConfig::default()
                    },
                    ..ServerConfig::default()
                },
                classifier: ClassifierConfig::default(),
                tts: TtsConfig::default(),
                storage: StorageConfig {
                    output_dir: output_dir.to_path_buf(),
                    ..StorageConfig::default()
                },
                telemetry: None,
            },
        }
    }

    /// Add a Hugging Face classifier pointed at a mock backend
    pub fn with_hf_classifier(mut self, name: &str, base_url: &str) -> Self {
        self.config.classifier.providers.insert(
            name.to_owned(),
            ClassifierProviderConfig {
                provider_type: ClassifierProviderType::Huggingface,
                api_key: Some(SecretString::from("hf_test")),
                base_url: Some(base_url.parse().expect("valid URL")),
                model: None,
            },
        );
        self
    }

    /// Add the offline lexicon classifier
    pub fn with_lexicon_classifier(mut self, name: &str) -> Self {
        self.config.classifier.providers.insert(
            name.to_owned(),
            ClassifierProviderConfig {
                provider_type: ClassifierProviderType::Lexicon,
                api_key: None,
                base_url: None,
                model: None,
            },
        );
        self
    }

    /// Add an HTTP bridge TTS provider pointed at a mock backend
    pub fn with_http_tts(mut self, name: &str, url: &str) -> Self {
        self.config.tts.providers.insert(
            name.to_owned(),
            TtsProviderConfig {
                provider_type: TtsProviderType::Http,
                api_key: None,
                base_url: Some(url.parse().expect("valid URL")),
                voice: None,
                model: None,
                forward_volume: false,
            },
        );
        self
    }

    /// Forward the computed volume for every configured TTS provider
    pub fn with_forward_volume(mut self) -> Self {
        for provider in self.config.tts.providers.values_mut() {
            provider.forward_volume = true;
        }
        self
    }

    /// Set CORS configuration
    pub fn with_cors(mut self, config: CorsConfig) -> Self {
        self.config.server.cors = Some(config);
        self
    }

    /// Enable the retention sweeper
    pub fn with_retention(mut self, retention: Duration, sweep_interval: Duration) -> Self {
        self.config.storage.retention = Some(retention);
        self.config.storage.sweep_interval = sweep_interval;
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
