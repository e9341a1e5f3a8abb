use indexmap::IndexMap;
use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Top-level TTS configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TtsConfig {
    /// Provider used for `/process`; defaults to the first configured provider
    #[serde(default)]
    pub default: Option<String>,
    /// TTS provider configurations keyed by name
    #[serde(default)]
    pub providers: IndexMap<String, TtsProviderConfig>,
}

/// Configuration for a single TTS provider
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TtsProviderConfig {
    /// Provider type
    #[serde(rename = "type")]
    pub provider_type: TtsProviderType,
    /// API key
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Voice identifier; each provider has its own default
    #[serde(default)]
    pub voice: Option<String>,
    /// Model identifier for providers that need one
    #[serde(default)]
    pub model: Option<String>,
    /// Send the computed volume offset along with pitch and rate
    ///
    /// Off by default: the volume is computed for every request but the
    /// reference behavior only applies pitch and rate.
    #[serde(default)]
    pub forward_volume: bool,
}

/// Supported TTS providers
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TtsProviderType {
    /// JSON-over-HTTP bridge taking edge-tts style pitch/rate strings
    Http,
    /// `OpenAI` TTS
    OpenaiTts,
    /// `ElevenLabs`
    Elevenlabs,
}
