use artifacts::ArtifactStore;
use intonate_config::{TtsProviderConfig, TtsProviderType};
use secrecy::SecretString;

use crate::{
    error::TtsError,
    provider::{
        TtsProvider, elevenlabs::ElevenLabsProvider, http_bridge::HttpBridgeProvider,
        openai_tts::OpenAiTtsProvider,
    },
    types::SpeechRequest,
};

/// Synthesizes emotion-modulated speech into the artifact store
pub struct SpeechRequester {
    provider: Box<dyn TtsProvider>,
    forward_volume: bool,
    store: ArtifactStore,
}

impl SpeechRequester {
    /// Assemble a requester around an already built provider
    pub fn new(provider: Box<dyn TtsProvider>, forward_volume: bool, store: ArtifactStore) -> Self {
        Self {
            provider,
            forward_volume,
            store,
        }
    }

    /// Name of the provider in use
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Synthesize `text` with prosody derived from `(label, score)`
    ///
    /// Returns the filename of the stored artifact. Provider failures and
    /// failures while writing the stream are reported as-is; nothing is
    /// retried.
    pub async fn synthesize(&self, text: &str, label: &str, score: f64) -> crate::Result<String> {
        let parameters = prosody::map_to_voice_parameters(label, score);

        if !self.forward_volume && parameters.volume_percent != 0 {
            tracing::debug!(
                provider = self.provider.name(),
                volume = %parameters.volume(),
                "computed volume offset not forwarded"
            );
        }

        tracing::debug!(
            label,
            score,
            pitch = %parameters.pitch(),
            rate = %parameters.rate(),
            "voice parameters"
        );

        let response = self
            .provider
            .synthesize(SpeechRequest {
                text: text.to_string(),
                parameters,
            })
            .await?;

        let Some(extension) = artifacts::extension_for(&response.content_type) else {
            tracing::error!(
                provider = self.provider.name(),
                content_type = %response.content_type,
                "provider returned a non-audio body"
            );
            return Err(TtsError::UnsupportedAudio(response.content_type));
        };

        tracing::debug!(content_type = %response.content_type, extension, "receiving audio");

        let filename = self.store.write_stream(label, extension, response.audio).await?;

        Ok(filename)
    }
}

impl std::fmt::Debug for SpeechRequester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechRequester")
            .field("provider", &self.provider.name())
            .field("forward_volume", &self.forward_volume)
            .field("store", &self.store)
            .finish()
    }
}

/// Builder for constructing the speech requester from configuration
pub struct SpeechRequesterBuilder<'a> {
    config: &'a intonate_config::Config,
}

impl<'a> SpeechRequesterBuilder<'a> {
    pub const fn new(config: &'a intonate_config::Config) -> Self {
        Self { config }
    }

    /// Build the requester around the default TTS provider
    ///
    /// `tts.default` selects the provider; otherwise the first one in the
    /// config file is used.
    pub fn build(self, store: ArtifactStore) -> crate::error::Result<SpeechRequester> {
        let tts = &self.config.tts;

        let (name, provider_config) = match &tts.default {
            Some(name) => tts
                .providers
                .get_key_value(name)
                .ok_or_else(|| TtsError::ProviderNotFound(name.clone()))?,
            None => tts
                .providers
                .first()
                .ok_or_else(|| TtsError::ProviderNotFound("No TTS providers configured".to_string()))?,
        };

        tracing::debug!("Initializing TTS provider: {name}");

        let provider = build_provider(name, provider_config)?;

        tracing::debug!(
            provider = name.as_str(),
            forward_volume = provider_config.forward_volume,
            "TTS provider initialized"
        );

        Ok(SpeechRequester::new(provider, provider_config.forward_volume, store))
    }
}

fn build_provider(name: &str, config: &TtsProviderConfig) -> crate::error::Result<Box<dyn TtsProvider>> {
    let provider: Box<dyn TtsProvider> = match &config.provider_type {
        TtsProviderType::Http => {
            let url = config
                .base_url
                .as_ref()
                .ok_or_else(|| TtsError::ConfigError(format!("base_url required for TTS provider '{name}'")))?;

            Box::new(HttpBridgeProvider::new(
                name.to_string(),
                url,
                config.api_key.clone(),
                config.voice.clone(),
                config.forward_volume,
            ))
        }
        TtsProviderType::OpenaiTts => Box::new(OpenAiTtsProvider::new(
            name.to_string(),
            resolve_api_key(name, config)?,
            config.base_url.as_ref(),
            config.model.clone(),
            config.voice.clone(),
        )),
        TtsProviderType::Elevenlabs => Box::new(ElevenLabsProvider::new(
            name.to_string(),
            resolve_api_key(name, config)?,
            config.base_url.as_ref(),
            config.model.clone(),
            config.voice.clone(),
        )),
    };

    Ok(provider)
}

fn resolve_api_key(name: &str, config: &TtsProviderConfig) -> crate::error::Result<SecretString> {
    config
        .api_key
        .clone()
        .ok_or_else(|| TtsError::ConfigError(format!("API key required for TTS provider '{name}'")))
}
