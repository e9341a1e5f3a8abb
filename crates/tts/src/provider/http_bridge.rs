//! Generic JSON-over-HTTP bridge
//!
//! Targets small sidecars wrapping edge-tts style engines: the request
//! carries the voice name and the prosody offsets as rendered strings
//! (`"+20Hz"`, `"-25%"`), and the response body is the audio itself.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::{
    http_client::http_client,
    types::{SpeechRequest, SpeechResponse},
};

use super::{TtsProvider, connection_error, into_speech_response};

/// Voice used when the provider config does not name one
pub const DEFAULT_VOICE: &str = "en-US-AriaNeural";

/// HTTP bridge TTS provider
pub struct HttpBridgeProvider {
    client: Client,
    url: String,
    api_key: Option<SecretString>,
    voice: String,
    forward_volume: bool,
    name: String,
}

impl HttpBridgeProvider {
    pub fn new(
        name: String,
        url: &url::Url,
        api_key: Option<SecretString>,
        voice: Option<String>,
        forward_volume: bool,
    ) -> Self {
        Self {
            client: http_client(),
            url: url.to_string(),
            api_key,
            voice: voice.unwrap_or_else(|| DEFAULT_VOICE.to_string()),
            forward_volume,
            name,
        }
    }

    fn body<'a>(&'a self, request: &'a SpeechRequest) -> HttpSpeechBody<'a> {
        let params = &request.parameters;

        HttpSpeechBody {
            text: &request.text,
            voice: &self.voice,
            pitch: params.pitch(),
            rate: params.rate(),
            volume: self.forward_volume.then(|| params.volume()),
        }
    }
}

#[derive(Serialize)]
struct HttpSpeechBody<'a> {
    text: &'a str,
    voice: &'a str,
    pitch: String,
    rate: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    volume: Option<String>,
}

#[async_trait]
impl TtsProvider for HttpBridgeProvider {
    async fn synthesize(&self, request: SpeechRequest) -> crate::error::Result<SpeechResponse> {
        let body = self.body(&request);

        tracing::debug!(
            provider = %self.name,
            voice = body.voice,
            pitch = %body.pitch,
            rate = %body.rate,
            volume = body.volume.as_deref(),
            input_len = request.text.len(),
            "HTTP bridge TTS request"
        );

        let mut builder = self.client.post(&self.url).json(&body);
        if let Some(api_key) = &self.api_key {
            builder = builder.bearer_auth(api_key.expose_secret());
        }

        let response = builder.send().await.map_err(|e| connection_error(&self.name, &e))?;

        into_speech_response(&self.name, response).await
    }

    fn name(&self) -> &str {
        &self.name
    }
}
