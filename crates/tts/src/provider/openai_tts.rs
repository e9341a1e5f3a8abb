use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use crate::{
    http_client::http_client,
    types::{SpeechRequest, SpeechResponse},
};

use super::{TtsProvider, connection_error, into_speech_response, normalize_base_url};

const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "tts-1";
const DEFAULT_VOICE: &str = "alloy";

const MIN_SPEED: f64 = 0.25;
const MAX_SPEED: f64 = 4.0;

/// `OpenAI` TTS provider
///
/// Only the rate survives the trip: it becomes the `speed` multiplier. The
/// API has no pitch or volume control.
pub(crate) struct OpenAiTtsProvider {
    client: Client,
    base_url: String,
    api_key: SecretString,
    model: String,
    voice: String,
    name: String,
}

impl OpenAiTtsProvider {
    pub fn new(
        name: String,
        api_key: SecretString,
        base_url: Option<&url::Url>,
        model: Option<String>,
        voice: Option<String>,
    ) -> Self {
        Self {
            client: http_client(),
            base_url: normalize_base_url(base_url, DEFAULT_OPENAI_API_URL),
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            voice: voice.unwrap_or_else(|| DEFAULT_VOICE.to_string()),
            name,
        }
    }

    fn body<'a>(&'a self, request: &'a SpeechRequest) -> OpenAiTtsRequest<'a> {
        OpenAiTtsRequest {
            model: &self.model,
            input: &request.text,
            voice: &self.voice,
            response_format: "mp3",
            speed: request.parameters.speed(MIN_SPEED, MAX_SPEED),
        }
    }
}

#[derive(serde::Serialize)]
struct OpenAiTtsRequest<'a> {
    model: &'a str,
    input: &'a str,
    voice: &'a str,
    response_format: &'a str,
    speed: f64,
}

#[async_trait]
impl TtsProvider for OpenAiTtsProvider {
    async fn synthesize(&self, request: SpeechRequest) -> crate::error::Result<SpeechResponse> {
        let url = format!("{}/audio/speech", self.base_url);
        let body = self.body(&request);

        tracing::debug!(
            provider = %self.name,
            model = %self.model,
            voice = %self.voice,
            speed = body.speed,
            dropped_pitch = %request.parameters.pitch(),
            input_len = request.text.len(),
            "OpenAI TTS request"
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key.expose_secret()))
            .json(&body)
            .send()
            .await
            .map_err(|e| connection_error(&self.name, &e))?;

        into_speech_response(&self.name, response).await
    }

    fn name(&self) -> &str {
        &self.name
    }
}
