use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use crate::{
    http_client::http_client,
    types::{SpeechRequest, SpeechResponse},
};

use super::{TtsProvider, connection_error, into_speech_response, normalize_base_url};

const DEFAULT_ELEVENLABS_API_URL: &str = "https://api.elevenlabs.io/v1";
const DEFAULT_MODEL: &str = "eleven_multilingual_v2";
/// "Rachel", one of the premade voices
const DEFAULT_VOICE: &str = "21m00Tcm4TlvDq8ikWAM";

const MIN_SPEED: f64 = 0.7;
const MAX_SPEED: f64 = 1.2;

/// `ElevenLabs` TTS provider
pub struct ElevenLabsProvider {
    client: Client,
    base_url: String,
    api_key: SecretString,
    model: String,
    voice: String,
    name: String,
}

impl ElevenLabsProvider {
    pub fn new(
        name: String,
        api_key: SecretString,
        base_url: Option<&url::Url>,
        model: Option<String>,
        voice: Option<String>,
    ) -> Self {
        Self {
            client: http_client(),
            base_url: normalize_base_url(base_url, DEFAULT_ELEVENLABS_API_URL),
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            voice: voice.unwrap_or_else(|| DEFAULT_VOICE.to_string()),
            name,
        }
    }

    fn body<'a>(&'a self, request: &'a SpeechRequest) -> ElevenLabsRequest<'a> {
        ElevenLabsRequest {
            text: &request.text,
            model_id: &self.model,
            voice_settings: VoiceSettings {
                speed: request.parameters.speed(MIN_SPEED, MAX_SPEED),
            },
        }
    }
}

#[derive(serde::Serialize)]
struct ElevenLabsRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

#[derive(serde::Serialize)]
struct VoiceSettings {
    speed: f64,
}

#[async_trait]
impl TtsProvider for ElevenLabsProvider {
    async fn synthesize(&self, request: SpeechRequest) -> crate::error::Result<SpeechResponse> {
        let url = format!("{}/text-to-speech/{}/stream", self.base_url, self.voice);
        let body = self.body(&request);

        tracing::debug!(
            provider = %self.name,
            model = %self.model,
            voice = %self.voice,
            speed = body.voice_settings.speed,
            input_len = request.text.len(),
            "ElevenLabs TTS request"
        );

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", self.api_key.expose_secret())
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

#[cfg(test)]
mod tests {
    use prosody::VoiceParameters;

    use super::*;

    #[test]
    fn speed_is_clamped_to_supported_range() {
        let provider = ElevenLabsProvider::new("eleven".into(), SecretString::from("xi"), None, None, None);
        let request = SpeechRequest {
            text: "Help!".into(),
            parameters: VoiceParameters {
                pitch_hz: 36,
                rate_percent: 48,
                volume_percent: 15,
            },
        };

        let body = serde_json::to_value(provider.body(&request)).unwrap();

        assert_eq!(body["model_id"], "eleven_multilingual_v2");
        assert!((body["voice_settings"]["speed"].as_f64().unwrap() - 1.2).abs() < f64::EPSILON);
    }
}
