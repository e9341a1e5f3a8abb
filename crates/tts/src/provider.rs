pub mod elevenlabs;
pub mod http_bridge;
pub mod openai_tts;

use async_trait::async_trait;
use futures_util::StreamExt;

use crate::{
    error::TtsError,
    types::{SpeechRequest, SpeechResponse},
};

/// Trait for TTS provider implementations
#[async_trait]
pub trait TtsProvider: Send + Sync {
    /// Synthesize text to speech, returning the audio as a byte stream
    async fn synthesize(&self, request: SpeechRequest) -> crate::error::Result<SpeechResponse>;

    /// Get the provider name
    fn name(&self) -> &str;
}

/// Turn a provider response into a [`SpeechResponse`], or an error for non-2xx statuses
pub(crate) async fn into_speech_response(
    provider: &str,
    response: reqwest::Response,
) -> crate::error::Result<SpeechResponse> {
    let status = response.status();

    if !status.is_success() {
        let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

        tracing::error!(provider, %status, "TTS API error: {error_text}");

        return Err(TtsError::from_status(status.as_u16(), error_text));
    }

    let content_type = response
        .headers()
        .get(http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("audio/mpeg")
        .to_string();

    let provider = provider.to_string();
    let audio = response
        .bytes_stream()
        .map(move |chunk| {
            chunk.map_err(|e| {
                tracing::error!(provider = %provider, "TTS audio stream failed: {e}");
                TtsError::ConnectionError(format!("Audio stream from '{provider}' failed: {e}"))
            })
        })
        .boxed();

    Ok(SpeechResponse { content_type, audio })
}

/// Map a transport failure from `reqwest`
pub(crate) fn connection_error(provider: &str, e: &reqwest::Error) -> TtsError {
    tracing::error!(provider, "TTS request failed: {e}");
    TtsError::ConnectionError(format!("Failed to send request to '{provider}': {e}"))
}

/// Strip a trailing slash so paths can be appended with `format!`
pub(crate) fn normalize_base_url(base_url: Option<&url::Url>, default: &str) -> String {
    base_url
        .map_or(default, url::Url::as_str)
        .trim_end_matches('/')
        .to_string()
}
