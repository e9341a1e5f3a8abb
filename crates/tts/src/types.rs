use std::pin::Pin;

use bytes::Bytes;
use futures_util::Stream;
use prosody::VoiceParameters;

/// Audio body streamed back from a provider
pub type SpeechStream = Pin<Box<dyn Stream<Item = crate::Result<Bytes>> + Send>>;

/// A single synthesis call
#[derive(Debug, Clone)]
pub struct SpeechRequest {
    /// Text to speak
    pub text: String,
    /// Prosody offsets for this text
    pub parameters: VoiceParameters,
}

/// Streaming audio response from a TTS provider
pub struct SpeechResponse {
    /// Content type reported by the provider (e.g. "audio/mpeg")
    pub content_type: String,
    /// Audio bytes, in arrival order
    pub audio: SpeechStream,
}

impl std::fmt::Debug for SpeechResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechResponse")
            .field("content_type", &self.content_type)
            .finish_non_exhaustive()
    }
}
