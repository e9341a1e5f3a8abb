//! Speech synthesis for Intonate
//!
//! A [`SpeechRequester`] turns `(text, emotion, confidence)` into a stored
//! audio artifact: the emotion is mapped to prosody offsets, the configured
//! [`TtsProvider`] streams audio back, and the stream is written into the
//! artifact store.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod http_client;
mod provider;
mod requester;
mod types;

use std::sync::Arc;

use artifacts::ArtifactStore;

pub use error::{Result, TtsError};
pub use provider::TtsProvider;
pub use requester::{SpeechRequester, SpeechRequesterBuilder};
pub use types::{SpeechRequest, SpeechResponse, SpeechStream};

/// Build the speech requester from configuration
pub fn build_requester(config: &intonate_config::Config, store: ArtifactStore) -> anyhow::Result<Arc<SpeechRequester>> {
    let requester = Arc::new(
        SpeechRequesterBuilder::new(config)
            .build(store)
            .map_err(|e| anyhow::anyhow!("Failed to initialize TTS provider: {e}"))?,
    );
    Ok(requester)
}
