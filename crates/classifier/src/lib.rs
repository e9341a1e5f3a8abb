//! Emotion classification for Intonate
//!
//! The classifier is an opaque collaborator: text goes in, a ranking of
//! `(label, score)` pairs comes out. Only the top entry is used.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod http_client;
mod provider;
mod server;
mod types;

use std::sync::Arc;

pub use error::{ClassifierError, Result};
pub use provider::ClassifierProvider;
pub use server::{Classifier, ClassifierBuilder};
pub use types::{ClassificationResult, EmotionScore};

/// Build the classifier from configuration
pub fn build_classifier(config: &intonate_config::Config) -> anyhow::Result<Arc<Classifier>> {
    let classifier = Arc::new(
        ClassifierBuilder::new(config)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to initialize emotion classifier: {e}"))?,
    );
    Ok(classifier)
}
