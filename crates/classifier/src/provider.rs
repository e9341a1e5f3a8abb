pub mod huggingface;
pub mod lexicon;

use async_trait::async_trait;

use crate::types::EmotionScore;

/// Trait for emotion classifier implementations
#[async_trait]
pub trait ClassifierProvider: Send + Sync {
    /// Score `text` against the provider's label set
    ///
    /// The returned ranking may be in any order.
    async fn classify(&self, text: &str) -> crate::error::Result<Vec<EmotionScore>>;

    /// Get the provider name
    fn name(&self) -> &str;
}
