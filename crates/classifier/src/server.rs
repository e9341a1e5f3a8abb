use intonate_config::{ClassifierProviderConfig, ClassifierProviderType};

use crate::{
    error::ClassifierError,
    provider::{ClassifierProvider, huggingface::HuggingFaceProvider, lexicon::LexiconProvider},
    types::ClassificationResult,
};

/// Emotion classifier backed by the configured default provider
pub struct Classifier {
    provider: Box<dyn ClassifierProvider>,
}

impl Classifier {
    pub fn new(provider: Box<dyn ClassifierProvider>) -> Self {
        Self { provider }
    }

    /// Name of the provider in use
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Classify `text` and return the top-ranked emotion
    ///
    /// The score is rounded to 4 decimal places. An empty ranking is an
    /// error rather than a silent `neutral`.
    pub async fn classify(&self, text: &str) -> crate::error::Result<ClassificationResult> {
        let mut ranking = self.provider.classify(text).await?;

        ranking.sort_by(|a, b| b.score.total_cmp(&a.score));

        let top = ranking.into_iter().next().ok_or(ClassifierError::EmptyRanking)?;

        tracing::debug!(
            provider = self.provider.name(),
            label = %top.label,
            score = top.score,
            "classification complete"
        );

        Ok(ClassificationResult::from_top(top))
    }
}

impl std::fmt::Debug for Classifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Classifier")
            .field("provider", &self.provider.name())
            .finish()
    }
}

/// Builder for constructing the classifier from configuration
pub struct ClassifierBuilder<'a> {
    config: &'a intonate_config::Config,
}

impl<'a> ClassifierBuilder<'a> {
    pub const fn new(config: &'a intonate_config::Config) -> Self {
        Self { config }
    }

    /// Build around `classifier.default`, or the first configured provider
    pub fn build(self) -> crate::error::Result<Classifier> {
        let classifier = &self.config.classifier;

        let (name, provider_config) = match &classifier.default {
            Some(name) => classifier
                .providers
                .get_key_value(name)
                .ok_or_else(|| ClassifierError::ProviderNotFound(name.clone()))?,
            None => classifier
                .providers
                .first()
                .ok_or_else(|| ClassifierError::ProviderNotFound("No classifier providers configured".to_string()))?,
        };

        tracing::debug!("Initializing classifier provider: {name}");

        Ok(Classifier::new(build_provider(name, provider_config)))
    }
}

fn build_provider(name: &str, config: &ClassifierProviderConfig) -> Box<dyn ClassifierProvider> {
    match &config.provider_type {
        ClassifierProviderType::Huggingface => Box::new(HuggingFaceProvider::new(
            name.to_string(),
            config.api_key.clone(),
            config.base_url.as_ref(),
            config.model.as_deref(),
        )),
        ClassifierProviderType::Lexicon => Box::new(LexiconProvider::new(name.to_string())),
    }
}
