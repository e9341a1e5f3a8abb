use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{error::ClassifierError, http_client::http_client, types::EmotionScore};

use super::ClassifierProvider;

const DEFAULT_HF_API_URL: &str = "https://router.huggingface.co/hf-inference";
pub const DEFAULT_MODEL: &str = "j-hartmann/emotion-english-distilroberta-base";

/// Hugging Face Inference API text-classification provider
pub struct HuggingFaceProvider {
    client: Client,
    url: String,
    api_key: Option<SecretString>,
    name: String,
}

impl HuggingFaceProvider {
    pub fn new(name: String, api_key: Option<SecretString>, base_url: Option<&url::Url>, model: Option<&str>) -> Self {
        let base_url = base_url.map_or(DEFAULT_HF_API_URL, url::Url::as_str).trim_end_matches('/');
        let model = model.unwrap_or(DEFAULT_MODEL);

        Self {
            client: http_client(),
            url: format!("{base_url}/models/{model}"),
            api_key,
            name,
        }
    }
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

/// The pipeline answers `[[{label, score}, ...]]` for a single input, some
/// deployments flatten it to `[{label, score}, ...]`
#[derive(Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Nested(Vec<Vec<EmotionScore>>),
    Flat(Vec<EmotionScore>),
}

fn parse_ranking(body: &[u8]) -> crate::error::Result<Vec<EmotionScore>> {
    let response: InferenceResponse =
        serde_json::from_slice(body).map_err(|e| ClassifierError::MalformedResponse(e.to_string()))?;

    let mut ranking = match response {
        InferenceResponse::Nested(batches) => batches.into_iter().next().unwrap_or_default(),
        InferenceResponse::Flat(ranking) => ranking,
    };

    for entry in &mut ranking {
        entry.label.make_ascii_lowercase();
    }

    Ok(ranking)
}

#[async_trait]
impl ClassifierProvider for HuggingFaceProvider {
    async fn classify(&self, text: &str) -> crate::error::Result<Vec<EmotionScore>> {
        tracing::debug!(provider = %self.name, url = %self.url, input_len = text.len(), "Hugging Face classification request");

        let mut builder = self.client.post(&self.url).json(&InferenceRequest { inputs: text });
        if let Some(api_key) = &self.api_key {
            builder = builder.bearer_auth(api_key.expose_secret());
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!("Hugging Face request failed: {e}");
            ClassifierError::ConnectionError(format!("Failed to send request to Hugging Face: {e}"))
        })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!("Hugging Face API error ({status}): {error_text}");

            return Err(ClassifierError::from_status(status.as_u16(), error_text));
        }

        let body = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read Hugging Face response body: {e}");
            ClassifierError::ConnectionError(format!("Failed to read Hugging Face response: {e}"))
        })?;

        parse_ranking(&body)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
