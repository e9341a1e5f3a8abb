use indexmap::IndexMap;
use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Top-level emotion classifier configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassifierConfig {
    /// Provider used for `/process`; defaults to the first configured provider
    #[serde(default)]
    pub default: Option<String>,
    /// Classifier provider configurations keyed by name
    #[serde(default)]
    pub providers: IndexMap<String, ClassifierProviderConfig>,
}

/// Configuration for a single classifier provider
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassifierProviderConfig {
    /// Provider type
    #[serde(rename = "type")]
    pub provider_type: ClassifierProviderType,
    /// API key
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Model identifier (e.g. `j-hartmann/emotion-english-distilroberta-base`)
    #[serde(default)]
    pub model: Option<String>,
}

/// Supported classifier providers
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassifierProviderType {
    /// Hugging Face Inference API text-classification pipeline
    Huggingface,
    /// Offline keyword lexicon
    Lexicon,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_huggingface_provider() {
        let config: ClassifierConfig = toml::from_str(
            r#"
                default = "hf"

                [providers.hf]
                type = "huggingface"
                api_key = "hf_test"
                base_url = "http://127.0.0.1:9000"
                model = "j-hartmann/emotion-english-distilroberta-base"

                [providers.offline]
                type = "lexicon"
            "#,
        )
        .unwrap();

        assert_eq!(config.default.as_deref(), Some("hf"));
        assert_eq!(config.providers.len(), 2);

        let names: Vec<&str> = config.providers.keys().map(String::as_str).collect();
        assert_eq!(names, ["hf", "offline"]);

        let hf = &config.providers["hf"];
        assert!(matches!(hf.provider_type, ClassifierProviderType::Huggingface));
        assert_eq!(hf.model.as_deref(), Some("j-hartmann/emotion-english-distilroberta-base"));
    }

    #[test]
    fn unknown_provider_type_is_rejected() {
        let result = toml::from_str::<ClassifierConfig>(
            r#"
                [providers.x]
                type = "openai"
            "#,
        );
        assert!(result.is_err());
    }
}
