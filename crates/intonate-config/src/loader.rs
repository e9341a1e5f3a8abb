use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::parse(&raw)
    }

    /// Parse configuration from raw TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable expansion, TOML parsing, or
    /// validation fails
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if a collaborator is missing, a default provider
    /// names an unknown entry, or storage settings are invalid
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_classifier_config()?;
        self.validate_tts_config()?;
        self.validate_storage_config()?;
        self.validate_server_config()?;
        Ok(())
    }

    fn validate_classifier_config(&self) -> anyhow::Result<()> {
        if self.classifier.providers.is_empty() {
            anyhow::bail!("at least one classifier provider must be configured");
        }

        if let Some(ref name) = self.classifier.default
            && !self.classifier.providers.contains_key(name)
        {
            anyhow::bail!("classifier.default refers to unknown provider '{name}'");
        }

        Ok(())
    }

    fn validate_tts_config(&self) -> anyhow::Result<()> {
        if self.tts.providers.is_empty() {
            anyhow::bail!("at least one TTS provider must be configured");
        }

        if let Some(ref name) = self.tts.default
            && !self.tts.providers.contains_key(name)
        {
            anyhow::bail!("tts.default refers to unknown provider '{name}'");
        }

        Ok(())
    }

    fn validate_storage_config(&self) -> anyhow::Result<()> {
        if self.storage.output_dir.as_os_str().is_empty() {
            anyhow::bail!("storage.output_dir must not be empty");
        }

        if self.storage.retention.is_some_and(|r| r.is_zero()) {
            anyhow::bail!("storage.retention must be greater than 0");
        }

        if self.storage.sweep_interval.is_zero() {
            anyhow::bail!("storage.sweep_interval must be greater than 0");
        }

        Ok(())
    }

    fn validate_server_config(&self) -> anyhow::Result<()> {
        let health = &self.server.health;
        if !health.enabled {
            return Ok(());
        }

        if !health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/'");
        }

        let path = health.path.trim_end_matches('/');
        if path.is_empty()
            || path == "/process"
            || path == "/outputs"
            || path.starts_with("/outputs/")
            || health.path.contains(['{', '}'])
        {
            anyhow::bail!("server.health.path '{}' collides with a built-in route", health.path);
        }

        Ok(())
    }
}
