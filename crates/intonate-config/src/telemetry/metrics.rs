use serde::Deserialize;

use super::exporters::ExporterConfig;

/// Metrics configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricsConfig {
    /// Export request and synthesis metrics; traces are unaffected
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Override the default exporter for metrics
    #[serde(default)]
    pub exporter: Option<ExporterConfig>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_enabled() -> bool {
    true
}
