pub mod exporters;
pub mod metrics;
pub mod tracing;

use std::collections::HashMap;

use serde::Deserialize;

use self::{exporters::ExporterConfig, metrics::MetricsConfig, tracing::TracingConfig};

/// Telemetry configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TelemetryConfig {
    /// Service name for telemetry metadata
    #[serde(default = "default_service_name")]
    pub service_name: String,
    /// Log filter directive (e.g. `"info,tts=debug"`), overridden by `RUST_LOG`
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    /// Additional resource attributes
    #[serde(default)]
    pub resource_attributes: HashMap<String, String>,
    /// Default exporter configuration (shared by tracing and metrics)
    #[serde(default)]
    pub exporter: Option<ExporterConfig>,
    /// Tracing-specific configuration
    #[serde(default)]
    pub tracing: Option<TracingConfig>,
    /// Metrics-specific configuration
    #[serde(default)]
    pub metrics: Option<MetricsConfig>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            log_filter: default_log_filter(),
            resource_attributes: HashMap::new(),
            exporter: None,
            tracing: None,
            metrics: None,
        }
    }
}

fn default_service_name() -> String {
    "intonate".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::exporters::ExportProtocol;

    #[test]
    fn defaults_without_exporter() {
        let config: TelemetryConfig = toml::from_str("").unwrap();
        assert_eq!(config.service_name, "intonate");
        assert_eq!(config.log_filter, "info");
        assert!(config.exporter.is_none());
    }

    #[test]
    fn exporter_with_tracing_override() {
        let config: TelemetryConfig = toml::from_str(
            r#"
                service_name = "intonate-staging"

                [exporter]
                endpoint = "http://collector:4317"

                [tracing]
                sampling_rate = 0.25

                [tracing.exporter]
                endpoint = "http://collector:4318"
                protocol = "http_proto"
            "#,
        )
        .unwrap();

        let exporter = config.exporter.unwrap();
        assert!(matches!(exporter.protocol, ExportProtocol::Grpc));

        let tracing = config.tracing.unwrap();
        assert!((tracing.sampling_rate - 0.25).abs() < f64::EPSILON);
        assert!(tracing.parent_based);
        assert!(matches!(tracing.exporter.unwrap().protocol, ExportProtocol::HttpProto));
    }
}
