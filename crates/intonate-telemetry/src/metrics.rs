//! Metric names and recording helpers

use std::time::Instant;

use opentelemetry::metrics::{Histogram, Meter};

/// Instrumentation scope shared by all Intonate instruments
pub const METER_NAME: &str = "intonate";

/// End-to-end `/process` latency in seconds
pub const PROCESS_DURATION: &str = "intonate.process.duration";
/// `/process` request count by outcome
pub const PROCESS_COUNT: &str = "intonate.process.count";
/// Classifier call latency in seconds
pub const CLASSIFICATION_DURATION: &str = "intonate.classification.duration";
/// TTS provider call plus artifact write latency in seconds
pub const SYNTHESIS_DURATION: &str = "intonate.synthesis.duration";
/// Artifacts removed by the retention sweeper
pub const ARTIFACTS_SWEPT: &str = "intonate.artifacts.swept";

/// Global meter for Intonate instruments
///
/// Returns a no-op meter when no metrics exporter is installed.
pub fn meter() -> Meter {
    opentelemetry::global::meter(METER_NAME)
}

/// Record a duration measurement on a histogram
pub fn record_duration(histogram: &Histogram<f64>, start: Instant, attributes: &[opentelemetry::KeyValue]) {
    let duration = start.elapsed().as_secs_f64();
    histogram.record(duration, attributes);
}
