use std::sync::Arc;

use artifacts::ArtifactStore;
use classifier::Classifier;
use intonate_telemetry::{Counter, Histogram, metrics};
use tts::SpeechRequester;

/// Shared, immutable state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<Classifier>,
    pub speech: Arc<SpeechRequester>,
    pub store: ArtifactStore,
    pub metrics: Arc<ProcessMetrics>,
}

/// Instruments recorded by the `/process` pipeline
pub struct ProcessMetrics {
    pub process_duration: Histogram<f64>,
    pub process_count: Counter<u64>,
    pub classification_duration: Histogram<f64>,
    pub synthesis_duration: Histogram<f64>,
}

impl Default for ProcessMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessMetrics {
    pub fn new() -> Self {
        let meter = metrics::meter();

        Self {
            process_duration: meter
                .f64_histogram(metrics::PROCESS_DURATION)
                .with_unit("s")
                .with_description("End-to-end /process latency")
                .build(),
            process_count: meter
                .u64_counter(metrics::PROCESS_COUNT)
                .with_description("Completed /process requests")
                .build(),
            classification_duration: meter
                .f64_histogram(metrics::CLASSIFICATION_DURATION)
                .with_unit("s")
                .with_description("Emotion classifier latency")
                .build(),
            synthesis_duration: meter
                .f64_histogram(metrics::SYNTHESIS_DURATION)
                .with_unit("s")
                .with_description("Speech synthesis and artifact write latency")
                .build(),
        }
    }
}
