use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Labels understood by the emotion profile, in table order
pub const EMOTION_LABELS: [&str; 7] = ["joy", "sadness", "anger", "neutral", "fear", "disgust", "surprise"];

/// Emotion vocabulary produced by the classifier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Emotion {
    Joy,
    Sadness,
    Anger,
    Neutral,
    Fear,
    Disgust,
    Surprise,
}

impl Emotion {
    /// Label as emitted by the classifier
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}
