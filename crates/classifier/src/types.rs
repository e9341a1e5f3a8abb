use serde::{Deserialize, Serialize};

/// One entry of a classifier ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionScore {
    pub label: String,
    pub score: f64,
}

/// Top-ranked emotion for a piece of text
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    /// Emotion label, lower-case
    pub label: String,
    /// Confidence in `[0, 1]`, rounded to 4 decimal places
    pub score: f64,
}

impl ClassificationResult {
    /// Build from a raw ranking entry, rounding the score
    pub fn from_top(top: EmotionScore) -> Self {
        Self {
            label: top.label,
            score: round4(top.score),
        }
    }
}

fn round4(score: f64) -> f64 {
    (score * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_is_rounded_to_four_places() {
        let result = ClassificationResult::from_top(EmotionScore {
            label: "joy".into(),
            score: 0.987_654_3,
        });
        assert!((result.score - 0.9877).abs() < 1e-12);
        assert_eq!(result.label, "joy");
    }
}
