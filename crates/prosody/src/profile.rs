use std::str::FromStr;

use crate::Emotion;

/// Unscaled pitch and rate offsets for an emotion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseProsody {
    pub pitch_hz: i32,
    pub rate_percent: i32,
}

/// Static emotion → base prosody table
pub struct EmotionProfile;

impl EmotionProfile {
    /// Base prosody for a known emotion
    pub const fn base(emotion: Emotion) -> BaseProsody {
        let (pitch_hz, rate_percent) = match emotion {
            Emotion::Joy => (20, 30),
            Emotion::Sadness => (-15, -25),
            Emotion::Anger => (10, 50),
            Emotion::Neutral => (0, 0),
            Emotion::Fear => (15, 20),
            Emotion::Disgust => (-10, -15),
            Emotion::Surprise => (25, 15),
        };

        BaseProsody { pitch_hz, rate_percent }
    }

    /// Base prosody for a raw classifier label, falling back to `neutral`
    pub fn lookup(label: &str) -> BaseProsody {
        let emotion = Emotion::from_str(label).unwrap_or(Emotion::Neutral);
        Self::base(emotion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_label() {
        assert_eq!(
            EmotionProfile::lookup("anger"),
            BaseProsody {
                pitch_hz: 10,
                rate_percent: 50
            }
        );
    }

    #[test]
    fn lookup_unknown_label_falls_back_to_neutral() {
        assert_eq!(EmotionProfile::lookup("LABEL_3"), EmotionProfile::base(Emotion::Neutral));
        assert_eq!(EmotionProfile::lookup("JOY"), EmotionProfile::base(Emotion::Neutral));
        assert_eq!(EmotionProfile::lookup(""), EmotionProfile::base(Emotion::Neutral));
    }
}
