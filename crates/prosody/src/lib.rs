//! Emotion-driven prosody
//!
//! Maps a classified emotion label and its confidence score to the pitch,
//! rate, and volume offsets handed to a speech synthesizer. The mapping is a
//! pure function of the label, the score, and the static [`EmotionProfile`]
//! table.

#![allow(clippy::must_use_candidate)]

mod emotion;
mod params;
mod profile;

pub use emotion::{EMOTION_LABELS, Emotion};
pub use params::VoiceParameters;
pub use profile::{BaseProsody, EmotionProfile};

/// Scores strictly above this receive the high-confidence boost
pub const BOOST_THRESHOLD: f64 = 0.85;

/// Multiplicative boost applied above [`BOOST_THRESHOLD`]
pub const BOOST_FACTOR: f64 = 1.4;

/// Scores at or above this raise the volume
pub const VOLUME_THRESHOLD: f64 = 0.8;

/// Volume offset applied at or above [`VOLUME_THRESHOLD`], in percent
pub const RAISED_VOLUME_PERCENT: i32 = 15;

/// Map an emotion label and confidence score to voice parameters
///
/// Unknown labels fall back to the `neutral` profile entry, so this never
/// fails. The multiplier grows quadratically with confidence
/// (`1 + score²`) and is boosted by [`BOOST_FACTOR`] for scores above
/// [`BOOST_THRESHOLD`]. Scaled values are truncated toward zero.
///
/// Scores outside `[0, 1]` are clamped first; NaN is treated as `0`.
pub fn map_to_voice_parameters(label: &str, score: f64) -> VoiceParameters {
    let score = clamp_score(score);
    let base = EmotionProfile::lookup(label);

    let mut multiplier = 1.0 + score.powi(2);
    if score > BOOST_THRESHOLD {
        multiplier *= BOOST_FACTOR;
    }

    let volume_percent = if score < VOLUME_THRESHOLD {
        0
    } else {
        RAISED_VOLUME_PERCENT
    };

    VoiceParameters {
        pitch_hz: scale(base.pitch_hz, multiplier),
        rate_percent: scale(base.rate_percent, multiplier),
        volume_percent,
    }
}

fn clamp_score(score: f64) -> f64 {
    if score.is_nan() { 0.0 } else { score.clamp(0.0, 1.0) }
}

// `as` truncates toward zero and saturates; the profile values are tiny
#[allow(clippy::cast_possible_truncation)]
fn scale(base: i32, multiplier: f64) -> i32 {
    (f64::from(base) * multiplier) as i32
}
