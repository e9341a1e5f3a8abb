use serde::Serialize;

/// Prosody offsets derived from an emotion and its confidence
///
/// All values are signed offsets from the voice's defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct VoiceParameters {
    /// Pitch offset in Hz
    pub pitch_hz: i32,
    /// Speaking rate offset in percent
    pub rate_percent: i32,
    /// Volume offset in percent
    pub volume_percent: i32,
}

impl VoiceParameters {
    /// Pitch rendered as `"+20Hz"` / `"-15Hz"`
    pub fn pitch(&self) -> String {
        format!("{:+}Hz", self.pitch_hz)
    }

    /// Rate rendered as `"+30%"` / `"-25%"`
    pub fn rate(&self) -> String {
        format!("{:+}%", self.rate_percent)
    }

    /// Volume rendered as `"+0%"` / `"+15%"`
    pub fn volume(&self) -> String {
        format!("{:+}%", self.volume_percent)
    }

    /// Rate as a speed multiplier, clamped to the given range
    ///
    /// `+30%` becomes `1.3`, `-25%` becomes `0.75`.
    pub fn speed(&self, min: f64, max: f64) -> f64 {
        (1.0 + f64::from(self.rate_percent) / 100.0).clamp(min, max)
    }
}
