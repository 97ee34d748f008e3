use crate::api::types::SoundCue;

/// A short synthesized tone: an oscillator gliding from `start_hz` to
/// `end_hz` while its gain decays exponentially to `release_gain`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub start_hz: f32,
    pub end_hz: f32,
    pub gain: f32,
    pub release_gain: f32,
    pub duration_s: f64,
}

impl Tone {
    /// Whether the pitch changes over the tone.
    pub fn is_sweep(&self) -> bool {
        self.start_hz != self.end_hz
    }
}

impl SoundCue {
    pub fn tone(self) -> Tone {
        match self {
            SoundCue::Hover => Tone {
                start_hz: 800.0,
                end_hz: 800.0,
                gain: 0.1,
                release_gain: 0.01,
                duration_s: 0.1,
            },
            SoundCue::Click => Tone {
                start_hz: 1200.0,
                end_hz: 400.0,
                gain: 0.15,
                release_gain: 0.01,
                duration_s: 0.15,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_is_a_flat_blip() {
        let tone = SoundCue::Hover.tone();
        assert!(!tone.is_sweep());
        assert_eq!(tone.start_hz, 800.0);
        assert_eq!(tone.duration_s, 0.1);
    }

    #[test]
    fn click_sweeps_down() {
        let tone = SoundCue::Click.tone();
        assert!(tone.is_sweep());
        assert!(tone.end_hz < tone.start_hz);
        assert!(tone.release_gain < tone.gain);
    }
}
