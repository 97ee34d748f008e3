use thiserror::Error;

use crate::api::types::SoundCue;

/// Failures of the audio collaborator. Never fatal: the runner logs and
/// drops them, and the mood state is unaffected.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("audio unavailable: {0}")]
    Unavailable(String),

    #[error("audio playback failed: {0}")]
    Playback(String),
}

/// Something that can turn sound cues into audible tones.
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue) -> Result<(), AudioError>;
}

/// Sink that discards every cue.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl AudioSink for Silent {
    fn play(&mut self, _cue: SoundCue) -> Result<(), AudioError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silent_accepts_every_cue() {
        let mut sink = Silent;
        assert!(sink.play(SoundCue::Hover).is_ok());
        assert!(sink.play(SoundCue::Click).is_ok());
    }

    #[test]
    fn errors_describe_the_cause() {
        let err = AudioError::Unavailable("no AudioContext".into());
        assert_eq!(err.to_string(), "audio unavailable: no AudioContext");
    }
}
