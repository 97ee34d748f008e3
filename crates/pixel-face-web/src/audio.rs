use pixel_face::{AudioError, AudioSink, SoundCue, Tone};
use wasm_bindgen::JsValue;
use web_sys::AudioContext;

/// Web Audio sink. The `AudioContext` is created on the first cue and
/// closed when the sink is dropped. If creation fails once, the sink stays
/// silent for the rest of its life.
#[derive(Default)]
pub struct WebAudio {
    ctx: Option<AudioContext>,
    unavailable: bool,
}

impl WebAudio {
    pub fn new() -> Self {
        Self::default()
    }

    fn context(&mut self) -> Result<&AudioContext, AudioError> {
        if self.unavailable {
            return Err(AudioError::Unavailable("audio context failed earlier".into()));
        }
        if self.ctx.is_none() {
            match AudioContext::new() {
                Ok(ctx) => self.ctx = Some(ctx),
                Err(err) => {
                    self.unavailable = true;
                    return Err(AudioError::Unavailable(describe(&err)));
                }
            }
        }
        self.ctx
            .as_ref()
            .ok_or_else(|| AudioError::Unavailable("audio context missing".into()))
    }
}

impl AudioSink for WebAudio {
    fn play(&mut self, cue: SoundCue) -> Result<(), AudioError> {
        let ctx = self.context()?;
        schedule_tone(ctx, &cue.tone()).map_err(|err| AudioError::Playback(describe(&err)))
    }
}

impl Drop for WebAudio {
    fn drop(&mut self) {
        if let Some(ctx) = self.ctx.take() {
            if let Err(err) = ctx.close() {
                log::debug!("closing audio context failed: {}", describe(&err));
            }
        }
    }
}

/// Oscillator -> gain -> destination, started now and stopped after the tone.
fn schedule_tone(ctx: &AudioContext, tone: &Tone) -> Result<(), JsValue> {
    let now = ctx.current_time();
    let end = now + tone.duration_s;

    let osc = ctx.create_oscillator()?;
    let gain = ctx.create_gain()?;

    let frequency = osc.frequency();
    frequency.set_value_at_time(tone.start_hz, now)?;
    if tone.is_sweep() {
        frequency.exponential_ramp_to_value_at_time(tone.end_hz, end)?;
    }

    let level = gain.gain();
    level.set_value_at_time(tone.gain, now)?;
    level.exponential_ramp_to_value_at_time(tone.release_gain, end)?;

    osc.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&ctx.destination())?;
    osc.start_with_when(now)?;
    osc.stop_with_when(end)?;
    Ok(())
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
