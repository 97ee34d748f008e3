pub mod api;
pub mod core;
pub mod input;
pub mod mood;
pub mod audio;
pub mod bridge;

// Re-export key types at crate root for convenience
pub use api::types::{Mood, Button, Route, SoundCue, AvatarEvent, WireEvent};
pub use api::config::{AvatarConfig, MoodTimings, ButtonLayout, ConfigError};
pub use crate::core::timers::{Timers, TimerKind, TimerToken};
pub use crate::core::rng::Rng;
pub use input::queue::{Stimulus, StimulusQueue};
pub use mood::controller::{AvatarController, FaceFrame};
pub use mood::pointer::{FaceBounds, PointerTracker};
pub use mood::tally::ClickTally;
pub use mood::blink::BlinkCycle;
pub use mood::easter_egg::HiddenInput;
pub use audio::tone::Tone;
pub use audio::sink::{AudioSink, AudioError, Silent};
pub use bridge::protocol::{FrameLayout, FrameHeader, PROTOCOL_VERSION};
