/// Shared frame buffer layout.
/// Must stay in sync with TypeScript `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Sounds: max_sounds × 1 float]
/// [Events: max_events × 4 floats]
/// ```
///
/// Capacities are written into the header every frame.
/// TypeScript reads them from the header to compute offsets dynamically.

use bytemuck::{Pod, Zeroable};

use crate::api::config::AvatarConfig;
use crate::api::types::{AvatarEvent, SoundCue, WireEvent};
use crate::mood::controller::FaceFrame;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_PROTOCOL_VERSION: usize = 0;
pub const HEADER_MOOD: usize = 1;
pub const HEADER_PUPIL_X: usize = 2;
pub const HEADER_PUPIL_Y: usize = 3;
pub const HEADER_BLINKING: usize = 4;
pub const HEADER_EASTER_EGG: usize = 5;
pub const HEADER_HOVERED: usize = 6;
pub const HEADER_CLICK_TALLY: usize = 7;
pub const HEADER_SOUND_COUNT: usize = 8;
pub const HEADER_EVENT_COUNT: usize = 9;
pub const HEADER_MAX_SOUNDS: usize = 10;
pub const HEADER_MAX_EVENTS: usize = 11;
pub const HEADER_CLOCK_MS: usize = 12;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Header value for "no button hovered".
pub const NO_BUTTON: f32 = -1.0;

/// The header as a Pod struct, field order matching the indices above.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct FrameHeader {
    pub version: f32,
    pub mood: f32,
    pub pupil_x: f32,
    pub pupil_y: f32,
    pub blinking: f32,
    pub easter_egg: f32,
    pub hovered: f32,
    pub click_tally: f32,
    pub sound_count: f32,
    pub event_count: f32,
    pub max_sounds: f32,
    pub max_events: f32,
    pub clock_ms: f32,
    pub reserved: [f32; 3],
}

const _: () = assert!(std::mem::size_of::<FrameHeader>() == HEADER_FLOATS * 4);

fn flag(b: bool) -> f32 {
    if b { 1.0 } else { 0.0 }
}

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameLayout {
    /// Maximum sound cues per frame.
    pub max_sounds: usize,
    /// Maximum avatar events per frame.
    pub max_events: usize,

    /// Size of sound data section in floats.
    pub sound_data_floats: usize,
    /// Size of event data section in floats.
    pub event_data_floats: usize,

    /// Offset (in floats) where sound data begins.
    pub sound_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl FrameLayout {
    pub fn new(max_sounds: usize, max_events: usize) -> Self {
        let sound_data_floats = max_sounds;
        let event_data_floats = max_events * WireEvent::FLOATS;

        let sound_data_offset = HEADER_FLOATS;
        let event_data_offset = sound_data_offset + sound_data_floats;

        let buffer_total_floats = event_data_offset + event_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_sounds,
            max_events,
            sound_data_floats,
            event_data_floats,
            sound_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    pub fn from_config(config: &AvatarConfig) -> Self {
        Self::new(config.max_sounds, config.max_events)
    }

    /// Build the header for one frame.
    pub fn header(
        &self,
        frame: &FaceFrame,
        clock_ms: f64,
        sound_count: usize,
        event_count: usize,
    ) -> FrameHeader {
        FrameHeader {
            version: PROTOCOL_VERSION,
            mood: frame.mood.id() as f32,
            pupil_x: frame.pupil_offset.x,
            pupil_y: frame.pupil_offset.y,
            blinking: flag(frame.blinking),
            easter_egg: flag(frame.easter_egg),
            hovered: frame.hovered.map(|b| b.id() as f32).unwrap_or(NO_BUTTON),
            click_tally: frame.click_tally as f32,
            sound_count: sound_count.min(self.max_sounds) as f32,
            event_count: event_count.min(self.max_events) as f32,
            max_sounds: self.max_sounds as f32,
            max_events: self.max_events as f32,
            clock_ms: clock_ms as f32,
            reserved: [0.0; 3],
        }
    }

    /// Write a full frame into `out`, resizing it to the layout.
    /// Sounds and events beyond capacity are dropped.
    pub fn pack(
        &self,
        frame: &FaceFrame,
        clock_ms: f64,
        sounds: &[SoundCue],
        events: &[AvatarEvent],
        out: &mut Vec<f32>,
    ) {
        out.clear();
        out.resize(self.buffer_total_floats, 0.0);

        let header = self.header(frame, clock_ms, sounds.len(), events.len());
        out[..HEADER_FLOATS].copy_from_slice(bytemuck::cast_slice(std::slice::from_ref(&header)));

        for (slot, cue) in out[self.sound_data_offset..self.event_data_offset]
            .iter_mut()
            .zip(sounds)
        {
            *slot = cue.id() as f32;
        }

        for (chunk, event) in out[self.event_data_offset..]
            .chunks_exact_mut(WireEvent::FLOATS)
            .zip(events)
        {
            let wire = event.to_wire();
            chunk.copy_from_slice(bytemuck::cast_slice(std::slice::from_ref(&wire)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{Button, Mood, Route};
    use glam::Vec2;

    fn frame() -> FaceFrame {
        FaceFrame {
            mood: Mood::Looking,
            pupil_offset: Vec2::new(3.0, -4.0),
            blinking: false,
            easter_egg: false,
            hovered: Some(Button::Contact),
            click_tally: 7,
            caption: "I see you...",
        }
    }

    #[test]
    fn default_config_sizes() {
        let layout = FrameLayout::from_config(&AvatarConfig::default());
        assert_eq!(layout.sound_data_offset, HEADER_FLOATS);
        assert_eq!(layout.event_data_offset, HEADER_FLOATS + 32);
        assert_eq!(layout.buffer_total_floats, HEADER_FLOATS + 32 + 32 * 4);
        assert_eq!(layout.buffer_total_bytes, layout.buffer_total_floats * 4);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = FrameLayout::new(5, 7);
        assert_eq!(layout.event_data_offset, layout.sound_data_offset + layout.sound_data_floats);
        assert_eq!(layout.buffer_total_floats, layout.event_data_offset + layout.event_data_floats);
    }

    #[test]
    fn header_fields_land_at_their_indices() {
        let layout = FrameLayout::new(4, 4);
        let mut out = Vec::new();
        layout.pack(&frame(), 1234.0, &[SoundCue::Hover], &[], &mut out);

        assert_eq!(out[HEADER_PROTOCOL_VERSION], PROTOCOL_VERSION);
        assert_eq!(out[HEADER_MOOD], Mood::Looking.id() as f32);
        assert_eq!(out[HEADER_PUPIL_X], 3.0);
        assert_eq!(out[HEADER_PUPIL_Y], -4.0);
        assert_eq!(out[HEADER_BLINKING], 0.0);
        assert_eq!(out[HEADER_HOVERED], Button::Contact.id() as f32);
        assert_eq!(out[HEADER_CLICK_TALLY], 7.0);
        assert_eq!(out[HEADER_SOUND_COUNT], 1.0);
        assert_eq!(out[HEADER_EVENT_COUNT], 0.0);
        assert_eq!(out[HEADER_MAX_SOUNDS], 4.0);
        assert_eq!(out[HEADER_CLOCK_MS], 1234.0);
    }

    #[test]
    fn sounds_and_events_packed_after_header() {
        let layout = FrameLayout::new(2, 2);
        let mut out = Vec::new();
        let events = [
            AvatarEvent::Navigate(Route::Games),
            AvatarEvent::MoodChanged { from: Mood::Idle, to: Mood::Happy },
            AvatarEvent::EasterEgg,
        ];
        layout.pack(
            &frame(),
            0.0,
            &[SoundCue::Click, SoundCue::Hover, SoundCue::Click],
            &events,
            &mut out,
        );

        assert_eq!(out.len(), layout.buffer_total_floats);
        assert_eq!(&out[layout.sound_data_offset..layout.event_data_offset], &[2.0, 1.0]);
        assert_eq!(out[HEADER_SOUND_COUNT], 2.0);
        assert_eq!(out[HEADER_EVENT_COUNT], 2.0);

        let ev = &out[layout.event_data_offset..];
        assert_eq!(&ev[0..4], &[AvatarEvent::KIND_NAVIGATE, 1.0, 0.0, 0.0]);
        assert_eq!(&ev[4..8], &[AvatarEvent::KIND_MOOD_CHANGED, 0.0, 4.0, 0.0]);
    }

    #[test]
    fn no_hover_is_negative_one() {
        let layout = FrameLayout::new(1, 1);
        let header = layout.header(&FaceFrame { hovered: None, ..frame() }, 0.0, 0, 0);
        assert_eq!(header.hovered, NO_BUTTON);
    }
}
