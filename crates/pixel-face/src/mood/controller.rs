use glam::Vec2;

use crate::api::config::AvatarConfig;
use crate::api::types::{AvatarEvent, Button, Mood, SoundCue};
use crate::core::rng::Rng;
use crate::core::timers::{TimerKind, TimerToken, Timers};
use crate::input::queue::Stimulus;
use crate::mood::blink::BlinkCycle;
use crate::mood::easter_egg::HiddenInput;
use crate::mood::pointer::{FaceBounds, PointerTracker};
use crate::mood::tally::ClickTally;

/// Everything the renderer needs to draw one frame of the face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceFrame {
    pub mood: Mood,
    /// Pupil offset; zero while blinking.
    pub pupil_offset: Vec2,
    pub blinking: bool,
    /// Particle burst shown while the face is broken.
    pub easter_egg: bool,
    pub hovered: Option<Button>,
    pub click_tally: u32,
    pub caption: &'static str,
}

/// The avatar mood state machine.
///
/// Owns the mood, pointer offset, click tally and all pending timers.
/// Every mood change goes through one transition that replaces or cancels
/// the single revert timer, so the most recent stimulus always wins and a
/// superseded timeout can never overwrite a newer mood.
pub struct AvatarController {
    config: AvatarConfig,
    mood: Mood,
    mounted: bool,
    timers: Timers,
    rng: Rng,
    pointer: PointerTracker,
    blink: BlinkCycle,
    tally: ClickTally,
    input: HiddenInput,
    hover_active: bool,
    hovered: Option<Button>,
    tab_hidden: bool,
    easter_egg: bool,
    sounds: Vec<SoundCue>,
    events: Vec<AvatarEvent>,
}

impl AvatarController {
    /// Create an unmounted controller in the idle mood.
    pub fn new(config: AvatarConfig, seed: u64) -> Self {
        Self {
            pointer: PointerTracker::new(config.max_pupil_offset),
            blink: BlinkCycle::new(&config.timings),
            tally: ClickTally::new(config.click_milestone),
            sounds: Vec::with_capacity(config.max_sounds),
            events: Vec::with_capacity(config.max_events),
            config,
            mood: Mood::Idle,
            mounted: false,
            timers: Timers::new(),
            rng: Rng::new(seed),
            input: HiddenInput::new(),
            hover_active: false,
            hovered: None,
            tab_hidden: false,
            easter_egg: false,
        }
    }

    /// Attach to the page and start blinking.
    ///
    /// Every mount starts from the idle baseline: whatever mood, tally,
    /// hidden-tab flag or typed text survived an earlier unmount is dropped.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.mood = Mood::Idle;
        self.tally = ClickTally::new(self.config.click_milestone);
        self.pointer = PointerTracker::new(self.config.max_pupil_offset);
        self.input = HiddenInput::new();
        self.tab_hidden = false;
        self.blink.start(&mut self.timers, &mut self.rng);
        log::info!("avatar mounted");
    }

    /// Detach from the page. Cancels every pending timer; later stimuli and
    /// timer deliveries are ignored until the next mount, which starts over
    /// from idle.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.timers.cancel_all();
        self.blink.stop(&mut self.timers);
        self.pointer.clear_bounds();
        self.hover_active = false;
        self.hovered = None;
        self.easter_egg = false;
        log::info!("avatar unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn config(&self) -> &AvatarConfig {
        &self.config
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn is_blinking(&self) -> bool {
        self.blink.is_blinking()
    }

    pub fn click_tally(&self) -> u32 {
        self.tally.count()
    }

    pub fn hovered(&self) -> Option<Button> {
        self.hovered
    }

    pub fn input_text(&self) -> &str {
        self.input.text()
    }

    /// Controller clock in milliseconds.
    pub fn now(&self) -> f64 {
        self.timers.now()
    }

    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    pub fn frame(&self) -> FaceFrame {
        let blinking = self.blink.is_blinking();
        FaceFrame {
            mood: self.mood,
            pupil_offset: if blinking { Vec2::ZERO } else { self.pointer.offset() },
            blinking,
            easter_egg: self.easter_egg,
            hovered: self.hovered,
            click_tally: self.tally.count(),
            caption: self.mood.caption(self.config.layout),
        }
    }

    /// Take the sound cues emitted since the last drain.
    pub fn drain_sounds(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.sounds)
    }

    /// Take the events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<AvatarEvent> {
        std::mem::take(&mut self.events)
    }

    // -- Stimuli --

    pub fn apply(&mut self, stimulus: Stimulus) {
        match stimulus {
            Stimulus::Bounds(bounds) => self.set_bounds(bounds),
            Stimulus::PointerMove { x, y } => self.pointer_move(x, y),
            Stimulus::AvatarClick => self.avatar_click(),
            Stimulus::ButtonHover { name } => self.button_hover(&name),
            Stimulus::ButtonLeave => self.button_leave(),
            Stimulus::ButtonClick { name } => self.button_click(&name),
            Stimulus::InputChanged { text } => self.set_input(&text),
            Stimulus::InputSubmit => self.submit_input(),
            Stimulus::Visibility { hidden } => self.visibility_changed(hidden),
            Stimulus::Scroll { y } => self.scroll(y),
        }
    }

    pub fn set_bounds(&mut self, bounds: FaceBounds) {
        if !self.mounted {
            return;
        }
        self.pointer.set_bounds(bounds);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if !self.mounted || self.pointer.track(Vec2::new(x, y)).is_none() {
            return;
        }
        if self.mood.follows_pointer() {
            self.transition(Mood::Looking);
        }
    }

    pub fn avatar_click(&mut self) {
        if !self.mounted {
            return;
        }
        self.emit_sound(SoundCue::Click);
        if self.tally.click() {
            self.easter_egg = true;
            self.transition(Mood::Broken);
            self.emit_event(AvatarEvent::EasterEgg);
        } else {
            self.transition(Mood::Surprised);
        }
    }

    pub fn button_hover(&mut self, name: &str) {
        if !self.mounted {
            return;
        }
        self.emit_sound(SoundCue::Hover);
        let button = self.config.layout.button(name);
        if button.is_none() {
            log::debug!("hover on unrecognized button '{}'", name);
        }
        self.hover_active = true;
        self.hovered = button;
        self.transition(button.map(Button::mood).unwrap_or(Mood::Idle));
    }

    pub fn button_leave(&mut self) {
        if !self.mounted || !self.hover_active {
            return;
        }
        self.hover_active = false;
        self.hovered = None;
        self.transition(Mood::Idle);
    }

    pub fn button_click(&mut self, name: &str) {
        if !self.mounted {
            return;
        }
        self.emit_sound(SoundCue::Click);
        if let Some(route) = self.config.layout.button(name).and_then(Button::route) {
            log::info!("navigating to {}", route.path());
            self.emit_event(AvatarEvent::Navigate(route));
        }
    }

    pub fn set_input(&mut self, text: &str) {
        if !self.mounted {
            return;
        }
        self.input.set(text);
    }

    pub fn submit_input(&mut self) {
        if !self.mounted {
            return;
        }
        if let Some(mood) = self.input.submit() {
            self.transition(mood);
        }
    }

    pub fn visibility_changed(&mut self, hidden: bool) {
        if !self.mounted {
            return;
        }
        if hidden {
            self.tab_hidden = true;
            self.transition(Mood::Sleep);
        } else if self.tab_hidden {
            self.tab_hidden = false;
            self.transition(Mood::Wakeup);
        }
    }

    pub fn scroll(&mut self, y: f32) {
        if !self.mounted {
            return;
        }
        if y > self.config.scroll_threshold {
            self.transition(Mood::Scrolling);
        } else if self.mood == Mood::Scrolling {
            self.transition(Mood::Idle);
        }
    }

    // -- Time --

    /// Advance the clock by `dt_ms`, firing every timer that comes due
    /// at its exact due time, in due order.
    pub fn advance(&mut self, dt_ms: f64) {
        if !self.mounted {
            return;
        }
        let target = self.timers.now() + dt_ms.max(0.0);
        while let Some(token) = self.timers.pop_due(target) {
            self.on_timer(token.kind);
        }
        self.timers.set_now(target);
    }

    /// Deliver a timer fired by the host. Superseded or cancelled tokens
    /// are ignored. Returns whether the token was current.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        if !self.mounted || !self.timers.take(token) {
            log::trace!("ignoring stale timer {:?}", token);
            return false;
        }
        self.on_timer(token.kind);
        true
    }

    fn on_timer(&mut self, kind: TimerKind) {
        match kind {
            TimerKind::Revert => self.transition(Mood::Idle),
            TimerKind::BlinkEnd => self.blink.on_blink_end(),
            TimerKind::NextBlink => self.blink.on_next_blink(&mut self.timers, &mut self.rng),
        }
    }

    fn transition(&mut self, next: Mood) {
        let prev = self.mood;
        self.mood = next;

        match self.config.timings.revert_after(next) {
            Some(delay) => {
                self.timers.schedule(TimerKind::Revert, delay);
            }
            None => self.timers.cancel(TimerKind::Revert),
        }

        if next != Mood::Broken {
            self.easter_egg = false;
        }

        match (prev.follows_pointer(), next.follows_pointer()) {
            (false, true) => self.blink.start(&mut self.timers, &mut self.rng),
            (true, false) => self.blink.stop(&mut self.timers),
            _ => {}
        }

        if prev != next {
            log::debug!("mood {} -> {}", prev.key(), next.key());
            self.emit_event(AvatarEvent::MoodChanged { from: prev, to: next });
        }
    }

    fn emit_sound(&mut self, cue: SoundCue) {
        if self.sounds.len() < self.config.max_sounds {
            self.sounds.push(cue);
        }
    }

    fn emit_event(&mut self, event: AvatarEvent) {
        if self.events.len() < self.config.max_events {
            self.events.push(event);
        }
    }
}
