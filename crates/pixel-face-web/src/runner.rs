use pixel_face::{
    AudioSink, AvatarConfig, AvatarController, AvatarEvent, FaceFrame,
    FrameLayout, SoundCue, Stimulus, StimulusQueue,
};

/// Drives an `AvatarController` from host frames.
///
/// The page pushes stimuli as they happen; each `tick` first fires the
/// timers that came due, then applies the queued stimuli in arrival order,
/// plays the emitted sound cues and repacks the shared frame buffer.
pub struct AvatarRunner<A: AudioSink> {
    controller: AvatarController,
    input: StimulusQueue,
    audio: A,
    layout: FrameLayout,
    /// Flat frame buffer for direct reads from JS memory.
    frame_buffer: Vec<f32>,
    /// Cues and events produced by the most recent tick.
    sounds: Vec<SoundCue>,
    events: Vec<AvatarEvent>,
}

impl<A: AudioSink> AvatarRunner<A> {
    pub fn new(config: AvatarConfig, seed: u64, audio: A) -> Self {
        let layout = FrameLayout::from_config(&config);
        let frame_buffer = Vec::with_capacity(layout.buffer_total_floats);

        Self {
            controller: AvatarController::new(config, seed),
            input: StimulusQueue::new(),
            audio,
            layout,
            frame_buffer,
            sounds: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Mount the avatar. Call once after construction.
    pub fn init(&mut self) {
        self.controller.mount();
        self.events = self.controller.drain_events();
        self.pack();
    }

    /// Queue a stimulus for the next tick. Pointer moves between ticks
    /// collapse into the latest one and the queue is bounded, so a host that
    /// stops ticking (a paused animation frame on a hidden tab) cannot pile
    /// up work.
    pub fn push_input(&mut self, stimulus: Stimulus) {
        if self.controller.is_mounted() {
            self.input.push(stimulus);
        }
    }

    /// Run one frame: advance timers by `dt_ms`, apply stimuli, play sounds.
    pub fn tick(&mut self, dt_ms: f64) {
        if !self.controller.is_mounted() {
            return;
        }

        self.controller.advance(dt_ms);
        for stimulus in self.input.drain() {
            self.controller.apply(stimulus);
        }

        self.sounds = self.controller.drain_sounds();
        self.events = self.controller.drain_events();

        for cue in &self.sounds {
            if let Err(err) = self.audio.play(*cue) {
                log::debug!("skipping {:?} sound: {}", cue, err);
            }
        }

        self.pack();
    }

    /// Tear down: cancel every pending timer and drop queued stimuli.
    pub fn unmount(&mut self) {
        self.controller.unmount();
        self.input.drain();
        self.sounds.clear();
        self.events.clear();
        self.pack();
    }

    fn pack(&mut self) {
        let frame = self.controller.frame();
        self.layout.pack(
            &frame,
            self.controller.now(),
            &self.sounds,
            &self.events,
            &mut self.frame_buffer,
        );
    }

    // ---- Accessors ----

    pub fn controller(&self) -> &AvatarController {
        &self.controller
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn frame(&self) -> FaceFrame {
        self.controller.frame()
    }

    pub fn sounds(&self) -> &[SoundCue] {
        &self.sounds
    }

    pub fn events(&self) -> &[AvatarEvent] {
        &self.events
    }

    pub fn mood_key(&self) -> &'static str {
        self.controller.mood().key()
    }

    pub fn caption(&self) -> &'static str {
        self.controller.frame().caption
    }

    // ---- Pointer accessors for direct memory reads ----

    pub fn frame_ptr(&self) -> *const f32 {
        self.frame_buffer.as_ptr()
    }

    pub fn frame_len(&self) -> u32 {
        self.frame_buffer.len() as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}
