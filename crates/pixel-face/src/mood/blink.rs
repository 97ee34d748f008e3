use crate::api::config::MoodTimings;
use crate::core::rng::Rng;
use crate::core::timers::{TimerKind, Timers};

/// Periodic blink override of the eyes.
///
/// While running, each blink closes the eyes for `blink_ms` and schedules
/// the next one after a random delay in the configured interval. Stopping
/// opens the eyes and cancels both blink timers.
#[derive(Debug, Clone)]
pub struct BlinkCycle {
    blinking: bool,
    running: bool,
    blink_ms: u32,
    interval_min_ms: u32,
    interval_max_ms: u32,
}

impl BlinkCycle {
    /// The next blink never starts before the current one ends, even for
    /// timings that skipped `AvatarConfig::validate`.
    pub fn new(timings: &MoodTimings) -> Self {
        let floor = timings.blink_ms.saturating_add(1);
        let interval_min_ms = timings.blink_interval_min_ms.max(floor);
        Self {
            blinking: false,
            running: false,
            blink_ms: timings.blink_ms,
            interval_min_ms,
            interval_max_ms: timings.blink_interval_max_ms.max(interval_min_ms),
        }
    }

    /// Start the cycle with an immediate blink. No-op if already running.
    pub fn start(&mut self, timers: &mut Timers, rng: &mut Rng) {
        if self.running {
            return;
        }
        self.running = true;
        self.blink(timers, rng);
    }

    pub fn stop(&mut self, timers: &mut Timers) {
        self.running = false;
        self.blinking = false;
        timers.cancel(TimerKind::BlinkEnd);
        timers.cancel(TimerKind::NextBlink);
    }

    pub fn on_blink_end(&mut self) {
        self.blinking = false;
    }

    pub fn on_next_blink(&mut self, timers: &mut Timers, rng: &mut Rng) {
        if self.running {
            self.blink(timers, rng);
        }
    }

    pub fn is_blinking(&self) -> bool {
        self.blinking
    }

    fn blink(&mut self, timers: &mut Timers, rng: &mut Rng) {
        self.blinking = true;
        timers.schedule(TimerKind::BlinkEnd, self.blink_ms);
        let delay = rng.next_range(self.interval_min_ms, self.interval_max_ms);
        timers.schedule(TimerKind::NextBlink, delay);
    }
}
