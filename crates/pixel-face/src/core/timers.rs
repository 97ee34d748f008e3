/// Kinds of deferred transition. At most one timer of each kind is pending;
/// scheduling a new one replaces the old.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Return to the baseline mood.
    Revert,
    /// Open the eyes after a blink.
    BlinkEnd,
    /// Start the next blink.
    NextBlink,
}

impl TimerKind {
    pub const ALL: [TimerKind; 3] = [TimerKind::Revert, TimerKind::BlinkEnd, TimerKind::NextBlink];

    fn index(self) -> usize {
        match self {
            TimerKind::Revert => 0,
            TimerKind::BlinkEnd => 1,
            TimerKind::NextBlink => 2,
        }
    }
}

/// Handle for one scheduled timer. Only the most recently scheduled token
/// of a kind is current; firing any other is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken {
    pub kind: TimerKind,
    pub generation: u64,
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    due: f64,
    generation: u64,
}

/// Millisecond clock with one cancel-and-replace slot per timer kind.
#[derive(Debug, Clone, Default)]
pub struct Timers {
    now: f64,
    last_generation: u64,
    slots: [Option<Pending>; 3],
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock in milliseconds.
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Schedule `kind` to fire `delay_ms` from now, replacing any pending one.
    pub fn schedule(&mut self, kind: TimerKind, delay_ms: u32) -> TimerToken {
        self.last_generation += 1;
        let generation = self.last_generation;
        self.slots[kind.index()] = Some(Pending {
            due: self.now + delay_ms as f64,
            generation,
        });
        TimerToken { kind, generation }
    }

    pub fn cancel(&mut self, kind: TimerKind) {
        self.slots[kind.index()] = None;
    }

    pub fn cancel_all(&mut self) {
        self.slots = [None; 3];
    }

    pub fn is_pending(&self, kind: TimerKind) -> bool {
        self.slots[kind.index()].is_some()
    }

    /// Absolute due time of the pending timer of `kind`.
    pub fn due_at(&self, kind: TimerKind) -> Option<f64> {
        self.slots[kind.index()].map(|p| p.due)
    }

    /// The current token for `kind`, if one is pending.
    pub fn current(&self, kind: TimerKind) -> Option<TimerToken> {
        self.slots[kind.index()].map(|p| TimerToken {
            kind,
            generation: p.generation,
        })
    }

    pub fn is_current(&self, token: TimerToken) -> bool {
        self.current(token.kind) == Some(token)
    }

    /// Consume `token` if it is still current. Returns false for stale tokens.
    pub fn take(&mut self, token: TimerToken) -> bool {
        if self.is_current(token) {
            self.slots[token.kind.index()] = None;
            true
        } else {
            false
        }
    }

    /// Remove and return the earliest timer due at or before `until`,
    /// moving the clock to its due time. Ties go to the one scheduled first.
    pub fn pop_due(&mut self, until: f64) -> Option<TimerToken> {
        let (index, pending) = self
            .slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|p| (i, p)))
            .filter(|(_, p)| p.due <= until)
            .min_by(|(_, a), (_, b)| {
                a.due
                    .total_cmp(&b.due)
                    .then(a.generation.cmp(&b.generation))
            })?;

        self.slots[index] = None;
        self.now = self.now.max(pending.due);
        Some(TimerToken {
            kind: TimerKind::ALL[index],
            generation: pending.generation,
        })
    }

    /// Move the clock forward without firing anything.
    /// Callers drain `pop_due` first.
    pub fn set_now(&mut self, now: f64) {
        self.now = self.now.max(now);
    }
}
