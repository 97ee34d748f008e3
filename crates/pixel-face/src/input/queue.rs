use crate::mood::pointer::FaceBounds;

/// Host events the avatar reacts to.
/// Button names arrive as strings from the page; the controller resolves them.
#[derive(Debug, Clone, PartialEq)]
pub enum Stimulus {
    /// The avatar container was laid out at these screen-space bounds.
    Bounds(FaceBounds),
    /// The cursor moved to screen coordinates (x, y).
    PointerMove { x: f32, y: f32 },
    /// The avatar itself was clicked.
    AvatarClick,
    /// The pointer entered a navigation button.
    ButtonHover { name: String },
    /// The pointer left the hovered navigation button.
    ButtonLeave,
    /// A navigation button was clicked.
    ButtonClick { name: String },
    /// The hidden easter-egg input's text changed.
    InputChanged { text: String },
    /// Enter was pressed.
    InputSubmit,
    /// The tab was hidden or shown.
    Visibility { hidden: bool },
    /// The page scrolled to vertical offset `y`.
    Scroll { y: f32 },
}

/// Stimuli held between ticks before new arrivals are dropped.
pub const MAX_PENDING_STIMULI: usize = 256;

/// A bounded queue of stimuli.
/// JS writes events into the queue; Rust drains them each tick in arrival order.
/// Back-to-back pointer moves collapse into the latest one, and once `limit`
/// stimuli are pending further arrivals are dropped until the next drain.
pub struct StimulusQueue {
    events: Vec<Stimulus>,
    limit: usize,
}

impl StimulusQueue {
    pub fn new() -> Self {
        Self::with_limit(MAX_PENDING_STIMULI)
    }

    pub fn with_limit(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            events: Vec::with_capacity(limit.min(32)),
            limit,
        }
    }

    /// Queue `event`. Returns false if it was dropped because the queue is full.
    pub fn push(&mut self, event: Stimulus) -> bool {
        if matches!(event, Stimulus::PointerMove { .. })
            && matches!(self.events.last(), Some(Stimulus::PointerMove { .. }))
        {
            self.events.pop();
        }
        if self.events.len() >= self.limit {
            log::debug!("stimulus queue full ({}), dropping {:?}", self.limit, event);
            return false;
        }
        self.events.push(event);
        true
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<Stimulus> {
        std::mem::take(&mut self.events)
    }
}

impl Default for StimulusQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain_keeps_order() {
        let mut q = StimulusQueue::new();
        q.push(Stimulus::PointerMove { x: 10.0, y: 20.0 });
        q.push(Stimulus::AvatarClick);
        q.push(Stimulus::ButtonHover { name: "about".into() });

        let events = q.drain();
        assert_eq!(events.len(), 3);
        assert_eq!(events[1], Stimulus::AvatarClick);
        assert_eq!(events[2], Stimulus::ButtonHover { name: "about".into() });
        assert!(q.drain().is_empty());
    }

    #[test]
    fn consecutive_pointer_moves_collapse_to_the_latest() {
        let mut q = StimulusQueue::default();
        q.push(Stimulus::PointerMove { x: 1.0, y: 1.0 });
        q.push(Stimulus::PointerMove { x: 2.0, y: 2.0 });
        q.push(Stimulus::AvatarClick);
        q.push(Stimulus::PointerMove { x: 3.0, y: 3.0 });
        q.push(Stimulus::PointerMove { x: 4.0, y: 4.0 });

        assert_eq!(
            q.drain(),
            vec![
                Stimulus::PointerMove { x: 2.0, y: 2.0 },
                Stimulus::AvatarClick,
                Stimulus::PointerMove { x: 4.0, y: 4.0 },
            ]
        );
    }

    #[test]
    fn full_queue_drops_new_arrivals_until_drained() {
        let mut q = StimulusQueue::with_limit(2);
        assert!(q.push(Stimulus::AvatarClick));
        assert!(q.push(Stimulus::Visibility { hidden: true }));
        assert!(!q.push(Stimulus::InputSubmit));
        assert_eq!(q.drain().len(), 2);
        assert!(q.push(Stimulus::InputSubmit));
    }

    #[test]
    fn pointer_moves_never_fill_the_queue() {
        let mut q = StimulusQueue::with_limit(2);
        q.push(Stimulus::AvatarClick);
        q.push(Stimulus::PointerMove { x: 0.0, y: 0.0 });
        for i in 0..1000 {
            assert!(q.push(Stimulus::PointerMove { x: i as f32, y: 0.0 }));
        }
        assert_eq!(
            q.drain(),
            vec![Stimulus::AvatarClick, Stimulus::PointerMove { x: 999.0, y: 0.0 }]
        );
    }
}
