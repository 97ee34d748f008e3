/// Counts clicks on the avatar toward a milestone.
#[derive(Debug, Clone)]
pub struct ClickTally {
    count: u32,
    milestone: u32,
}

impl ClickTally {
    pub fn new(milestone: u32) -> Self {
        Self {
            count: 0,
            milestone: milestone.max(1),
        }
    }

    /// Register a click. Returns true when this click reached the milestone,
    /// in which case the count starts over at zero.
    pub fn click(&mut self) -> bool {
        self.count += 1;
        if self.count >= self.milestone {
            self.count = 0;
            true
        } else {
            false
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}
