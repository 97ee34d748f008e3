use glam::Vec2;

/// Screen-space rect of the avatar container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceBounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl FaceBounds {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }
}

/// Pupil offset toward `pointer`, at full `max_offset` along the angle from
/// `center`. Zero when the pointer sits exactly on the center.
pub fn pupil_offset(center: Vec2, pointer: Vec2, max_offset: f32) -> Vec2 {
    (pointer - center).normalize_or_zero() * max_offset
}

/// Tracks where the eyes look. Without bounds the container is not
/// mounted and pointer moves are ignored.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    bounds: Option<FaceBounds>,
    offset: Vec2,
    max_offset: f32,
}

impl PointerTracker {
    pub fn new(max_offset: f32) -> Self {
        Self {
            bounds: None,
            offset: Vec2::ZERO,
            max_offset,
        }
    }

    pub fn set_bounds(&mut self, bounds: FaceBounds) {
        self.bounds = Some(bounds);
    }

    pub fn clear_bounds(&mut self) {
        self.bounds = None;
    }

    /// Recompute the offset for a pointer at `pointer`.
    /// Returns `None` (and leaves the offset alone) when unmounted.
    pub fn track(&mut self, pointer: Vec2) -> Option<Vec2> {
        let bounds = self.bounds?;
        self.offset = pupil_offset(bounds.center(), pointer, self.max_offset);
        Some(self.offset)
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }
}
