use glam::Vec2;

/// Converts absolute cursor positions into per-event look offsets.
///
/// The first sample after construction or [`reset`](Self::reset) only
/// records the position, so a window gaining the cursor does not snap the
/// view.
#[derive(Debug, Clone, Default)]
pub struct CursorTracker {
    last: Option<Vec2>,
}

impl CursorTracker {
    /// Tracker that treats the next sample as the first.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a cursor position and return `(x_offset, y_offset)`.
    ///
    /// The y offset is reversed because screen y grows downward while a
    /// positive pitch offset looks up.
    pub fn offset_to(&mut self, x: f32, y: f32) -> Vec2 {
        let current = Vec2::new(x, y);
        let last = self.last.replace(current).unwrap_or(current);
        Vec2::new(current.x - last.x, last.y - current.y)
    }

    /// Forget the last position.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Last recorded position, if any.
    #[must_use]
    pub fn last_position(&self) -> Option<Vec2> {
        self.last
    }
}
