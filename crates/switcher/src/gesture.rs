//! Press/move/release bookkeeping for a single pointer.

/// Pointer and thumb positions captured at press time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragOrigin {
    /// Pointer X at press
    pub x: f32,
    /// Thumb position at press
    pub thumb_position: i32,
}

/// Ephemeral gesture state, reset on every press.
///
/// Nothing here is cleared on release. A gesture interrupted before its
/// release leaves stale values behind, which the next press overwrites
/// before anything reads them.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragGesture {
    origin: Option<DragOrigin>,
    has_dragged: bool,
}

impl DragGesture {
    /// Create an idle gesture tracker.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            origin: None,
            has_dragged: false,
        }
    }

    /// Start a gesture at pointer `x` with the thumb at `thumb_position`.
    pub fn press(&mut self, x: f32, thumb_position: i32) {
        self.origin = Some(DragOrigin { x, thumb_position });
        self.has_dragged = false;
    }

    /// Record a move to pointer `x` and return the signed fraction of
    /// `thumb_width` travelled since the press.
    ///
    /// Returns `None` if no press has been seen yet.
    pub fn drag_to(&mut self, x: f32, thumb_width: i32) -> Option<f32> {
        let origin = self.origin?;
        self.has_dragged = true;
        Some((x - origin.x) / thumb_width as f32)
    }

    /// Captured press positions, if any press has been seen.
    #[must_use]
    pub const fn origin(&self) -> Option<DragOrigin> {
        self.origin
    }

    /// Whether a move has been observed since the last press.
    #[must_use]
    pub const fn has_dragged(&self) -> bool {
        self.has_dragged
    }
}
