//! Drawing surface provided by the host.
//!
//! A [`Surface`] is a fixed-size rectangle the widget paints filled
//! rectangles onto. Repaints are requested, never performed inline: the host
//! decides when the next draw happens.

use crate::{Color, Rect};
use serde::{Deserialize, Serialize};

/// Host drawing surface.
pub trait Surface {
    /// Width in pixels.
    fn width(&self) -> i32;

    /// Height in pixels.
    fn height(&self) -> i32;

    /// Draw a filled rectangle. The color's alpha channel applies.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Schedule another draw without blocking the caller.
    fn request_repaint(&mut self);
}

/// A recorded drawing operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// A filled rectangle.
    FillRect {
        /// Area covered
        rect: Rect,
        /// Fill color
        color: Color,
    },
}

/// A [`Surface`] that records draw operations instead of rasterizing them.
///
/// This is useful for:
/// - Testing (verify what was painted and how often repaints were asked for)
/// - Replaying gesture scripts headlessly
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: i32,
    height: i32,
    commands: Vec<DrawCommand>,
    repaint_requests: usize,
}

impl RecordingSurface {
    /// Create an empty recording surface of the given size.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
            repaint_requests: 0,
        }
    }

    /// Change the surface size.
    pub fn resize(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the surface.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of repaint requests since creation or the last reset.
    #[must_use]
    pub const fn repaint_requests(&self) -> usize {
        self.repaint_requests
    }

    /// Reset the repaint request counter.
    pub fn clear_repaint_requests(&mut self) {
        self.repaint_requests = 0;
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn request_repaint(&mut self) {
        self.repaint_requests += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_surface_records_fills() {
        let mut surface = RecordingSurface::new(100, 50);
        surface.fill_rect(Rect::from_size(100, 50), Color::GRAY);
        assert_eq!(surface.commands().len(), 1);
        assert_eq!(
            surface.commands()[0],
            DrawCommand::FillRect {
                rect: Rect::new(0, 0, 100, 50),
                color: Color::GRAY,
            }
        );
    }

    #[test]
    fn test_take_commands_clears() {
        let mut surface = RecordingSurface::new(10, 10);
        surface.fill_rect(Rect::from_size(10, 10), Color::WHITE);
        assert_eq!(surface.take_commands().len(), 1);
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn test_repaint_counter() {
        let mut surface = RecordingSurface::new(10, 10);
        surface.request_repaint();
        surface.request_repaint();
        assert_eq!(surface.repaint_requests(), 2);
        surface.clear_repaint_requests();
        assert_eq!(surface.repaint_requests(), 0);
    }

    #[test]
    fn test_resize() {
        let mut surface = RecordingSurface::new(10, 10);
        surface.resize(120, 60);
        assert_eq!((surface.width(), surface.height()), (120, 60));
    }
}
