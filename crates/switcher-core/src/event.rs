//! Input events delivered by the host toolkit.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Press, move and release events with surface-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// Pointer pressed
    PointerDown {
        /// Position of the press
        position: Point,
    },
    /// Pointer moved while pressed
    PointerMove {
        /// New position
        position: Point,
    },
    /// Pointer released
    PointerUp {
        /// Position of the release
        position: Point,
    },
}

impl Event {
    /// Press at horizontal offset `x`.
    #[must_use]
    pub const fn down(x: f32) -> Self {
        Self::PointerDown {
            position: Point::new(x, 0.0),
        }
    }

    /// Move to horizontal offset `x`.
    #[must_use]
    pub const fn move_to(x: f32) -> Self {
        Self::PointerMove {
            position: Point::new(x, 0.0),
        }
    }

    /// Release at horizontal offset `x`.
    #[must_use]
    pub const fn up(x: f32) -> Self {
        Self::PointerUp {
            position: Point::new(x, 0.0),
        }
    }

    /// Position carried by the event.
    #[must_use]
    pub const fn position(&self) -> Point {
        match self {
            Self::PointerDown { position }
            | Self::PointerMove { position }
            | Self::PointerUp { position } => *position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_constructors() {
        assert_eq!(Event::down(10.0).position().x, 10.0);
        assert!(matches!(Event::move_to(4.0), Event::PointerMove { .. }));
        assert!(matches!(Event::up(4.0), Event::PointerUp { .. }));
    }

    #[test]
    fn test_event_deserialize_tagged() {
        let event: Event =
            serde_json::from_str(r#"{"type":"pointer_move","position":{"x":40.0}}"#).unwrap();
        assert_eq!(event, Event::move_to(40.0));
    }

    #[test]
    fn test_event_serialize_tagged() {
        let json = serde_json::to_string(&Event::up(60.0)).unwrap();
        assert!(json.contains("\"type\":\"pointer_up\""));
    }
}
