//! Draggable two-state toggle switch.
//!
//! A [`Switcher`] owns the gesture interpretation, the open/closed state
//! machine and the animation driver. It paints onto a host
//! [`switcher_core::Surface`] and is animated by a
//! [`switcher_core::TweenEngine`] polled once per frame.
//!
//! ```
//! use switcher::{SwitchState, Switcher};
//! use switcher_core::{Event, RecordingSurface};
//!
//! let mut switcher = Switcher::new(RecordingSurface::new(100, 40));
//! switcher.handle_event(&Event::down(60.0));
//! switcher.handle_event(&Event::up(60.0));
//! assert_eq!(switcher.state(), SwitchState::Open);
//!
//! while switcher.tick(16) {
//!     switcher.paint();
//! }
//! assert_eq!(switcher.thumb_position(), 50);
//! ```

pub mod config;
pub mod gesture;
pub mod metrics;
mod state;
mod switcher;

pub use config::{ConfigError, SwitcherConfig, SwitcherStyle};
pub use gesture::{DragGesture, DragOrigin};
pub use metrics::TrackMetrics;
pub use state::{SwitchChanged, SwitchState};
pub use switcher::{Animation, StateChangeListener, Switcher};
