//! Core types and host seams for the Switcher toggle widget.
//!
//! This crate provides the pieces the widget borrows from its host:
//! - Geometric primitives: [`Point`], [`Rect`]
//! - Color representation: [`Color`] with hex parsing and blending
//! - Input events: [`Event`]
//! - The drawing seam: [`Surface`], with [`RecordingSurface`] for tests
//! - The tween engine: [`TweenEngine`], implemented by [`Tween`]

pub mod animation;
mod color;
mod event;
mod geometry;
pub mod surface;

pub use animation::{Easing, Tween, TweenEngine, TweenFrame};
pub use color::{Color, ColorParseError};
pub use event::Event;
pub use geometry::{Point, Rect};
pub use surface::{DrawCommand, RecordingSurface, Surface};
