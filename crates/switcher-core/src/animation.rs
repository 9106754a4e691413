//! Tween engine: eased interpolation of an integer position over time.
//!
//! The widget starts a tween and then polls it once per frame with the time
//! elapsed since the previous frame. The engine reports whether the tween is
//! still running together with the interpolated value.

use serde::{Deserialize, Serialize};

// =============================================================================
// Easing Functions
// =============================================================================

/// Easing curves available to the tween engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Linear interpolation (no easing)
    Linear,
    /// Quadratic deceleration: fast start, slow approach to the target
    #[default]
    Decelerate,
    /// Cubic deceleration
    CubicOut,
}

impl Easing {
    /// Apply easing function to a normalized time value (0.0 to 1.0).
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Decelerate => 1.0 - (1.0 - t) * (1.0 - t),
            Self::CubicOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}

// =============================================================================
// Tween Engine
// =============================================================================

/// Result of polling a tween for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TweenFrame {
    /// Whether the frame carries a fresh value
    pub in_progress: bool,
    /// Interpolated value for this frame
    pub value: i32,
}

/// Time-based interpolation of a scalar, polled once per frame.
pub trait TweenEngine {
    /// Start interpolating from `from` to `to` over `duration_ms`.
    ///
    /// Replaces any tween already running.
    fn start_tween(&mut self, from: i32, to: i32, duration_ms: u32);

    /// Advance by `dt_ms` and report the current value.
    fn tick(&mut self, dt_ms: u32) -> TweenFrame;

    /// Stop the tween where it is.
    fn abort(&mut self);

    /// Whether no tween is running.
    fn is_finished(&self) -> bool;
}

/// Default [`TweenEngine`] driven by an [`Easing`] curve.
///
/// The tick that reaches the duration reports the exact target value as
/// still in progress; every tick after that reports finished.
#[derive(Debug, Clone)]
pub struct Tween {
    from: i32,
    to: i32,
    current: i32,
    duration_ms: u32,
    elapsed_ms: u32,
    easing: Easing,
    finished: bool,
}

impl Default for Tween {
    fn default() -> Self {
        Self::new()
    }
}

impl Tween {
    /// Create an idle tween using [`Easing::Decelerate`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            from: 0,
            to: 0,
            current: 0,
            duration_ms: 0,
            elapsed_ms: 0,
            easing: Easing::Decelerate,
            finished: true,
        }
    }

    /// Set easing function.
    #[must_use]
    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Start value of the current tween.
    #[must_use]
    pub const fn from_value(&self) -> i32 {
        self.from
    }

    /// Target value of the current tween.
    #[must_use]
    pub const fn to_value(&self) -> i32 {
        self.to
    }

    /// Duration of the current tween.
    #[must_use]
    pub const fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Progress from 0.0 to 1.0.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration_ms > 0 {
            (self.elapsed_ms as f32 / self.duration_ms as f32).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

impl TweenEngine for Tween {
    fn start_tween(&mut self, from: i32, to: i32, duration_ms: u32) {
        self.from = from;
        self.to = to;
        self.current = from;
        self.duration_ms = duration_ms;
        self.elapsed_ms = 0;
        self.finished = false;
    }

    fn tick(&mut self, dt_ms: u32) -> TweenFrame {
        if self.finished {
            return TweenFrame {
                in_progress: false,
                value: self.current,
            };
        }

        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms);
        if self.elapsed_ms < self.duration_ms {
            let eased = self.easing.apply(self.progress());
            let delta = (self.to - self.from) as f32;
            self.current = self.from + (eased * delta).round() as i32;
        } else {
            self.current = self.to;
            self.finished = true;
        }

        TweenFrame {
            in_progress: true,
            value: self.current,
        }
    }

    fn abort(&mut self) {
        self.finished = true;
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}
