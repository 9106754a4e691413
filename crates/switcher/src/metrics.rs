//! Track geometry derived from the surface size and the thumb gap.
//!
//! All positions are the thumb's left edge in surface-local pixels. The
//! thumb travels between `gap` (closed) and `width / 2` (open).

use crate::state::SwitchState;
use switcher_core::Rect;

/// Geometry of the track for one surface size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackMetrics {
    /// Surface width
    pub width: i32,
    /// Surface height
    pub height: i32,
    /// Inset around the thumb
    pub gap: i32,
}

impl TrackMetrics {
    /// Create metrics for a surface of `width` x `height` with the given gap.
    #[must_use]
    pub const fn new(width: i32, height: i32, gap: i32) -> Self {
        Self { width, height, gap }
    }

    /// Horizontal midpoint of the surface.
    #[must_use]
    pub const fn midpoint(&self) -> i32 {
        self.width / 2
    }

    #[must_use]
    pub const fn thumb_width(&self) -> i32 {
        self.width / 2 - self.gap
    }

    #[must_use]
    pub const fn thumb_height(&self) -> i32 {
        self.height - 2 * self.gap
    }

    /// Thumb position when closed.
    #[must_use]
    pub const fn closed_edge(&self) -> i32 {
        self.gap
    }

    /// Thumb position when open.
    #[must_use]
    pub const fn open_edge(&self) -> i32 {
        self.midpoint()
    }

    /// Resting thumb position for `state`.
    #[must_use]
    pub const fn edge(&self, state: SwitchState) -> i32 {
        match state {
            SwitchState::Closed => self.closed_edge(),
            SwitchState::Open => self.open_edge(),
        }
    }

    /// Whether `position` sits on either end of the travel range.
    ///
    /// The right bound is the open edge, the same bound the drag clamp uses.
    #[must_use]
    pub const fn is_at_travel_bound(&self, position: i32) -> bool {
        position <= self.closed_edge() || position >= self.open_edge()
    }

    /// Position an open switch must stay right of to remain open.
    #[must_use]
    pub fn open_threshold(&self, threshold: f32) -> f32 {
        self.midpoint() as f32 * (1.0 + threshold)
    }

    /// Position a closed switch must reach to become open.
    #[must_use]
    pub fn close_threshold(&self, threshold: f32) -> f32 {
        self.width as f32 * threshold / 2.0
    }

    /// State a drag released at `position` settles into, given the state
    /// held before the drag started.
    #[must_use]
    pub fn settle_target(&self, current: SwitchState, position: i32, threshold: f32) -> SwitchState {
        let cutoff = match current {
            SwitchState::Open => self.open_threshold(threshold),
            SwitchState::Closed => self.close_threshold(threshold),
        };
        if (position as f32) < cutoff {
            SwitchState::Closed
        } else {
            SwitchState::Open
        }
    }

    /// Duration of the settle animation, scaled by the distance travelled
    /// from the closed edge.
    #[must_use]
    pub fn settle_duration(&self, position: i32, full_duration_ms: u32) -> u32 {
        let travelled = i64::from(position - self.gap).max(0);
        let scaled = (travelled * i64::from(full_duration_ms))
            .checked_div(i64::from(self.thumb_width()))
            .unwrap_or(0);
        u32::try_from(scaled.max(0)).unwrap_or(full_duration_ms)
    }

    /// Background blend while dragging, from the raw drag rate.
    #[must_use]
    pub fn blend_for_rate(rate: f32) -> u8 {
        clamp_blend(255.0 * rate)
    }

    /// Background blend for a thumb resting or animating at `position`.
    #[must_use]
    pub fn blend_for_position(&self, position: i32) -> u8 {
        clamp_blend(255.0 * (position - self.gap) as f32 / self.thumb_width() as f32)
    }

    /// Area covered by the thumb at `position`.
    #[must_use]
    pub const fn thumb_rect(&self, position: i32) -> Rect {
        Rect::new(
            position,
            self.gap,
            position + self.thumb_width(),
            self.gap + self.thumb_height(),
        )
    }

    /// Area covered by the background.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }
}

fn clamp_blend(raw: f32) -> u8 {
    (raw as i32).clamp(0, 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const THRESHOLD: f32 = 0.5;

    fn metrics() -> TrackMetrics {
        TrackMetrics::new(100, 40, 5)
    }

    #[test]
    fn test_derived_sizes() {
        let m = metrics();
        assert_eq!(m.midpoint(), 50);
        assert_eq!(m.thumb_width(), 45);
        assert_eq!(m.thumb_height(), 30);
        assert_eq!(m.edge(SwitchState::Closed), 5);
        assert_eq!(m.edge(SwitchState::Open), 50);
    }

    #[test]
    fn test_thresholds() {
        let m = metrics();
        assert_eq!(m.open_threshold(THRESHOLD), 75.0);
        assert_eq!(m.close_threshold(THRESHOLD), 25.0);
    }

    #[test]
    fn test_open_threshold_uses_integer_midpoint() {
        let m = TrackMetrics::new(101, 40, 5);
        assert_eq!(m.open_threshold(THRESHOLD), 75.0);
        assert_eq!(m.close_threshold(THRESHOLD), 25.25);
    }

    #[test]
    fn test_hysteresis_from_open() {
        let m = metrics();
        assert_eq!(m.settle_target(SwitchState::Open, 74, THRESHOLD), SwitchState::Closed);
        assert_eq!(m.settle_target(SwitchState::Open, 76, THRESHOLD), SwitchState::Open);
    }

    #[test]
    fn test_settle_from_closed() {
        let m = metrics();
        assert_eq!(m.settle_target(SwitchState::Closed, 24, THRESHOLD), SwitchState::Closed);
        assert_eq!(m.settle_target(SwitchState::Closed, 25, THRESHOLD), SwitchState::Open);
        assert_eq!(m.settle_target(SwitchState::Closed, 35, THRESHOLD), SwitchState::Open);
    }

    #[test]
    fn test_travel_bounds() {
        let m = metrics();
        assert!(m.is_at_travel_bound(5));
        assert!(m.is_at_travel_bound(50));
        assert!(!m.is_at_travel_bound(6));
        assert!(!m.is_at_travel_bound(45));
        assert!(!m.is_at_travel_bound(49));
    }

    #[test]
    fn test_settle_duration() {
        let m = metrics();
        assert_eq!(m.settle_duration(40, 200), 155);
        assert_eq!(m.settle_duration(35, 200), 133);
        assert_eq!(m.settle_duration(5, 200), 0);
        assert_eq!(m.settle_duration(-3, 200), 0);
    }

    #[test]
    fn test_settle_duration_degenerate_track() {
        let m = TrackMetrics::new(10, 10, 5);
        assert_eq!(m.thumb_width(), 0);
        assert_eq!(m.settle_duration(7, 200), 0);
    }

    #[test]
    fn test_blend_for_rate_clamps() {
        assert_eq!(TrackMetrics::blend_for_rate(-0.3), 0);
        assert_eq!(TrackMetrics::blend_for_rate(30.0 / 45.0), 170);
        assert_eq!(TrackMetrics::blend_for_rate(1.7), 255);
    }

    #[test]
    fn test_blend_for_position() {
        let m = metrics();
        assert_eq!(m.blend_for_position(5), 0);
        assert_eq!(m.blend_for_position(35), 170);
        assert_eq!(m.blend_for_position(50), 255);
    }

    #[test]
    fn test_thumb_rect() {
        let m = metrics();
        assert_eq!(m.thumb_rect(5), Rect::new(5, 5, 50, 35));
        assert_eq!(m.thumb_rect(50), Rect::new(50, 5, 95, 35));
        assert_eq!(m.bounds(), Rect::new(0, 0, 100, 40));
    }

    proptest! {
        #[test]
        fn prop_blend_for_position_in_range(position in -500i32..500) {
            let b = metrics().blend_for_position(position);
            if position <= 5 {
                prop_assert_eq!(b, 0);
            }
            if position >= 50 {
                prop_assert_eq!(b, 255);
            }
        }

        #[test]
        fn prop_blend_monotonic_in_position(a in 5i32..50, b in 5i32..50) {
            let m = metrics();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(m.blend_for_position(lo) <= m.blend_for_position(hi));
        }

        #[test]
        fn prop_settle_duration_bounded(position in 6i32..50) {
            prop_assert!(metrics().settle_duration(position, 200) <= 200);
        }
    }
}
