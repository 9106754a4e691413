//! Draggable toggle switch widget.
//!
//! The thumb is dragged (or tapped) between the closed edge at `gap` and the
//! open edge at the surface midpoint. Releasing a drag settles the thumb
//! into one of the two states with an eased animation; the host drives that
//! animation by calling [`Switcher::tick`] every frame while
//! [`Switcher::is_animating`] is true.

use crate::config::SwitcherStyle;
use crate::gesture::DragGesture;
use crate::metrics::TrackMetrics;
use crate::state::{SwitchChanged, SwitchState};
use log::{debug, trace};
use std::fmt;
use switcher_core::{Event, Surface, Tween, TweenEngine};

/// Callback invoked with the new state on every committed transition.
pub type StateChangeListener = Box<dyn FnMut(SwitchState)>;

/// An animated transition in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    /// Thumb position when the animation started
    pub from: i32,
    /// Thumb position it ends at
    pub to: i32,
    /// Total duration
    pub duration_ms: u32,
}

/// Two-state toggle switch painted onto a host [`Surface`].
pub struct Switcher<S: Surface, T: TweenEngine = Tween> {
    surface: S,
    tween: T,
    style: SwitcherStyle,
    state: SwitchState,
    thumb_position: i32,
    blend: u8,
    gesture: DragGesture,
    animation: Option<Animation>,
    listener: StateChangeListener,
}

impl<S: Surface> Switcher<S> {
    /// Create a closed switch with the default style.
    #[must_use]
    pub fn new(surface: S) -> Self {
        Self::with_style(surface, SwitcherStyle::default())
    }

    /// Create a closed switch, animating with the style's easing curve.
    #[must_use]
    pub fn with_style(surface: S, style: SwitcherStyle) -> Self {
        let tween = Tween::new().with_easing(style.easing);
        Self::with_engine(surface, style, tween)
    }
}

impl<S: Surface, T: TweenEngine> Switcher<S, T> {
    /// Create a closed switch driven by a custom tween engine.
    ///
    /// The style's easing is ignored; the engine owns its curve.
    #[must_use]
    pub fn with_engine(surface: S, style: SwitcherStyle, tween: T) -> Self {
        Self {
            surface,
            tween,
            style,
            state: SwitchState::Closed,
            thumb_position: style.gap,
            blend: 0,
            gesture: DragGesture::new(),
            animation: None,
            listener: Box::new(|_| {}),
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Last committed state.
    #[must_use]
    pub const fn state(&self) -> SwitchState {
        self.state
    }

    /// Left edge of the thumb in surface-local pixels.
    #[must_use]
    pub const fn thumb_position(&self) -> i32 {
        self.thumb_position
    }

    /// Background blend between the closed (0) and open (255) tints.
    #[must_use]
    pub const fn background_blend(&self) -> u8 {
        self.blend
    }

    /// The transition in flight, if any.
    #[must_use]
    pub const fn animation(&self) -> Option<Animation> {
        self.animation
    }

    /// Whether the host should keep calling [`Self::tick`].
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    #[must_use]
    pub const fn style(&self) -> &SwitcherStyle {
        &self.style
    }

    #[must_use]
    pub const fn gesture(&self) -> &DragGesture {
        &self.gesture
    }

    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Track geometry for the current surface size.
    #[must_use]
    pub fn metrics(&self) -> TrackMetrics {
        TrackMetrics::new(self.surface.width(), self.surface.height(), self.style.gap)
    }

    /// Replace the state-change listener. There is only ever one.
    pub fn set_state_change_listener(&mut self, listener: impl FnMut(SwitchState) + 'static) {
        self.listener = Box::new(listener);
    }

    // -------------------------------------------------------------------------
    // Direct transitions
    // -------------------------------------------------------------------------

    /// Move to `target` with a full-length animation. No-op if already there.
    pub fn set_state(&mut self, target: SwitchState) -> Option<SwitchChanged> {
        self.transition_to(target)
    }

    pub fn open(&mut self) -> Option<SwitchChanged> {
        self.transition_to(SwitchState::Open)
    }

    pub fn close(&mut self) -> Option<SwitchChanged> {
        self.transition_to(SwitchState::Closed)
    }

    fn transition_to(&mut self, target: SwitchState) -> Option<SwitchChanged> {
        if self.state == target {
            return None;
        }
        self.state = target;

        let to = self.metrics().edge(target);
        debug!(
            "switch {target}: animating thumb {} -> {to}",
            self.thumb_position
        );
        self.start_animation(to, self.style.duration_ms);
        self.surface.request_repaint();
        Some(self.notify())
    }

    // -------------------------------------------------------------------------
    // Gestures
    // -------------------------------------------------------------------------

    /// Feed one input event. Every event is consumed.
    pub fn handle_event(&mut self, event: &Event) -> Option<SwitchChanged> {
        match *event {
            Event::PointerDown { position } => {
                self.press(position.x);
                None
            }
            Event::PointerMove { position } => {
                self.drag_to(position.x);
                None
            }
            Event::PointerUp { position } => self.release(position.x),
        }
    }

    /// Start a gesture at pointer `x`.
    ///
    /// Halts any animation in flight so the drag owns the thumb.
    pub fn press(&mut self, x: f32) {
        if self.animation.take().is_some() {
            self.tween.abort();
            trace!("press at {x} halted animation at {}", self.thumb_position);
        }
        self.gesture.press(x, self.thumb_position);
    }

    /// Follow the pointer to `x` without animating.
    pub fn drag_to(&mut self, x: f32) {
        let metrics = self.metrics();
        let Some(rate) = self.gesture.drag_to(x, metrics.thumb_width()) else {
            trace!("move to {x} before any press ignored");
            return;
        };
        let Some(origin) = self.gesture.origin() else {
            return;
        };
        self.track_drag(rate, origin.thumb_position, metrics);
    }

    fn track_drag(&mut self, rate: f32, origin_position: i32, metrics: TrackMetrics) {
        let candidate = (origin_position as f32 + metrics.thumb_width() as f32 * rate) as i32;
        self.thumb_position = candidate;
        self.blend = TrackMetrics::blend_for_rate(rate);
        trace!("drag rate {rate:.3}: thumb {candidate}, blend {}", self.blend);

        // A clamped frame keeps the previous repaint.
        if candidate < metrics.closed_edge() {
            self.thumb_position = metrics.closed_edge();
            return;
        }
        if candidate > metrics.open_edge() {
            self.thumb_position = metrics.open_edge();
            return;
        }
        self.surface.request_repaint();
    }

    /// Finish a gesture at pointer `x`.
    ///
    /// A release without any move is a tap and commits by which half of the
    /// surface it landed in. After a drag the thumb settles by threshold.
    pub fn release(&mut self, x: f32) -> Option<SwitchChanged> {
        if self.gesture.has_dragged() {
            return self.settle();
        }
        let metrics = self.metrics();
        let target = if x > metrics.midpoint() as f32 {
            SwitchState::Open
        } else {
            SwitchState::Closed
        };
        debug!("tap at {x} targets {target}");
        if target == self.state {
            self.resume_to_edge(metrics.edge(target));
            return None;
        }
        self.transition_to(target)
    }

    /// Finish the travel a press interrupted, without notifying.
    fn resume_to_edge(&mut self, edge: i32) {
        if self.thumb_position == edge || self.animation.is_some() {
            return;
        }
        debug!("resuming halted thumb {} -> {edge}", self.thumb_position);
        self.start_animation(edge, self.style.duration_ms);
        self.surface.request_repaint();
    }

    fn settle(&mut self) -> Option<SwitchChanged> {
        let metrics = self.metrics();
        let position = self.thumb_position;
        if metrics.is_at_travel_bound(position) {
            debug!("release at travel bound {position}, thumb stays");
            return None;
        }

        let target = metrics.settle_target(self.state, position, self.style.threshold);
        let duration = metrics.settle_duration(position, self.style.duration_ms);
        debug!("release at {position} settles {target} over {duration}ms");
        self.start_animation(metrics.edge(target), duration);
        self.surface.request_repaint();

        if target == self.state {
            return None;
        }
        self.state = target;
        Some(self.notify())
    }

    // -------------------------------------------------------------------------
    // Animation and painting
    // -------------------------------------------------------------------------

    fn start_animation(&mut self, to: i32, duration_ms: u32) {
        let from = self.thumb_position;
        self.tween.start_tween(from, to, duration_ms);
        self.animation = Some(Animation {
            from,
            to,
            duration_ms,
        });
    }

    /// Advance the animation by `dt_ms`.
    ///
    /// Returns `true` while another frame is needed.
    pub fn tick(&mut self, dt_ms: u32) -> bool {
        if self.animation.is_none() {
            return false;
        }

        let frame = self.tween.tick(dt_ms);
        if !frame.in_progress {
            trace!("animation finished at {}", self.thumb_position);
            self.animation = None;
            return false;
        }

        self.thumb_position = frame.value;
        self.blend = self.metrics().blend_for_position(frame.value);
        self.surface.request_repaint();
        true
    }

    /// Paint the background and the thumb onto the surface.
    pub fn paint(&mut self) {
        let metrics = self.metrics();
        let background = self
            .style
            .close_color
            .overlay(&self.style.open_color, self.blend);
        self.surface.fill_rect(metrics.bounds(), background);
        self.surface
            .fill_rect(metrics.thumb_rect(self.thumb_position), self.style.thumb_color);
    }

    fn notify(&mut self) -> SwitchChanged {
        (self.listener)(self.state);
        SwitchChanged { state: self.state }
    }
}

impl<S: Surface + fmt::Debug, T: TweenEngine + fmt::Debug> fmt::Debug for Switcher<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Switcher")
            .field("surface", &self.surface)
            .field("tween", &self.tween)
            .field("style", &self.style)
            .field("state", &self.state)
            .field("thumb_position", &self.thumb_position)
            .field("blend", &self.blend)
            .field("gesture", &self.gesture)
            .field("animation", &self.animation)
            .finish_non_exhaustive()
    }
}
