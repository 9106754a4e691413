//! Integration tests for switcher-core.
//!
//! These tests verify the public API works correctly end-to-end.

use switcher_core::{
    Color, DrawCommand, Easing, Event, RecordingSurface, Rect, Surface, Tween, TweenEngine,
};

// =============================================================================
// Color Integration Tests
// =============================================================================

#[test]
fn test_color_roundtrip_hex() {
    let original = Color::rgb(0.5, 0.25, 0.75);
    let hex = original.to_hex();
    let parsed = Color::from_hex(&hex).expect("valid hex");

    // Allow small rounding differences
    assert!((original.r - parsed.r).abs() < 0.01);
    assert!((original.g - parsed.g).abs() < 0.01);
    assert!((original.b - parsed.b).abs() < 0.01);
}

#[test]
fn test_color_overlay_gradient() {
    let steps: Vec<Color> = (0..=255u8)
        .step_by(51)
        .map(|alpha| Color::GRAY.overlay(&Color::RED, alpha))
        .collect();

    assert_eq!(steps[0], Color::GRAY);
    assert_eq!(*steps.last().expect("non-empty"), Color::RED);
    assert!(steps.windows(2).all(|w| w[0].r <= w[1].r));
}

// =============================================================================
// Surface Integration Tests
// =============================================================================

fn paint_two_rects(surface: &mut dyn Surface) {
    let bounds = Rect::from_size(surface.width(), surface.height());
    surface.fill_rect(bounds, Color::GRAY);
    surface.fill_rect(Rect::new(5, 5, 50, bounds.bottom - 5), Color::WHITE);
    surface.request_repaint();
}

#[test]
fn test_surface_as_trait_object() {
    let mut surface = RecordingSurface::new(100, 40);
    paint_two_rects(&mut surface);

    let commands = surface.take_commands();
    assert_eq!(commands.len(), 2);
    let DrawCommand::FillRect { rect, color } = commands[1];
    assert_eq!(rect, Rect::new(5, 5, 50, 35));
    assert_eq!(color, Color::WHITE);
    assert_eq!(surface.repaint_requests(), 1);
}

// =============================================================================
// Tween Integration Tests
// =============================================================================

#[test]
fn test_tween_as_trait_object_runs_to_completion() {
    let mut engine: Box<dyn TweenEngine> = Box::new(Tween::new().with_easing(Easing::CubicOut));
    engine.start_tween(50, 5, 155);

    let mut last = 50;
    let mut frames = 0;
    loop {
        let frame = engine.tick(16);
        if !frame.in_progress {
            break;
        }
        frames += 1;
        last = frame.value;
    }

    assert!(frames > 0);
    assert_eq!(last, 5);
    assert!(engine.is_finished());
}

// =============================================================================
// Event Integration Tests
// =============================================================================

#[test]
fn test_event_script_from_json() {
    let script = r#"[
        {"type": "pointer_down", "position": {"x": 10.0, "y": 4.0}},
        {"type": "pointer_move", "position": {"x": 40.0}},
        {"type": "pointer_up", "position": {"x": 40.0}}
    ]"#;
    let events: Vec<Event> = serde_json::from_str(script).expect("valid script");
    assert_eq!(events.len(), 3);
    assert_eq!(events[0].position().y, 4.0);
    assert_eq!(events[2], Event::up(40.0));
}
