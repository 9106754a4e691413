//! Benchmark tests for gesture and frame handling.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use switcher::Switcher;
use switcher_core::{Event, RecordingSurface};

fn bench_drag_move(c: &mut Criterion) {
    let mut switcher = Switcher::new(RecordingSurface::new(100, 40));
    switcher.handle_event(&Event::down(10.0));

    c.bench_function("drag_move", |b| {
        b.iter(|| switcher.handle_event(black_box(&Event::move_to(30.0))))
    });
}

fn bench_full_gesture_and_settle(c: &mut Criterion) {
    c.bench_function("gesture_settle", |b| {
        b.iter(|| {
            let mut switcher = Switcher::new(RecordingSurface::new(100, 40));
            switcher.handle_event(&Event::down(10.0));
            switcher.handle_event(&Event::move_to(black_box(40.0)));
            switcher.handle_event(&Event::up(40.0));
            while switcher.tick(16) {}
            switcher.thumb_position()
        })
    });
}

fn bench_paint(c: &mut Criterion) {
    let mut switcher = Switcher::new(RecordingSurface::new(100, 40));

    c.bench_function("paint", |b| {
        b.iter(|| {
            switcher.paint();
            switcher.surface_mut().take_commands()
        })
    });
}

criterion_group!(
    benches,
    bench_drag_move,
    bench_full_gesture_and_settle,
    bench_paint
);
criterion_main!(benches);
