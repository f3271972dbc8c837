use criterion::{black_box, criterion_group, criterion_main, Criterion};
use neon_snake::core::{GameState, StepOutcome};
use neon_snake::term::{Canvas, FrameBuffer, GameView, Viewport, WalletBadge};
use neon_snake::types::{Direction, Segment};

/// A long snake snaking through the left half of the field, heading right.
fn long_snake() -> GameState {
    let mut state = GameState::new(12345);
    state.start();
    let mut body = Vec::new();
    for row in 0..10 {
        let y = row * 20;
        let cols: Vec<i32> = if row % 2 == 0 {
            (0..10).rev().collect()
        } else {
            (0..10).collect()
        };
        for col in cols {
            body.push(Segment::new(col * 20, y));
        }
    }
    state.set_snake(body, Direction::RIGHT);
    state.set_food(Segment::new(380, 380));
    state
}

fn bench_step(c: &mut Criterion) {
    let start = long_snake();

    c.bench_function("step_100_segments", |b| {
        let mut state = start.clone();
        b.iter(|| {
            if state.step() != StepOutcome::Moved {
                state = start.clone();
            }
        })
    });
}

fn bench_check_collision(c: &mut Criterion) {
    let state = long_snake();

    c.bench_function("check_collision", |b| {
        b.iter(|| state.check_collision(black_box(Segment::new(200, 300))))
    });
}

fn bench_render_canvas(c: &mut Criterion) {
    let state = long_snake();
    let mut canvas = Canvas::for_config(state.config());

    c.bench_function("render_canvas", |b| {
        b.iter(|| state.render(black_box(&mut canvas)))
    });
}

fn bench_render_page(c: &mut Criterion) {
    let state = long_snake();
    let mut canvas = Canvas::for_config(state.config());
    state.render(&mut canvas);
    let view = GameView::default();
    let badge = WalletBadge::connected("Petra 0x8f3a…c01d");
    let mut fb = FrameBuffer::new(0, 0);

    c.bench_function("render_page_80x30", |b| {
        b.iter(|| {
            view.render_into(
                &state.snapshot(),
                &canvas,
                &badge,
                Viewport::new(80, 30),
                black_box(&mut fb),
            )
        })
    });
}

criterion_group!(
    benches,
    bench_step,
    bench_check_collision,
    bench_render_canvas,
    bench_render_page
);
criterion_main!(benches);
