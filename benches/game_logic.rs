use criterion::{black_box, criterion_group, criterion_main, Criterion};

use neotris::core::{collides, GameState, Grid, ShapeKind};

fn bench_tick(c: &mut Criterion) {
    let mut game = GameState::new(12345);
    game.start();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            game.tick(black_box(16));
        })
    });
}

fn bench_collides(c: &mut Criterion) {
    let grid = Grid::new();
    let shape = ShapeKind::T.shape();

    c.bench_function("collides_interior", |b| {
        b.iter(|| collides(&grid, &shape, black_box(4), black_box(10)))
    });
}

fn bench_row_clear(c: &mut Criterion) {
    c.bench_function("clear_full_row", |b| {
        b.iter(|| {
            let mut grid = Grid::new();
            for x in 0..10 {
                grid.set(x, 0, 1);
            }
            grid.clear_row(black_box(0));
            grid
        })
    });
}

fn bench_spawn(c: &mut Criterion) {
    let mut game = GameState::new(12345);

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            game.spawn_piece();
        })
    });
}

fn bench_move_and_rotate(c: &mut Criterion) {
    let mut game = GameState::new(12345);
    game.start();

    c.bench_function("try_move", |b| {
        b.iter(|| {
            game.try_move(black_box(1));
            game.try_move(black_box(-1));
        })
    });

    c.bench_function("try_rotate", |b| {
        b.iter(|| {
            game.try_rotate();
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_collides,
    bench_row_clear,
    bench_spawn,
    bench_move_and_rotate
);
criterion_main!(benches);
