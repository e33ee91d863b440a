use criterion::{black_box, criterion_group, criterion_main, Criterion};
use timelord_tetris::core::{Game, GameSnapshot, Grid, UniformSource};
use timelord_tetris::types::{Cell, Intent, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut game = Game::new(10, 20, UniformSource::new(12345));

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            if game.is_clearing() {
                game.animation_elapsed();
            }
            if game.is_game_over() {
                game.reset();
            }
            black_box(game.tick());
        })
    });
}

fn bench_collapse_rows(c: &mut Criterion) {
    let rows: [usize; 4] = [16, 17, 18, 19];
    c.bench_function("collapse_4_rows", |b| {
        b.iter(|| {
            let mut grid = Grid::new(10, 20);
            for y in 16..20 {
                for x in 0..10 {
                    grid.write_cell(x, y, Cell::locked(PieceKind::I));
                }
            }
            grid.collapse_rows(black_box(&rows[..]));
            grid
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut game = Game::new(10, 20, UniformSource::new(12345));

    c.bench_function("move_left_right", |b| {
        b.iter(|| {
            game.submit_intent(black_box(Intent::MoveLeft));
            game.submit_intent(black_box(Intent::MoveRight));
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut game = Game::new(10, 20, UniformSource::new(12345));

    c.bench_function("rotate_cw", |b| {
        b.iter(|| {
            black_box(game.submit_intent(Intent::RotateCw));
        })
    });
}

fn bench_snapshot_into(c: &mut Criterion) {
    let game = Game::new(10, 20, UniformSource::new(12345));
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            game.snapshot_into(&mut snap);
            black_box(&snap);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_collapse_rows,
    bench_move,
    bench_rotate,
    bench_snapshot_into
);
criterion_main!(benches);
