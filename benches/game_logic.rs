use criterion::{black_box, criterion_group, criterion_main, Criterion};
use term_tetris::core::{Board, GameSnapshot, GameState};
use term_tetris::term::{FrameBuffer, GameView};
use term_tetris::types::{GameAction, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::with_seed(12345);

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            if state.is_game_over() {
                state.reset();
            }
            state.tick(black_box(None));
        })
    });
}

fn bench_hard_drop_tick(c: &mut Criterion) {
    let mut state = GameState::with_seed(12345);

    c.bench_function("hard_drop_tick", |b| {
        b.iter(|| {
            if state.is_game_over() {
                state.reset();
            }
            state.tick(black_box(Some(GameAction::HardDrop)));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for row in 16..20 {
                board.fill_row(row, PieceKind::I);
            }
            board.clear_full_rows()
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let mut state = GameState::with_seed(12345);

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            state.spawn_piece();
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut state = GameState::with_seed(12345);

    c.bench_function("try_move", |b| {
        b.iter(|| {
            state.apply_action(black_box(GameAction::MoveRight));
            state.apply_action(black_box(GameAction::MoveLeft));
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let mut state = GameState::with_seed(12345);

    c.bench_function("try_rotate", |b| {
        b.iter(|| {
            state.apply_action(black_box(GameAction::RotateCw));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let state = GameState::with_seed(12345);
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    c.bench_function("snapshot_and_render", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            view.render_into(black_box(&snap), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_hard_drop_tick,
    bench_line_clear,
    bench_piece_spawn,
    bench_try_move,
    bench_try_rotate,
    bench_render
);
criterion_main!(benches);
