use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{can_place, Board, GameConfig, Session, Snapshot};
use blockfall::types::Command;

fn started_session() -> Session {
    let mut session = Session::new(GameConfig::default(), 12345);
    session.start();
    session.tick(0);
    session
}

fn bench_tick(c: &mut Criterion) {
    let mut session = started_session();

    c.bench_function("session_tick_16ms", |b| {
        b.iter(|| {
            if session.is_game_over() {
                session.start();
            }
            session.tick(black_box(16));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new(20, 10);
            for row in 16..20 {
                for col in 0..10 {
                    board.set(row, col, 1);
                }
            }
            board.clear_full_rows()
        })
    });
}

fn bench_spawn(c: &mut Criterion) {
    let mut session = Session::new(GameConfig::default(), 12345);

    c.bench_function("start_and_spawn", |b| {
        b.iter(|| {
            session.start();
            session.spawn()
        })
    });
}

fn bench_can_place(c: &mut Criterion) {
    let session = started_session();
    let board = session.board().clone();
    let Some(piece) = session.active().cloned() else {
        return;
    };

    c.bench_function("can_place", |b| {
        b.iter(|| can_place(&board, &piece, black_box(5), black_box(3)))
    });
}

fn bench_commands(c: &mut Criterion) {
    let mut session = started_session();

    c.bench_function("apply_move_and_rotate", |b| {
        b.iter(|| {
            session.apply(Command::MoveRight);
            session.apply(Command::MoveLeft);
            session.apply(Command::Rotate)
        })
    });
}

fn bench_snapshot_into(c: &mut Criterion) {
    let session = started_session();
    let mut snap = Snapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            session.snapshot_into(&mut snap);
            black_box(&snap);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_spawn,
    bench_can_place,
    bench_commands,
    bench_snapshot_into
);
criterion_main!(benches);
