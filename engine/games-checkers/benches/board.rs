use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use engine_core::{available_moves, Board, Player};
use games_checkers::CheckerBoard;

const MIDGAME: &str = "
    EREEERER
    REEEREEE
    EREEEBER
    EEREEEEE
    EBEREBEE
    BEEEEEBE
    EBEBEEEB
    BEBEEEBE";

fn bench_clone(c: &mut Criterion) {
    let mut group = c.benchmark_group("checkers_clone");
    group.bench_function("new_and_clone", |b| {
        b.iter(|| {
            let board = CheckerBoard::new();
            black_box(board.clone())
        });
    });
    group.finish();
}

fn bench_move_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("checkers_moves");

    group.bench_function("opening_available", |b| {
        let board = CheckerBoard::new();
        b.iter(|| black_box(available_moves(&board, Player::Black)));
    });

    group.bench_function("midgame_available", |b| {
        let board = CheckerBoard::parse(MIDGAME, Player::Black).unwrap();
        b.iter(|| black_box(available_moves(&board, Player::Black)));
    });

    group.finish();
}

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("checkers_apply");
    group.bench_function("clone_and_apply_first", |b| {
        let board = CheckerBoard::new();
        let mv = available_moves(&board, Player::Black).remove(0);
        b.iter_batched(
            || board,
            |mut copy| {
                copy.apply_move(&mv, Player::Black);
                copy
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_clone, bench_move_generation, bench_apply);
criterion_main!(benches);
