use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use engine_core::Player;
use games_checkers::CheckerBoard;
use search::{DfsConfig, DfsSearch, MctsConfig, MctsSearch, MoveSelector};

fn bench_dfs(c: &mut Criterion) {
    let mut group = c.benchmark_group("dfs");
    group.sample_size(10);

    for depth in [3, 5] {
        group.bench_function(format!("opening_depth_{depth}"), |b| {
            let board = CheckerBoard::new();
            let mut search = DfsSearch::with_seed(DfsConfig::default().with_max_depth(depth), 1);
            b.iter(|| black_box(search.select_move(&board, Player::Black)));
        });
    }

    group.bench_function("build_tree_depth_4", |b| {
        let board = CheckerBoard::new();
        let search = DfsSearch::with_seed(DfsConfig::default().with_max_depth(4), 1);
        b.iter(|| black_box(search.build_tree(&board).len()));
    });

    group.finish();
}

fn bench_mcts(c: &mut Criterion) {
    let mut group = c.benchmark_group("mcts");
    group.sample_size(10);

    group.bench_function("opening_500_iterations", |b| {
        let board = CheckerBoard::new();
        let config = MctsConfig::default()
            .with_time_budget(Duration::from_secs(60))
            .with_max_iterations(Some(500));
        let mut search = MctsSearch::with_seed(config, 1);
        b.iter(|| black_box(search.select_move(&board, Player::Black)));
    });

    group.finish();
}

criterion_group!(benches, bench_dfs, bench_mcts);
criterion_main!(benches);
