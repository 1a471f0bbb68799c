//! checkers - pick a move for a checkers position
//!
//! Reads a board in the 8-line text format (or starts from the opening),
//! runs either the full-width depth-first search or Monte-Carlo Tree Search
//! for the requested player and prints the chosen move, or `no move` when
//! the player cannot move.

use anyhow::{Context, Result};
use clap::Parser;
use engine_core::Board;
use games_checkers::CheckerBoard;
use search::{DfsSearch, MctsSearch, MoveSelector};
use tracing::{debug, info, warn};

mod config;

use crate::config::{Config, Strategy};

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    Ok(())
}

fn load_board(config: &Config) -> Result<CheckerBoard> {
    let Some(path) = &config.board else {
        let mut board = CheckerBoard::new();
        board.set_next_player(config.player);
        return Ok(board);
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read board file {}", path.display()))?;
    CheckerBoard::parse(&text, config.player)
        .with_context(|| format!("invalid board in {}", path.display()))
}

fn build_selector(config: &Config) -> Result<Box<dyn MoveSelector<CheckerBoard>>> {
    let selector: Box<dyn MoveSelector<CheckerBoard>> = match (config.strategy, config.seed()) {
        (Strategy::Dfs, Some(seed)) => Box::new(DfsSearch::with_seed(config.dfs_config()?, seed)),
        (Strategy::Dfs, None) => Box::new(DfsSearch::new(config.dfs_config()?)),
        (Strategy::Mcts, Some(seed)) => Box::new(MctsSearch::with_seed(config.mcts_config(), seed)),
        (Strategy::Mcts, None) => Box::new(MctsSearch::new(config.mcts_config())),
    };
    Ok(selector)
}

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;

    init_tracing(&config.log_level)?;
    debug!(?config, "Configuration loaded");

    let board = load_board(&config)?;
    debug!("Board:\n{}", board);

    if !board.status().is_running() {
        warn!(
            status = ?board.status(),
            winner = ?board.status().winner(),
            "Game is already over"
        );
        println!("no move");
        return Ok(());
    }

    let mut selector = build_selector(&config)?;
    info!(
        strategy = selector.name(),
        player = %config.player,
        seed = ?config.seed(),
        "Searching"
    );

    let chosen = selector
        .select_move(&board, config.player)
        .context("search failed")?;

    let stats = selector.last_stats();
    info!(
        iterations = stats.iterations,
        nodes = stats.nodes,
        max_depth = stats.max_depth,
        elapsed_ms = stats.elapsed.as_millis() as u64,
        "Search finished"
    );

    match chosen {
        Some(mv) => println!("{mv}"),
        None => println!("no move"),
    }

    Ok(())
}
