//! The move-selection surface shared by every strategy.

use std::time::Duration;

use engine_core::{Board, Player};
use thiserror::Error;

/// Errors that can occur during a search.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Best-child selection was asked of a node with no children.
    #[error("node '{node}' has no children to select from")]
    ChildlessNode { node: String },

    /// A depth-first search must look at least one ply ahead.
    #[error("search depth must be at least 1")]
    ZeroDepth,
}

/// Statistics about the most recent search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Completed root-to-rollout passes (MCTS) or 1 (DFS).
    pub iterations: u32,
    pub nodes: usize,
    pub max_depth: u32,
    pub elapsed: Duration,
}

/// A strategy that picks one move for `player` from `board`.
///
/// `Ok(None)` means the player has no legal move. The caller's board is
/// never mutated.
pub trait MoveSelector<B: Board> {
    fn select_move(&mut self, board: &B, player: Player) -> Result<Option<B::Move>, SearchError>;

    /// Short strategy name for logs.
    fn name(&self) -> &'static str;

    /// Statistics of the last completed `select_move` call.
    fn last_stats(&self) -> SearchStats;
}
