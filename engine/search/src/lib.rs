//! Move selection for checkers.
//!
//! This crate provides two search strategies that work with any position
//! implementing the `engine-core` [`Board`](engine_core::Board) contract:
//!
//! - [`DfsSearch`]: full-width enumeration of every line to a fixed ply
//!   depth. Each leaf is scored from the searching player's perspective and
//!   the first move of a uniformly chosen best-scoring line is played.
//! - [`MctsSearch`]: Monte-Carlo Tree Search under a wall-clock budget.
//!   Each iteration walks the tree with UCB1, expands one level, plays a
//!   random rollout and backpropagates a ±1 result along the visited path.
//!
//! Both build a private arena [`Tree`] per call and never touch the caller's
//! board; every explored position is a clone.
//!
//! # Usage
//!
//! ```rust
//! use engine_core::Player;
//! use games_checkers::CheckerBoard;
//! use search::{DfsConfig, DfsSearch, MctsConfig, MctsSearch, MoveSelector};
//!
//! let board = CheckerBoard::new();
//!
//! let mut dfs = DfsSearch::with_seed(DfsConfig::default().with_max_depth(3), 42);
//! let mv = dfs.select_move(&board, Player::Black).unwrap();
//! assert!(mv.is_some());
//!
//! let mut mcts = MctsSearch::with_seed(MctsConfig::for_testing(), 42);
//! let mv = mcts.select_move(&board, Player::Black).unwrap();
//! assert!(mv.is_some());
//! ```
//!
//! # Configuration
//!
//! [`DfsConfig`] sets the ply depth (default 5) and the leaf
//! [`ScoringPolicy`]. [`MctsConfig`] sets the time budget (default 500 ms),
//! the UCB1 exploration constant (default 0.7), the rollout ply cap
//! (default 200) and an optional iteration cap.

pub mod config;
pub mod dfs;
pub mod mcts;
pub mod node;
pub mod random;
pub mod scoring;
pub mod search;
pub mod tree;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export main types
pub use config::{DfsConfig, MctsConfig};
pub use dfs::{BestPaths, DfsSearch, DfsTree};
pub use mcts::{ucb1, MctsSearch, MctsTree};
pub use node::{MctsStats, Node, NodeId};
pub use random::TieBreaker;
pub use scoring::{
    force_advantage, material_and_jumps, MaterialCount, ScoringPolicy, UnknownScoringPolicy,
};
pub use search::{MoveSelector, SearchError, SearchStats};
pub use tree::{Tree, TreeStats};
