//! Core traits and types for the checkers engine
//!
//! This crate provides the contract between the search strategies and a
//! rules engine:
//! - `Board`: the surface a search needs from a checkers position
//! - `available_moves`: the forced-jump rule shared by every strategy
//! - `Player`, `CellState`, `GameStatus`: the vocabulary both sides speak

pub mod board;
pub mod moves;
pub mod types;

// Re-export main types for convenience
pub use board::{Board, BOARD_SIZE, PIECES_PER_SIDE};
pub use moves::available_moves;
pub use types::{CellState, GameStatus, ParsePlayerError, Player};
