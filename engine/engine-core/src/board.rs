//! Board contract consumed by the search strategies
//!
//! The searches never look inside a move and never mutate a board they did
//! not clone themselves. Everything they need from a rules engine is listed
//! on the [`Board`] trait.

use std::fmt::Debug;

use crate::types::{CellState, GameStatus, Player};

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 8;

/// Pieces each side starts with.
pub const PIECES_PER_SIDE: usize = 12;

/// A checkers position together with the rules that act on it.
///
/// `Clone` must produce a fully independent deep copy: applying a move to the
/// clone must never be observable through the original or through any
/// sibling clone.
///
/// # Example
///
/// ```rust
/// # use engine_core::{Board, CellState, GameStatus, Player};
/// #[derive(Debug, Clone)]
/// struct Empty;
///
/// impl Board for Empty {
///     type Move = u8;
///
///     fn jump_moves(&self, _player: Player) -> Vec<u8> { Vec::new() }
///     fn simple_moves(&self, _player: Player) -> Vec<u8> { Vec::new() }
///     fn apply_move(&mut self, _mv: &u8, _player: Player) {}
///     fn status(&self) -> GameStatus { GameStatus::Draw }
///     fn cell(&self, _row: usize, _col: usize) -> CellState { CellState::Empty }
///     fn next_player(&self) -> Player { Player::Black }
/// }
///
/// assert!(engine_core::available_moves(&Empty, Player::Black).is_empty());
/// ```
pub trait Board: Clone + Debug + Send {
    /// A single ply: a simple step or a complete jump chain.
    type Move: Clone + PartialEq + Debug + Send;

    /// All legal capture moves for `player`; empty if none.
    fn jump_moves(&self, player: Player) -> Vec<Self::Move>;

    /// All legal non-capture moves for `player`; empty if none.
    fn simple_moves(&self, player: Player) -> Vec<Self::Move>;

    /// Apply `mv` for `player` in place and advance the turn state.
    fn apply_move(&mut self, mv: &Self::Move, player: Player);

    /// Current game status.
    fn status(&self) -> GameStatus;

    /// Content of the square at (`row`, `col`), both in `0..BOARD_SIZE`.
    fn cell(&self, row: usize, col: usize) -> CellState;

    /// The side to move.
    fn next_player(&self) -> Player;
}
