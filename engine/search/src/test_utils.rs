//! Scripted board for exercising the searches without real rules.

use engine_core::{Board, CellState, GameStatus, Player};

/// A game tree of uniform shape: `branching` moves (numbered from 0) per
/// position until `plies_left` reaches zero, at which point the game takes
/// `final_status`. Every cell is empty, so every leaf scores the same.
#[derive(Debug, Clone, PartialEq)]
pub struct StubBoard {
    pub branching: u8,
    pub plies_left: u8,
    pub next: Player,
    pub status: GameStatus,
    pub final_status: GameStatus,
    /// Player to move once the game ends; defaults to normal alternation.
    pub final_next: Option<Player>,
    pub history: Vec<u8>,
}

impl StubBoard {
    pub fn branching(branching: u8, plies_left: u8) -> Self {
        Self {
            branching,
            plies_left,
            next: Player::Black,
            status: if plies_left == 0 {
                GameStatus::Draw
            } else {
                GameStatus::Running
            },
            final_status: GameStatus::Draw,
            final_next: None,
            history: Vec::new(),
        }
    }

    pub fn ending(mut self, status: GameStatus, next: Player) -> Self {
        self.final_status = status;
        self.final_next = Some(next);
        self
    }
}

impl Board for StubBoard {
    type Move = u8;

    fn jump_moves(&self, _player: Player) -> Vec<u8> {
        Vec::new()
    }

    fn simple_moves(&self, _player: Player) -> Vec<u8> {
        if self.status.is_running() {
            (0..self.branching).collect()
        } else {
            Vec::new()
        }
    }

    fn apply_move(&mut self, mv: &u8, player: Player) {
        self.history.push(*mv);
        self.next = player.opponent();
        self.plies_left = self.plies_left.saturating_sub(1);
        if self.plies_left == 0 {
            self.status = self.final_status;
            if let Some(next) = self.final_next {
                self.next = next;
            }
        }
    }

    fn status(&self) -> GameStatus {
        self.status
    }

    fn cell(&self, _row: usize, _col: usize) -> CellState {
        CellState::Empty
    }

    fn next_player(&self) -> Player {
        self.next
    }
}
