//! Text format for positions.
//!
//! Eight lines of eight characters, row 0 first:
//! `E` empty, `R` red man, `B` black man, `K` red king, `C` black king.
//! Blank lines and surrounding whitespace are ignored.

use std::fmt;

use engine_core::{CellState, Player, BOARD_SIZE};
use thiserror::Error;

use crate::{CheckerBoard, Square};

/// Errors produced while reading a position from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected {expected} rows but found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid cell '{character}' at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, character: char },

    #[error("piece on unplayable square at row {row}, column {col}")]
    UnplayableSquare { row: usize, col: usize },
}

fn cell_from_char(c: char) -> Option<CellState> {
    match c {
        'E' | 'e' | '.' => Some(CellState::Empty),
        'R' | 'r' => Some(CellState::RedPiece),
        'B' | 'b' => Some(CellState::BlackPiece),
        'K' | 'k' => Some(CellState::RedKing),
        'C' | 'c' => Some(CellState::BlackKing),
        _ => None,
    }
}

fn cell_to_char(cell: CellState) -> char {
    match cell {
        CellState::Empty => 'E',
        CellState::RedPiece => 'R',
        CellState::BlackPiece => 'B',
        CellState::RedKing => 'K',
        CellState::BlackKing => 'C',
    }
}

impl CheckerBoard {
    /// Read a position with `next_player` to move and compute its status.
    ///
    /// # Example
    /// ```
    /// use engine_core::{Board, GameStatus, Player};
    /// use games_checkers::CheckerBoard;
    ///
    /// let board = CheckerBoard::parse(
    ///     "EEEEEEEE
    ///      EEEEEEEE
    ///      EEEEEEEE
    ///      EEEEEEEE
    ///      EEERERER
    ///      EEBEEEEE
    ///      EEEEEEEE
    ///      EEEEEEEE",
    ///     Player::Black,
    /// )
    /// .unwrap();
    /// assert_eq!(board.status(), GameStatus::Running);
    /// assert_eq!(board.jump_moves(Player::Black).len(), 1);
    /// ```
    pub fn parse(text: &str, next_player: Player) -> Result<Self, ParseError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if rows.len() != BOARD_SIZE {
            return Err(ParseError::RowCount {
                expected: BOARD_SIZE,
                found: rows.len(),
            });
        }

        let mut board = CheckerBoard::empty(next_player);
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != BOARD_SIZE {
                return Err(ParseError::RowLength {
                    row,
                    expected: BOARD_SIZE,
                    found,
                });
            }

            for (col, character) in line.chars().enumerate() {
                let cell = cell_from_char(character).ok_or(ParseError::InvalidCell {
                    row,
                    col,
                    character,
                })?;
                let square = Square::new(row as u8, col as u8);
                if !cell.is_empty() && !square.is_playable() {
                    return Err(ParseError::UnplayableSquare { row, col });
                }
                board.set(square, cell);
            }
        }

        board.refresh_status();
        Ok(board)
    }
}

impl fmt::Display for CheckerBoard {
    /// Writes the grid in the format accepted by [`CheckerBoard::parse`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let square = Square::new(row as u8, col as u8);
                write!(f, "{}", cell_to_char(self.get(square)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
