//! Shared vocabulary for checkers positions.

use std::fmt;
use std::str::FromStr;

/// One of the two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Red,
    Black,
}

impl Player {
    /// The other side.
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Red => Player::Black,
            Player::Black => Player::Red,
        }
    }

    /// Status reported when this player has won.
    #[inline]
    pub fn winning_status(self) -> GameStatus {
        match self {
            Player::Red => GameStatus::RedWon,
            Player::Black => GameStatus::BlackWon,
        }
    }

    /// Cell state of an uncrowned piece belonging to this player.
    #[inline]
    pub fn piece(self) -> CellState {
        match self {
            Player::Red => CellState::RedPiece,
            Player::Black => CellState::BlackPiece,
        }
    }

    /// Cell state of a king belonging to this player.
    #[inline]
    pub fn king(self) -> CellState {
        match self {
            Player::Red => CellState::RedKing,
            Player::Black => CellState::BlackKing,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Red => f.write_str("red"),
            Player::Black => f.write_str("black"),
        }
    }
}

/// Error returned when a player name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown player '{0}' (expected 'red' or 'black')")]
pub struct ParsePlayerError(pub String);

impl FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" | "r" => Ok(Player::Red),
            "black" | "b" => Ok(Player::Black),
            _ => Err(ParsePlayerError(s.to_string())),
        }
    }
}

/// Content of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Empty,
    RedPiece,
    RedKing,
    BlackPiece,
    BlackKing,
}

impl CellState {
    /// Owner of the piece on this square, if any.
    #[inline]
    pub fn owner(self) -> Option<Player> {
        match self {
            CellState::Empty => None,
            CellState::RedPiece | CellState::RedKing => Some(Player::Red),
            CellState::BlackPiece | CellState::BlackKing => Some(Player::Black),
        }
    }

    #[inline]
    pub fn is_king(self) -> bool {
        matches!(self, CellState::RedKing | CellState::BlackKing)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == CellState::Empty
    }

    /// The crowned version of this piece. Kings and empty squares are unchanged.
    #[inline]
    pub fn crowned(self) -> CellState {
        match self {
            CellState::RedPiece => CellState::RedKing,
            CellState::BlackPiece => CellState::BlackKing,
            other => other,
        }
    }
}

/// Lifecycle of a game. Transitions only from `Running` to a terminal status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Running,
    RedWon,
    BlackWon,
    Draw,
}

impl GameStatus {
    #[inline]
    pub fn is_running(self) -> bool {
        self == GameStatus::Running
    }

    #[inline]
    pub fn is_terminal(self) -> bool {
        !self.is_running()
    }

    /// The winning side, if the game ended with a winner.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::RedWon => Some(Player::Red),
            GameStatus::BlackWon => Some(Player::Black),
            GameStatus::Running | GameStatus::Draw => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::Red.opponent(), Player::Black);
        assert_eq!(Player::Black.opponent(), Player::Red);
    }

    #[test]
    fn test_player_from_str() {
        assert_eq!("red".parse::<Player>(), Ok(Player::Red));
        assert_eq!(" Black ".parse::<Player>(), Ok(Player::Black));
        assert_eq!("b".parse::<Player>(), Ok(Player::Black));
        assert!("white".parse::<Player>().is_err());
    }

    #[test]
    fn test_cell_owner() {
        assert_eq!(CellState::Empty.owner(), None);
        assert_eq!(CellState::RedKing.owner(), Some(Player::Red));
        assert_eq!(CellState::BlackPiece.owner(), Some(Player::Black));
    }

    #[test]
    fn test_crowned() {
        assert_eq!(CellState::RedPiece.crowned(), CellState::RedKing);
        assert_eq!(CellState::BlackPiece.crowned(), CellState::BlackKing);
        assert_eq!(CellState::BlackKing.crowned(), CellState::BlackKing);
        assert_eq!(CellState::Empty.crowned(), CellState::Empty);
    }

    #[test]
    fn test_status_winner() {
        assert!(GameStatus::Running.is_running());
        assert!(GameStatus::Draw.is_terminal());
        assert_eq!(GameStatus::RedWon.winner(), Some(Player::Red));
        assert_eq!(GameStatus::Draw.winner(), None);
        assert_eq!(Player::Black.winning_status(), GameStatus::BlackWon);
    }
}
