//! Leaf evaluation for the depth-first search.
//!
//! Scores are always computed from one fixed player's perspective: the
//! player the search is choosing a move for.

use std::fmt;
use std::str::FromStr;

use engine_core::{Board, Player, BOARD_SIZE, PIECES_PER_SIDE};
use thiserror::Error;

/// Jump count at which the jump term of [`material_and_jumps`] saturates.
const JUMP_SATURATION: f64 = 6.0;

/// Pieces a player has on the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterialCount {
    pub men: usize,
    pub kings: usize,
}

impl MaterialCount {
    /// Count `player`'s men and kings.
    pub fn of<B: Board>(board: &B, player: Player) -> Self {
        let mut count = Self::default();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let cell = board.cell(row, col);
                if cell.owner() != Some(player) {
                    continue;
                }
                if cell.is_king() {
                    count.kings += 1;
                } else {
                    count.men += 1;
                }
            }
        }
        count
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.men + self.kings
    }
}

/// Material advantage score.
///
/// `0.5 * (mine - theirs) / max(mine, theirs) + 0.5 * (my_kings / 12)`.
/// The material term is 0 when neither side has pieces. Division is real,
/// so the term is a ratio in [-1, 1] rather than a truncated sign.
pub fn force_advantage<B: Board>(board: &B, player: Player) -> f64 {
    let mine = MaterialCount::of(board, player);
    let theirs = MaterialCount::of(board, player.opponent());

    let larger = mine.total().max(theirs.total());
    let material = if larger == 0 {
        0.0
    } else {
        (mine.total() as f64 - theirs.total() as f64) / larger as f64
    };

    0.5 * material + 0.5 * (mine.kings as f64 / PIECES_PER_SIDE as f64)
}

/// Own-material score with a bonus for available captures.
///
/// `0.5 * kings/12 + 0.2 * total/12 + 0.3 * min(jumps/6, 1)`.
pub fn material_and_jumps<B: Board>(board: &B, player: Player) -> f64 {
    let mine = MaterialCount::of(board, player);
    let jumps = board.jump_moves(player).len() as f64;
    let per_side = PIECES_PER_SIDE as f64;

    0.5 * (mine.kings as f64 / per_side)
        + 0.2 * (mine.total() as f64 / per_side)
        + 0.3 * (jumps / JUMP_SATURATION).min(1.0)
}

/// Which leaf score a depth-first search maximises.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScoringPolicy {
    #[default]
    ForceAdvantage,
    MaterialAndJumps,
}

impl ScoringPolicy {
    /// Score `board` for `player`.
    pub fn score<B: Board>(self, board: &B, player: Player) -> f64 {
        match self {
            ScoringPolicy::ForceAdvantage => force_advantage(board, player),
            ScoringPolicy::MaterialAndJumps => material_and_jumps(board, player),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScoringPolicy::ForceAdvantage => "force_advantage",
            ScoringPolicy::MaterialAndJumps => "material_and_jumps",
        }
    }
}

impl fmt::Display for ScoringPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown scoring policy '{0}' (expected force_advantage or material_and_jumps)")]
pub struct UnknownScoringPolicy(pub String);

impl FromStr for ScoringPolicy {
    type Err = UnknownScoringPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "force_advantage" => Ok(ScoringPolicy::ForceAdvantage),
            "material_and_jumps" => Ok(ScoringPolicy::MaterialAndJumps),
            other => Err(UnknownScoringPolicy(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_core::CellState;
    use games_checkers::{CheckerBoard, Square};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_opening_is_even() {
        let board = CheckerBoard::new();
        assert!(close(force_advantage(&board, Player::Black), 0.0));
        assert!(close(force_advantage(&board, Player::Red), 0.0));
        assert_eq!(
            MaterialCount::of(&board, Player::Red),
            MaterialCount { men: 12, kings: 0 }
        );
    }

    #[test]
    fn test_empty_board_is_neutral() {
        let board = CheckerBoard::empty(Player::Black);
        let score = force_advantage(&board, Player::Black);
        assert!(!score.is_nan());
        assert!(close(score, 0.0));
    }

    #[test]
    fn test_force_advantage_uses_real_division() {
        let mut board = CheckerBoard::empty(Player::Black);
        board.set(Square::new(5, 2), CellState::BlackPiece);
        board.set(Square::new(7, 0), CellState::BlackPiece);
        board.set(Square::new(3, 4), CellState::BlackKing);
        board.set(Square::new(0, 1), CellState::RedPiece);

        let black = force_advantage(&board, Player::Black);
        assert!(close(black, 0.5 * (2.0 / 3.0) + 0.5 * (1.0 / 12.0)));

        let red = force_advantage(&board, Player::Red);
        assert!(close(red, 0.5 * (-2.0 / 3.0)));
    }

    #[test]
    fn test_wipeout_beats_parity() {
        let mut won = CheckerBoard::empty(Player::Red);
        won.set(Square::new(3, 4), CellState::BlackPiece);

        let mut parity = CheckerBoard::empty(Player::Red);
        parity.set(Square::new(3, 4), CellState::BlackPiece);
        parity.set(Square::new(0, 1), CellState::RedPiece);

        assert!(force_advantage(&won, Player::Black) > force_advantage(&parity, Player::Black));
        assert!(close(force_advantage(&won, Player::Black), 0.5));
    }

    #[test]
    fn test_material_and_jumps() {
        let board = CheckerBoard::new();
        assert!(close(material_and_jumps(&board, Player::Black), 0.2));

        let mut capture = CheckerBoard::empty(Player::Black);
        capture.set(Square::new(5, 2), CellState::BlackPiece);
        capture.set(Square::new(4, 3), CellState::RedPiece);
        let expected = 0.2 * (1.0 / 12.0) + 0.3 * (1.0 / 6.0);
        assert!(close(material_and_jumps(&capture, Player::Black), expected));
    }

    #[test]
    fn test_policy_dispatch() {
        let board = CheckerBoard::new();
        assert!(close(
            ScoringPolicy::default().score(&board, Player::Black),
            force_advantage(&board, Player::Black)
        ));
        assert!(close(
            ScoringPolicy::MaterialAndJumps.score(&board, Player::Black),
            material_and_jumps(&board, Player::Black)
        ));
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!(
            "force_advantage".parse::<ScoringPolicy>(),
            Ok(ScoringPolicy::ForceAdvantage)
        );
        assert_eq!(
            "Material_And_Jumps".parse::<ScoringPolicy>(),
            Ok(ScoringPolicy::MaterialAndJumps)
        );
        assert!("minimax".parse::<ScoringPolicy>().is_err());
        assert_eq!(ScoringPolicy::MaterialAndJumps.to_string(), "material_and_jumps");
    }
}
