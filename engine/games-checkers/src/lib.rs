//! Checkers rules engine for the move-selection searches
//!
//! This crate provides an 8×8 checkers board implementing the
//! [`engine_core::Board`] contract: move generation with compulsory
//! multi-jump chains, crowning, and win/draw detection.
//!
//! # Board Layout
//!
//! Row 0 is the top edge. Pieces stand on squares where `row + col` is odd.
//! ```text
//! Row 0: . r . r . r . r   <- Red home row, Black crowns here
//! Row 1: r . r . r . r .
//! Row 2: . r . r . r . r
//! Row 3: . . . . . . . .
//! Row 4: . . . . . . . .
//! Row 5: b . b . b . b .
//! Row 6: . b . b . b . b
//! Row 7: b . b . b . b .   <- Black home row, Red crowns here
//! ```
//!
//! Black moves first. Red men move toward row 7, Black men toward row 0.
//!
//! # Usage
//!
//! ```rust
//! use engine_core::{available_moves, Board, Player};
//! use games_checkers::CheckerBoard;
//!
//! let mut board = CheckerBoard::new();
//! let moves = available_moves(&board, Player::Black);
//! assert_eq!(moves.len(), 7);
//!
//! board.apply_move(&moves[0], Player::Black);
//! assert_eq!(board.next_player(), Player::Red);
//! ```

use engine_core::{Board, CellState, GameStatus, Player, BOARD_SIZE};

mod moves;
mod parse;

pub use moves::{Move, Square};
pub use parse::ParseError;

/// Consecutive plies without a capture or a man move after which the game is drawn.
pub const DRAW_PLY_LIMIT: u8 = 80;

const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Checkers position: the grid, the side to move, and the game status.
///
/// The board is a fixed-size `Copy` value, so cloning never allocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CheckerBoard {
    cells: [[CellState; BOARD_SIZE]; BOARD_SIZE],
    next_player: Player,
    status: GameStatus,
    /// Plies since the last capture or man move
    quiet_plies: u8,
}

impl CheckerBoard {
    /// Standard opening position with Black to move.
    pub fn new() -> Self {
        let mut board = Self::empty(Player::Black);
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let square = Square::new(row as u8, col as u8);
                if !square.is_playable() {
                    continue;
                }
                if row < 3 {
                    board.set(square, CellState::RedPiece);
                } else if row >= BOARD_SIZE - 3 {
                    board.set(square, CellState::BlackPiece);
                }
            }
        }
        board
    }

    /// Board with no pieces. Status is `Running` until [`refresh_status`](Self::refresh_status).
    pub fn empty(next_player: Player) -> Self {
        Self {
            cells: [[CellState::Empty; BOARD_SIZE]; BOARD_SIZE],
            next_player,
            status: GameStatus::Running,
            quiet_plies: 0,
        }
    }

    #[inline]
    pub fn get(&self, square: Square) -> CellState {
        self.cells[square.row as usize][square.col as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, state: CellState) {
        self.cells[square.row as usize][square.col as usize] = state;
    }

    pub fn set_next_player(&mut self, player: Player) {
        self.next_player = player;
    }

    /// Recompute the status from scratch for the side to move.
    ///
    /// A side to move with no pieces or no legal move has lost. Used after
    /// building a position by hand; [`Board::apply_move`] keeps the status
    /// current on its own.
    pub fn refresh_status(&mut self) {
        let to_move = self.next_player;
        self.status = if !self.has_legal_move(to_move) {
            to_move.opponent().winning_status()
        } else if self.quiet_plies >= DRAW_PLY_LIMIT {
            GameStatus::Draw
        } else {
            GameStatus::Running
        };
    }

    /// Number of pieces (men and kings) `player` has on the board.
    pub fn piece_count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.owner() == Some(player))
            .count()
    }

    /// Row on which `player`'s men are crowned.
    #[inline]
    fn crown_row(player: Player) -> u8 {
        match player {
            Player::Red => (BOARD_SIZE - 1) as u8,
            Player::Black => 0,
        }
    }

    /// Diagonal directions the piece may travel in.
    fn directions(piece: CellState) -> &'static [(i8, i8)] {
        match piece {
            CellState::RedPiece => &DIAGONALS[2..],
            CellState::BlackPiece => &DIAGONALS[..2],
            CellState::RedKing | CellState::BlackKing => &DIAGONALS,
            CellState::Empty => &[],
        }
    }

    fn squares_of(&self, player: Player) -> impl Iterator<Item = (Square, CellState)> + '_ {
        (0..BOARD_SIZE).flat_map(move |row| {
            (0..BOARD_SIZE).filter_map(move |col| {
                let cell = self.cells[row][col];
                (cell.owner() == Some(player)).then(|| (Square::new(row as u8, col as u8), cell))
            })
        })
    }

    /// Whether `player` has at least one step or jump.
    fn has_legal_move(&self, player: Player) -> bool {
        let opponent = player.opponent();
        self.squares_of(player).any(|(from, piece)| {
            Self::directions(piece).iter().any(|&(dr, dc)| {
                match from.offset(dr, dc) {
                    Some(to) if self.get(to).is_empty() => true,
                    Some(over) if self.get(over).owner() == Some(opponent) => from
                        .offset(2 * dr, 2 * dc)
                        .is_some_and(|land| self.get(land).is_empty()),
                    _ => false,
                }
            })
        })
    }

    /// Depth-first extension of a jump chain that started at `origin` and now stands on `at`.
    ///
    /// Jumped pieces stay on the board until the move completes, so they still
    /// block landings, but may not be jumped twice. The origin square counts
    /// as vacated.
    fn extend_jumps(
        &self,
        origin: Square,
        piece: CellState,
        at: Square,
        path: &mut Vec<Square>,
        captured: &mut Vec<Square>,
        out: &mut Vec<Move>,
    ) {
        let Some(owner) = piece.owner() else {
            return;
        };
        let opponent = owner.opponent();
        let mut extended = false;

        for &(dr, dc) in Self::directions(piece) {
            let (Some(over), Some(land)) = (at.offset(dr, dc), at.offset(2 * dr, 2 * dc)) else {
                continue;
            };
            if captured.contains(&over) || self.get(over).owner() != Some(opponent) {
                continue;
            }
            if !self.get(land).is_empty() && land != origin {
                continue;
            }

            extended = true;
            path.push(land);
            captured.push(over);

            if !piece.is_king() && land.row == Self::crown_row(owner) {
                // Crowning ends the move
                out.push(Move::jump(origin, path.clone(), captured.clone()));
            } else {
                self.extend_jumps(origin, piece, land, path, captured, out);
            }

            path.pop();
            captured.pop();
        }

        if !extended && !path.is_empty() {
            out.push(Move::jump(origin, path.clone(), captured.clone()));
        }
    }
}

impl Default for CheckerBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for CheckerBoard {
    type Move = Move;

    fn jump_moves(&self, player: Player) -> Vec<Move> {
        let mut out = Vec::new();
        let mut path = Vec::with_capacity(4);
        let mut captured = Vec::with_capacity(4);

        for (from, piece) in self.squares_of(player) {
            self.extend_jumps(from, piece, from, &mut path, &mut captured, &mut out);
        }

        out
    }

    fn simple_moves(&self, player: Player) -> Vec<Move> {
        let mut out = Vec::new();

        for (from, piece) in self.squares_of(player) {
            for &(dr, dc) in Self::directions(piece) {
                if let Some(to) = from.offset(dr, dc) {
                    if self.get(to).is_empty() {
                        out.push(Move::step(from, to));
                    }
                }
            }
        }

        out
    }

    fn apply_move(&mut self, mv: &Move, player: Player) {
        let piece = self.get(mv.from());
        self.set(mv.from(), CellState::Empty);
        for &square in mv.captured() {
            self.set(square, CellState::Empty);
        }

        let to = mv.to();
        let landed = if to.row == Self::crown_row(player) {
            piece.crowned()
        } else {
            piece
        };
        self.set(to, landed);

        if mv.is_jump() || !piece.is_king() {
            self.quiet_plies = 0;
        } else {
            self.quiet_plies = self.quiet_plies.saturating_add(1);
        }

        self.next_player = player.opponent();

        // Terminal statuses are final
        if self.status.is_running() {
            self.refresh_status();
        }
    }

    fn status(&self) -> GameStatus {
        self.status
    }

    fn cell(&self, row: usize, col: usize) -> CellState {
        self.cells[row][col]
    }

    fn next_player(&self) -> Player {
        self.next_player
    }
}
