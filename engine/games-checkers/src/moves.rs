//! Squares and moves.

use std::fmt;

use engine_core::BOARD_SIZE;

/// A square on the board. Row 0 is the top edge (Red's home row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Whether pieces may stand on this square.
    #[inline]
    pub fn is_playable(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// The square `(dr, dc)` away, if it is on the board.
    #[inline]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        let size = BOARD_SIZE as i8;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    /// Files `a`-`h` from column 0, ranks `8`-`1` from row 0.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col) as char;
        let rank = BOARD_SIZE as u8 - self.row;
        write!(f, "{}{}", file, rank)
    }
}

/// One ply: a single diagonal step, or a complete jump chain.
///
/// `path` lists every landing square in order; `captured` lists the squares
/// of the jumped pieces in the same order. A step has one landing square and
/// no captures.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    path: Vec<Square>,
    captured: Vec<Square>,
}

impl Move {
    /// A non-capturing step.
    pub fn step(from: Square, to: Square) -> Self {
        Self {
            from,
            path: vec![to],
            captured: Vec::new(),
        }
    }

    /// A jump chain. `path` and `captured` must have the same, non-zero length.
    pub fn jump(from: Square, path: Vec<Square>, captured: Vec<Square>) -> Self {
        debug_assert!(!path.is_empty() && path.len() == captured.len());
        Self {
            from,
            path,
            captured,
        }
    }

    #[inline]
    pub fn from(&self) -> Square {
        self.from
    }

    /// Final landing square.
    #[inline]
    pub fn to(&self) -> Square {
        self.path.last().copied().unwrap_or(self.from)
    }

    pub fn path(&self) -> &[Square] {
        &self.path
    }

    pub fn captured(&self) -> &[Square] {
        &self.captured
    }

    #[inline]
    pub fn is_jump(&self) -> bool {
        !self.captured.is_empty()
    }
}

impl fmt::Display for Move {
    /// `c3-d4` for a step, `c3xe5xg3` for a jump chain.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_jump() { 'x' } else { '-' };
        write!(f, "{}", self.from)?;
        for square in &self.path {
            write!(f, "{}{}", sep, square)?;
        }
        Ok(())
    }
}
