//! Board squares addressed by (row, col), row 0 being rank 8 and col 0 file a.

use std::fmt;
use std::str::FromStr;

use crate::error::SquareError;

/// A square on the 8x8 board.
///
/// Only bounds-checked constructors exist, so a `Square` always indexes the
/// grid safely.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square, returning `None` if either coordinate is off the board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Square> {
        if row < 8 && col < 8 {
            Some(Square { row, col })
        } else {
            None
        }
    }

    #[inline]
    const fn at(row: u8, col: u8) -> Square {
        Square { row, col }
    }

    /// Step by a signed (row, col) delta, or `None` if that leaves the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if row >= 0 && row < 8 && col >= 0 && col < 8 {
            Some(Square::at(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Parse an algebraic notation string (e.g. "e4") into a square.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let (file, rank) = (bytes[0], bytes[1]);
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return None;
        }
        Square::new(b'8' - rank, file - b'a')
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Return the file letter ('a'..='h').
    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    /// Return the rank digit ('1'..='8').
    #[inline]
    pub const fn rank_char(self) -> char {
        (b'8' - self.row) as char
    }

    /// Iterate over all 64 squares in row-major order (a8, b8, ..., h1).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..8).flat_map(|row| (0u8..8).map(move |col| Square::at(row, col)))
    }

    // Named square constants
    pub const A1: Square = Square::at(7, 0);
    pub const B1: Square = Square::at(7, 1);
    pub const C1: Square = Square::at(7, 2);
    pub const D1: Square = Square::at(7, 3);
    pub const E1: Square = Square::at(7, 4);
    pub const F1: Square = Square::at(7, 5);
    pub const G1: Square = Square::at(7, 6);
    pub const H1: Square = Square::at(7, 7);
    pub const A2: Square = Square::at(6, 0);
    pub const B2: Square = Square::at(6, 1);
    pub const C2: Square = Square::at(6, 2);
    pub const D2: Square = Square::at(6, 3);
    pub const E2: Square = Square::at(6, 4);
    pub const F2: Square = Square::at(6, 5);
    pub const G2: Square = Square::at(6, 6);
    pub const H2: Square = Square::at(6, 7);
    pub const A3: Square = Square::at(5, 0);
    pub const B3: Square = Square::at(5, 1);
    pub const C3: Square = Square::at(5, 2);
    pub const D3: Square = Square::at(5, 3);
    pub const E3: Square = Square::at(5, 4);
    pub const F3: Square = Square::at(5, 5);
    pub const G3: Square = Square::at(5, 6);
    pub const H3: Square = Square::at(5, 7);
    pub const A4: Square = Square::at(4, 0);
    pub const B4: Square = Square::at(4, 1);
    pub const C4: Square = Square::at(4, 2);
    pub const D4: Square = Square::at(4, 3);
    pub const E4: Square = Square::at(4, 4);
    pub const F4: Square = Square::at(4, 5);
    pub const G4: Square = Square::at(4, 6);
    pub const H4: Square = Square::at(4, 7);
    pub const A5: Square = Square::at(3, 0);
    pub const B5: Square = Square::at(3, 1);
    pub const C5: Square = Square::at(3, 2);
    pub const D5: Square = Square::at(3, 3);
    pub const E5: Square = Square::at(3, 4);
    pub const F5: Square = Square::at(3, 5);
    pub const G5: Square = Square::at(3, 6);
    pub const H5: Square = Square::at(3, 7);
    pub const A6: Square = Square::at(2, 0);
    pub const B6: Square = Square::at(2, 1);
    pub const C6: Square = Square::at(2, 2);
    pub const D6: Square = Square::at(2, 3);
    pub const E6: Square = Square::at(2, 4);
    pub const F6: Square = Square::at(2, 5);
    pub const G6: Square = Square::at(2, 6);
    pub const H6: Square = Square::at(2, 7);
    pub const A7: Square = Square::at(1, 0);
    pub const B7: Square = Square::at(1, 1);
    pub const C7: Square = Square::at(1, 2);
    pub const D7: Square = Square::at(1, 3);
    pub const E7: Square = Square::at(1, 4);
    pub const F7: Square = Square::at(1, 5);
    pub const G7: Square = Square::at(1, 6);
    pub const H7: Square = Square::at(1, 7);
    pub const A8: Square = Square::at(0, 0);
    pub const B8: Square = Square::at(0, 1);
    pub const C8: Square = Square::at(0, 2);
    pub const D8: Square = Square::at(0, 3);
    pub const E8: Square = Square::at(0, 4);
    pub const F8: Square = Square::at(0, 5);
    pub const G8: Square = Square::at(0, 6);
    pub const H8: Square = Square::at(0, 7);
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Square, SquareError> {
        Square::from_algebraic(s).ok_or_else(|| SquareError::Malformed {
            found: s.to_string(),
        })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}
