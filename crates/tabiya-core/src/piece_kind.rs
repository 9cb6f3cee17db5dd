//! Piece kinds, independent of color.

use std::fmt;

/// The kind of a chess piece. Discriminants double as table indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// Lowercase FEN letters in index order.
const FEN_LETTERS: [char; PieceKind::COUNT] = ['p', 'n', 'b', 'r', 'q', 'k'];

impl PieceKind {
    pub const COUNT: usize = 6;

    /// All piece kinds in index order.
    pub const ALL: [PieceKind; PieceKind::COUNT] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase FEN letter; [`Piece`](crate::piece::Piece) uppercases it for white.
    #[inline]
    pub const fn fen_char(self) -> char {
        FEN_LETTERS[self.index()]
    }

    /// Uppercase letter written before the destination in move notation.
    /// Pawn moves carry no letter.
    #[inline]
    pub const fn notation_letter(self) -> Option<char> {
        match self {
            PieceKind::Pawn => None,
            _ => Some(self.fen_char().to_ascii_uppercase()),
        }
    }

    /// Parse a FEN letter of either case.
    pub fn from_fen_char(c: char) -> Option<PieceKind> {
        let lower = c.to_ascii_lowercase();
        FEN_LETTERS
            .iter()
            .position(|&letter| letter == lower)
            .map(|i| PieceKind::ALL[i])
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}
