//! Attack detection by scanning outward from the target square.

use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// The eight L-shaped knight jumps as (row, col) deltas.
pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// The eight king steps.
pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Up, left, down, right.
pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

impl Board {
    /// Return `true` if the opponent of the side to move attacks `sq`.
    ///
    /// Takes `&self`, so the side to move is the same after every return path.
    pub fn square_under_attack(&self, sq: Square) -> bool {
        self.is_square_attacked(sq, self.side_to_move.flip())
    }

    /// Return `true` if any piece of `by_color` attacks `sq`.
    ///
    /// Checks pawns, knights, orthogonal sliders, diagonal sliders, then the
    /// king, returning at the first hit.
    pub fn is_square_attacked(&self, sq: Square, by_color: Color) -> bool {
        let is_theirs = |piece: Option<Piece>, kind: PieceKind| {
            piece.is_some_and(|p| p.is(kind, by_color))
        };

        // An attacking pawn sits one row back toward its own side.
        let pawn_row = -by_color.forward();
        for d_col in [-1, 1] {
            if let Some(from) = sq.offset(pawn_row, d_col)
                && is_theirs(self.piece_at(from), PieceKind::Pawn)
            {
                return true;
            }
        }

        for (d_row, d_col) in KNIGHT_OFFSETS {
            if let Some(from) = sq.offset(d_row, d_col)
                && is_theirs(self.piece_at(from), PieceKind::Knight)
            {
                return true;
            }
        }

        for dir in ROOK_DIRECTIONS {
            if let Some(blocker) = self.first_piece_along(sq, dir)
                && blocker.color() == by_color
                && matches!(blocker.kind(), PieceKind::Rook | PieceKind::Queen)
            {
                return true;
            }
        }

        for dir in BISHOP_DIRECTIONS {
            if let Some(blocker) = self.first_piece_along(sq, dir)
                && blocker.color() == by_color
                && matches!(blocker.kind(), PieceKind::Bishop | PieceKind::Queen)
            {
                return true;
            }
        }

        KING_OFFSETS.into_iter().any(|(d_row, d_col)| {
            sq.offset(d_row, d_col)
                .is_some_and(|from| is_theirs(self.piece_at(from), PieceKind::King))
        })
    }

    /// Return `true` if the side to move's king is attacked.
    pub fn in_check(&self) -> bool {
        self.square_under_attack(self.king_square(self.side_to_move))
    }

    /// First occupied square walking from `sq` (exclusive) in `dir`.
    fn first_piece_along(&self, sq: Square, (d_row, d_col): (i8, i8)) -> Option<Piece> {
        let mut current = sq;
        while let Some(next) = current.offset(d_row, d_col) {
            if let Some(piece) = self.piece_at(next) {
                return Some(piece);
            }
            current = next;
        }
        None
    }
}
