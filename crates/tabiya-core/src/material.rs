//! Material balance: a plain piece count, not a search evaluation.

use crate::board::Board;
use crate::color::Color;
use crate::piece_kind::PieceKind;

/// Piece values indexed by [`PieceKind::index()`].
///
/// | Piece  | Value |
/// |--------|-------|
/// | Pawn   | 1     |
/// | Knight | 3     |
/// | Bishop | 3     |
/// | Rook   | 5     |
/// | Queen  | 9     |
/// | King   | 0     |
pub const MATERIAL_VALUE: [i32; PieceKind::COUNT] = [1, 3, 3, 5, 9, 0];

/// Return material from White's perspective (positive = White ahead).
pub fn material_balance(board: &Board) -> i32 {
    board
        .pieces()
        .map(|(_, piece)| {
            let value = MATERIAL_VALUE[piece.kind().index()];
            match piece.color() {
                Color::White => value,
                Color::Black => -value,
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_is_level() {
        assert_eq!(material_balance(&Board::starting_position()), 0);
    }

    #[test]
    fn counts_missing_pieces() {
        // White is missing the queen, black a knight and a pawn.
        let board: Board = "r1bqkbnr/ppp1pppp/8/8/8/8/PPPPPPPP/RNB1KBNR w KQkq -"
            .parse()
            .unwrap();
        assert_eq!(material_balance(&board), -9 + 3 + 1);
    }

    #[test]
    fn kings_are_worthless() {
        let board: Board = "4k3/8/8/8/8/8/8/4K3 w - -".parse().unwrap();
        assert_eq!(material_balance(&board), 0);
    }
}
