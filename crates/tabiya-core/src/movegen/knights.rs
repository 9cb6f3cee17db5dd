//! Knight move generation.

use crate::attacks::KNIGHT_OFFSETS;
use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::square::Square;

/// Generate pseudo-legal knight moves onto empty or enemy squares.
pub(super) fn gen_knights(board: &Board, src: Square, knight: Piece, list: &mut Vec<Move>) {
    for (d_row, d_col) in KNIGHT_OFFSETS {
        let Some(dst) = src.offset(d_row, d_col) else {
            continue;
        };
        let occupant = board.piece_at(dst);
        if occupant.is_none_or(|p| p.color() != knight.color()) {
            list.push(Move::normal(src, dst, knight, occupant));
        }
    }
}
