//! Pawn move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::square::Square;

/// Generate pseudo-legal pawn moves: pushes, captures, and en passant.
///
/// Reaching the far row marks the move as a promotion; which piece it
/// becomes is decided when the move is made.
pub(super) fn gen_pawns(board: &Board, src: Square, pawn: Piece, list: &mut Vec<Move>) {
    let us = pawn.color();
    let forward = us.forward();

    if let Some(one) = src.offset(forward, 0)
        && board.piece_at(one).is_none()
    {
        list.push(Move::normal(src, one, pawn, None));

        if src.row() == us.pawn_row()
            && let Some(two) = src.offset(2 * forward, 0)
            && board.piece_at(two).is_none()
        {
            list.push(Move::normal(src, two, pawn, None));
        }
    }

    for d_col in [-1, 1] {
        let Some(target) = src.offset(forward, d_col) else {
            continue;
        };
        match board.piece_at(target) {
            Some(victim) if victim.color() != us => {
                list.push(Move::normal(src, target, pawn, Some(victim)));
            }
            None if board.en_passant() == Some(target) => {
                list.push(Move::en_passant(src, target, pawn));
            }
            _ => {}
        }
    }
}
