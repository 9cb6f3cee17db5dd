//! King steps and castling.

use crate::attacks::KING_OFFSETS;
use crate::board::Board;
use crate::castle_rights::CastleSide;
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Generate one-square king moves plus any available castles.
pub(super) fn gen_king(board: &Board, src: Square, king: Piece, list: &mut Vec<Move>) {
    for (d_row, d_col) in KING_OFFSETS {
        let Some(dst) = src.offset(d_row, d_col) else {
            continue;
        };
        let occupant = board.piece_at(dst);
        if occupant.is_none_or(|p| p.color() != king.color()) {
            list.push(Move::normal(src, dst, king, occupant));
        }
    }
    gen_castles(board, src, king, list);
}

/// Castling needs the right, a king not in check, empty squares between
/// king and rook, and no attack on the squares the king crosses.
fn gen_castles(board: &Board, src: Square, king: Piece, list: &mut Vec<Move>) {
    let us = king.color();
    let row = us.back_row();
    if src.row() != row || src.col() != 4 || board.castling().is_empty() {
        return;
    }
    if board.square_under_attack(src) {
        return;
    }

    for side in CastleSide::ALL {
        if !board.castling().has(us, side) {
            continue;
        }
        let rook_present = board
            .piece_at(side.rook_home(us))
            .is_some_and(|p| p.is(PieceKind::Rook, us));
        if !rook_present {
            continue;
        }

        let (empty, crossed, dst_col): (&[u8], &[u8], u8) = match side {
            CastleSide::KingSide => (&[5, 6], &[5, 6], 6),
            CastleSide::QueenSide => (&[1, 2, 3], &[2, 3], 2),
        };
        let clear = empty
            .iter()
            .filter_map(|&col| Square::new(row, col))
            .all(|sq| board.piece_at(sq).is_none());
        if !clear {
            continue;
        }
        let safe = crossed
            .iter()
            .filter_map(|&col| Square::new(row, col))
            .all(|sq| !board.square_under_attack(sq));
        if !safe {
            continue;
        }

        if let Some(dst) = Square::new(row, dst_col) {
            list.push(Move::castle(src, dst, king));
        }
    }
}
