//! Move execution and exact reversal via make/undo.

use tracing::debug;

use crate::board::Board;
use crate::castle_rights::CastleSide;
use crate::chess_move::Move;
use crate::history::HistoryEntry;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::status::GameStatus;

/// Rook relocation (from, to) for a castling move, or `None` for other moves.
fn castle_rook_squares(mv: &Move) -> Option<(Square, Square)> {
    if !mv.is_castle() {
        return None;
    }
    let row = mv.end().row();
    let end_col = mv.end().col();
    let (side, rook_to_col) = if end_col > mv.start().col() {
        (CastleSide::KingSide, end_col - 1)
    } else {
        (CastleSide::QueenSide, end_col + 1)
    };
    Some((Square::new(row, side.rook_col())?, Square::new(row, rook_to_col)?))
}

/// Square of the pawn removed by an en passant capture: beside the start
/// square, in the end square's column.
fn en_passant_victim(mv: &Move) -> Option<Square> {
    Square::new(mv.start().row(), mv.end().col())
}

impl Board {
    /// Apply a legal move.
    ///
    /// The move is applied unconditionally; legality is the caller's job via
    /// [`valid_moves`](Board::valid_moves). With `check_for_game_end` the
    /// checkmate/stalemate status is recomputed for the new position,
    /// otherwise it is left [`GameStatus::Unknown`].
    pub fn make_move(&mut self, mv: Move, check_for_game_end: bool) {
        let mover = mv.piece_moved().color();
        self.apply(mv);
        debug!(notation = %mv, side = %mover, "move made");

        self.status = GameStatus::Unknown;
        if check_for_game_end {
            self.refresh_status();
            match self.status {
                GameStatus::Checkmate => debug!(winner = %mover, "checkmate"),
                GameStatus::Stalemate => debug!("stalemate"),
                _ => {}
            }
        }
    }

    /// Take back the most recent move. Does nothing if no move has been made.
    ///
    /// The cached checkmate/stalemate status is reset to unknown.
    pub fn undo_move(&mut self) {
        if let Some(mv) = self.retract() {
            debug!(notation = %mv, "move undone");
            self.status = GameStatus::Unknown;
        }
    }

    /// Apply `mv` without touching the cached status.
    pub(crate) fn apply(&mut self, mv: Move) {
        let us = mv.piece_moved().color();
        let them = us.flip();
        let snapshot = HistoryEntry {
            castling: self.castling,
            en_passant: self.en_passant,
        };

        self.set_piece(mv.start(), None);
        self.set_piece(mv.end(), Some(mv.piece_moved()));
        self.move_log.push(mv);

        if mv.piece_moved().kind() == PieceKind::King {
            self.king_squares[us.index()] = mv.end();
        }

        if mv.is_pawn_promotion() {
            let promotion = mv.promotion().unwrap_or(self.promotion_choice());
            self.set_piece(mv.end(), Some(Piece::new(promotion.to_piece_kind(), us)));
        }

        if mv.is_en_passant()
            && let Some(victim) = en_passant_victim(&mv)
        {
            self.set_piece(victim, None);
        }

        self.en_passant = if mv.is_double_pawn_push() {
            Square::new((mv.start().row() + mv.end().row()) / 2, mv.start().col())
        } else {
            None
        };

        if let Some((rook_from, rook_to)) = castle_rook_squares(&mv) {
            let rook = self.piece_at(rook_from);
            self.set_piece(rook_from, None);
            self.set_piece(rook_to, rook);
        }

        self.history.push(snapshot);
        let mut rights = self.castling;
        match mv.piece_moved().kind() {
            PieceKind::King => rights = rights.revoke_color(us),
            PieceKind::Rook => {
                for side in CastleSide::ALL {
                    if mv.start() == side.rook_home(us) {
                        rights = rights.revoke(us, side);
                    }
                }
            }
            _ => {}
        }
        if let Some(captured) = mv.piece_captured()
            && captured.kind() == PieceKind::Rook
        {
            for side in CastleSide::ALL {
                if mv.end() == side.rook_home(them) {
                    rights = rights.revoke(them, side);
                }
            }
        }
        self.castling = rights;

        self.side_to_move = them;
    }

    /// Reverse the most recent move exactly, without touching the cached
    /// status. Returns the move taken back.
    pub(crate) fn retract(&mut self) -> Option<Move> {
        let (mv, snapshot) = match (self.move_log.pop(), self.history.pop()) {
            (Some(mv), Some(snapshot)) => (mv, snapshot),
            _ => return None,
        };
        let us = mv.piece_moved().color();

        self.set_piece(mv.start(), Some(mv.piece_moved()));
        if mv.is_en_passant() {
            self.set_piece(mv.end(), None);
            if let Some(victim) = en_passant_victim(&mv) {
                self.set_piece(victim, mv.piece_captured());
            }
        } else {
            self.set_piece(mv.end(), mv.piece_captured());
        }

        if mv.piece_moved().kind() == PieceKind::King {
            self.king_squares[us.index()] = mv.start();
        }

        if let Some((rook_from, rook_to)) = castle_rook_squares(&mv) {
            let rook = self.piece_at(rook_to);
            self.set_piece(rook_to, None);
            self.set_piece(rook_from, rook);
        }

        self.castling = snapshot.castling;
        self.en_passant = snapshot.en_passant;
        self.side_to_move = us;
        Some(mv)
    }
}
