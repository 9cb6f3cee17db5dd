//! Pseudo-legal generation and the legality filter.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::attacks::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};
use crate::board::Board;
use crate::chess_move::Move;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::status::GameStatus;

use self::king::gen_king;
use self::knights::gen_knights;
use self::pawns::gen_pawns;
use self::sliders::gen_sliders;

impl Board {
    /// Return exactly the legal moves for the side to move.
    ///
    /// Each pseudo-legal move is tried on the board and kept only if the
    /// mover's king is not attacked afterwards; the board is left as it was.
    /// Also refreshes the cached checkmate/stalemate status.
    pub fn valid_moves(&mut self) -> Vec<Move> {
        let in_check = self.in_check();
        let mut moves = self.all_possible_moves();
        moves.retain(|&mv| !self.probe(mv).exposes_king());

        self.status = match (moves.is_empty(), in_check) {
            (false, _) => GameStatus::InPlay,
            (true, true) => GameStatus::Checkmate,
            (true, false) => GameStatus::Stalemate,
        };
        moves
    }

    /// Return every pseudo-legal move for the side to move, ignoring self-check.
    ///
    /// Squares are scanned row-major from a8, so the order is deterministic.
    pub fn all_possible_moves(&self) -> Vec<Move> {
        let us = self.side_to_move;
        let mut list = Vec::with_capacity(48);
        for (src, piece) in self.pieces() {
            if piece.color() != us {
                continue;
            }
            match piece.kind() {
                PieceKind::Pawn => gen_pawns(self, src, piece, &mut list),
                PieceKind::Knight => gen_knights(self, src, piece, &mut list),
                PieceKind::Bishop => gen_sliders(self, src, piece, &BISHOP_DIRECTIONS, &mut list),
                PieceKind::Rook => gen_sliders(self, src, piece, &ROOK_DIRECTIONS, &mut list),
                PieceKind::Queen => {
                    gen_sliders(self, src, piece, &ROOK_DIRECTIONS, &mut list);
                    gen_sliders(self, src, piece, &BISHOP_DIRECTIONS, &mut list);
                }
                PieceKind::King => gen_king(self, src, piece, &mut list),
            }
        }
        list
    }

    /// Return the legal move from `start` to `end`, if there is one.
    ///
    /// The returned move carries the en passant, castle, and promotion flags
    /// the generator assigned, unlike a candidate built from the two squares.
    pub fn find_valid_move(&mut self, start: Square, end: Square) -> Option<Move> {
        self.valid_moves()
            .into_iter()
            .find(|mv| mv.start() == start && mv.end() == end)
    }
}
