//! Scoped speculative moves for legality testing.

use std::ops::{Deref, DerefMut};

use crate::board::Board;
use crate::chess_move::Move;
use crate::status::GameStatus;

/// A move applied to a board for inspection, taken back when dropped.
///
/// Dropping restores the grid, side to move, castling rights, en passant
/// target, king locations, logs, and cached status, on every exit path.
pub(crate) struct Probe<'a> {
    board: &'a mut Board,
    status: GameStatus,
}

impl<'a> Probe<'a> {
    pub(crate) fn new(board: &'a mut Board, mv: Move) -> Probe<'a> {
        let status = board.status;
        board.apply(mv);
        Probe { board, status }
    }

    /// Return `true` if the side that made the probed move left its own king attacked.
    pub(crate) fn exposes_king(&self) -> bool {
        let mover = self.board.side_to_move.flip();
        self.board
            .is_square_attacked(self.board.king_square(mover), self.board.side_to_move)
    }
}

impl Deref for Probe<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Probe<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        self.board.retract();
        self.board.status = self.status;
    }
}

impl Board {
    /// Speculatively apply `mv`; the returned guard undoes it when dropped.
    pub(crate) fn probe(&mut self, mv: Move) -> Probe<'_> {
        Probe::new(self, mv)
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::chess_move::Move;
    use crate::square::Square;

    #[test]
    fn drop_restores_everything() {
        let mut board: Board = "r3k2r/8/8/3pP3/8/8/8/R3K2R w KQkq d6 0 1".parse().unwrap();
        let before = board.clone();
        let moves = board.all_possible_moves();
        for mv in moves {
            let probe = board.probe(mv);
            assert_eq!(probe.move_log().len(), 1);
            drop(probe);
            assert_eq!(board, before, "state leaked after probing {mv:?}");
        }
    }

    #[test]
    fn exposes_king_detects_pinned_piece() {
        let mut board: Board = "4r2k/8/8/8/8/8/4N3/4K3 w - - 0 1".parse().unwrap();
        let pinned = Move::new(Square::E2, Square::C3, &board).unwrap();
        assert!(board.probe(pinned).exposes_king());
        let king_step = Move::new(Square::E1, Square::D1, &board).unwrap();
        assert!(!board.probe(king_step).exposes_king());
    }

    #[test]
    fn early_return_inside_probe_still_restores() {
        fn first_checking_move(board: &mut Board) -> Option<Move> {
            for mv in board.all_possible_moves() {
                let probe = board.probe(mv);
                if probe.in_check() {
                    return Some(mv);
                }
            }
            None
        }

        let mut board: Board = "4k3/8/8/8/8/8/8/R3K3 w - - 0 1".parse().unwrap();
        let before = board.clone();
        let found = first_checking_move(&mut board).unwrap();
        assert_eq!(found.end(), Square::A8);
        assert_eq!(board, before);
    }
}
