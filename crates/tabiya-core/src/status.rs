//! Terminal-state detection: checkmate, stalemate, and draw extension points.

use std::fmt;

use crate::board::Board;

/// Cached outcome of the last legal-move query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    /// Not computed since the last move or undo.
    #[default]
    Unknown,
    /// The side to move has at least one legal move.
    InPlay,
    Checkmate,
    Stalemate,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::Unknown => "unknown",
            GameStatus::InPlay => "in play",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        };
        write!(f, "{text}")
    }
}

impl Board {
    /// Return `true` if the side to move is in check with no legal move.
    ///
    /// Recomputes from the position; the cached status is not consulted.
    pub fn is_checkmate(&mut self) -> bool {
        self.in_check() && !self.has_legal_move()
    }

    /// Return `true` if the side to move is not in check but has no legal move.
    pub fn is_stalemate(&mut self) -> bool {
        !self.in_check() && !self.has_legal_move()
    }

    /// Return `true` if the game is drawn. Only stalemate is detected.
    pub fn is_draw(&mut self) -> bool {
        self.is_stalemate() || self.is_fifty_move() || self.is_threefold_repetition()
    }

    /// Fifty-move rule. Not implemented: always `false`.
    pub fn is_fifty_move(&self) -> bool {
        false
    }

    /// Threefold repetition. Not implemented: always `false`.
    pub fn is_threefold_repetition(&self) -> bool {
        false
    }

    fn has_legal_move(&mut self) -> bool {
        self.all_possible_moves()
            .into_iter()
            .any(|mv| !self.probe(mv).exposes_king())
    }

    /// Recompute the cached status for the current position.
    pub(crate) fn refresh_status(&mut self) {
        self.valid_moves();
    }
}
