//! Volatile state saved before each move so undo can restore it exactly.

use crate::castle_rights::CastleRights;
use crate::square::Square;

/// Snapshot pushed by every move and popped by its undo.
///
/// Both fields are restored verbatim rather than recomputed from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HistoryEntry {
    /// Castling rights before the move.
    pub castling: CastleRights,
    /// En passant target before the move.
    pub en_passant: Option<Square>,
}
