//! Castling rights as four independent flags.

use std::fmt;

use crate::color::Color;
use crate::error::FenError;
use crate::square::Square;

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// Column of the rook that castles on this side.
    #[inline]
    pub const fn rook_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// Home square of this side's rook for `color`.
    #[inline]
    pub const fn rook_home(self, color: Color) -> Square {
        match (color, self) {
            (Color::White, CastleSide::KingSide) => Square::H1,
            (Color::White, CastleSide::QueenSide) => Square::A1,
            (Color::Black, CastleSide::KingSide) => Square::H8,
            (Color::Black, CastleSide::QueenSide) => Square::A8,
        }
    }
}

/// Current castling eligibility. Flags only ever go from `true` to `false`
/// during forward play; undo restores them from a snapshot.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights {
    white_king_side: bool,
    white_queen_side: bool,
    black_king_side: bool,
    black_queen_side: bool,
}

impl CastleRights {
    /// No castling rights.
    pub const NONE: CastleRights = CastleRights::new(false, false, false, false);
    /// All castling rights.
    pub const ALL: CastleRights = CastleRights::new(true, true, true, true);

    /// Create rights from the four flags in FEN order (K, Q, k, q).
    #[inline]
    pub const fn new(
        white_king_side: bool,
        white_queen_side: bool,
        black_king_side: bool,
        black_queen_side: bool,
    ) -> CastleRights {
        CastleRights {
            white_king_side,
            white_queen_side,
            black_king_side,
            black_queen_side,
        }
    }

    /// Return `true` if no castling rights remain.
    #[inline]
    pub const fn is_empty(self) -> bool {
        !(self.white_king_side
            || self.white_queen_side
            || self.black_king_side
            || self.black_queen_side)
    }

    /// Check whether a specific color and side can still castle.
    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => self.white_king_side,
            (Color::White, CastleSide::QueenSide) => self.white_queen_side,
            (Color::Black, CastleSide::KingSide) => self.black_king_side,
            (Color::Black, CastleSide::QueenSide) => self.black_queen_side,
        }
    }

    /// Return rights with the given color and side switched on.
    #[inline]
    pub const fn grant(self, color: Color, side: CastleSide) -> CastleRights {
        self.with(color, side, true)
    }

    /// Return rights with the given color and side switched off.
    #[inline]
    pub const fn revoke(self, color: Color, side: CastleSide) -> CastleRights {
        self.with(color, side, false)
    }

    /// Remove all castling rights for the given color.
    #[inline]
    pub const fn revoke_color(self, color: Color) -> CastleRights {
        self.revoke(color, CastleSide::KingSide)
            .revoke(color, CastleSide::QueenSide)
    }

    const fn with(mut self, color: Color, side: CastleSide, value: bool) -> CastleRights {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => self.white_king_side = value,
            (Color::White, CastleSide::QueenSide) => self.white_queen_side = value,
            (Color::Black, CastleSide::KingSide) => self.black_king_side = value,
            (Color::Black, CastleSide::QueenSide) => self.black_queen_side = value,
        }
        self
    }

    /// Parse castling rights from the FEN castling field (e.g. "KQkq", "Kq", "-").
    pub fn from_fen(s: &str) -> Result<CastleRights, FenError> {
        if s == "-" {
            return Ok(CastleRights::NONE);
        }

        let mut rights = CastleRights::NONE;
        for c in s.chars() {
            rights = match c {
                'K' => rights.grant(Color::White, CastleSide::KingSide),
                'Q' => rights.grant(Color::White, CastleSide::QueenSide),
                'k' => rights.grant(Color::Black, CastleSide::KingSide),
                'q' => rights.grant(Color::Black, CastleSide::QueenSide),
                _ => return Err(FenError::InvalidCastlingChar { character: c }),
            };
        }
        Ok(rights)
    }

    /// Serialize castling rights to the FEN castling field.
    pub fn to_fen(self) -> String {
        if self.is_empty() {
            return "-".to_string();
        }

        let flags = [
            (self.white_king_side, 'K'),
            (self.white_queen_side, 'Q'),
            (self.black_king_side, 'k'),
            (self.black_queen_side, 'q'),
        ];
        flags
            .into_iter()
            .filter_map(|(set, c)| set.then_some(c))
            .collect()
    }
}

impl Default for CastleRights {
    fn default() -> Self {
        CastleRights::ALL
    }
}

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen())
    }
}

impl fmt::Debug for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastleRights({})", self.to_fen())
    }
}
