//! A single board transition and its notation.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::board::Board;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// The piece a pawn promotes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum PromotionPiece {
    Knight = 0,
    Bishop = 1,
    Rook = 2,
    #[default]
    Queen = 3,
}

impl PromotionPiece {
    /// All promotion pieces in index order.
    pub const ALL: [PromotionPiece; 4] = [
        PromotionPiece::Knight,
        PromotionPiece::Bishop,
        PromotionPiece::Rook,
        PromotionPiece::Queen,
    ];

    /// Convert to the corresponding [`PieceKind`].
    pub const fn to_piece_kind(self) -> PieceKind {
        match self {
            PromotionPiece::Knight => PieceKind::Knight,
            PromotionPiece::Bishop => PieceKind::Bishop,
            PromotionPiece::Rook => PieceKind::Rook,
            PromotionPiece::Queen => PieceKind::Queen,
        }
    }

    /// Return the lowercase letter for this promotion.
    pub const fn to_char(self) -> char {
        match self {
            PromotionPiece::Knight => 'n',
            PromotionPiece::Bishop => 'b',
            PromotionPiece::Rook => 'r',
            PromotionPiece::Queen => 'q',
        }
    }

    /// Parse a promotion letter (case-insensitive).
    pub fn from_char(c: char) -> Option<PromotionPiece> {
        match c.to_ascii_lowercase() {
            'n' => Some(PromotionPiece::Knight),
            'b' => Some(PromotionPiece::Bishop),
            'r' => Some(PromotionPiece::Rook),
            'q' => Some(PromotionPiece::Queen),
            _ => None,
        }
    }
}

/// One move, with the pieces involved captured from the board it was built
/// against.
///
/// Equality and hashing look only at the start and end squares: no position
/// has two legal moves between the same pair of squares that differ only in
/// their special-move flags.
#[derive(Clone, Copy)]
pub struct Move {
    start: Square,
    end: Square,
    piece_moved: Piece,
    piece_captured: Option<Piece>,
    is_en_passant: bool,
    is_castle: bool,
    is_pawn_promotion: bool,
    promotion: Option<PromotionPiece>,
}

impl Move {
    /// Build a candidate move between two squares of `board`.
    ///
    /// Returns `None` if `start` is empty. The captured piece is whatever
    /// stands on `end` right now, so build moves against the position they
    /// will be applied to.
    pub fn new(start: Square, end: Square, board: &Board) -> Option<Move> {
        let moved = board.piece_at(start)?;
        Some(Move::normal(start, end, moved, board.piece_at(end)))
    }

    /// Build an en passant capture; the captured piece is the opposing pawn.
    pub fn new_en_passant(start: Square, end: Square, board: &Board) -> Option<Move> {
        let moved = board.piece_at(start)?;
        Some(Move::en_passant(start, end, moved))
    }

    /// Build a castling move from the king's start and end squares.
    pub fn new_castle(start: Square, end: Square, board: &Board) -> Option<Move> {
        let moved = board.piece_at(start)?;
        Some(Move::castle(start, end, moved))
    }

    pub(crate) fn normal(
        start: Square,
        end: Square,
        piece_moved: Piece,
        piece_captured: Option<Piece>,
    ) -> Move {
        let is_pawn_promotion = piece_moved.kind() == PieceKind::Pawn
            && end.row() == piece_moved.color().promotion_row();
        Move {
            start,
            end,
            piece_moved,
            piece_captured,
            is_en_passant: false,
            is_castle: false,
            is_pawn_promotion,
            promotion: None,
        }
    }

    pub(crate) fn en_passant(start: Square, end: Square, piece_moved: Piece) -> Move {
        let captured = Piece::new(PieceKind::Pawn, piece_moved.color().flip());
        Move {
            is_en_passant: true,
            ..Move::normal(start, end, piece_moved, Some(captured))
        }
    }

    pub(crate) fn castle(start: Square, end: Square, piece_moved: Piece) -> Move {
        Move {
            is_castle: true,
            ..Move::normal(start, end, piece_moved, None)
        }
    }

    /// Return this move with an explicit promotion piece.
    ///
    /// Without one, the board's promotion choice (queen by default) applies.
    pub fn with_promotion(self, promotion: PromotionPiece) -> Move {
        Move {
            promotion: Some(promotion),
            ..self
        }
    }

    #[inline]
    pub fn start(&self) -> Square {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Square {
        self.end
    }

    #[inline]
    pub fn piece_moved(&self) -> Piece {
        self.piece_moved
    }

    /// The piece removed by this move; for en passant, the pawn beside the start square.
    #[inline]
    pub fn piece_captured(&self) -> Option<Piece> {
        self.piece_captured
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.is_en_passant
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        self.is_castle
    }

    #[inline]
    pub fn is_pawn_promotion(&self) -> bool {
        self.is_pawn_promotion
    }

    /// The explicitly chosen promotion piece, if any.
    #[inline]
    pub fn promotion(&self) -> Option<PromotionPiece> {
        self.promotion
    }

    /// Return `true` if this is a pawn advancing two rows.
    #[inline]
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece_moved.kind() == PieceKind::Pawn
            && self.start.row().abs_diff(self.end.row()) == 2
    }

    /// Identity key built from the start and end coordinates.
    #[inline]
    pub fn move_id(&self) -> u16 {
        self.start.row() as u16 * 1000
            + self.start.col() as u16 * 100
            + self.end.row() as u16 * 10
            + self.end.col() as u16
    }

    /// Render the move in short algebraic form ("Nf3", "exd6", "O-O", "e8=Q").
    ///
    /// Promotions always print `=Q`, whatever piece was actually chosen.
    pub fn chess_notation(&self) -> String {
        if self.is_castle {
            return if self.end.col() > self.start.col() {
                "O-O".to_string()
            } else {
                "O-O-O".to_string()
            };
        }

        let mut notation = String::with_capacity(7);
        match self.piece_moved.kind().notation_letter() {
            Some(letter) => notation.push(letter),
            None if self.is_capture() => notation.push(self.start.file_char()),
            None => {}
        }
        if self.is_capture() {
            notation.push('x');
        }
        notation.push_str(&self.end.to_string());
        if self.is_pawn_promotion {
            notation.push_str("=Q");
        }
        notation
    }

    /// Render the move as start and end squares ("e2e4", "e7e8q").
    pub fn to_coordinate(&self) -> String {
        if self.is_pawn_promotion {
            let promotion = self.promotion.unwrap_or_default();
            format!("{}{}{}", self.start, self.end, promotion.to_char())
        } else {
            format!("{}{}", self.start, self.end)
        }
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Move) -> bool {
        self.move_id() == other.move_id()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.move_id().hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.chess_notation())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} {:?}", self.to_coordinate(), self.piece_moved)?;
        if let Some(captured) = self.piece_captured {
            write!(f, "x{captured:?}")?;
        }
        if self.is_en_passant {
            write!(f, " ep")?;
        }
        if self.is_castle {
            write!(f, " castle")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{Move, PromotionPiece};
    use crate::board::Board;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    fn board(fen: &str) -> Board {
        fen.parse().unwrap()
    }

    #[test]
    fn new_reads_pieces_from_board() {
        let b = Board::starting_position();
        let mv = Move::new(Square::E2, Square::E4, &b).unwrap();
        assert_eq!(mv.piece_moved(), Piece::WHITE_PAWN);
        assert_eq!(mv.piece_captured(), None);
        assert!(mv.is_double_pawn_push());
        assert!(!mv.is_pawn_promotion());
    }

    #[test]
    fn new_from_empty_square_is_none() {
        let b = Board::starting_position();
        assert!(Move::new(Square::E4, Square::E5, &b).is_none());
    }

    #[test]
    fn captured_piece_is_fixed_at_construction() {
        let b = board("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1");
        let mv = Move::new(Square::E4, Square::D5, &b).unwrap();
        assert_eq!(mv.piece_captured(), Some(Piece::BLACK_PAWN));
    }

    #[test]
    fn en_passant_captures_opposing_pawn() {
        let b = board("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
        let mv = Move::new_en_passant(Square::E5, Square::D6, &b).unwrap();
        assert!(mv.is_en_passant());
        assert_eq!(mv.piece_captured(), Some(Piece::BLACK_PAWN));
        assert_eq!(mv.chess_notation(), "exd6");
    }

    #[test]
    fn promotion_is_derived() {
        let b = board("4k3/P7/8/8/8/8/1p6/4K3 w - - 0 1");
        let white = Move::new(Square::A7, Square::A8, &b).unwrap();
        assert!(white.is_pawn_promotion());
        let black = Move::new(Square::B2, Square::B1, &b).unwrap();
        assert!(black.is_pawn_promotion());
        let king = Move::new(Square::E1, Square::D1, &b).unwrap();
        assert!(!king.is_pawn_promotion());
    }

    #[test]
    fn notation_pawn_and_piece_moves() {
        let b = Board::starting_position();
        assert_eq!(Move::new(Square::E2, Square::E4, &b).unwrap().chess_notation(), "e4");
        assert_eq!(Move::new(Square::G1, Square::F3, &b).unwrap().chess_notation(), "Nf3");
    }

    #[test]
    fn notation_captures() {
        let b = board("4k3/8/8/3p4/4P3/5N2/8/4K3 w - - 0 1");
        assert_eq!(Move::new(Square::E4, Square::D5, &b).unwrap().chess_notation(), "exd5");
        let b = board("4k3/8/8/8/4p3/5N2/8/4K3 w - - 0 1");
        assert_eq!(Move::new(Square::F3, Square::E5, &b).unwrap().chess_notation(), "Ne5");
        let b = board("4k3/8/8/4p3/8/5N2/8/4K3 w - - 0 1");
        assert_eq!(Move::new(Square::F3, Square::E5, &b).unwrap().chess_notation(), "Nxe5");
    }

    #[test]
    fn notation_castles() {
        let b = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        assert_eq!(Move::new_castle(Square::E1, Square::G1, &b).unwrap().chess_notation(), "O-O");
        assert_eq!(Move::new_castle(Square::E8, Square::C8, &b).unwrap().chess_notation(), "O-O-O");
    }

    #[test]
    fn notation_promotion_always_prints_queen() {
        let b = board("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        let push = Move::new(Square::A7, Square::A8, &b)
            .unwrap()
            .with_promotion(PromotionPiece::Knight);
        assert_eq!(push.chess_notation(), "a8=Q");
        assert_eq!(push.to_coordinate(), "a7a8n");
        let capture = Move::new(Square::A7, Square::B8, &b).unwrap();
        assert_eq!(capture.chess_notation(), "axb8=Q");
        assert_eq!(capture.to_coordinate(), "a7b8q");
    }

    #[test]
    fn equality_keys_on_squares_only() {
        let b = board("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
        let plain = Move::new(Square::E5, Square::D6, &b).unwrap();
        let ep = Move::new_en_passant(Square::E5, Square::D6, &b).unwrap();
        assert_eq!(plain, ep);
        assert_eq!(plain.move_id(), 3 * 1000 + 4 * 100 + 2 * 10 + 3);

        let other = Move::new(Square::E5, Square::E6, &b).unwrap();
        assert_ne!(plain, other);

        let mut set = HashSet::new();
        set.insert(plain);
        set.insert(ep);
        set.insert(other);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn promotion_piece_letters() {
        for promo in PromotionPiece::ALL {
            assert_eq!(PromotionPiece::from_char(promo.to_char()), Some(promo));
        }
        assert_eq!(PromotionPiece::from_char('K'), None);
        assert_eq!(PromotionPiece::default(), PromotionPiece::Queen);
        assert_eq!(PromotionPiece::Rook.to_piece_kind(), PieceKind::Rook);
    }
}
