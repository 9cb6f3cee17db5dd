//! The chess board: an 8x8 grid plus side to move, king locations, castling
//! rights, en passant target, and the move and rights logs.

use std::fmt;

use crate::castle_rights::CastleRights;
use crate::chess_move::{Move, PromotionPiece};
use crate::color::Color;
use crate::error::BoardError;
use crate::history::HistoryEntry;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::status::GameStatus;

/// Piece grid indexed `[row][col]`, row 0 being rank 8.
pub type Grid = [[Option<Piece>; 8]; 8];

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Authoritative game state. Mutated only through
/// [`make_move`](Board::make_move) and [`undo_move`](Board::undo_move).
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    squares: Grid,
    /// Which side moves next.
    pub(crate) side_to_move: Color,
    /// King location per color, indexed by [`Color::index()`].
    pub(crate) king_squares: [Square; Color::COUNT],
    pub(crate) castling: CastleRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) move_log: Vec<Move>,
    /// One entry per logged move.
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) status: GameStatus,
    promotion_choice: PromotionPiece,
}

impl Board {
    /// Return the standard starting position with all castling rights.
    pub fn starting_position() -> Board {
        let mut squares: Grid = [[None; 8]; 8];
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            squares[0][col] = Some(Piece::new(kind, Color::Black));
            squares[1][col] = Some(Piece::BLACK_PAWN);
            squares[6][col] = Some(Piece::WHITE_PAWN);
            squares[7][col] = Some(Piece::new(kind, Color::White));
        }

        Board {
            squares,
            side_to_move: Color::White,
            king_squares: [Square::E1, Square::E8],
            castling: CastleRights::ALL,
            en_passant: None,
            move_log: Vec::new(),
            history: Vec::new(),
            status: GameStatus::Unknown,
            promotion_choice: PromotionPiece::Queen,
        }
    }

    /// Build a board from a grid and its volatile state, locating the kings.
    ///
    /// # Errors
    ///
    /// Fails if either side does not have exactly one king, or pawns stand on
    /// a back rank.
    pub(crate) fn from_parts(
        squares: Grid,
        side_to_move: Color,
        castling: CastleRights,
        en_passant: Option<Square>,
    ) -> Result<Board, BoardError> {
        validate_grid(&squares)?;

        let mut king_squares = [Square::E1, Square::E8];
        for sq in Square::all() {
            if let Some(piece) = squares[sq.row() as usize][sq.col() as usize]
                && piece.kind() == PieceKind::King
            {
                king_squares[piece.color().index()] = sq;
            }
        }

        Ok(Board {
            squares,
            side_to_move,
            king_squares,
            castling,
            en_passant,
            move_log: Vec::new(),
            history: Vec::new(),
            status: GameStatus::Unknown,
            promotion_choice: PromotionPiece::Queen,
        })
    }

    /// Discard the game and return to the starting position.
    pub fn reset(&mut self) {
        *self = Board::starting_position();
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row() as usize][sq.col() as usize]
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.row() as usize][sq.col() as usize] = piece;
    }

    /// Return the whole piece grid, for drawing.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.squares
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn white_to_move(&self) -> bool {
        self.side_to_move == Color::White
    }

    /// Return the cached king location for `color`.
    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    /// Return the en passant target square, valid for the next move only.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Moves played so far, oldest first.
    #[inline]
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.move_log.last()
    }

    /// Castling rights held before each logged move, oldest first.
    pub fn castle_rights_log(&self) -> impl Iterator<Item = CastleRights> + '_ {
        self.history.iter().map(|entry| entry.castling)
    }

    /// Volatile state saved before each logged move, oldest first.
    #[inline]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Return `true` if the last move played promoted a pawn.
    pub fn pawn_promotion(&self) -> bool {
        self.last_move().is_some_and(Move::is_pawn_promotion)
    }

    /// Piece applied to promotion moves that carry no explicit choice.
    #[inline]
    pub fn promotion_choice(&self) -> PromotionPiece {
        self.promotion_choice
    }

    pub fn set_promotion_choice(&mut self, choice: PromotionPiece) {
        self.promotion_choice = choice;
    }

    /// Cached terminal status; [`GameStatus::Unknown`] until the next
    /// legal-move query after a move or undo.
    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn checkmate(&self) -> bool {
        self.status == GameStatus::Checkmate
    }

    #[inline]
    pub fn stalemate(&self) -> bool {
        self.status == GameStatus::Stalemate
    }

    /// Iterate over every occupied square and its piece, row-major.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Validate the structural integrity of the board.
    pub fn validate(&self) -> Result<(), BoardError> {
        validate_grid(&self.squares)
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

fn validate_grid(squares: &Grid) -> Result<(), BoardError> {
    for color in Color::ALL {
        let king = Piece::new(PieceKind::King, color);
        let count = squares
            .iter()
            .flatten()
            .filter(|&&piece| piece == Some(king))
            .count() as u32;
        if count != 1 {
            return Err(BoardError::InvalidKingCount {
                color: color.name(),
                count,
            });
        }
    }

    let back_ranks = squares[0].iter().chain(squares[7].iter());
    if back_ranks
        .flatten()
        .any(|piece| piece.kind() == PieceKind::Pawn)
    {
        return Err(BoardError::PawnsOnBackRank);
    }

    Ok(())
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.0.grid().iter().enumerate() {
            write!(f, "{}  ", 8 - row)?;
            for (col, cell) in cells.iter().enumerate() {
                let c = cell.map_or('.', Piece::fen_char);
                if col < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::castle_rights::CastleRights;
    use crate::color::Color;
    use crate::error::BoardError;
    use crate::piece::Piece;
    use crate::square::Square;
    use crate::status::GameStatus;

    #[test]
    fn starting_position_layout() {
        let board = Board::starting_position();
        board.validate().unwrap();
        assert_eq!(board.piece_at(Square::E1), Some(Piece::WHITE_KING));
        assert_eq!(board.piece_at(Square::D8), Some(Piece::BLACK_QUEEN));
        assert_eq!(board.piece_at(Square::A1), Some(Piece::WHITE_ROOK));
        assert_eq!(board.piece_at(Square::G8), Some(Piece::BLACK_KNIGHT));
        assert_eq!(board.piece_at(Square::C2), Some(Piece::WHITE_PAWN));
        assert_eq!(board.piece_at(Square::E4), None);
        assert_eq!(board.grid()[0][4], Some(Piece::BLACK_KING));
        assert_eq!(board.pieces().count(), 32);
    }

    #[test]
    fn starting_state() {
        let board = Board::starting_position();
        assert!(board.white_to_move());
        assert_eq!(board.king_square(Color::White), Square::E1);
        assert_eq!(board.king_square(Color::Black), Square::E8);
        assert_eq!(board.castling(), CastleRights::ALL);
        assert_eq!(board.en_passant(), None);
        assert!(board.move_log().is_empty());
        assert_eq!(board.status(), GameStatus::Unknown);
        assert!(!board.checkmate());
        assert!(!board.stalemate());
        assert!(!board.pawn_promotion());
    }

    #[test]
    fn validate_rejects_missing_king() {
        let err = "8/8/8/8/8/8/8/4K3 w - - 0 1".parse::<Board>().unwrap_err();
        assert!(matches!(
            err,
            crate::error::FenError::InvalidBoard {
                source: BoardError::InvalidKingCount { color: "black", count: 0 }
            }
        ));
    }

    #[test]
    fn validate_rejects_back_rank_pawn() {
        let result = "P3k3/8/8/8/8/8/8/4K3 w - - 0 1".parse::<Board>();
        assert!(result.is_err());
    }

    #[test]
    fn kings_located_from_fen() {
        let board: Board = "8/8/3k4/8/8/8/1K6/8 b - - 0 1".parse().unwrap();
        assert_eq!(board.king_square(Color::White), Square::B2);
        assert_eq!(board.king_square(Color::Black), Square::D6);
        assert!(!board.white_to_move());
    }

    #[test]
    fn pretty_print() {
        let board = Board::starting_position();
        let output = format!("{}", board.pretty());
        assert!(output.starts_with("8  r n b q k b n r"));
        assert!(output.contains("1  R N B Q K B N R"));
        assert!(output.ends_with("a b c d e f g h"));
    }

    #[test]
    fn reset_restores_start() {
        let mut board: Board = "8/8/3k4/8/8/8/1K6/8 b - - 0 1".parse().unwrap();
        board.reset();
        assert_eq!(board, Board::starting_position());
    }
}
