//! FEN string parsing and serialization for [`Board`].

use std::fmt;
use std::str::FromStr;

use crate::board::{Board, Grid};
use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::FenError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl FromStr for Board {
    type Err = FenError;

    /// Parse the placement, side, castling, and en passant fields.
    ///
    /// The two move counters may be omitted. When present they must be
    /// numbers, but the board keeps no clock so their values are dropped.
    fn from_str(fen: &str) -> Result<Board, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() != 4 && fields.len() != 6 {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let squares = parse_placement(fields[0])?;

        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidColor {
                    found: other.to_string(),
                });
            }
        };

        let castling = CastleRights::from_fen(fields[2])?;

        let en_passant = if fields[3] == "-" {
            None
        } else {
            let sq = Square::from_algebraic(fields[3])
                .filter(|&sq| en_passant_fits(&squares, side_to_move, sq))
                .ok_or_else(|| FenError::InvalidEnPassant {
                    found: fields[3].to_string(),
                })?;
            Some(sq)
        };

        if fields.len() == 6 {
            for (field, value) in [("halfmove clock", fields[4]), ("fullmove number", fields[5])] {
                value
                    .parse::<u16>()
                    .map_err(|_| FenError::InvalidMoveCounter {
                        field,
                        found: value.to_string(),
                    })?;
            }
        }

        Ok(Board::from_parts(squares, side_to_move, castling, en_passant)?)
    }
}

/// An en passant target must sit behind an enemy pawn that could just have
/// made a double push, on the row the side to move can capture onto.
fn en_passant_fits(squares: &Grid, side_to_move: Color, target: Square) -> bool {
    let expected_row = match side_to_move {
        Color::White => 2,
        Color::Black => 5,
    };
    let at = |sq: Square| squares[sq.row() as usize][sq.col() as usize];
    let pushed_pawn = Piece::new(PieceKind::Pawn, side_to_move.flip());

    target.row() == expected_row
        && at(target).is_none()
        && target
            .offset(-side_to_move.forward(), 0)
            .is_some_and(|sq| at(sq) == Some(pushed_pawn))
}

fn parse_placement(placement: &str) -> Result<Grid, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut squares: Grid = [[None; 8]; 8];
    // FEN lists rank 8 first, which is grid row 0.
    for (rank_index, rank_str) in ranks.iter().enumerate() {
        let mut col: usize = 0;
        for c in rank_str.chars() {
            if let Some(digit) = c.to_digit(10) {
                if !(1..=8).contains(&digit) {
                    return Err(FenError::InvalidPieceChar { character: c });
                }
                col += digit as usize;
            } else {
                let piece =
                    Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
                if col >= 8 {
                    return Err(FenError::BadRankLength {
                        rank_index,
                        length: col + 1,
                    });
                }
                squares[rank_index][col] = Some(piece);
                col += 1;
            }
        }

        if col != 8 {
            return Err(FenError::BadRankLength {
                rank_index,
                length: col,
            });
        }
    }
    Ok(squares)
}

impl fmt::Display for Board {
    /// Write the first four FEN fields.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.grid().iter().enumerate() {
            let mut empty_count = 0u8;
            for cell in cells {
                match cell {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{}", piece.fen_char())?;
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }
            if row < 7 {
                write!(f, "/")?;
            }
        }

        write!(f, " {}", self.side_to_move())?;
        write!(f, " {}", self.castling())?;
        match self.en_passant() {
            Some(sq) => write!(f, " {sq}"),
            None => write!(f, " -"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::STARTING_FEN;
    use crate::board::Board;
    use crate::error::{BoardError, FenError};

    fn roundtrip(fen: &str) {
        let board: Board = fen.parse().unwrap();
        let output = format!("{board}");
        assert_eq!(output, fen, "FEN roundtrip failed");
        let board2: Board = output.parse().unwrap();
        assert_eq!(board, board2);
    }

    #[test]
    fn roundtrip_starting() {
        roundtrip("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -");
    }

    #[test]
    fn roundtrip_sicilian() {
        roundtrip("rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6");
    }

    #[test]
    fn roundtrip_kiwipete() {
        roundtrip("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -");
    }

    #[test]
    fn roundtrip_endgame() {
        roundtrip("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -");
    }

    #[test]
    fn roundtrip_black_to_move() {
        roundtrip("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3");
    }

    #[test]
    fn counters_are_accepted_and_dropped() {
        let board: Board = STARTING_FEN.parse().unwrap();
        assert_eq!(
            board.to_string(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -"
        );
    }

    #[test]
    fn starting_position_matches_fen() {
        let from_constructor = Board::starting_position();
        let from_fen: Board = STARTING_FEN.parse().unwrap();
        assert_eq!(from_constructor, from_fen);
    }

    #[test]
    fn error_wrong_field_count() {
        let result = "e4 e5".parse::<Board>();
        assert_eq!(result, Err(FenError::WrongFieldCount { found: 2 }));
        let five = "8/8/8/8/8/8/8/8 w - - 0".parse::<Board>();
        assert!(matches!(five, Err(FenError::WrongFieldCount { found: 5 })));
    }

    #[test]
    fn error_invalid_piece_char() {
        let result = "rnbqkbnr/pppppppp/8/8/8/8/PPPPXPPP/RNBQKBNR w KQkq - 0 1".parse::<Board>();
        assert!(matches!(result, Err(FenError::InvalidPieceChar { character: 'X' })));
    }

    #[test]
    fn error_bad_rank_length() {
        let result = "rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1".parse::<Board>();
        assert!(matches!(result, Err(FenError::BadRankLength { rank_index: 1, length: 7 })));
    }

    #[test]
    fn error_invalid_color() {
        let result = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1".parse::<Board>();
        assert!(matches!(result, Err(FenError::InvalidColor { .. })));
    }

    #[test]
    fn error_invalid_castling() {
        let result = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w XQkq - 0 1".parse::<Board>();
        assert!(matches!(result, Err(FenError::InvalidCastlingChar { character: 'X' })));
    }

    #[test]
    fn error_invalid_en_passant() {
        let result = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9 0 1".parse::<Board>();
        assert!(matches!(result, Err(FenError::InvalidEnPassant { .. })));
        let wrong_rank = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e4 0 1".parse::<Board>();
        assert!(matches!(wrong_rank, Err(FenError::InvalidEnPassant { .. })));
    }

    #[test]
    fn en_passant_must_match_side_to_move() {
        // A rank 3 target is only valid with Black to move.
        let white_to_move = "4k3/8/8/8/8/8/3PK3/8 w - e3".parse::<Board>();
        assert!(matches!(white_to_move, Err(FenError::InvalidEnPassant { .. })));
        let black_to_move = "4k3/8/8/8/8/8/3PK3/8 b - e3".parse::<Board>();
        assert!(matches!(black_to_move, Err(FenError::InvalidEnPassant { .. })));

        let ok: Board = "4k3/8/8/8/4P3/8/3P1K2/8 b - e3".parse().unwrap();
        assert_eq!(ok.en_passant(), Some(crate::square::Square::E3));
    }

    #[test]
    fn en_passant_needs_the_pushed_pawn() {
        let no_pawn = "4k3/8/8/8/8/8/8/4K3 w - d6".parse::<Board>();
        assert!(matches!(no_pawn, Err(FenError::InvalidEnPassant { .. })));
        let own_pawn = "4k3/8/8/3P4/8/8/8/4K3 w - d6".parse::<Board>();
        assert!(matches!(own_pawn, Err(FenError::InvalidEnPassant { .. })));
        let occupied = "4k3/8/3n4/3p4/8/8/8/4K3 w - d6".parse::<Board>();
        assert!(matches!(occupied, Err(FenError::InvalidEnPassant { .. })));
    }

    #[test]
    fn error_invalid_move_counter() {
        let result = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - abc 1".parse::<Board>();
        assert!(matches!(
            result,
            Err(FenError::InvalidMoveCounter { field: "halfmove clock", .. })
        ));
    }

    #[test]
    fn error_missing_king() {
        let result = "8/8/8/8/8/8/8/4K3 w - -".parse::<Board>();
        assert!(matches!(
            result,
            Err(FenError::InvalidBoard {
                source: BoardError::InvalidKingCount { color: "black", count: 0 }
            })
        ));
    }
}
