//! Sliding piece generation shared by bishops, rooks, and queens.

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::square::Square;

/// Walk each direction until the edge or the first occupied square.
///
/// An enemy on that square is captured; an ally stops the ray short.
pub(super) fn gen_sliders(
    board: &Board,
    src: Square,
    slider: Piece,
    directions: &[(i8, i8)],
    list: &mut Vec<Move>,
) {
    for &(d_row, d_col) in directions {
        let mut cursor = src;
        while let Some(next) = cursor.offset(d_row, d_col) {
            match board.piece_at(next) {
                None => list.push(Move::normal(src, next, slider, None)),
                Some(other) => {
                    if other.color() != slider.color() {
                        list.push(Move::normal(src, next, slider, Some(other)));
                    }
                    break;
                }
            }
            cursor = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::square::Square;

    fn count_from(fen: &str, from: Square) -> usize {
        let board: Board = fen.parse().unwrap();
        board
            .all_possible_moves()
            .iter()
            .filter(|m| m.start() == from)
            .count()
    }

    #[test]
    fn rook_on_open_board() {
        assert_eq!(count_from("k7/8/8/8/3R4/8/8/7K w - - 0 1", Square::D4), 14);
    }

    #[test]
    fn bishop_on_open_board() {
        assert_eq!(count_from("k7/8/8/8/3B4/8/8/7K w - - 0 1", Square::D4), 13);
    }

    #[test]
    fn queen_is_rook_plus_bishop() {
        assert_eq!(count_from("k7/8/8/8/3Q4/8/8/7K w - - 0 1", Square::D4), 27);
    }

    #[test]
    fn ray_stops_at_first_piece() {
        let board: Board = "k7/8/8/3p4/8/8/3P4/3R3K w - - 0 1".parse().unwrap();
        let rook: Vec<_> = board
            .all_possible_moves()
            .into_iter()
            .filter(|m| m.start() == Square::D1)
            .collect();
        // Blocked north by its own pawn on d2.
        assert!(rook.iter().all(|m| m.end().col() != 3));
        assert_eq!(rook.len(), 6);

        let board: Board = "k7/8/8/3p4/8/8/8/3R3K w - - 0 1".parse().unwrap();
        let rook: Vec<_> = board
            .all_possible_moves()
            .into_iter()
            .filter(|m| m.start() == Square::D1)
            .collect();
        assert!(rook.iter().any(|m| m.end() == Square::D5 && m.is_capture()));
        assert!(!rook.iter().any(|m| m.end() == Square::D6));
    }
}
