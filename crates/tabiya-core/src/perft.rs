//! Perft (performance test) for move generation correctness verification.

use crate::board::Board;

/// Count the number of leaf nodes at the given depth.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of legal moves without descending. Every move is taken back and the
/// cached status restored, so the board ends where it started.
pub fn perft(board: &mut Board, depth: usize) -> u64 {
    let status = board.status;
    let nodes = count_leaves(board, depth);
    board.status = status;
    nodes
}

fn count_leaves(board: &mut Board, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = board.valid_moves();

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        let mut child = board.probe(mv);
        nodes += count_leaves(&mut child, depth - 1);
    }
    nodes
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns a vector of `(coordinate_move, node_count)` pairs sorted alphabetically.
pub fn divide(board: &mut Board, depth: usize) -> Vec<(String, u64)> {
    let status = board.status;
    let moves = board.valid_moves();
    board.status = status;
    let mut results: Vec<(String, u64)> = moves
        .into_iter()
        .map(|mv| {
            let mut child = board.probe(mv);
            let count = if depth <= 1 {
                1
            } else {
                count_leaves(&mut child, depth - 1)
            };
            (mv.to_coordinate(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::status::GameStatus;

    // --- Position 1: Starting position ---

    #[test]
    fn perft_startpos_depth_1() {
        let mut board = Board::starting_position();
        assert_eq!(perft(&mut board, 1), 20);
    }

    #[test]
    fn perft_startpos_depth_2() {
        let mut board = Board::starting_position();
        assert_eq!(perft(&mut board, 2), 400);
    }

    #[test]
    fn perft_startpos_depth_3() {
        let mut board = Board::starting_position();
        assert_eq!(perft(&mut board, 3), 8_902);
    }

    #[test]
    #[ignore] // slow
    fn perft_startpos_depth_4() {
        let mut board = Board::starting_position();
        assert_eq!(perft(&mut board, 4), 197_281);
    }

    // --- Position 2: Kiwipete ---

    fn kiwipete() -> Board {
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1"
            .parse()
            .unwrap()
    }

    #[test]
    fn perft_kiwipete_depth_1() {
        assert_eq!(perft(&mut kiwipete(), 1), 48);
    }

    #[test]
    fn perft_kiwipete_depth_2() {
        assert_eq!(perft(&mut kiwipete(), 2), 2_039);
    }

    #[test]
    #[ignore] // slow
    fn perft_kiwipete_depth_3() {
        assert_eq!(perft(&mut kiwipete(), 3), 97_862);
    }

    // --- Position 3: rook and pawn endgame ---

    fn position3() -> Board {
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1".parse().unwrap()
    }

    #[test]
    fn perft_position3_depth_1() {
        assert_eq!(perft(&mut position3(), 1), 14);
    }

    #[test]
    fn perft_position3_depth_2() {
        assert_eq!(perft(&mut position3(), 2), 191);
    }

    #[test]
    fn perft_position3_depth_3() {
        assert_eq!(perft(&mut position3(), 3), 2_812);
    }

    #[test]
    #[ignore] // slow
    fn perft_position3_depth_4() {
        assert_eq!(perft(&mut position3(), 4), 43_238);
    }

    #[test]
    fn perft_leaves_board_untouched() {
        let mut board = kiwipete();
        let before = board.to_string();
        perft(&mut board, 2);
        assert_eq!(board.to_string(), before);
        assert!(board.move_log().is_empty());
    }

    #[test]
    fn perft_keeps_cached_status() {
        let mut board = kiwipete();
        assert_eq!(board.status(), GameStatus::Unknown);
        perft(&mut board, 2);
        assert_eq!(board.status(), GameStatus::Unknown);
        divide(&mut board, 1);
        assert_eq!(board.status(), GameStatus::Unknown);

        board.valid_moves();
        perft(&mut board, 1);
        assert_eq!(board.status(), GameStatus::InPlay);
    }

    #[test]
    fn divide_sums_to_perft() {
        let mut board = Board::starting_position();
        let split = divide(&mut board, 2);
        assert_eq!(split.len(), 20);
        assert_eq!(split.iter().map(|(_, n)| n).sum::<u64>(), 400);
        assert_eq!(split[0], ("a2a3".to_string(), 20));
        assert!(split.windows(2).all(|w| w[0].0 < w[1].0));
    }
}
