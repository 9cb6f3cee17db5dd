//! Perft node counts through the public API.

use tabiya_core::{Board, divide, perft};

#[test]
fn startpos_counts() {
    let mut board = Board::starting_position();
    let counts: Vec<u64> = (0..=3).map(|depth| perft(&mut board, depth)).collect();
    assert_eq!(counts, [1, 20, 400, 8_902]);
}

#[test]
fn counts_after_moves_match_fen() {
    // Play 1. e4 on the board and compare with the same position parsed fresh.
    let mut played = Board::starting_position();
    let e4 = played
        .valid_moves()
        .into_iter()
        .find(|mv| mv.to_coordinate() == "e2e4")
        .unwrap();
    played.make_move(e4, false);

    let mut parsed: Board = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3"
        .parse()
        .unwrap();
    assert_eq!(perft(&mut played, 2), perft(&mut parsed, 2));
    assert_eq!(perft(&mut played, 2), 600);
}

#[test]
fn divide_on_kiwipete() {
    let mut board: Board = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -"
        .parse()
        .unwrap();
    let split = divide(&mut board, 1);
    assert_eq!(split.len(), 48);
    assert!(split.iter().any(|(mv, _)| mv == "e1g1"));
    assert!(split.iter().any(|(mv, _)| mv == "e1c1"));
}
