//! Core chess rules: board state, move generation, legality, and game end.

mod attacks;
mod board;
mod castle_rights;
mod chess_move;
mod color;
mod error;
mod fen;
mod history;
mod make_move;
mod material;
mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod probe;
mod square;
mod status;

pub use board::{Board, Grid, PrettyBoard};
pub use castle_rights::{CastleRights, CastleSide};
pub use chess_move::{Move, PromotionPiece};
pub use color::Color;
pub use error::{BoardError, FenError, SquareError};
pub use fen::STARTING_FEN;
pub use history::HistoryEntry;
pub use material::{MATERIAL_VALUE, material_balance};
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use square::Square;
pub use status::GameStatus;
