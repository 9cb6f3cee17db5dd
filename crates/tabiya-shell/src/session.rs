//! The interactive session: one board, one config, commands in, text out.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use tabiya_core::{Board, Color, GameStatus, Move, PromotionPiece, Square, material_balance};

use crate::command::{Command, parse_command};
use crate::config::ShellConfig;
use crate::error::ShellError;

/// Whether the read loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

const HELP: &str = "\
commands:
  e2e4 | e2 e4 | e7e8n   make a move (optional promotion letter)
  undo | z               take back the last move
  reset | new            start a new game
  moves                  list legal moves
  board | fen | status   show the position
  eval                   material balance (positive favours white)
  log                    moves played so far
  position <fen>         load a position
  promote <q|r|b|n>      default promotion piece
  set <show_board|show_notation> <on|off>
  quit";

/// Owns the game and drives it from parsed commands.
pub struct Shell {
    board: Board,
    config: ShellConfig,
}

impl Shell {
    /// Create a shell holding the starting position.
    pub fn new(config: ShellConfig) -> Self {
        let mut board = Board::starting_position();
        board.set_promotion_choice(config.promotion);
        Self { board, config }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Read commands line by line until `quit` or end of input.
    ///
    /// Bad input is reported to `out` and the loop continues; only I/O
    /// failures end it early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<(), ShellError> {
        info!("tabiya shell starting");
        writeln!(out, "{}", self.board.pretty())?;

        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received shell command");

            let result = parse_command(trimmed).and_then(|cmd| self.execute(cmd, out));
            match result {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(ShellError::Io { source }) => return Err(ShellError::Io { source }),
                Err(e) => {
                    warn!(error = %e, "command rejected");
                    writeln!(out, "error: {e}")?;
                }
            }
        }

        info!("tabiya shell shutting down");
        Ok(())
    }

    /// Execute one command, writing any output to `out`.
    pub fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<Flow, ShellError> {
        match cmd {
            Command::Move {
                start,
                end,
                promotion,
                text,
            } => self.handle_move(start, end, promotion, text, out)?,
            Command::Undo => self.handle_undo(out)?,
            Command::Reset => {
                self.board.reset();
                self.board.set_promotion_choice(self.config.promotion);
                writeln!(out, "{}", self.board.pretty())?;
            }
            Command::Moves => self.handle_moves(out)?,
            Command::Board => writeln!(out, "{}", self.board.pretty())?,
            Command::Fen => writeln!(out, "{}", self.board)?,
            Command::Status => self.report_status(out)?,
            Command::Eval => writeln!(out, "material {:+}", material_balance(&self.board))?,
            Command::Log => self.handle_log(out)?,
            Command::Position(board) => {
                self.board = board;
                self.board.set_promotion_choice(self.config.promotion);
                writeln!(out, "{}", self.board.pretty())?;
            }
            Command::Promote(piece) => {
                self.config.promotion = piece;
                self.board.set_promotion_choice(piece);
                writeln!(out, "promotion piece set to {}", piece.to_char())?;
            }
            Command::Set(option) => self.config.apply(option),
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Match the typed squares against the legal list and play the
    /// generator's move, which carries the special-move flags.
    fn handle_move<W: Write>(
        &mut self,
        start: Square,
        end: Square,
        promotion: Option<PromotionPiece>,
        text: String,
        out: &mut W,
    ) -> Result<(), ShellError> {
        if matches!(self.board.status(), GameStatus::Checkmate | GameStatus::Stalemate) {
            return Err(ShellError::IllegalMove { text });
        }
        let candidate = Move::new(start, end, &self.board);
        let legal = candidate.and_then(|c| {
            self.board
                .valid_moves()
                .into_iter()
                .find(|mv| *mv == c)
        });
        let Some(mut mv) = legal else {
            return Err(ShellError::IllegalMove { text });
        };
        if let Some(piece) = promotion {
            if !mv.is_pawn_promotion() {
                return Err(ShellError::InvalidArgument {
                    argument: "promotion piece for a non-promoting move",
                    value: piece.to_char().to_string(),
                });
            }
            mv = mv.with_promotion(piece);
        }

        self.board.make_move(mv, true);
        if self.config.show_notation {
            writeln!(out, "{}", mv.chess_notation())?;
        }
        if self.config.show_board {
            writeln!(out, "{}", self.board.pretty())?;
        }
        self.report_status(out)
    }

    fn handle_undo<W: Write>(&mut self, out: &mut W) -> Result<(), ShellError> {
        let Some(last) = self.board.last_move().copied() else {
            writeln!(out, "nothing to undo")?;
            return Ok(());
        };
        self.board.undo_move();
        writeln!(out, "undid {}", last.chess_notation())?;
        if self.config.show_board {
            writeln!(out, "{}", self.board.pretty())?;
        }
        Ok(())
    }

    fn handle_moves<W: Write>(&mut self, out: &mut W) -> Result<(), ShellError> {
        let moves = self.board.valid_moves();
        writeln!(out, "{} legal moves", moves.len())?;
        for mv in &moves {
            writeln!(out, "  {} {}", mv.to_coordinate(), mv.chess_notation())?;
        }
        Ok(())
    }

    fn handle_log<W: Write>(&mut self, out: &mut W) -> Result<(), ShellError> {
        let mut line = String::new();
        let mut number = 1;
        for (i, mv) in self.board.move_log().iter().enumerate() {
            match mv.piece_moved().color() {
                Color::White => line.push_str(&format!("{number}. {mv} ")),
                Color::Black if i == 0 => line.push_str(&format!("{number}... {mv} ")),
                Color::Black => line.push_str(&format!("{mv} ")),
            }
            if mv.piece_moved().color() == Color::Black {
                number += 1;
            }
        }
        writeln!(out, "{}", line.trim_end())?;
        Ok(())
    }

    /// Report the outcome for the side to move: checkmate, stalemate, check,
    /// or nothing when play simply continues.
    fn report_status<W: Write>(&mut self, out: &mut W) -> Result<(), ShellError> {
        let side = self.board.side_to_move();
        // Refreshes the cached status as a side effect.
        self.board.valid_moves();
        match self.board.status() {
            GameStatus::Checkmate => {
                info!(winner = side.flip().name(), "game over by checkmate");
                writeln!(out, "checkmate, {} wins", side.flip().name())?;
            }
            GameStatus::Stalemate => {
                info!("game over by stalemate");
                writeln!(out, "stalemate")?;
            }
            _ if self.board.in_check() => writeln!(out, "{} is in check", side.name())?,
            _ => {}
        }
        Ok(())
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(ShellConfig::default())
    }
}
