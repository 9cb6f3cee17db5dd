//! Shell command parsing.

use tabiya_core::{Board, PromotionPiece, Square};

use crate::config::ShellOption;
use crate::error::ShellError;

/// A parsed shell command.
#[derive(Debug)]
pub enum Command {
    /// `e2e4`, `e2 e4`, `e7e8n` -- attempt a move.
    Move {
        start: Square,
        end: Square,
        promotion: Option<PromotionPiece>,
        /// The move as typed, for error messages.
        text: String,
    },
    /// `undo` / `z` -- take back the last move.
    Undo,
    /// `reset` / `new` -- start a new game.
    Reset,
    /// `moves` -- list the legal moves.
    Moves,
    /// `board` -- print the board.
    Board,
    /// `fen` -- print the position as FEN.
    Fen,
    /// `status` -- report check, checkmate, or stalemate.
    Status,
    /// `eval` -- print the material balance.
    Eval,
    /// `log` -- print the moves played so far.
    Log,
    /// `position <fen>` -- load a position.
    Position(Board),
    /// `promote <q|r|b|n>` -- set the default promotion piece.
    Promote(PromotionPiece),
    /// `set <option> <on|off>` -- change a display setting.
    Set(ShellOption),
    /// `help` -- list the commands.
    Help,
    /// `quit` / `exit` -- leave the shell.
    Quit,
}

/// Parse a single line of shell input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ShellError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&first) = tokens.first() else {
        return Err(ShellError::UnknownCommand {
            command: String::new(),
        });
    };

    match first {
        "undo" | "z" => Ok(Command::Undo),
        "reset" | "new" => Ok(Command::Reset),
        "moves" => Ok(Command::Moves),
        "board" => Ok(Command::Board),
        "fen" => Ok(Command::Fen),
        "status" => Ok(Command::Status),
        "eval" => Ok(Command::Eval),
        "log" => Ok(Command::Log),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "position" => parse_position(&tokens[1..]),
        "promote" => parse_promote(&tokens[1..]),
        "set" => parse_set(&tokens[1..]),
        _ => parse_move(&tokens),
    }
}

/// Parse `position <fen>` or `position startpos`.
fn parse_position(tokens: &[&str]) -> Result<Command, ShellError> {
    if tokens.is_empty() {
        return Err(ShellError::MissingArgument {
            command: "position",
            argument: "FEN string",
        });
    }
    if tokens == ["startpos"] {
        return Ok(Command::Position(Board::starting_position()));
    }

    let fen = tokens.join(" ");
    let board: Board = fen
        .parse()
        .map_err(|source| ShellError::InvalidFen { fen: fen.clone(), source })?;
    Ok(Command::Position(board))
}

fn parse_promote(tokens: &[&str]) -> Result<Command, ShellError> {
    let value = tokens.first().ok_or(ShellError::MissingArgument {
        command: "promote",
        argument: "piece letter",
    })?;
    parse_promotion_letter(value).map(Command::Promote)
}

/// Parse `set <show_board|show_notation> <on|off>`.
fn parse_set(tokens: &[&str]) -> Result<Command, ShellError> {
    let (Some(&name), Some(&value)) = (tokens.first(), tokens.get(1)) else {
        return Err(ShellError::MissingArgument {
            command: "set",
            argument: "option name and value",
        });
    };

    let on = match value {
        "on" | "true" | "yes" => true,
        "off" | "false" | "no" => false,
        other => {
            return Err(ShellError::InvalidArgument {
                argument: "switch",
                value: other.to_string(),
            });
        }
    };

    match name {
        "show_board" => Ok(Command::Set(ShellOption::ShowBoard(on))),
        "show_notation" => Ok(Command::Set(ShellOption::ShowNotation(on))),
        other => Err(ShellError::InvalidArgument {
            argument: "option",
            value: other.to_string(),
        }),
    }
}

/// Parse a move typed as one token (`e2e4`, `e7e8q`) or two (`e2 e4`, `e7 e8q`).
fn parse_move(tokens: &[&str]) -> Result<Command, ShellError> {
    let text = tokens.join(" ");
    let joined: String = tokens.concat();
    let looks_like_move = matches!(tokens.len(), 1 | 2) && matches!(joined.len(), 4 | 5);

    let start = joined.get(0..2).and_then(Square::from_algebraic);
    let end = joined.get(2..4).and_then(Square::from_algebraic);
    let (true, Some(start), Some(end)) = (looks_like_move, start, end) else {
        // Only flag text that starts like a square as a bad move.
        return if start.is_some() {
            Err(ShellError::MalformedMove { text })
        } else {
            Err(ShellError::UnknownCommand { command: text })
        };
    };

    let promotion = match joined.get(4..) {
        Some(letter) if !letter.is_empty() => Some(parse_promotion_letter(letter)?),
        _ => None,
    };

    Ok(Command::Move {
        start,
        end,
        promotion,
        text,
    })
}

fn parse_promotion_letter(value: &str) -> Result<PromotionPiece, ShellError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => PromotionPiece::from_char(c),
        _ => None,
    }
    .ok_or_else(|| ShellError::InvalidArgument {
        argument: "promotion piece",
        value: value.to_string(),
    })
}
