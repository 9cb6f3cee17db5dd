//! Shell errors.

use tabiya_core::FenError;

/// Errors that can occur while reading or executing shell commands.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    /// The first word of the line is not a known command or a move.
    #[error("unknown command: {command}")]
    UnknownCommand {
        /// The unrecognized word.
        command: String,
    },

    /// Move text that is not two algebraic squares.
    #[error("malformed move: {text}")]
    MalformedMove {
        /// The text that failed to parse.
        text: String,
    },

    /// A command was given without a required argument.
    #[error("{command} needs a {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    /// An argument value is not one the command accepts.
    #[error("invalid {argument}: {value}")]
    InvalidArgument {
        argument: &'static str,
        value: String,
    },

    /// Failed to parse a FEN string.
    #[error("invalid FEN \"{fen}\": {source}")]
    InvalidFen {
        /// The FEN string that failed to parse.
        fen: String,
        source: FenError,
    },

    /// The move is well formed but not legal in the current position.
    #[error("illegal move: {text}")]
    IllegalMove {
        /// The move as typed.
        text: String,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
