//! Line-oriented text front end for tabiya.

pub mod command;
pub mod config;
pub mod error;
pub mod session;

pub use command::Command;
pub use config::{ShellConfig, ShellOption};
pub use error::ShellError;
pub use session::Shell;
