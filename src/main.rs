use std::io;

use anyhow::Result;
use tracing::info;

use tabiya_core::STARTING_FEN;
use tabiya_shell::{Shell, ShellConfig};

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!(fen = STARTING_FEN, "tabiya starting");

    let mut shell = Shell::new(ShellConfig::default());
    shell.run(io::stdin().lock(), &mut io::stdout().lock())?;
    Ok(())
}
