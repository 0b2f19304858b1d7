//! Completions command implementation.
//!
//! Generates shell completion scripts on stdout.

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;

/// Executes the completions command.
pub fn execute(shell: Shell) -> io::Result<()> {
    let mut command = Cli::command();
    generate(shell, &mut command, "doce", &mut io::stdout());
    Ok(())
}
