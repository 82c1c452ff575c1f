//! `secretslide completions` — generate shell completion scripts.
//!
//! Usage:
//!   secretslide completions bash > ~/.bash_completion.d/secretslide
//!   secretslide completions zsh

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::errors::Result;

/// Execute the `completions` command.
pub fn execute(shell: Shell) -> Result<()> {
    write_completions(shell, &mut io::stdout())
}

fn write_completions(shell: Shell, out: &mut dyn Write) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "secretslide", out);
    out.flush()?;
    Ok(())
}
