//! Shell completion generation command.
//!
//! Responsibilities:
//! - Generate shell completion scripts for the supported shells (bash, zsh,
//!   fish, powershell, elvish).
//!
//! Does NOT handle:
//! - Direct installation of completions (user must redirect output to the
//!   appropriate location).
//!
//! Invariants:
//! - Output is always written to stdout.
//! - Needs no cluster connection or configuration.

use clap::CommandFactory;
use clap_complete::{Shell, generate};
use std::io;

/// Generate shell completions for the specified shell.
pub fn run(shell: Shell) {
    let mut cmd = crate::args::Cli::command();
    generate(shell, &mut cmd, "osdoctor", &mut io::stdout());
}
