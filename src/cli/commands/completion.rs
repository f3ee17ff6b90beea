//! completion command - Generate shell completion scripts

use crate::cli::args::Shell;
use anyhow::Result;
use clap_complete::{generate, shells};

/// Generate shell completion scripts for `cmd`, branch-type subcommands included.
pub fn completion(shell: Shell, cmd: &mut clap::Command) -> Result<()> {
    let name = cmd.get_name().to_string();
    let mut out = std::io::stdout();

    match shell {
        Shell::Bash => generate(shells::Bash, cmd, &name, &mut out),
        Shell::Zsh => generate(shells::Zsh, cmd, &name, &mut out),
        Shell::Fish => generate(shells::Fish, cmd, &name, &mut out),
        Shell::PowerShell => generate(shells::PowerShell, cmd, &name, &mut out),
    }

    Ok(())
}
