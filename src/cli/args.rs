//! cli::args
//!
//! Command-line argument definitions.
//!
//! The static surface (global flags, `config`, `completion`) uses clap
//! derive. Branch-type subcommands come from configuration, so they are
//! added to the derived [`clap::Command`] at runtime by [`build_command`].
//!
//! # Global Flags
//!
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Arg, ArgAction, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use crate::core::config::Config;
use crate::core::types::BranchType;

/// Id of the description-words argument on branch-type subcommands.
pub const WORDS_ARG: &str = "words";
/// Id of the dry-run flag on branch-type subcommands.
pub const DRY_RUN_ARG: &str = "dry_run";

/// branch - create git branches with consistent naming patterns
#[derive(Parser, Debug)]
#[command(name = "branch")]
#[command(
    version,
    about = "Create git branches with consistent naming patterns",
    long_about = "Create git branches using a standardized pattern: <type>/<ticket>-<description>\n\n\
        Each configured branch type is a subcommand. If the first word matches a \
        ticket pattern (e.g. PIP-1234, #123) it leads the description."
)]
pub struct Cli {
    /// Run as if branch was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Built-in commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show or initialize configuration
    #[command(
        name = "config",
        after_help = "\
EXAMPLES:
    # Show the effective configuration
    branch config show

    # Write a config file with the defaults, ready to edit
    branch config init"
    )]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(name = "completion")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// `config` subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the path of the config file in use
    Path,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Build the full command: the derived surface plus one subcommand per
/// configured branch type.
pub fn build_command(config: &Config) -> clap::Command {
    let mut cmd = Cli::command()
        .subcommand_required(true)
        .arg_required_else_help(true);

    for branch_type in config.branch_types() {
        let description = config.description(&branch_type);
        cmd = cmd.subcommand(branch_type_command(&branch_type, description));
    }

    cmd
}

fn branch_type_command(branch_type: &BranchType, description: String) -> clap::Command {
    let name = branch_type.as_str();
    let long_about = format!(
        "{description}\n\n\
        If the first word matches a known ticket pattern (e.g., PIP-1234, #123), \
        it will be included in the branch name."
    );
    let after_help = format!(
        "\
EXAMPLES:
    branch {name} PIP-1234 implement new feature  ->  {name}/pip-1234-implement-new-feature
    branch {name} implement new feature           ->  {name}/implement-new-feature"
    );

    clap::Command::new(name.to_string())
        .about(description)
        .long_about(long_about)
        .after_help(after_help)
        .arg(
            Arg::new(WORDS_ARG)
                .value_name("DESCRIPTION")
                .help("Optional ticket followed by description words")
                .num_args(1..)
                .required(true),
        )
        .arg(
            Arg::new(DRY_RUN_ARG)
                .short('n')
                .long("dry-run")
                .help("Print the branch name without creating it")
                .action(ArgAction::SetTrue),
        )
}
