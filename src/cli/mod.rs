//! cli
//!
//! Command-line interface layer.
//!
//! # Responsibilities
//!
//! - Load configuration (falling back to defaults on failure)
//! - Build the command tree, including configured branch types
//! - Parse arguments and dispatch to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. Branch names are derived by [`crate::core`] and
//! created through [`crate::git`]; handlers only wire them together and
//! report results.

pub mod args;
pub mod commands;

pub use args::{build_command, Cli, Command, ConfigAction, Shell};

use std::path::PathBuf;

use anyhow::{bail, Context as _, Result};
use clap::FromArgMatches;

use crate::core::config::{Config, ConfigLoadResult};
use crate::ui::logging;
use crate::ui::output::{Output, Verbosity};

/// Execution context shared by command handlers.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Working directory override.
    pub cwd: Option<PathBuf>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
}

impl Context {
    /// Output verbosity for these flags.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }

    /// Output handle for these flags.
    pub fn output(&self) -> Output {
        Output::new(self.verbosity())
    }

    /// Directory to operate in.
    pub fn working_dir(&self) -> Result<PathBuf> {
        match &self.cwd {
            Some(cwd) => Ok(cwd.clone()),
            None => std::env::current_dir().context("Failed to determine current directory"),
        }
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let (config, load_warnings): (Config, Vec<String>) = match Config::load() {
        Ok(ConfigLoadResult { config, warnings }) => {
            let warnings = warnings
                .into_iter()
                .map(|w| format!("{} ({})", w.message, w.path.display()))
                .collect();
            (config, warnings)
        }
        Err(e) => (
            Config::default(),
            vec![format!("could not load config, using defaults: {}", e)],
        ),
    };

    let mut cmd = build_command(&config);
    let matches = cmd.clone().get_matches();
    let cli = Cli::from_arg_matches(&matches)?;

    let ctx = Context {
        cwd: cli.cwd.clone(),
        debug: cli.debug,
        quiet: cli.quiet,
    };
    logging::init(ctx.verbosity());

    let out = ctx.output();
    for warning in load_warnings {
        out.warn(warning);
    }

    let Some((name, sub)) = matches.subcommand() else {
        cmd.print_help()?;
        return Ok(());
    };

    if let Some(branch_type) = config.branch_types().into_iter().find(|t| t.as_str() == name) {
        let words: Vec<String> = sub
            .get_many::<String>(args::WORDS_ARG)
            .into_iter()
            .flatten()
            .cloned()
            .collect();
        let dry_run = sub.get_flag(args::DRY_RUN_ARG);
        return commands::create(&ctx, &config, &branch_type, &words, dry_run);
    }

    match cli.command {
        Some(Command::Config { action }) => match action {
            ConfigAction::Show { json } => commands::config_show(&ctx, &config, json),
            ConfigAction::Path => commands::config_path(&ctx, &config),
            ConfigAction::Init { force } => commands::config_init(&ctx, force),
        },
        Some(Command::Completion { shell }) => commands::completion(shell, &mut cmd),
        None => bail!("Unknown command: {}", name),
    }
}
