//! create command - Derive a branch name and create the branch

use anyhow::{Context as _, Result};
use tracing::debug;

use crate::cli::Context;
use crate::core::config::Config;
use crate::core::naming::BranchSpec;
use crate::core::types::{BranchName, BranchType};
use crate::git::Git;

/// Derive the branch name for `words` under `branch_type`.
///
/// The first word is treated as a ticket if it matches a configured pattern.
pub fn resolve_name(
    config: &Config,
    branch_type: &BranchType,
    words: &[String],
) -> Result<BranchName> {
    let matcher = config.ticket_matcher();
    let spec = BranchSpec::from_args(branch_type.as_str(), words, &matcher);
    debug!(
        branch_type = %spec.branch_type,
        ticket = ?spec.ticket,
        words = ?spec.words,
        "parsed branch request"
    );

    let name = spec.branch_name();
    BranchName::new(name.as_str())
        .with_context(|| format!("Derived branch name '{}' is not valid", name))
}

/// Create and switch to a new branch.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `config` - Loaded configuration (ticket patterns)
/// * `branch_type` - Branch-type keyword chosen by subcommand
/// * `words` - Optional ticket followed by description words
/// * `dry_run` - Print the name without touching the repository
pub fn create(
    ctx: &Context,
    config: &Config,
    branch_type: &BranchType,
    words: &[String],
    dry_run: bool,
) -> Result<()> {
    let name = resolve_name(config, branch_type, words)?;
    let out = ctx.output();

    if dry_run {
        out.result(&name);
        return Ok(());
    }

    let cwd = ctx.working_dir()?;
    let git = Git::open(&cwd)?;
    git.create_and_checkout(&name)
        .with_context(|| format!("Failed to create branch '{}'", name))?;

    out.status(format!("Created and switched to branch: {}", name));
    Ok(())
}
