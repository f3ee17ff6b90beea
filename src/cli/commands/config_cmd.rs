//! config command - Show, locate, or initialize configuration

use anyhow::{bail, Context as _, Result};

use crate::cli::Context;
use crate::core::config::{Config, UserConfig};

/// The configuration in effect, with every default filled in.
pub fn effective(config: &Config) -> UserConfig {
    let types = config.branch_types();

    UserConfig {
        ticket_patterns: Some(
            config
                .ticket_patterns()
                .into_iter()
                .map(str::to_string)
                .collect(),
        ),
        branch_types: Some(types.iter().map(|t| t.to_string()).collect()),
        descriptions: Some(
            types
                .iter()
                .map(|t| (t.to_string(), config.description(t)))
                .collect(),
        ),
    }
}

/// Render the effective configuration as a TOML document.
///
/// The first line is a comment naming the file the values came from.
pub fn render_toml(config: &Config) -> Result<String> {
    let header = match config.loaded_from() {
        Some(path) => format!("# Loaded from {}", path.display()),
        None => "# No config file found, showing defaults".to_string(),
    };
    let body = toml::to_string_pretty(&effective(config)).context("Failed to render config")?;
    Ok(format!("{}\n{}", header, body.trim_end()))
}

/// Print the effective configuration.
pub fn show(ctx: &Context, config: &Config, json: bool) -> Result<()> {
    let rendered = if json {
        serde_json::to_string_pretty(&effective(config)).context("Failed to render config")?
    } else {
        render_toml(config)?
    };
    ctx.output().result(rendered);
    Ok(())
}

/// Print the path of the config file in use, or where one would be written.
pub fn path(ctx: &Context, config: &Config) -> Result<()> {
    let path = match config.loaded_from() {
        Some(path) => path.to_path_buf(),
        None => Config::default_config_path()?,
    };
    ctx.output().result(path.display());
    Ok(())
}

/// Write the default configuration to the canonical location.
pub fn init(ctx: &Context, force: bool) -> Result<()> {
    let path = Config::default_config_path()?;

    if path.exists() && !force {
        bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    let path = Config::write_default().context("Failed to write config")?;
    ctx.output()
        .status(format!("Wrote default configuration to {}", path.display()));
    Ok(())
}
