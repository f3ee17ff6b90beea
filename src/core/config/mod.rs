//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! The configuration supplies two ordered lists: the ticket patterns used to
//! recognize a ticket in the first word, and the branch types that become
//! subcommands. Either list falls back to the defaults when absent or empty.
//!
//! # Config Locations
//!
//! Searched in order (first existing file wins):
//! 1. `$BRANCH_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/branch/config.toml`, or `~/.config/branch/config.toml`
//!    when `XDG_CONFIG_HOME` is unset (canonical write location)
//!
//! A missing file is not an error; defaults are used.
//!
//! # Example
//!
//! ```no_run
//! use branch::core::config::Config;
//!
//! let result = Config::load().unwrap();
//! for warning in &result.warnings {
//!     eprintln!("warning: {}", warning.message);
//! }
//! let matcher = result.config.ticket_matcher();
//! assert!(matcher.is_ticket("PIP-1234"));
//! ```

pub mod schema;

pub use schema::{default_description, UserConfig, DEFAULT_BRANCH_TYPES};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::core::ticket::{TicketMatcher, DEFAULT_TICKET_PATTERNS};
use crate::core::types::BranchType;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "BRANCH_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// The warning message.
    pub message: String,
    /// The file that triggered the warning.
    pub path: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Any warnings generated during loading.
    pub warnings: Vec<ConfigWarning>,
}

/// Effective configuration.
///
/// Accessors apply the defaults, so callers never see an empty list unless
/// every configured ticket pattern failed to compile.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed file contents (all `None` when no file was found)
    pub file: UserConfig,
    /// Path the file was loaded from
    path: Option<PathBuf>,
}

impl Config {
    /// Build a config from already-parsed contents.
    pub fn from_user(file: UserConfig) -> Self {
        Self { file, path: None }
    }

    /// Load configuration from the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed,
    /// or validated. Missing config files are not an error.
    pub fn load() -> Result<ConfigLoadResult, ConfigError> {
        let candidates = Self::search_paths(|key| std::env::var(key).ok(), dirs::home_dir());

        match candidates.into_iter().find(|p| p.exists()) {
            Some(path) => Self::load_from(&path),
            None => {
                debug!("no config file found, using defaults");
                Ok(ConfigLoadResult {
                    config: Config::default(),
                    warnings: Vec::new(),
                })
            }
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<ConfigLoadResult, ConfigError> {
        debug!(path = %path.display(), "loading config");

        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file: UserConfig = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        file.validate()?;

        let config = Config {
            file,
            path: Some(path.to_path_buf()),
        };
        let warnings = config.collect_warnings(path);

        Ok(ConfigLoadResult { config, warnings })
    }

    fn collect_warnings(&self, path: &Path) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        let (_, rejected) = TicketMatcher::with_diagnostics(self.ticket_patterns());
        for reject in rejected {
            warnings.push(ConfigWarning {
                message: format!(
                    "ignoring ticket pattern '{}': {}",
                    reject.pattern, reject.reason
                ),
                path: path.to_path_buf(),
            });
        }

        let mut seen = Vec::new();
        for name in self.file.branch_types.iter().flatten() {
            if seen.contains(&name) {
                warnings.push(ConfigWarning {
                    message: format!("duplicate branch type '{}' ignored", name),
                    path: path.to_path_buf(),
                });
            } else {
                seen.push(name);
            }
        }

        warnings
    }

    /// Candidate config file locations, in search order.
    ///
    /// `env` looks up environment variables; `home` is the user's home
    /// directory, if known.
    pub fn search_paths(
        env: impl Fn(&str) -> Option<String>,
        home: Option<PathBuf>,
    ) -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Some(explicit) = env(CONFIG_ENV).filter(|p| !p.is_empty()) {
            paths.push(PathBuf::from(explicit));
        }

        let config_dir = env("XDG_CONFIG_HOME")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .or_else(|| home.map(|h| h.join(".config")));
        if let Some(dir) = config_dir {
            paths.push(dir.join("branch/config.toml"));
        }

        paths
    }

    /// Get the path new config files are written to.
    ///
    /// `$BRANCH_CONFIG` if set, otherwise the XDG location.
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        Self::search_paths(|key| std::env::var(key).ok(), dirs::home_dir())
            .into_iter()
            .next()
            .ok_or(ConfigError::NoHomeDir)
    }

    /// Write a config file atomically.
    ///
    /// Creates parent directories if needed. Uses atomic write
    /// (write to temp file, then rename) to prevent corruption.
    pub fn write(path: &Path, config: &UserConfig) -> Result<(), ConfigError> {
        config.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents =
            toml::to_string_pretty(config).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        let temp_path = path.with_extension("toml.tmp");
        let write_err = |e: std::io::Error| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        };
        let mut file = fs::File::create(&temp_path).map_err(write_err)?;
        file.write_all(contents.as_bytes()).map_err(write_err)?;
        file.sync_all().map_err(write_err)?;

        fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        debug!(path = %path.display(), "wrote config");
        Ok(())
    }

    /// Write the default configuration to [`Config::default_config_path`].
    ///
    /// Returns the path written.
    pub fn write_default() -> Result<PathBuf, ConfigError> {
        let path = Self::default_config_path()?;
        Self::write(&path, &UserConfig::with_defaults())?;
        Ok(path)
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Ticket patterns in effect.
    pub fn ticket_patterns(&self) -> Vec<&str> {
        match self.file.ticket_patterns.as_deref() {
            Some(patterns) if !patterns.is_empty() => {
                patterns.iter().map(String::as_str).collect()
            }
            _ => DEFAULT_TICKET_PATTERNS.to_vec(),
        }
    }

    /// Build the ticket matcher for the patterns in effect.
    pub fn ticket_matcher(&self) -> TicketMatcher {
        TicketMatcher::new(self.ticket_patterns())
    }

    /// Branch types in effect, in configured order, without duplicates.
    ///
    /// Entries that are not valid keywords are skipped; [`Config::load`]
    /// rejects such files, so this only matters for hand-built configs.
    pub fn branch_types(&self) -> Vec<BranchType> {
        let configured: Vec<&str> = match self.file.branch_types.as_deref() {
            Some(types) if !types.is_empty() => types.iter().map(String::as_str).collect(),
            _ => DEFAULT_BRANCH_TYPES.iter().map(|(name, _)| *name).collect(),
        };

        let mut types: Vec<BranchType> = Vec::with_capacity(configured.len());
        for name in configured {
            if let Ok(kind) = BranchType::new(name) {
                if !types.contains(&kind) {
                    types.push(kind);
                }
            }
        }
        types
    }

    /// Help text for a branch type.
    ///
    /// Configured descriptions win over built-in ones; unknown types get a
    /// generic description.
    pub fn description(&self, branch_type: &BranchType) -> String {
        self.file
            .descriptions
            .as_ref()
            .and_then(|d| d.get(branch_type.as_str()).cloned())
            .or_else(|| default_description(branch_type.as_str()).map(str::to_string))
            .unwrap_or_else(|| format!("Create a {} branch", branch_type))
    }

    /// Get the path the config was loaded from.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
