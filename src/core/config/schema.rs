//! core::config::schema
//!
//! Configuration file schema.
//!
//! # Validation
//!
//! Branch types are validated after parsing (each must be a valid
//! [`BranchType`]). Ticket patterns are never rejected here: a pattern that
//! does not compile only produces a load warning and is ignored by the matcher.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::ticket::DEFAULT_TICKET_PATTERNS;
use crate::core::types::BranchType;

/// Branch types used when none are configured, with their help text.
pub const DEFAULT_BRANCH_TYPES: &[(&str, &str)] = &[
    ("feat", "Create a feature branch"),
    ("fix", "Create a bugfix branch"),
    ("tests", "Create a tests branch"),
    ("chore", "Create a chore branch"),
    ("docs", "Create a documentation branch"),
];

/// User configuration file.
///
/// # Example
///
/// ```toml
/// ticket_patterns = ['^#\d+$', '^[A-Z]+-\d+$']
/// branch_types = ["feat", "fix", "spike"]
///
/// [descriptions]
/// spike = "Create a throwaway spike branch"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct UserConfig {
    /// Ticket recognition patterns, matched against the whole first word
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_patterns: Option<Vec<String>>,

    /// Branch-type keywords, one subcommand each
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_types: Option<Vec<String>>,

    /// Help text per branch type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptions: Option<BTreeMap<String, String>>,
}

impl UserConfig {
    /// A config with every default written out, as produced by `config init`.
    pub fn with_defaults() -> Self {
        Self {
            ticket_patterns: Some(
                DEFAULT_TICKET_PATTERNS
                    .iter()
                    .map(|p| p.to_string())
                    .collect(),
            ),
            branch_types: Some(
                DEFAULT_BRANCH_TYPES
                    .iter()
                    .map(|(name, _)| name.to_string())
                    .collect(),
            ),
            descriptions: None,
        }
    }

    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a branch type (listed or
    /// described) is not a valid keyword.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let listed = self.branch_types.iter().flatten();
        let described = self.descriptions.iter().flat_map(|d| d.keys());

        for name in listed.chain(described) {
            BranchType::new(name.as_str())
                .map_err(|e| ConfigError::InvalidValue(e.to_string()))?;
        }

        Ok(())
    }
}

/// Built-in help text for a default branch type.
pub fn default_description(branch_type: &str) -> Option<&'static str> {
    DEFAULT_BRANCH_TYPES
        .iter()
        .find(|(name, _)| *name == branch_type)
        .map(|(_, description)| *description)
}
