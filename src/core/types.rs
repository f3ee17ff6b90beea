//! core::types
//!
//! Strong types for branch identifiers.
//!
//! # Types
//!
//! - [`BranchName`] - Validated Git branch name, the only thing the git layer accepts
//! - [`BranchType`] - Branch-type keyword that becomes a subcommand and a name prefix
//!
//! # Examples
//!
//! ```
//! use branch::core::types::{BranchName, BranchType};
//!
//! let name = BranchName::new("feat/pip-1234-login").unwrap();
//! assert_eq!(name.as_str(), "feat/pip-1234-login");
//! assert!(BranchName::new("invalid..name").is_err());
//!
//! let kind = BranchType::new("feat").unwrap();
//! assert_eq!(kind.as_str(), "feat");
//! assert!(BranchType::new("Feat").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid branch name: {0}")]
    InvalidBranchName(String),

    #[error("invalid branch type '{name}': {reason}")]
    InvalidBranchType { name: String, reason: String },
}

/// A validated Git branch name.
///
/// Branch names must conform to Git's refname rules (see `git check-ref-format`):
/// - Cannot be empty or exactly `@`
/// - Cannot start with `.` or `-`
/// - Cannot end with `.lock`, `.` or `/`
/// - Cannot contain `..`, `@{`, `//`, or ASCII control characters
/// - Cannot contain spaces, `~`, `^`, `:`, `\`, `?`, `*`, `[`
/// - No path component may start with `.` or end with `.lock`
///
/// Names produced by [`crate::core::naming::generate`] from a valid
/// [`BranchType`] always pass.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BranchName(String);

impl BranchName {
    /// Create a new validated branch name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidBranchName` if the name violates Git's refname rules.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        Self::validate(&name).map_err(|reason| TypeError::InvalidBranchName(reason.into()))?;
        Ok(Self(name))
    }

    fn validate(name: &str) -> Result<(), &'static str> {
        const INVALID_CHARS: [char; 8] = [' ', '~', '^', ':', '\\', '?', '*', '['];

        if name.is_empty() {
            return Err("branch name cannot be empty");
        }
        if name == "@" {
            return Err("branch name cannot be '@' (reserved)");
        }
        if name.starts_with('-') {
            return Err("branch name cannot start with '-'");
        }
        if name.ends_with('/') {
            return Err("branch name cannot end with '/'");
        }
        if name.ends_with('.') {
            return Err("branch name cannot end with '.'");
        }
        if name.contains("..") {
            return Err("branch name cannot contain '..'");
        }
        if name.contains("@{") {
            return Err("branch name cannot contain '@{'");
        }
        if name.contains("//") {
            return Err("branch name cannot contain '//'");
        }
        if name.contains(INVALID_CHARS) {
            return Err("branch name cannot contain spaces or any of '~^:\\?*['");
        }
        if name.chars().any(|c| c.is_ascii_control()) {
            return Err("branch name cannot contain control characters");
        }
        for component in name.split('/') {
            if component.starts_with('.') {
                return Err("path component cannot start with '.'");
            }
            if component.ends_with(".lock") {
                return Err("path component cannot end with '.lock'");
            }
        }

        Ok(())
    }

    /// Get the branch name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for BranchName {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<BranchName> for String {
    fn from(name: BranchName) -> Self {
        name.0
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A branch-type keyword such as `feat` or `fix`.
///
/// Keywords are lowercase ASCII letters, digits and `-`, start with a letter,
/// and may not shadow a built-in command. Each one becomes a subcommand and
/// the first path segment of generated branch names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BranchType(String);

impl BranchType {
    /// Command names a branch type may not take.
    pub const RESERVED: &'static [&'static str] = &["config", "completion", "help"];

    /// Create a new validated branch type.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidBranchType` if the keyword is empty, has
    /// characters outside `[a-z0-9-]`, does not start with a letter, or is reserved.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        let invalid = |reason: &str| TypeError::InvalidBranchType {
            name: name.clone(),
            reason: reason.to_string(),
        };

        if name.is_empty() {
            return Err(invalid("cannot be empty"));
        }
        if !name.starts_with(|c: char| c.is_ascii_lowercase()) {
            return Err(invalid("must start with a lowercase letter"));
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(invalid("only lowercase letters, digits and '-' are allowed"));
        }
        if name.ends_with('-') {
            return Err(invalid("cannot end with '-'"));
        }
        if Self::RESERVED.contains(&name.as_str()) {
            return Err(invalid("name is reserved for a built-in command"));
        }

        Ok(Self(name))
    }

    /// Get the keyword as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for BranchType {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<BranchType> for String {
    fn from(kind: BranchType) -> Self {
        kind.0
    }
}

impl AsRef<str> for BranchType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
