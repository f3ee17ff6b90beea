//! git::interface
//!
//! Git interface implementation using git2.
//!
//! This module provides the **single doorway** to all Git operations. No
//! other module imports `git2`.
//!
//! # Error Handling
//!
//! Git errors are categorized into typed variants:
//! - [`GitError::NotARepo`]: Not inside a Git repository
//! - [`GitError::BareRepo`]: Repository has no working directory
//! - [`GitError::BranchExists`]: The branch to create already exists
//! - [`GitError::InvalidBranchName`]: git refused the name
//!
//! # Example
//!
//! ```ignore
//! use branch::core::types::BranchName;
//! use branch::git::Git;
//! use std::path::Path;
//!
//! let git = Git::open(Path::new("."))?;
//! let name = BranchName::new("feat/pip-1234-login")?;
//! git.create_and_checkout(&name)?;
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::core::types::BranchName;

/// Errors from Git operations.
#[derive(Debug, Error)]
pub enum GitError {
    /// Not inside a Git repository.
    #[error("not a git repository: {path}")]
    NotARepo {
        /// The path that was searched
        path: PathBuf,
    },

    /// Repository is bare (no working directory).
    #[error("bare repository not supported")]
    BareRepo,

    /// The branch to create already exists.
    #[error("branch '{name}' already exists")]
    BranchExists {
        /// The conflicting branch
        name: String,
    },

    /// Invalid branch name.
    #[error("invalid branch name: {message}")]
    InvalidBranchName {
        /// Description of the problem
        message: String,
    },

    /// Internal git2 error.
    #[error("git error: {message}")]
    Internal {
        /// The error message
        message: String,
    },
}

impl GitError {
    /// Create a GitError from a git2::Error with context.
    fn from_git2(err: git2::Error, context: &str) -> Self {
        GitError::Internal {
            message: format!("{}: {}", context, err.message()),
        }
    }
}

/// The Git interface.
///
/// This is the **single point of interaction** with Git.
pub struct Git {
    /// The underlying git2 repository
    repo: git2::Repository,
}

impl std::fmt::Debug for Git {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Git")
            .field("path", &self.repo.path())
            .finish()
    }
}

impl Git {
    /// Open a repository at the given path.
    ///
    /// Uses `git2::Repository::discover` to find the repository root,
    /// so `path` can be any directory within the repository.
    ///
    /// # Errors
    ///
    /// - [`GitError::NotARepo`] if no repository is found
    /// - [`GitError::BareRepo`] if the repository has no working directory
    pub fn open(path: &Path) -> Result<Self, GitError> {
        let repo = git2::Repository::discover(path).map_err(|_| GitError::NotARepo {
            path: path.to_path_buf(),
        })?;

        if repo.is_bare() {
            return Err(GitError::BareRepo);
        }

        debug!(git_dir = %repo.path().display(), "opened repository");
        Ok(Self { repo })
    }

    /// Check if a local branch exists.
    pub fn branch_exists(&self, name: &BranchName) -> bool {
        self.repo
            .find_branch(name.as_str(), git2::BranchType::Local)
            .is_ok()
    }

    /// Create a branch at HEAD and switch to it.
    ///
    /// The working tree and index are left untouched, as with
    /// `git checkout -b`. In a repository without commits, HEAD is pointed at
    /// the new (still unborn) branch.
    ///
    /// # Errors
    ///
    /// - [`GitError::BranchExists`] if the branch already exists
    pub fn create_and_checkout(&self, name: &BranchName) -> Result<(), GitError> {
        if self.branch_exists(name) {
            return Err(GitError::BranchExists {
                name: name.to_string(),
            });
        }

        match self.repo.head() {
            Ok(head) => {
                let commit = head
                    .peel_to_commit()
                    .map_err(|e| GitError::from_git2(e, "HEAD"))?;
                self.repo
                    .branch(name.as_str(), &commit, false)
                    .map_err(|e| match e.code() {
                        git2::ErrorCode::Exists => GitError::BranchExists {
                            name: name.to_string(),
                        },
                        git2::ErrorCode::InvalidSpec => GitError::InvalidBranchName {
                            message: e.message().to_string(),
                        },
                        _ => GitError::from_git2(e, name.as_str()),
                    })?;
                debug!(branch = %name, at = %commit.id(), "created branch");
            }
            Err(e) if e.code() == git2::ErrorCode::UnbornBranch => {
                debug!(branch = %name, "repository has no commits, repointing HEAD");
            }
            Err(e) => return Err(GitError::from_git2(e, "HEAD")),
        }

        let refname = format!("refs/heads/{}", name);
        self.repo
            .set_head(&refname)
            .map_err(|e| GitError::from_git2(e, &refname))?;

        Ok(())
    }
}
