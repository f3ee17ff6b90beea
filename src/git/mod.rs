//! git
//!
//! Single interface for all Git operations.
//!
//! # Architecture
//!
//! This module is the **ONLY doorway** to Git. We use the `git2` crate
//! exclusively (no shelling out to the git CLI). No other module should
//! import `git2`.
//!
//! # Responsibilities
//!
//! - Repository discovery and opening
//! - Branch existence checks
//! - Branch creation and HEAD switching

mod interface;

pub use interface::{Git, GitError};
