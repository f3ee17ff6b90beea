//! core
//!
//! Core domain types and the branch-name derivation pipeline.
//!
//! # Modules
//!
//! - [`ticket`] - Ticket recognition from configurable patterns
//! - [`naming`] - Slug normalization and branch name assembly
//! - [`types`] - Strong types: BranchName, BranchType
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - `ticket` and `naming` are pure and never fail
//! - Strong typing guards the git boundary
//! - Configuration is injected, never read ambiently by the pipeline

pub mod config;
pub mod naming;
pub mod ticket;
pub mod types;
