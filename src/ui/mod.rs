//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//! - [`logging`] - Diagnostic logging setup
//!
//! # Design
//!
//! All user-facing output goes through this module so quiet mode is
//! handled consistently.

pub mod logging;
pub mod output;
