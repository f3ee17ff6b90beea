//! branch - create git branches with consistent naming patterns
//!
//! `branch feat PIP-1234 implement new feature` creates and switches to
//! `feat/pip-1234-implement-new-feature`. The first word is treated as a
//! ticket when it matches one of the configured patterns; the remaining
//! words are slugified into the description.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, dispatches)
//! - [`core`] - Ticket matching, naming, strong types, configuration
//! - [`git`] - Single interface for all Git operations
//! - [`ui`] - Output and logging utilities
//!
//! # Example
//!
//! ```
//! use branch::core::naming::BranchSpec;
//! use branch::core::ticket::TicketMatcher;
//!
//! let matcher = TicketMatcher::default();
//! let spec = BranchSpec::from_args("feat", &["PIP-1234", "implement", "new", "feature"], &matcher);
//! assert_eq!(spec.branch_name(), "feat/pip-1234-implement-new-feature");
//! ```

pub mod cli;
pub mod core;
pub mod git;
pub mod ui;
