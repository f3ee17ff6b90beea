//! ui::output
//!
//! User-facing output.
//!
//! # Channels
//!
//! - Results (a branch name under `--dry-run`, a config dump, a path) go to
//!   stdout unconditionally. Scripts read them, so `--quiet` leaves them alone.
//! - Status lines ("Created and switched to branch: ...") go to stdout and
//!   are dropped under `--quiet`.
//! - Warnings go to stderr and are dropped under `--quiet`.
//! - Errors go to stderr, always.
//!
//! Diagnostics go through `tracing` instead (see [`super::logging`]).

use std::fmt::Display;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Results and errors only
    Quiet,
    /// Results, status lines and warnings
    Normal,
    /// Normal output plus debug logging
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags. Quiet wins over debug.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }

    /// Whether status lines and warnings are shown.
    pub fn chatty(self) -> bool {
        self != Verbosity::Quiet
    }
}

/// Output handle for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Output {
    verbosity: Verbosity,
}

impl Output {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Print a command result. Never suppressed.
    pub fn result(&self, text: impl Display) {
        println!("{}", text);
    }

    /// Print a status line.
    pub fn status(&self, message: impl Display) {
        if self.verbosity.chatty() {
            println!("{}", message);
        }
    }

    /// Print a warning.
    pub fn warn(&self, message: impl Display) {
        if self.verbosity.chatty() {
            eprintln!("warning: {}", message);
        }
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}
