//! ui::logging
//!
//! Diagnostic logging via `tracing`.
//!
//! Events are written to stderr. `--debug` lowers the default level to
//! `debug`; `RUST_LOG` overrides either default.

use tracing_subscriber::EnvFilter;

use super::output::Verbosity;

/// Default filter directive for a verbosity level.
pub fn default_directive(verbosity: Verbosity) -> &'static str {
    match verbosity {
        Verbosity::Debug => "debug",
        Verbosity::Normal => "warn",
        Verbosity::Quiet => "error",
    }
}

/// Install the global subscriber.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
