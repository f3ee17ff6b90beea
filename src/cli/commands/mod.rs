//! cli::commands
//!
//! Command handlers.
//!
//! Each handler receives the execution [`Context`](super::Context) and the
//! loaded configuration, does its work, and reports through
//! [`crate::ui::output`].

mod completion;
mod config_cmd;
mod create;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use config_cmd::{
    effective as config_effective, init as config_init, path as config_path,
    render_toml as config_render_toml, show as config_show,
};
pub use create::{create, resolve_name};
