//! Command-line interface for polyver.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, ConfigArgs, DetectArgs, ShowArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
