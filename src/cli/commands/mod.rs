//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed by
//! [`CommandDispatcher`]. Configuration is loaded once in the dispatcher
//! and handed to the command.

pub mod completions;
pub mod config;
pub mod detect;
pub mod dispatcher;
pub mod display;
pub mod show;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
