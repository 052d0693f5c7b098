//! Command-line interface for dotfacts.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, FactsArgs, WatchdogArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
