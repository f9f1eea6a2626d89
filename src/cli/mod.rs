//! Command-line interface for docenv.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{BuildArgs, Cli, Commands, CompletionsArgs, EnvArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
