//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. `build` and
//! `env` share the startup sequence in [`context`].

pub mod build;
pub mod completions;
pub mod context;
pub mod dispatcher;
pub mod env;

pub use context::RunContext;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
