//! Command dispatching.
//!
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::cli::args::{BuildArgs, Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Process exit status; codes outside `0..=255` map to 1.
    pub fn exit_status(&self) -> u8 {
        u8::try_from(self.exit_code).unwrap_or(1)
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    root: PathBuf,
    config: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given docs root.
    pub fn new(root: PathBuf, config: Option<PathBuf>) -> Self {
        Self { root, config }
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.config.as_deref();
        match &cli.command {
            Some(Commands::Build(args)) => {
                let cmd = super::build::BuildCommand::new(&self.root, config, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Env(args)) => {
                let cmd = super::env::EnvCommand::new(&self.root, config, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                // Default to build with default args
                let cmd = super::build::BuildCommand::new(&self.root, config, BuildArgs::default());
                cmd.execute(ui)
            }
        }
    }
}
