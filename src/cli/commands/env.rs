//! Env command implementation.
//!
//! The `docenv env` command prints which environment a build would use.

use std::path::{Path, PathBuf};

use crate::cli::args::EnvArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::context::RunContext;
use super::dispatcher::{Command, CommandResult};

/// The env command implementation.
pub struct EnvCommand {
    root: PathBuf,
    config: Option<PathBuf>,
    args: EnvArgs,
}

impl EnvCommand {
    /// Create a new env command.
    pub fn new(root: &Path, config: Option<&Path>, args: EnvArgs) -> Self {
        Self {
            root: root.to_path_buf(),
            config: config.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for EnvCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        RunContext::load(
            &self.root,
            self.config.as_deref(),
            self.args.branch.as_deref(),
            ui,
        )?;
        Ok(CommandResult::success())
    }
}
