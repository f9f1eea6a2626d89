//! Build command implementation.
//!
//! The `docenv build` command (also the default) rewrites the docs tree
//! for the resolved environment.

use std::path::{Path, PathBuf};

use crate::cli::args::BuildArgs;
use crate::error::Result;
use crate::rewrite::{ProseRewriter, Replacements, StructuredRewriter};
use crate::ui::UserInterface;
use crate::walker::build_tree;

use super::context::RunContext;
use super::dispatcher::{Command, CommandResult};

/// The build command implementation.
pub struct BuildCommand {
    root: PathBuf,
    config: Option<PathBuf>,
    args: BuildArgs,
}

impl BuildCommand {
    /// Create a new build command.
    pub fn new(root: &Path, config: Option<&Path>, args: BuildArgs) -> Self {
        Self {
            root: root.to_path_buf(),
            config: config.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for BuildCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = RunContext::load(
            &self.root,
            self.config.as_deref(),
            self.args.branch.as_deref(),
            ui,
        )?;

        let replacements = Replacements::new(&ctx.config, &ctx.resolved);
        if replacements.is_empty() {
            ui.warning("No base URL or API key to replace; only placeholders will be filled in");
        }

        let structured = StructuredRewriter::new(replacements.clone());
        let prose = ProseRewriter::new(replacements, &ctx.resolved);
        let report = build_tree(&self.root, &structured, &prose, ui)?;

        tracing::debug!(
            "openapi: {}, mdx: {}, md: {}",
            report.openapi,
            report.mdx,
            report.markdown
        );
        ui.success(&summary(report.total(), &ctx.resolved.name.to_string()));

        Ok(CommandResult::success())
    }
}

fn summary(count: usize, environment: &str) -> String {
    let noun = if count == 1 { "file" } else { "files" };
    format!("Updated {} {} for {} environment", count, noun, environment)
}
