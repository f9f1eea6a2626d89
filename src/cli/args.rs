//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// docenv - Point documentation at the right environment.
///
/// Rewrites base URLs and API keys in OpenAPI specs and Markdown/MDX pages
/// to match the environment of the current git branch.
#[derive(Debug, Parser)]
#[command(name = "docenv")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the environment table (default: <root>/scripts/env-config.json)
    #[arg(short, long, global = true, env = "DOCENV_CONFIG")]
    pub config: Option<PathBuf>,

    /// Documentation root (default: current directory)
    #[arg(short, long, global = true, env = "DOCENV_ROOT")]
    pub root: Option<PathBuf>,

    /// Only print the final summary, warnings, and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rewrite docs for the current environment (default if no command specified)
    Build(BuildArgs),

    /// Show the resolved environment without touching any file
    Env(EnvArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `build` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct BuildArgs {
    /// Use this branch name instead of asking git
    #[arg(long, value_name = "BRANCH")]
    pub branch: Option<String>,
}

/// Arguments for the `env` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct EnvArgs {
    /// Use this branch name instead of asking git
    #[arg(long, value_name = "BRANCH")]
    pub branch: Option<String>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::parse_from(["docenv"]);
        assert!(cli.command.is_none());
        assert!(!cli.quiet);
    }

    #[test]
    fn build_accepts_branch() {
        let cli = Cli::parse_from(["docenv", "build", "--branch", "dev"]);
        match cli.command {
            Some(Commands::Build(args)) => assert_eq!(args.branch.as_deref(), Some("dev")),
            other => panic!("Expected Build command, got {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["docenv", "env", "--root", "/docs", "-q"]);
        assert_eq!(cli.root, Some(PathBuf::from("/docs")));
        assert!(cli.quiet);
        assert!(matches!(cli.command, Some(Commands::Env(_))));
    }

    #[test]
    fn completions_requires_known_shell() {
        assert!(Cli::try_parse_from(["docenv", "completions", "bash"]).is_ok());
        assert!(Cli::try_parse_from(["docenv", "completions", "cmd.exe"]).is_err());
    }
}
