//! docenv - Point documentation at the right environment.
//!
//! docenv detects the current git branch, maps it to a deployment
//! environment (`dev`/`development` are staging, everything else is
//! production), and rewrites base URLs and API keys in OpenAPI specs and
//! Markdown/MDX pages to that environment's values.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Environment table loading and validation
//! - [`environment`] - Branch detection and environment resolution
//! - [`error`] - Error types and result aliases
//! - [`rewrite`] - JSON and Markdown/MDX rewriters
//! - [`ui`] - Terminal output
//! - [`walker`] - Documentation tree traversal
//!
//! # Example
//!
//! ```
//! use docenv::config::{EnvironmentConfig, EnvironmentSettings};
//! use docenv::environment::{BranchDetection, ResolvedEnvironment};
//! use docenv::rewrite::{rewrite_structured, Replacements};
//!
//! let config = EnvironmentConfig::new()
//!     .with_environment("production", EnvironmentSettings::new("https://api.example.com", "sk_live"))
//!     .with_environment("staging", EnvironmentSettings::new("https://staging.example.com", "sk_test"));
//!
//! let resolved = ResolvedEnvironment::resolve(&config, BranchDetection::from_flag("dev")).unwrap();
//! let replacements = Replacements::new(&config, &resolved);
//!
//! let document = r#"{"servers":[{"url":"https://api.example.com/v1"}]}"#;
//! assert_eq!(
//!     rewrite_structured(document, &replacements),
//!     r#"{"servers":[{"url":"https://staging.example.com/v1"}]}"#
//! );
//! ```

pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod rewrite;
pub mod ui;
pub mod walker;

pub use error::{DocenvError, Result};
