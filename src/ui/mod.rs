//! Operator-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing to the terminal
//! - [`MockUI`] capturing output for tests
//!
//! Plain messages and the final summary go to stdout; warnings and errors
//! go to stderr.
//!
//! # Example
//!
//! ```
//! use docenv::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Updated: docs/index.mdx");
//! ui.success("Updated 1 file for staging environment");
//! assert!(ui.has_message("index.mdx"));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::DocenvTheme;

/// Trait for user interface interactions.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Display a progress message.
    fn message(&mut self, msg: &str);

    /// Display a success message (the final summary).
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);
}

/// Create the terminal UI for the given mode.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}
