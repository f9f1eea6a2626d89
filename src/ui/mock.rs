//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! output for later assertion.
//!
//! # Example
//!
//! ```
//! use docenv::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Branch: dev");
//! ui.warning("Error detecting git branch: not a git repository");
//!
//! assert_eq!(ui.messages(), ["Branch: dev".to_string()]);
//! assert!(ui.has_warning("not a git repository"));
//! ```

use super::UserInterface;

/// Mock UI implementation for testing.
///
/// Captures everything, including progress messages a quiet terminal
/// would drop.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_captures_each_stream() {
        let mut ui = MockUI::new();
        ui.message("one");
        ui.success("two");
        ui.warning("three");
        ui.error("four");

        assert_eq!(ui.messages(), ["one".to_string()]);
        assert_eq!(ui.successes(), ["two".to_string()]);
        assert!(ui.has_warning("thr"));
        assert!(ui.has_error("four"));
        assert!(!ui.has_message("two"));
    }
}
