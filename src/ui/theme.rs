//! Visual theme and styling.

use console::Style;

/// docenv's visual theme.
///
/// Styling is dropped automatically when the stream is not a terminal.
#[derive(Debug, Clone)]
pub struct DocenvTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
}

impl Default for DocenvTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl DocenvTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
        }
    }

    /// Format a success message.
    pub fn format_success(&self, msg: &str) -> String {
        self.success.apply_to(msg).to_string()
    }

    /// Format a warning message.
    pub fn format_warning(&self, msg: &str) -> String {
        self.warning.apply_to(msg).to_string()
    }

    /// Format an error message.
    pub fn format_error(&self, msg: &str) -> String {
        self.error.apply_to(msg).to_string()
    }
}
