//! Terminal UI.

use std::io::Write;

use console::Term;

use super::{DocenvTheme, OutputMode, UserInterface};

/// UI writing to the process's stdout and stderr.
pub struct TerminalUI {
    mode: OutputMode,
    out: Term,
    err: Term,
    theme: DocenvTheme,
}

impl TerminalUI {
    /// Create a new console UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            out: Term::stdout(),
            err: Term::stderr(),
            theme: DocenvTheme::new(),
        }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }
}
