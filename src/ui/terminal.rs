//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{ForkfulTheme, OutputMode, Status, UserInterface};

/// Terminal UI implementation.
///
/// Results and status go to stdout; warnings and errors go to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: ForkfulTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme: ForkfulTheme::detect(),
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn recipe_row(&mut self, id: &str, name: &str, category: Option<&str>) {
        writeln!(self.out, "{}", self.theme.recipe_row(id, name, category)).ok();
    }

    fn detail(&mut self, msg: &str) {
        if self.mode.shows_detail() {
            writeln!(self.out, "{}", self.theme.muted(msg)).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.status(Status::Done, msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", self.theme.status(Status::Caution, msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.status(Status::Failed, msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.title(title)).ok();
        }
    }
}

/// Create a UI for the given output mode.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}
