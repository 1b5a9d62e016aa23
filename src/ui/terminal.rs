//! Styled output for a terminal.

use console::Term;
use std::io::Write;

use super::{
    ClusteradmTheme, NonInteractiveUI, OutputMode, ProgressSpinner, SpinnerHandle, UserInterface,
};

/// UI for a terminal: themed status lines and animated spinners.
///
/// Status lines go to stdout, errors to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: ClusteradmTheme,
    mode: OutputMode,
}

impl TerminalUI {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme: ClusteradmTheme::detect(),
            mode,
        }
    }

    fn status(&mut self, line: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", line).ok();
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
        self.status(msg);
    }

    fn success(&mut self, msg: &str) {
        let line = self.theme.format_success(msg);
        self.status(&line);
    }

    fn warning(&mut self, msg: &str) {
        let line = self.theme.format_warning(msg);
        self.status(&line);
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        let spinner = if self.mode.shows_spinners() {
            ProgressSpinner::new(message)
        } else {
            ProgressSpinner::hidden()
        };
        Box::new(spinner)
    }
}

/// Pick the terminal UI when stdout is a terminal, plain lines otherwise.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    if Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
