//! Terminal UI writing documents to stdout and diagnostics to stderr.

use std::io::Write;

use super::theme::Theme;
use super::{OutputMode, UserInterface};

/// The UI used by the binaries.
pub struct TerminalUI {
    mode: OutputMode,
    theme: Theme,
}

impl TerminalUI {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: Theme::new(),
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn emit(&mut self, document: &str) {
        let mut stdout = std::io::stdout().lock();
        // A closed stdout (e.g. `| head`) is not worth a panic.
        let _ = writeln!(stdout, "{}", document);
        let _ = stdout.flush();
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("{}", self.theme.dim.apply_to(msg));
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("{} {}", self.theme.success.apply_to("✓"), msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("{} {}", self.theme.warning.apply_to("!"), msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.error.apply_to(msg));
    }
}
