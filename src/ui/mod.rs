//! Output for the command-line front end.
//!
//! Machine-readable documents (module results, watchdog responses) go to
//! stdout through [`UserInterface::emit`]. Everything meant for a human
//! goes to stderr, so stdout stays parseable by Ansible and schedulers.
//!
//! # Example
//!
//! ```
//! use dotfacts::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.emit(r#"{"changed":false}"#);
//! ui.warning("no settings file");
//! assert_eq!(ui.emitted(), &[r#"{"changed":false}"#.to_string()]);
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::Theme;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Write a machine-readable document to stdout. Never suppressed.
    fn emit(&mut self, document: &str);

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Shown in every mode.
    fn error(&mut self, msg: &str);
}
