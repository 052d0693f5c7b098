//! Visual theme and styling.

use console::Style;

/// Styles for stderr diagnostics.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (yellow).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for plain status lines (dim).
    pub dim: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green().for_stderr(),
            warning: Style::new().yellow().for_stderr(),
            error: Style::new().red().bold().for_stderr(),
            dim: Style::new().dim().for_stderr(),
        }
    }
}

/// Disable colors on stderr when `--no-color` or `NO_COLOR` asks for it.
pub fn configure_colors(no_color: bool) {
    if no_color || std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        console::set_colors_enabled_stderr(false);
    }
}
