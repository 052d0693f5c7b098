//! dotfacts CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use dotfacts::cli::{Cli, CommandDispatcher};
use dotfacts::logging::init_tracing;
use dotfacts::ui::{theme::configure_colors, OutputMode, TerminalUI, UserInterface};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug, "info");
    configure_colors(cli.no_color);

    tracing::debug!("dotfacts starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };
    let mut ui = TerminalUI::new(output_mode);

    let dispatcher = CommandDispatcher::new(cli.config.clone());

    match dispatcher.dispatch(&cli, &mut ui) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
