//! CLI entry point for liminity.

mod cli;

use clap::Parser;
use liminity::app::{AppState, Controller, Interrupts, TerminalConsole};
use liminity::config::open_theme_store;
use liminity::error::SessionError;
use liminity::logging::init_tracing;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = cli::Args::parse();
    // Declared first so it drops last and flushes every record below.
    let _log_guard = init_tracing();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting");

    let interrupts = Interrupts::install().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "SIGINT handler unavailable");
        Interrupts::default()
    });

    let (themes, source) = match open_theme_store(args.theme_file.as_deref()) {
        Ok(opened) => opened,
        Err(err) => {
            tracing::error!(error = %err, "failed to load themes");
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        source = %source.describe(),
        themes = themes.list_theme_names().len(),
        active = %themes.active_name(),
        "themes loaded"
    );

    let console = match TerminalConsole::new(interrupts) {
        Ok(console) => console,
        Err(err) => {
            tracing::error!(error = %err, "terminal setup failed");
            eprintln!("error: terminal: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut controller = Controller::new(AppState::new(themes), console);
    let outcome = controller.run();
    // Restore the terminal before printing anything else.
    drop(controller);

    match outcome {
        Ok(()) => {
            tracing::info!("session ended");
            ExitCode::SUCCESS
        }
        Err(SessionError::Interrupted) => {
            tracing::info!("session interrupted");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "session failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
