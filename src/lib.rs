//! Liminity: a themed terminal to-do list.
//!
//! Tasks live in memory for one session. Color themes are loaded from a TOML
//! theme file, switched at runtime, and created interactively; new themes
//! are written back to the file they came from.
//!
//! # Quick start
//!
//! ```no_run
//! use liminity::app::{AppState, Controller, Interrupts, TerminalConsole};
//! use liminity::config::open_theme_store;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let (themes, _source) = open_theme_store(None)?;
//! let console = TerminalConsole::new(Interrupts::install()?)?;
//! Controller::new(AppState::new(themes), console).run()?;
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod color;
pub mod config;
pub mod error;
pub mod logging;
pub mod tasks;
#[cfg(test)]
pub mod testsupport;
pub mod ui;
