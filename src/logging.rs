//! File-backed tracing setup.
//!
//! The terminal belongs to the UI, so log records go to
//! `<config>/liminity/liminity.log` instead of stderr.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::app_config_dir;

/// Environment variable holding the filter directive, e.g. `liminity=debug`.
pub const LOG_ENV: &str = "LIMINITY_LOG";
pub const LOG_FILE_NAME: &str = "liminity.log";
const DEFAULT_DIRECTIVE: &str = "info";

/// Install the global subscriber. Failures are reported and otherwise
/// ignored: the app runs fine without a log file.
///
/// Buffered records are written when the returned guard drops, so keep it
/// alive until the end of `main`.
#[must_use = "dropping the guard stops log writing"]
pub fn init_tracing() -> Option<WorkerGuard> {
    let dir = app_config_dir()?;
    match init_tracing_in(&dir) {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("warning: failed to create log dir {}: {err}", dir.display());
            None
        }
    }
}

fn init_tracing_in(dir: &Path) -> std::io::Result<WorkerGuard> {
    std::fs::create_dir_all(dir)?;
    let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking),
        )
        .try_init();
    Ok(guard)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}
