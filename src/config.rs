//! Startup configuration: where themes come from and where logs go.
//!
//! Source order, highest precedence first:
//! explicit path > per-user theme file > bundled themes (in memory).

use std::path::{Path, PathBuf};

use crate::error::ThemeError;
use crate::ui::theme::{default_theme_file_path, ensure_default_theme_file, ThemeStore};

/// Where the active theme store was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeSource {
    /// Path given on the command line.
    Explicit(PathBuf),
    /// Per-user `~/.config/liminity/themes.toml`, seeded from the bundle.
    UserFile(PathBuf),
    /// Bundled themes only; created themes last until exit.
    Bundled,
}

impl ThemeSource {
    /// Human-readable description used in startup logs.
    pub fn describe(&self) -> String {
        match self {
            Self::Explicit(path) => format!("theme file {}", path.display()),
            Self::UserFile(path) => format!("user theme file {}", path.display()),
            Self::Bundled => "bundled themes".to_string(),
        }
    }
}

/// Open the theme store for this run.
pub fn open_theme_store(
    path_override: Option<&str>,
) -> Result<(ThemeStore, ThemeSource), ThemeError> {
    open_theme_store_from_sources(
        path_override,
        default_theme_file_path,
        ensure_default_theme_file,
    )
}

pub(crate) fn open_theme_store_from_sources<FPath, FEnsure>(
    path_override: Option<&str>,
    user_path: FPath,
    ensure_file: FEnsure,
) -> Result<(ThemeStore, ThemeSource), ThemeError>
where
    FPath: Fn() -> Option<PathBuf>,
    FEnsure: Fn(&Path) -> Result<(), ThemeError>,
{
    // 1) Explicit path must exist; a typo should not silently fork a new file.
    if let Some(raw) = path_override {
        let path = PathBuf::from(raw);
        let store = ThemeStore::open(&path)?;
        return Ok((store, ThemeSource::Explicit(path)));
    }

    // 2) Per-user file, created from the bundle on first run.
    if let Some(path) = user_path() {
        match ensure_file(&path).and_then(|()| ThemeStore::open(&path)) {
            Ok(store) => return Ok((store, ThemeSource::UserFile(path))),
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "user theme file unavailable; falling back to bundled themes"
                );
            }
        }
    }

    // 3) Bundled themes, not persisted.
    Ok((ThemeStore::bundled()?, ThemeSource::Bundled))
}

/// Application directory under the config root (`~/.config/liminity`).
pub fn app_config_dir() -> Option<PathBuf> {
    config_root_dir().map(|dir| dir.join("liminity"))
}

/// Resolve the base config directory from env/home conventions.
pub fn config_root_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
}
