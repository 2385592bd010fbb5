//! Unified error types for color parsing, theme storage, and the session loop.

use std::fmt;

// ---------------------------------------------------------------------------
// ColorError
// ---------------------------------------------------------------------------

/// Errors arising from user-supplied color strings.
///
/// Both variants are recoverable: interactive callers re-prompt instead of
/// aborting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The string is not `#RRGGBB` or `r,g,b`.
    Format(String),
    /// The string parsed, but a channel falls outside `0..=255`.
    Range([i64; 3]),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format(msg) => write!(f, "{msg}"),
            Self::Range([r, g, b]) => {
                write!(f, "channel out of range in ({r}, {g}, {b}); expected 0-255")
            }
        }
    }
}

impl std::error::Error for ColorError {}

// ---------------------------------------------------------------------------
// ThemeError
// ---------------------------------------------------------------------------

/// Errors when building, loading, or persisting themes.
#[derive(Debug)]
pub enum ThemeError {
    /// A theme definition is incomplete or carries an invalid color.
    Validation(String),
    /// No theme with the requested name exists.
    NotFound(String),
    Io(std::io::Error),
    Toml(toml::de::Error),
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(msg) => write!(f, "invalid theme: {msg}"),
            Self::NotFound(name) => write!(f, "unknown theme `{name}`"),
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
        }
    }
}

impl std::error::Error for ThemeError {}

impl From<std::io::Error> for ThemeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ThemeError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// SessionError
// ---------------------------------------------------------------------------

/// Conditions that end the interactive session.
#[derive(Debug)]
pub enum SessionError {
    /// Terminal read/write failure.
    Io(std::io::Error),
    /// Ctrl-C or end of input; the process exits with status 0.
    Interrupted,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "terminal: {e}"),
            Self::Interrupted => write!(f, "interrupted"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<std::io::Error> for SessionError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
