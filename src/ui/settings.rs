//! Centralized, hardcoded UI settings for the terminal interface.
//!
//! This is the single place to tweak screen copy, box glyphs, and the idle
//! poll interval.

// ---------------------------------------------------------------------------
// Box glyphs
// ---------------------------------------------------------------------------

pub const BOX_TOP_LEFT: char = '╔';
pub const BOX_TOP_RIGHT: char = '╗';
pub const BOX_BOTTOM_LEFT: char = '╚';
pub const BOX_BOTTOM_RIGHT: char = '╝';
pub const BOX_HORIZONTAL: char = '═';
pub const BOX_VERTICAL: char = '║';

pub const MARK_DONE: &str = "[✓]";
pub const MARK_OPEN: &str = "[ ]";

// ---------------------------------------------------------------------------
// Screen copy
// ---------------------------------------------------------------------------

pub const TITLE_BAR: &str = "liminity | themed task list";
pub const HELP_LINE: &str =
    "todo: [a]dd, [t]oggle, [d]elete, [s]witch / [n]ew theme, [q]uit";
pub const LIST_HEADING: &str = "Your To-Do List:";
pub const THEMES_HEADING: &str = "Available Themes:";
pub const EMPTY_LIST: &str = "[empty]";
pub const KEY_HINT: &str = "Press a key...";
pub const FAREWELL: &str = "Goodbye!";

// ---------------------------------------------------------------------------
// Prompts
// ---------------------------------------------------------------------------

pub const PROMPT_NEW_TASK: &str = "Enter new task: ";
pub const PROMPT_TOGGLE: &str = "Enter task number to toggle: ";
pub const PROMPT_DELETE: &str = "Enter task number to delete: ";
pub const PROMPT_THEME_NUMBER: &str = "Enter theme number: ";
pub const PROMPT_THEME_NAME: &str = "Enter new theme name: ";
pub const COLOR_FORMAT_HINT: &str = "(#RRGGBB or r,g,b)";

// ---------------------------------------------------------------------------
// Notices
// ---------------------------------------------------------------------------

pub const MSG_NOT_A_NUMBER: &str = "Not a valid number.";
pub const MSG_INVALID_SELECTION: &str = "Invalid selection.";
pub const MSG_NO_THEMES: &str = "No themes available.";
pub const MSG_EMPTY_THEME_NAME: &str = "Theme name cannot be empty.";
pub const MSG_CHOOSE_OTHER_NAME: &str = "Choose a different name.";
pub const MSG_COLOR_REQUIRED: &str = "Input required; please enter #RRGGBB or r, g, b.";
pub const MSG_CHANNEL_RANGE: &str = "Each channel must be between 0 and 255.";

// ---------------------------------------------------------------------------
// Timing
// ---------------------------------------------------------------------------

/// Idle wait between key polls when nothing is pending.
pub const KEY_POLL_MS: u64 = 200;

// ---------------------------------------------------------------------------
// Small helpers
// ---------------------------------------------------------------------------

pub fn color_prompt(label: &str) -> String {
    format!("{label} {COLOR_FORMAT_HINT}: ")
}

pub fn overwrite_prompt(name: &str) -> String {
    format!("Theme '{name}' exists - overwrite? (y/N): ")
}

pub fn invalid_color_message(detail: &str) -> String {
    format!("Invalid color format: {detail}. Try again.")
}

pub fn unknown_key_message(key: char) -> String {
    format!("Unknown key: {key}")
}

pub fn switched_message(name: &str) -> String {
    format!("Switched to theme: {name}")
}

pub fn created_message(name: &str) -> String {
    format!("Created and loaded theme: {name}")
}

pub fn create_failed_message(detail: &str) -> String {
    format!("Failed to create theme: {detail}")
}
