//! Theme file format: one `[themes.<name>]` TOML table per theme.
//!
//! Reading preserves section order so numeric selection matches the listing.
//! Writing only touches the one section being created, leaving comments and
//! other themes as the user wrote them.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::config::app_config_dir;
use crate::error::ThemeError;

use super::ThemeDefinition;

/// Themes shipped with the binary, used when no theme file is given.
pub const BUNDLED_THEMES: &str = include_str!("../../templates/themes.toml");

#[derive(Debug, Deserialize)]
struct ThemeFile {
    #[serde(default)]
    themes: toml::Table,
}

/// Parse theme file text into definitions, in file order.
///
/// Sections that fail validation are skipped with a warning; a syntax error
/// fails the whole file.
pub fn parse_theme_file(text: &str) -> Result<Vec<ThemeDefinition>, ThemeError> {
    let parsed: ThemeFile = toml::from_str(text)?;
    let mut themes = Vec::with_capacity(parsed.themes.len());
    for (name, section) in &parsed.themes {
        let Some(table) = section.as_table() else {
            tracing::warn!(theme = %name, "skipping theme entry that is not a table");
            continue;
        };
        let values: BTreeMap<String, String> = table
            .iter()
            .map(|(key, value)| (key.clone(), color_value_text(value)))
            .collect();
        match ThemeDefinition::from_role_map(name, &values) {
            Ok(theme) => themes.push(theme),
            Err(err) => tracing::warn!(theme = %name, error = %err, "skipping invalid theme"),
        }
    }
    Ok(themes)
}

/// Flatten a TOML color value into the text form the color parser accepts.
fn color_value_text(value: &toml::Value) -> String {
    match value {
        toml::Value::String(text) => text.clone(),
        toml::Value::Array(items) => items
            .iter()
            .map(|item| match item {
                toml::Value::Integer(n) => n.to_string(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}

/// Return the per-user theme file path (`~/.config/liminity/themes.toml`).
pub fn default_theme_file_path() -> Option<std::path::PathBuf> {
    app_config_dir().map(|dir| dir.join("themes.toml"))
}

/// Write the bundled themes to `path` unless a file already exists there.
pub fn ensure_default_theme_file(path: &Path) -> Result<(), ThemeError> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // create_new avoids clobbering a file another process created first.
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(mut file) => {
            file.write_all(BUNDLED_THEMES.as_bytes())?;
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(ThemeError::Io(e)),
    }
}

/// Insert or replace the section for `theme`, preserving unrelated content.
pub fn upsert_theme_section(input: &str, theme: &ThemeDefinition) -> String {
    let mut lines = if input.is_empty() {
        Vec::new()
    } else {
        input.lines().map(str::to_string).collect::<Vec<_>>()
    };
    let headers = header_forms(theme.name());
    let section = render_section(theme);

    let start = lines.iter().position(|line| {
        table_header(line).is_some_and(|found| headers.iter().any(|header| *header == found))
    });

    if let Some(start) = start {
        let mut end = lines
            .iter()
            .enumerate()
            .skip(start + 1)
            .find(|(_, line)| table_header(line).is_some())
            .map_or(lines.len(), |(idx, _)| idx);
        // Keep blank separator rows ahead of the next section.
        while end > start + 1 && lines[end - 1].trim().is_empty() {
            end -= 1;
        }
        let _ = lines.splice(start..end, section);
        return ensure_trailing_newline(lines.join("\n"));
    }

    if lines.last().is_some_and(|line| !line.trim().is_empty()) {
        lines.push(String::new());
    }
    lines.extend(section);
    ensure_trailing_newline(lines.join("\n"))
}

/// Canonical form of a table header line: trailing comment dropped and
/// whitespace outside quoted keys removed, so `[ themes . ocean ] # note`
/// reads as `[themes.ocean]`. `None` for lines that are not headers.
fn table_header(line: &str) -> Option<String> {
    let mut canonical = String::with_capacity(line.len());
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for c in line.trim().chars() {
        match quote {
            Some(open) => {
                canonical.push(c);
                if escaped {
                    escaped = false;
                } else if c == '\\' && open == '"' {
                    escaped = true;
                } else if c == open {
                    quote = None;
                }
            }
            None => match c {
                '#' => break,
                '"' | '\'' => {
                    quote = Some(c);
                    canonical.push(c);
                }
                c if c.is_whitespace() => {}
                c => canonical.push(c),
            },
        }
    }
    (canonical.starts_with('[') && canonical.ends_with(']')).then_some(canonical)
}

fn render_section(theme: &ThemeDefinition) -> Vec<String> {
    let mut out = Vec::with_capacity(12);
    out.push(section_header(theme.name()));
    for (role, rgb) in theme.roles() {
        out.push(format!("{} = [{}, {}, {}]", role.key(), rgb.r, rgb.g, rgb.b));
    }
    out
}

/// Canonical header: bare key when possible, quoted otherwise.
fn section_header(name: &str) -> String {
    if is_bare_key(name) {
        format!("[themes.{name}]")
    } else {
        format!("[themes.{}]", quoted_key(name))
    }
}

/// Every header spelling that addresses `name`.
fn header_forms(name: &str) -> Vec<String> {
    let mut forms = vec![format!("[themes.{}]", quoted_key(name))];
    if is_bare_key(name) {
        forms.push(format!("[themes.{name}]"));
    }
    forms
}

fn is_bare_key(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

fn quoted_key(name: &str) -> String {
    let escaped = name.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}

fn ensure_trailing_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
