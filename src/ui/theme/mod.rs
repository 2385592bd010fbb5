//! Semantic terminal theme system.
//!
//! Every color on screen resolves through a [`ColorRole`] of the active
//! [`ThemeDefinition`], so switching themes recolors the whole interface on
//! the next redraw.

mod source;
mod store;

pub use source::{
    default_theme_file_path, ensure_default_theme_file, parse_theme_file, upsert_theme_section,
    BUNDLED_THEMES,
};
pub use store::ThemeStore;

use crate::color::{ansi, parse_color, Rgb};
use crate::error::ThemeError;
use crossterm::cursor::MoveTo;
use crossterm::style::ResetColor;
use crossterm::terminal::{Clear, ClearType};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Number of generic accent slots (`color_1` through `color_6`).
pub const ACCENT_SLOTS: u8 = 6;

/// Semantic color role carried by every theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColorRole {
    Background,
    Title,
    Text,
    Error,
    Prompt,
    Accent1,
    Accent2,
    Accent3,
    Accent4,
    Accent5,
    Accent6,
}

impl ColorRole {
    /// Stable theme-file key for this role.
    pub fn key(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Title => "title",
            Self::Text => "text",
            Self::Error => "error",
            Self::Prompt => "prompt",
            Self::Accent1 => "color_1",
            Self::Accent2 => "color_2",
            Self::Accent3 => "color_3",
            Self::Accent4 => "color_4",
            Self::Accent5 => "color_5",
            Self::Accent6 => "color_6",
        }
    }

    /// Human label used when prompting for this role.
    pub fn label(self) -> &'static str {
        match self {
            Self::Background => "Background color",
            Self::Title => "Title color",
            Self::Text => "Text color",
            Self::Error => "Error color",
            Self::Prompt => "Prompt color",
            Self::Accent1 => "Color slot 1",
            Self::Accent2 => "Color slot 2",
            Self::Accent3 => "Color slot 3",
            Self::Accent4 => "Color slot 4",
            Self::Accent5 => "Color slot 5",
            Self::Accent6 => "Color slot 6",
        }
    }

    /// All roles in theme-file order.
    pub fn all() -> &'static [ColorRole; 11] {
        &[
            Self::Background,
            Self::Title,
            Self::Text,
            Self::Error,
            Self::Prompt,
            Self::Accent1,
            Self::Accent2,
            Self::Accent3,
            Self::Accent4,
            Self::Accent5,
            Self::Accent6,
        ]
    }

    /// Accent role for a 1-based slot; `None` outside `1..=6`.
    pub fn accent(slot: u8) -> Option<ColorRole> {
        match slot {
            1 => Some(Self::Accent1),
            2 => Some(Self::Accent2),
            3 => Some(Self::Accent3),
            4 => Some(Self::Accent4),
            5 => Some(Self::Accent5),
            6 => Some(Self::Accent6),
            _ => None,
        }
    }

    fn from_key(key: &str) -> Option<ColorRole> {
        let normalized = key.trim().to_ascii_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|role| role.key() == normalized)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// A named, complete set of role colors.
///
/// Construction goes through [`ThemeDefinition::new`] or
/// [`ThemeDefinition::from_role_map`], both of which require all 11 roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeDefinition {
    name: String,
    colors: [Rgb; 11],
}

impl ThemeDefinition {
    /// Build from colors listed in [`ColorRole::all`] order.
    pub fn new(name: &str, colors: [Rgb; 11]) -> Result<Self, ThemeError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ThemeError::Validation(
                "theme name cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            name: name.to_string(),
            colors,
        })
    }

    /// Build from `role key -> color string` pairs, as read from a theme file.
    ///
    /// Unknown keys are ignored. Every role must be present and parse.
    pub fn from_role_map(
        name: &str,
        values: &BTreeMap<String, String>,
    ) -> Result<Self, ThemeError> {
        let mut resolved: [Option<Rgb>; 11] = [None; 11];
        for (key, value) in values {
            let Some(role) = ColorRole::from_key(key) else {
                continue;
            };
            let rgb = parse_color(value).map_err(|err| {
                ThemeError::Validation(format!("role `{}`: {err}", role.key()))
            })?;
            resolved[role.index()] = Some(rgb);
        }

        let mut colors = [Rgb::new(0, 0, 0); 11];
        for role in ColorRole::all() {
            colors[role.index()] = resolved[role.index()].ok_or_else(|| {
                ThemeError::Validation(format!("missing role `{}`", role.key()))
            })?;
        }
        Self::new(name, colors)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolve one role.
    pub fn color(&self, role: ColorRole) -> Rgb {
        self.colors[role.index()]
    }

    /// `(role, color)` pairs in theme-file order.
    pub fn roles(&self) -> impl Iterator<Item = (ColorRole, Rgb)> + '_ {
        ColorRole::all().iter().map(|role| (*role, self.color(*role)))
    }
}

/// Resolved colors of the active theme plus theme-independent control
/// sequences.
#[derive(Debug, Clone, Copy)]
pub struct Palette<'a> {
    theme: &'a ThemeDefinition,
}

impl<'a> Palette<'a> {
    pub fn new(theme: &'a ThemeDefinition) -> Self {
        Self { theme }
    }

    pub fn theme_name(&self) -> &'a str {
        self.theme.name()
    }

    pub fn rgb(&self, role: ColorRole) -> Rgb {
        self.theme.color(role)
    }

    /// Foreground escape for a role. `Background` still yields a background
    /// escape.
    pub fn escape(&self, role: ColorRole) -> String {
        let rgb = self.rgb(role);
        match role {
            ColorRole::Background => rgb.bg_escape(),
            _ => rgb.fg_escape(),
        }
    }

    /// Restores the terminal's default colors.
    pub fn reset(&self) -> &'static str {
        static RESET: OnceLock<String> = OnceLock::new();
        RESET.get_or_init(|| ansi(ResetColor))
    }

    /// Clears the visible screen and homes the cursor.
    pub fn clear(&self) -> &'static str {
        static CLEAR: OnceLock<String> = OnceLock::new();
        CLEAR.get_or_init(|| format!("{}{}", ansi(Clear(ClearType::All)), ansi(MoveTo(0, 0))))
    }

    /// Text in a role color over the theme background, followed by a reset.
    pub fn paint(&self, role: ColorRole, text: &str) -> String {
        format!(
            "{}{}{text}{}",
            self.escape(role),
            self.escape(ColorRole::Background),
            self.reset()
        )
    }
}

#[cfg(test)]
pub(crate) fn sample_theme(name: &str) -> ThemeDefinition {
    let mut colors = [Rgb::new(0, 0, 0); 11];
    for (idx, color) in colors.iter_mut().enumerate() {
        let step = u8::try_from(idx * 20).expect("small index");
        *color = Rgb::new(step, 255 - step, 100);
    }
    ThemeDefinition::new(name, colors).expect("sample theme")
}

#[cfg(test)]
pub(crate) fn sample_role_map() -> BTreeMap<String, String> {
    sample_theme("sample")
        .roles()
        .map(|(role, rgb)| (role.key().to_string(), rgb.to_hex()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_keys_round_trip() {
        for role in ColorRole::all() {
            assert_eq!(ColorRole::from_key(role.key()), Some(*role));
        }
        assert_eq!(ColorRole::from_key(" Color_3 "), Some(ColorRole::Accent3));
        assert_eq!(ColorRole::from_key("color_7"), None);
    }

    #[test]
    fn accent_slots_map_to_generic_roles() {
        assert_eq!(ColorRole::accent(1), Some(ColorRole::Accent1));
        assert_eq!(ColorRole::accent(6), Some(ColorRole::Accent6));
        assert_eq!(ColorRole::accent(0), None);
        assert_eq!(ColorRole::accent(7), None);
    }

    #[test]
    fn from_role_map_builds_complete_theme() {
        let theme = ThemeDefinition::from_role_map("ocean", &sample_role_map()).expect("theme");
        assert_eq!(theme.name(), "ocean");
        assert_eq!(theme, sample_theme("ocean"));
    }

    #[test]
    fn from_role_map_rejects_missing_role() {
        let mut values = sample_role_map();
        values.remove("color_3");
        let err = ThemeDefinition::from_role_map("ocean", &values).expect_err("must reject");
        assert!(err.to_string().contains("color_3"), "got: {err}");
    }

    #[test]
    fn from_role_map_rejects_out_of_range_channel() {
        let mut values = sample_role_map();
        values.insert("title".to_string(), "300, 0, 0".to_string());
        let err = ThemeDefinition::from_role_map("ocean", &values).expect_err("must reject");
        assert!(matches!(err, ThemeError::Validation(_)));
        assert!(err.to_string().contains("title"), "got: {err}");
    }

    #[test]
    fn from_role_map_ignores_unknown_keys() {
        let mut values = sample_role_map();
        values.insert("border".to_string(), "nonsense".to_string());
        assert!(ThemeDefinition::from_role_map("ocean", &values).is_ok());
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = ThemeDefinition::new("  ", [Rgb::new(0, 0, 0); 11]).expect_err("must reject");
        assert!(matches!(err, ThemeError::Validation(_)));
    }

    #[test]
    fn palette_paints_over_background_and_resets() {
        let theme = sample_theme("sample");
        let palette = Palette::new(&theme);
        let painted = palette.paint(ColorRole::Error, "oops");
        assert!(painted.starts_with(&theme.color(ColorRole::Error).fg_escape()));
        assert!(painted.contains(&theme.color(ColorRole::Background).bg_escape()));
        assert!(painted.ends_with(&format!("oops{}", palette.reset())));
        assert_eq!(palette.reset(), "\x1b[0m");
        assert!(palette.clear().starts_with("\x1b[2J"));
    }
}
