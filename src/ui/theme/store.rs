//! Ordered theme collection with an active-theme pointer.

use std::path::{Path, PathBuf};

use crate::error::ThemeError;

use super::source::{parse_theme_file, upsert_theme_section, BUNDLED_THEMES};
use super::{Palette, ThemeDefinition};

/// Every known theme in definition order, plus which one is active.
///
/// The active index always points at a stored theme: construction rejects an
/// empty collection and nothing removes themes afterwards.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    themes: Vec<ThemeDefinition>,
    active: usize,
    /// Theme file that receives created themes; `None` keeps them in memory.
    backing: Option<PathBuf>,
}

impl ThemeStore {
    /// Build an in-memory store. The first theme becomes active.
    pub fn from_themes(themes: Vec<ThemeDefinition>) -> Result<Self, ThemeError> {
        if themes.is_empty() {
            return Err(ThemeError::Validation(
                "no valid themes are defined".to_string(),
            ));
        }
        Ok(Self {
            themes,
            active: 0,
            backing: None,
        })
    }

    /// Store holding only the bundled themes, without a backing file.
    pub fn bundled() -> Result<Self, ThemeError> {
        Self::from_toml_str(BUNDLED_THEMES)
    }

    /// In-memory store parsed from theme-file text.
    pub fn from_toml_str(text: &str) -> Result<Self, ThemeError> {
        Self::from_themes(parse_theme_file(text)?)
    }

    /// Load a theme file; created themes are written back to it.
    pub fn open(path: &Path) -> Result<Self, ThemeError> {
        let text = std::fs::read_to_string(path)?;
        let themes = parse_theme_file(&text)?;
        if themes.is_empty() {
            return Err(ThemeError::Validation(format!(
                "no valid themes in {}",
                path.display()
            )));
        }
        let mut store = Self::from_themes(themes)?;
        store.backing = Some(path.to_path_buf());
        Ok(store)
    }

    pub fn backing_path(&self) -> Option<&Path> {
        self.backing.as_deref()
    }

    /// Theme names in definition order.
    ///
    /// The order is stable between calls, so a 1-based selection made against
    /// one listing resolves to the same name immediately afterwards.
    pub fn list_theme_names(&self) -> Vec<String> {
        self.themes
            .iter()
            .map(|theme| theme.name().to_string())
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&ThemeDefinition> {
        self.position(name).map(|idx| &self.themes[idx])
    }

    pub fn active_name(&self) -> &str {
        self.themes[self.active].name()
    }

    /// Switch the active theme.
    pub fn load_theme(&mut self, name: &str) -> Result<(), ThemeError> {
        let idx = self
            .position(name)
            .ok_or_else(|| ThemeError::NotFound(name.to_string()))?;
        self.active = idx;
        tracing::info!(theme = %name, "theme loaded");
        Ok(())
    }

    /// Store `theme`, replacing any theme with the same name in place.
    ///
    /// Overwrites unconditionally; asking the user first is the caller's job.
    /// With a backing file the section is written before memory changes, so a
    /// failed write leaves the store untouched. Does not change the active
    /// theme unless the active theme itself is being replaced.
    pub fn create_theme(&mut self, theme: ThemeDefinition) -> Result<(), ThemeError> {
        if let Some(path) = &self.backing {
            persist_theme(path, &theme)?;
        }
        let name = theme.name().to_string();
        match self.position(&name) {
            Some(idx) => self.themes[idx] = theme,
            None => self.themes.push(theme),
        }
        tracing::info!(theme = %name, persisted = self.backing.is_some(), "theme stored");
        Ok(())
    }

    /// Resolved colors of the active theme.
    pub fn active_colors(&self) -> Palette<'_> {
        Palette::new(&self.themes[self.active])
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.themes.iter().position(|theme| theme.name() == name)
    }
}

fn persist_theme(path: &Path, theme: &ThemeDefinition) -> Result<(), ThemeError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let existing = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(err) => return Err(ThemeError::Io(err)),
    };
    let updated = upsert_theme_section(&existing, theme);
    check_upsert(&updated, theme).map_err(|detail| {
        ThemeError::Validation(format!(
            "refusing to write {}: {detail}",
            path.display()
        ))
    })?;
    std::fs::write(path, updated)?;
    Ok(())
}

/// The rewritten file must still parse and hold exactly `theme` under its
/// name; otherwise writing it would lose the user's themes on next start.
fn check_upsert(updated: &str, theme: &ThemeDefinition) -> Result<(), String> {
    let themes = parse_theme_file(updated).map_err(|err| err.to_string())?;
    match themes.iter().find(|parsed| parsed.name() == theme.name()) {
        Some(parsed) if parsed == theme => Ok(()),
        _ => Err(format!("theme `{}` would not read back", theme.name())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::testsupport::TestTempDir;
    use crate::ui::theme::{sample_role_map, sample_theme, ColorRole};

    fn two_theme_store() -> ThemeStore {
        ThemeStore::from_themes(vec![sample_theme("default"), sample_theme("ocean")])
            .expect("store")
    }

    #[test]
    fn empty_store_is_rejected() {
        let err = ThemeStore::from_themes(Vec::new()).expect_err("must reject");
        assert!(matches!(err, ThemeError::Validation(_)));
    }

    #[test]
    fn first_theme_is_active_by_default() {
        let store = two_theme_store();
        assert_eq!(store.active_name(), "default");
        assert_eq!(store.list_theme_names(), ["default", "ocean"]);
    }

    #[test]
    fn load_theme_switches_and_rejects_unknown() {
        let mut store = two_theme_store();
        store.load_theme("ocean").expect("load");
        assert_eq!(store.active_name(), "ocean");
        assert_eq!(store.active_colors().theme_name(), "ocean");

        let err = store.load_theme("missing").expect_err("must reject");
        assert!(matches!(err, ThemeError::NotFound(_)));
        assert_eq!(store.active_name(), "ocean");
    }

    #[test]
    fn create_theme_appends_in_order_without_switching() {
        let mut store = two_theme_store();
        store.create_theme(sample_theme("forest")).expect("create");
        assert_eq!(store.list_theme_names(), ["default", "ocean", "forest"]);
        assert_eq!(store.active_name(), "default");
    }

    #[test]
    fn create_theme_overwrites_in_place() {
        let mut store = two_theme_store();
        let replacement =
            ThemeDefinition::new("ocean", [Rgb::new(7, 7, 7); 11]).expect("theme");
        store.create_theme(replacement.clone()).expect("overwrite");
        assert_eq!(store.list_theme_names(), ["default", "ocean"]);
        assert_eq!(store.get("ocean"), Some(&replacement));
    }

    #[test]
    fn create_with_missing_role_leaves_store_unchanged() {
        let mut store = two_theme_store();
        let mut values = sample_role_map();
        values.remove("color_3");
        let err = ThemeDefinition::from_role_map("forest", &values)
            .and_then(|theme| store.create_theme(theme))
            .expect_err("must reject");
        assert!(matches!(err, ThemeError::Validation(_)));
        assert_eq!(store.list_theme_names(), ["default", "ocean"]);
    }

    #[test]
    fn created_themes_persist_to_backing_file() {
        let dir = TestTempDir::new("store");
        let path = dir.write_text("themes.toml", BUNDLED_THEMES);
        let mut store = ThemeStore::open(&path).expect("open");
        store.create_theme(sample_theme("forest")).expect("create");

        let reopened = ThemeStore::open(&path).expect("reopen");
        assert_eq!(reopened.get("forest"), Some(&sample_theme("forest")));
        assert_eq!(
            reopened.list_theme_names().last().map(String::as_str),
            Some("forest")
        );
    }

    #[test]
    fn failed_persist_leaves_store_unchanged() {
        let dir = TestTempDir::new("store-fail");
        let path = dir.write_text("themes.toml", BUNDLED_THEMES);
        let mut store = ThemeStore::open(&path).expect("open");
        let before = store.list_theme_names();
        // Replace the file with a directory so the write fails.
        std::fs::remove_file(&path).expect("remove");
        std::fs::create_dir_all(&path).expect("dir");

        let err = store.create_theme(sample_theme("forest")).expect_err("must fail");
        assert!(matches!(err, ThemeError::Io(_)), "got: {err}");
        assert_eq!(store.list_theme_names(), before);
    }

    #[test]
    fn persist_refuses_to_write_a_file_that_would_not_parse() {
        let dir = TestTempDir::new("store-conflict");
        let mut text = BUNDLED_THEMES.to_string();
        // `themes.forest` already defined as a plain key: appending a
        // `[themes.forest]` table would make the file invalid TOML.
        text = text.replacen("[themes.default]", "[themes]\nforest = 1\n\n[themes.default]", 1);
        let path = dir.write_text("themes.toml", &text);
        let mut store = ThemeStore::open(&path).expect("open");
        let before = store.list_theme_names();

        let err = store.create_theme(sample_theme("forest")).expect_err("must refuse");
        assert!(matches!(err, ThemeError::Validation(_)), "got: {err}");
        assert!(err.to_string().contains("refusing to write"), "got: {err}");
        assert_eq!(store.list_theme_names(), before);
        assert_eq!(std::fs::read_to_string(&path).expect("read"), text);
    }

    #[test]
    fn overwrite_through_commented_header_keeps_file_loadable() {
        let dir = TestTempDir::new("store-comment");
        let text = BUNDLED_THEMES.replacen("[themes.ocean]", "[themes.ocean] # my favourite", 1);
        let path = dir.write_text("themes.toml", &text);
        let mut store = ThemeStore::open(&path).expect("open");
        let replacement =
            ThemeDefinition::new("ocean", [Rgb::new(7, 7, 7); 11]).expect("theme");
        store.create_theme(replacement.clone()).expect("overwrite");

        let reopened = ThemeStore::open(&path).expect("reopen");
        assert_eq!(reopened.list_theme_names(), store.list_theme_names());
        assert_eq!(reopened.get("ocean"), Some(&replacement));
    }

    #[test]
    fn open_rejects_file_without_valid_themes() {
        let dir = TestTempDir::new("store-empty");
        let path = dir.write_text("themes.toml", "[themes.half]\ntitle = [1, 2, 3]\n");
        let err = ThemeStore::open(&path).expect_err("must reject");
        assert!(err.to_string().contains("no valid themes"), "got: {err}");
    }

    #[test]
    fn active_colors_follow_the_active_theme() {
        let mut store = two_theme_store();
        let ocean_title = store.get("ocean").expect("ocean").color(ColorRole::Title);
        store.load_theme("ocean").expect("load");
        assert_eq!(store.active_colors().rgb(ColorRole::Title), ocean_title);
    }
}
