//! One buffered screen update.
//!
//! A frame starts with the clear sequence, accumulates lines, and is handed
//! to the console as a single write so the screen never shows a half-drawn
//! state.

use crate::ui::theme::{ColorRole, Palette};

/// Lines accumulated for one redraw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    prefix: String,
    lines: Vec<String>,
}

impl Frame {
    /// Begin a full-screen frame that clears the previous one.
    pub fn begin(palette: &Palette<'_>) -> Self {
        Self {
            prefix: format!(
                "{}{}",
                palette.escape(ColorRole::Background),
                palette.clear()
            ),
            lines: Vec::new(),
        }
    }

    /// Push a pre-styled line as-is.
    pub fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&mut self, lines: impl IntoIterator<Item = String>) {
        self.lines.extend(lines);
    }

    pub fn blank(&mut self) {
        self.line(String::new());
    }

    /// Push text in a role color over the theme background.
    pub fn painted(&mut self, palette: &Palette<'_>, role: ColorRole, text: &str) {
        self.line(palette.paint(role, text));
    }

    /// Rows pushed so far, without the clear prefix.
    pub fn rows(&self) -> &[String] {
        &self.lines
    }

    /// Full text to write, using `\r\n` so rows also line up in raw mode.
    pub fn to_screen_text(&self) -> String {
        let mut out = self.prefix.clone();
        out.push_str(&self.lines.join("\r\n"));
        out.push_str("\r\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::sample_theme;

    #[test]
    fn frame_starts_with_clear_and_uses_crlf() {
        let theme = sample_theme("sample");
        let palette = Palette::new(&theme);
        let mut frame = Frame::begin(&palette);
        frame.line("one");
        frame.blank();
        frame.line("two");
        let text = frame.to_screen_text();
        assert!(text.contains(palette.clear()));
        assert!(text.ends_with("one\r\n\r\ntwo\r\n"));
        assert_eq!(frame.rows(), ["one", "", "two"]);
    }

    #[test]
    fn painted_rows_carry_role_color() {
        let theme = sample_theme("sample");
        let palette = Palette::new(&theme);
        let mut frame = Frame::begin(&palette);
        frame.painted(&palette, ColorRole::Error, "[empty]");
        assert_eq!(frame.rows()[0], palette.paint(ColorRole::Error, "[empty]"));
    }
}
