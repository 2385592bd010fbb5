//! Shared test fixtures: temp directories and a scripted console.

use crate::app::console::{Console, LineInput};
use crate::app::keys::Key;
use crate::ui::frame::Frame;
use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!("liminity-{prefix}-{millis}-{suffix}"));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Console that replays queued keys and lines and records what was shown.
///
/// Running out of keys behaves like an idle terminal; running out of lines
/// behaves like end of input.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    pub keys: VecDeque<Key>,
    pub lines: VecDeque<String>,
    pub frames: Vec<Frame>,
    pub prompts: Vec<String>,
    pub notices: Vec<String>,
    pub consumed: usize,
}

impl ScriptedConsole {
    pub fn new(keys: &[Key], lines: &[&str]) -> Self {
        Self {
            keys: keys.iter().copied().collect(),
            lines: lines.iter().map(|line| line.to_string()).collect(),
            ..Self::default()
        }
    }
}

impl Console for ScriptedConsole {
    fn present(&mut self, frame: &Frame) -> io::Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }

    fn poll_key(&mut self, _wait: Duration) -> io::Result<Option<Key>> {
        Ok(self.keys.front().copied())
    }

    fn consume_key(&mut self) {
        if self.keys.pop_front().is_some() {
            self.consumed += 1;
        }
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<LineInput> {
        self.prompts.push(prompt.to_string());
        Ok(match self.lines.pop_front() {
            Some(line) => LineInput::Line(line),
            None => LineInput::Interrupted,
        })
    }

    fn notice(&mut self, line: &str) -> io::Result<()> {
        self.notices.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_dir_fixture_writes_and_resolves_paths() {
        let fixture = TestTempDir::new("fixture");
        let file = fixture.write_text("nested/file.txt", "hello");
        assert_eq!(fs::read_to_string(file).unwrap(), "hello");
        assert!(fixture.path().is_dir());
    }

    #[test]
    fn scripted_console_peeks_until_consumed() {
        let mut console = ScriptedConsole::new(&[Key::Char('a')], &[]);
        let wait = Duration::from_millis(1);
        assert_eq!(console.poll_key(wait).unwrap(), Some(Key::Char('a')));
        assert_eq!(console.poll_key(wait).unwrap(), Some(Key::Char('a')));
        console.consume_key();
        assert_eq!(console.poll_key(wait).unwrap(), None);
        assert_eq!(console.consumed, 1);
    }

    #[test]
    fn scripted_console_interrupts_after_last_line() {
        let mut console = ScriptedConsole::new(&[], &["x"]);
        assert_eq!(console.read_line("p1").unwrap(), LineInput::Line("x".into()));
        assert_eq!(console.read_line("p2").unwrap(), LineInput::Interrupted);
        assert_eq!(console.prompts, ["p1", "p2"]);
    }
}
