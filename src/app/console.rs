//! Terminal input/output seam for the controller.
//!
//! [`Console`] is the contract the controller drives. [`TerminalConsole`] is
//! the crossterm implementation; tests substitute a scripted one.

use crate::app::interrupt::Interrupts;
use crate::app::keys::Key;
use crate::ui::frame::Frame;
use crate::ui::settings;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::{Print, ResetColor};
use crossterm::terminal;
use crossterm::QueueableCommand;
use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

/// Result of one line prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineInput {
    /// User submitted a line (without the trailing newline).
    Line(String),
    /// Ctrl-C, or end of input.
    Interrupted,
}

/// Injectable terminal interface used by the controller.
pub trait Console {
    /// Write one full frame as a single screen update.
    fn present(&mut self, frame: &Frame) -> io::Result<()>;
    /// Wait up to `wait` for a key and return it without consuming it.
    ///
    /// A pending key is returned again on the next call until
    /// [`Console::consume_key`] is called.
    fn poll_key(&mut self, wait: Duration) -> io::Result<Option<Key>>;
    /// Mark the pending key as handled.
    fn consume_key(&mut self);
    /// Show `prompt` and block until the user submits a line.
    fn read_line(&mut self, prompt: &str) -> io::Result<LineInput>;
    /// Print one line immediately, below whatever is on screen.
    fn notice(&mut self, line: &str) -> io::Result<()>;
}

/// Crossterm-backed console on stdin/stdout.
///
/// With a TTY on both ends, raw mode is held for the console's lifetime so
/// Ctrl-C arrives as a key instead of a signal. Otherwise input is read
/// line-wise, which keeps piped sessions usable. Either way a raised
/// [`Interrupts`] flag is reported as an interrupt within one poll interval.
pub struct TerminalConsole {
    out: io::Stdout,
    pending: Option<Key>,
    interrupts: Interrupts,
    input: Input,
    _raw: Option<RawModeGuard>,
}

enum Input {
    Interactive,
    Lines(LineFeed),
}

impl TerminalConsole {
    pub fn new(interrupts: Interrupts) -> io::Result<Self> {
        let interactive = io::stdin().is_terminal() && io::stdout().is_terminal();
        let (input, raw) = if interactive {
            (Input::Interactive, Some(RawModeGuard::acquire()?))
        } else {
            (Input::Lines(LineFeed::stdin(interrupts.clone())), None)
        };
        Ok(Self {
            out: io::stdout(),
            pending: None,
            interrupts,
            input,
            _raw: raw,
        })
    }

    fn read_key_interactive(&mut self, wait: Duration) -> io::Result<Option<Key>> {
        if !event::poll(wait)? {
            return Ok(self.interrupts.is_raised().then_some(Key::Interrupt));
        }
        let Event::Key(key) = event::read()? else {
            return Ok(None);
        };
        if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
            return Ok(None);
        }
        Ok(match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Key::Interrupt)
            }
            KeyCode::Char(c) => Some(Key::Char(c)),
            _ => None,
        })
    }

    fn read_line_interactive(&mut self, prompt: &str) -> io::Result<LineInput> {
        self.write_flush(prompt)?;
        let mut buffer = String::new();
        let tick = Duration::from_millis(settings::KEY_POLL_MS);
        loop {
            if self.interrupts.is_raised() {
                self.write_flush("\r\n")?;
                return Ok(LineInput::Interrupted);
            }
            if !event::poll(tick)? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
                continue;
            }
            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            match key.code {
                KeyCode::Char('c') | KeyCode::Char('d') if ctrl => {
                    self.write_flush("\r\n")?;
                    return Ok(LineInput::Interrupted);
                }
                KeyCode::Enter => {
                    self.write_flush("\r\n")?;
                    return Ok(LineInput::Line(buffer));
                }
                KeyCode::Backspace => {
                    if buffer.pop().is_some() {
                        self.write_flush("\x08 \x08")?;
                    }
                }
                KeyCode::Char(c) if !ctrl => {
                    buffer.push(c);
                    let mut utf8 = [0u8; 4];
                    self.write_flush(c.encode_utf8(&mut utf8))?;
                }
                _ => {}
            }
        }
    }

    fn write_flush(&mut self, text: &str) -> io::Result<()> {
        self.out.queue(Print(text))?;
        self.out.flush()
    }
}

impl Console for TerminalConsole {
    fn present(&mut self, frame: &Frame) -> io::Result<()> {
        self.write_flush(&frame.to_screen_text())
    }

    fn poll_key(&mut self, wait: Duration) -> io::Result<Option<Key>> {
        if self.pending.is_none() {
            self.pending = match &mut self.input {
                Input::Interactive => self.read_key_interactive(wait)?,
                Input::Lines(feed) => feed.next_key(),
            };
        }
        Ok(self.pending)
    }

    fn consume_key(&mut self) {
        self.pending = None;
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<LineInput> {
        if matches!(self.input, Input::Interactive) {
            return self.read_line_interactive(prompt);
        }
        self.write_flush(prompt)?;
        let line = match &mut self.input {
            Input::Lines(feed) => feed.next_line(),
            Input::Interactive => LineInput::Interrupted,
        };
        if line == LineInput::Interrupted {
            self.write_flush("\n")?;
        }
        Ok(line)
    }

    fn notice(&mut self, line: &str) -> io::Result<()> {
        self.write_flush(&format!("{line}\r\n"))
    }
}

impl Drop for TerminalConsole {
    fn drop(&mut self) {
        let _ = self.out.queue(ResetColor);
        let _ = self.out.flush();
    }
}

/// What one wait on a [`LineFeed`] produced.
#[derive(Debug, PartialEq, Eq)]
enum Feed {
    Line(String),
    Idle,
    Closed,
    Interrupted,
}

/// Lines from a non-interactive input, read on a helper thread so waiting
/// for the next line can still notice an interrupt.
struct LineFeed {
    lines: Receiver<String>,
    interrupts: Interrupts,
    tick: Duration,
}

impl LineFeed {
    fn stdin(interrupts: Interrupts) -> Self {
        let (tx, rx) = mpsc::channel();
        // Detached: the thread ends at end of input or when the receiver is
        // gone; a read still blocked at exit is abandoned with the process.
        let _ = thread::Builder::new()
            .name("liminity-stdin".to_string())
            .spawn(move || {
                let stdin = io::stdin();
                let mut reader = stdin.lock();
                loop {
                    let mut line = String::new();
                    match reader.read_line(&mut line) {
                        Ok(0) => break,
                        Ok(_) => {
                            if tx.send(line).is_err() {
                                break;
                            }
                        }
                        Err(err) => {
                            tracing::warn!(error = %err, "stdin read failed");
                            break;
                        }
                    }
                }
            });
        Self::from_receiver(rx, interrupts)
    }

    fn from_receiver(lines: Receiver<String>, interrupts: Interrupts) -> Self {
        Self {
            lines,
            interrupts,
            tick: Duration::from_millis(settings::KEY_POLL_MS),
        }
    }

    fn recv(&self) -> Feed {
        if self.interrupts.is_raised() {
            return Feed::Interrupted;
        }
        match self.lines.recv_timeout(self.tick) {
            Ok(line) => Feed::Line(line),
            Err(RecvTimeoutError::Disconnected) => Feed::Closed,
            Err(RecvTimeoutError::Timeout) if self.interrupts.is_raised() => Feed::Interrupted,
            Err(RecvTimeoutError::Timeout) => Feed::Idle,
        }
    }

    /// Block until a line arrives: one line per key, first visible character
    /// wins. End of input counts as an interrupt.
    fn next_key(&mut self) -> Option<Key> {
        loop {
            match self.recv() {
                Feed::Line(line) => return line.trim().chars().next().map(Key::Char),
                Feed::Idle => continue,
                Feed::Closed | Feed::Interrupted => return Some(Key::Interrupt),
            }
        }
    }

    fn next_line(&mut self) -> LineInput {
        loop {
            match self.recv() {
                Feed::Line(line) => {
                    return LineInput::Line(line.trim_end_matches(['\n', '\r']).to_string())
                }
                Feed::Idle => continue,
                Feed::Closed | Feed::Interrupted => return LineInput::Interrupted,
            }
        }
    }
}

/// Raw mode lifetime guard so terminal state is restored on any return path.
struct RawModeGuard;

impl RawModeGuard {
    /// Enable terminal raw mode and return a guard that disables it on drop.
    fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}
