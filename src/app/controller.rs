//! Key-driven dispatch loop: render, poll one key, act, repeat.
//!
//! The controller owns the [`AppState`] and a [`Console`]. All actions run
//! synchronously on the calling thread; only the key poll waits, for at most
//! one idle interval.

use std::time::Duration;

use crate::app::console::{Console, LineInput};
use crate::app::keys::{parse_key, Command};
use crate::app::state::AppState;
use crate::app::view;
use crate::color::{parse_color, Rgb};
use crate::error::{ColorError, SessionError};
use crate::tasks::{parse_number, TaskNumberError};
use crate::ui::settings;
use crate::ui::theme::{ColorRole, ThemeDefinition};

/// Whether the loop keeps going after one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Controller<C: Console> {
    state: AppState,
    console: C,
}

impl<C: Console> Controller<C> {
    pub fn new(state: AppState, console: C) -> Self {
        Self { state, console }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// Run until the user quits. Interrupts surface as
    /// [`SessionError::Interrupted`].
    pub fn run(&mut self) -> Result<(), SessionError> {
        loop {
            if self.step()? == Flow::Quit {
                return Ok(());
            }
        }
    }

    /// One cycle: redraw, poll, and run at most one command.
    pub fn step(&mut self) -> Result<Flow, SessionError> {
        let frame = view::main_frame(&self.state);
        self.console.present(&frame)?;

        let wait = Duration::from_millis(settings::KEY_POLL_MS);
        let Some(key) = self.console.poll_key(wait)? else {
            return Ok(Flow::Continue);
        };
        // Consume first so a failing action cannot see the same key again.
        self.console.consume_key();
        self.state.clear_notice();

        let command = parse_key(key);
        tracing::debug!(?command, "dispatching key");
        self.dispatch(command)
    }

    fn dispatch(&mut self, command: Command) -> Result<Flow, SessionError> {
        match command {
            Command::AddTask => self.add_task()?,
            Command::ToggleTask => self.toggle_task()?,
            Command::DeleteTask => self.delete_task()?,
            Command::SwitchTheme => self.switch_theme()?,
            Command::NewTheme => self.create_theme()?,
            Command::Quit => {
                self.console.notice(settings::FAREWELL)?;
                return Ok(Flow::Quit);
            }
            Command::Interrupt => return Err(SessionError::Interrupted),
            Command::Unknown(key) => self
                .state
                .set_notice(ColorRole::Error, settings::unknown_key_message(key)),
        }
        Ok(Flow::Continue)
    }

    fn add_task(&mut self) -> Result<(), SessionError> {
        let title = self.prompt(settings::PROMPT_NEW_TASK)?;
        if self.state.tasks.add(&title) {
            tracing::debug!(count = self.state.tasks.len(), "task added");
        }
        Ok(())
    }

    fn toggle_task(&mut self) -> Result<(), SessionError> {
        if self.state.tasks.is_empty() {
            return Ok(());
        }
        let raw = self.prompt(settings::PROMPT_TOGGLE)?;
        match parse_number(&raw) {
            // Out-of-range numbers are ignored without a message.
            Ok(number) => {
                let _ = self.state.tasks.toggle(number);
            }
            Err(_) => self.not_a_number(),
        }
        Ok(())
    }

    fn delete_task(&mut self) -> Result<(), SessionError> {
        if self.state.tasks.is_empty() {
            return Ok(());
        }
        let raw = self.prompt(settings::PROMPT_DELETE)?;
        match parse_number(&raw) {
            Ok(number) => {
                if let Ok(task) = self.state.tasks.delete(number) {
                    tracing::debug!(title = %task.title, "task deleted");
                }
            }
            Err(_) => self.not_a_number(),
        }
        Ok(())
    }

    fn switch_theme(&mut self) -> Result<(), SessionError> {
        let names = self.state.themes.list_theme_names();
        if names.is_empty() {
            self.state
                .set_notice(ColorRole::Error, settings::MSG_NO_THEMES);
            return Ok(());
        }

        let menu = view::theme_menu_frame(&self.state, &names);
        self.console.present(&menu)?;
        let raw = self.prompt(settings::PROMPT_THEME_NUMBER)?;

        let selected = match parse_number(&raw) {
            Ok(number) => resolve_theme_number(&names, number),
            Err(err) => Err(err),
        };
        match selected {
            Ok(name) => match self.state.themes.load_theme(name) {
                Ok(()) => self
                    .state
                    .set_notice(ColorRole::Text, settings::switched_message(name)),
                Err(err) => self.state.set_notice(ColorRole::Error, err.to_string()),
            },
            Err(TaskNumberError::NotANumber) => self.not_a_number(),
            Err(TaskNumberError::OutOfRange) => self
                .state
                .set_notice(ColorRole::Error, settings::MSG_INVALID_SELECTION),
        }
        Ok(())
    }

    fn create_theme(&mut self) -> Result<(), SessionError> {
        let name = self.read_theme_name()?;

        let mut colors = [Rgb::new(0, 0, 0); 11];
        for (slot, role) in colors.iter_mut().zip(ColorRole::all()) {
            *slot = self.read_color(*role)?;
        }

        let result = ThemeDefinition::new(&name, colors)
            .and_then(|theme| self.state.themes.create_theme(theme))
            .and_then(|()| self.state.themes.load_theme(&name));
        match result {
            Ok(()) => self
                .state
                .set_notice(ColorRole::Text, settings::created_message(&name)),
            Err(err) => {
                tracing::warn!(theme = %name, error = %err, "theme creation failed");
                self.state.set_notice(
                    ColorRole::Error,
                    settings::create_failed_message(&err.to_string()),
                );
            }
        }
        Ok(())
    }

    /// Prompt until a non-empty name is given and, for an existing name, the
    /// user confirms the overwrite.
    fn read_theme_name(&mut self) -> Result<String, SessionError> {
        loop {
            let name = self.prompt(settings::PROMPT_THEME_NAME)?.trim().to_string();
            if name.is_empty() {
                self.say(ColorRole::Error, settings::MSG_EMPTY_THEME_NAME)?;
                continue;
            }
            if self.state.themes.contains(&name) {
                let answer = self.prompt(&settings::overwrite_prompt(&name))?;
                if !is_yes(&answer) {
                    self.say(ColorRole::Text, settings::MSG_CHOOSE_OTHER_NAME)?;
                    continue;
                }
            }
            return Ok(name);
        }
    }

    /// Prompt for one role until the input parses and every channel is in
    /// range. Each error kind gets its own message.
    fn read_color(&mut self, role: ColorRole) -> Result<Rgb, SessionError> {
        let prompt = settings::color_prompt(role.label());
        loop {
            let raw = self.prompt(&prompt)?;
            let raw = raw.trim();
            if raw.is_empty() {
                self.say(ColorRole::Error, settings::MSG_COLOR_REQUIRED)?;
                continue;
            }
            match parse_color(raw) {
                Ok(rgb) => return Ok(rgb),
                Err(ColorError::Range(_)) => {
                    self.say(ColorRole::Error, settings::MSG_CHANNEL_RANGE)?;
                }
                Err(ColorError::Format(detail)) => {
                    self.say(ColorRole::Error, &settings::invalid_color_message(&detail))?;
                }
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<String, SessionError> {
        let painted = self.state.themes.active_colors().paint(ColorRole::Prompt, text);
        match self.console.read_line(&painted)? {
            LineInput::Line(line) => Ok(line),
            LineInput::Interrupted => Err(SessionError::Interrupted),
        }
    }

    /// Print a message right away, for feedback inside a prompt loop.
    fn say(&mut self, role: ColorRole, text: &str) -> Result<(), SessionError> {
        let painted = self.state.themes.active_colors().paint(role, text);
        self.console.notice(&painted)?;
        Ok(())
    }

    fn not_a_number(&mut self) {
        self.state
            .set_notice(ColorRole::Error, settings::MSG_NOT_A_NUMBER);
    }
}

/// Map a 1-based menu number onto `names`.
fn resolve_theme_number(names: &[String], number: i64) -> Result<&str, TaskNumberError> {
    usize::try_from(number)
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|idx| names.get(idx))
        .map(String::as_str)
        .ok_or(TaskNumberError::OutOfRange)
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
