//! In-memory task list with per-task accent colors.
//!
//! Tasks and their accent slots live in two index-aligned vectors. Every
//! mutation touches both, so `tasks().len() == accents().len()` always holds.
//! Positions are 1-based at this module's public surface.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ui::theme::{ColorRole, ACCENT_SLOTS};

/// One entry of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub title: String,
    pub done: bool,
}

/// Accent color slot in `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccentSlot(u8);

impl AccentSlot {
    #[cfg(test)]
    pub(crate) fn new(slot: u8) -> Option<Self> {
        (1..=ACCENT_SLOTS).contains(&slot).then_some(Self(slot))
    }

    /// Uniform draw over all slots, with replacement.
    fn draw(rng: &mut impl Rng) -> Self {
        Self(rng.gen_range(1..=ACCENT_SLOTS))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Theme role rendered for this slot.
    pub fn role(self) -> ColorRole {
        ColorRole::accent(self.get()).unwrap_or(ColorRole::Accent1)
    }
}

/// Why a typed task number was not accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskNumberError {
    /// The input is not an integer.
    NotANumber,
    /// The integer does not name an existing task.
    OutOfRange,
}

/// Ordered tasks plus their randomly drawn accent slots.
#[derive(Debug, Clone)]
pub struct TaskList {
    tasks: Vec<Task>,
    accents: Vec<AccentSlot>,
    rng: StdRng,
}

impl Default for TaskList {
    fn default() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// List drawing accents from a caller-provided generator (seeded in tests).
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            tasks: Vec::new(),
            accents: Vec::new(),
            rng,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn accents(&self) -> &[AccentSlot] {
        &self.accents
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// `(1-based number, task, accent)` rows in display order.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &Task, AccentSlot)> + '_ {
        self.tasks
            .iter()
            .zip(self.accents.iter().copied())
            .enumerate()
            .map(|(idx, (task, accent))| (idx + 1, task, accent))
    }

    /// Append a task. Blank titles are ignored; returns whether one was added.
    ///
    /// The accent is drawn uniformly from all six slots with replacement, so
    /// neighbouring tasks may share a color.
    pub fn add(&mut self, title: &str) -> bool {
        let title = title.trim();
        if title.is_empty() {
            return false;
        }
        let accent = AccentSlot::draw(&mut self.rng);
        self.tasks.push(Task {
            title: title.to_string(),
            done: false,
        });
        self.accents.push(accent);
        true
    }

    /// Flip the done flag of task `number` (1-based).
    pub fn toggle(&mut self, number: i64) -> Result<(), TaskNumberError> {
        let idx = self.index_of(number)?;
        let task = &mut self.tasks[idx];
        task.done = !task.done;
        Ok(())
    }

    /// Remove task `number` (1-based) together with its accent slot.
    pub fn delete(&mut self, number: i64) -> Result<Task, TaskNumberError> {
        let idx = self.index_of(number)?;
        self.accents.remove(idx);
        Ok(self.tasks.remove(idx))
    }

    fn index_of(&self, number: i64) -> Result<usize, TaskNumberError> {
        usize::try_from(number)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .filter(|idx| *idx < self.tasks.len())
            .ok_or(TaskNumberError::OutOfRange)
    }
}

/// Parse a typed 1-based number. Surrounding whitespace is allowed.
pub fn parse_number(input: &str) -> Result<i64, TaskNumberError> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| TaskNumberError::NotANumber)
}
