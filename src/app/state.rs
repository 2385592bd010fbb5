//! Application state owned by the controller for the whole session.

use crate::tasks::TaskList;
use crate::ui::theme::{ColorRole, ThemeStore};

/// A one-line message shown under the next frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub role: ColorRole,
    pub text: String,
}

/// Everything the session mutates: the task list, the theme store, and the
/// pending notice.
#[derive(Debug)]
pub struct AppState {
    pub tasks: TaskList,
    pub themes: ThemeStore,
    notice: Option<Notice>,
}

impl AppState {
    pub fn new(themes: ThemeStore) -> Self {
        Self::with_tasks(TaskList::new(), themes)
    }

    pub fn with_tasks(tasks: TaskList, themes: ThemeStore) -> Self {
        Self {
            tasks,
            themes,
            notice: None,
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn set_notice(&mut self, role: ColorRole, text: impl Into<String>) {
        self.notice = Some(Notice {
            role,
            text: text.into(),
        });
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }
}
