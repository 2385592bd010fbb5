//! Frame composition for the main screen and the theme menu.

use crate::app::state::AppState;
use crate::ui::boxes::{numbered_labels, render_menu, render_task_box};
use crate::ui::frame::Frame;
use crate::ui::settings;
use crate::ui::theme::ColorRole;

/// Title bar, help line, task boxes, key hint, and the pending notice.
pub fn main_frame(state: &AppState) -> Frame {
    let palette = state.themes.active_colors();
    let mut frame = Frame::begin(&palette);
    frame.painted(&palette, ColorRole::Title, settings::TITLE_BAR);
    frame.painted(&palette, ColorRole::Text, settings::HELP_LINE);
    frame.blank();
    frame.painted(&palette, ColorRole::Title, settings::LIST_HEADING);
    frame.blank();

    if state.tasks.is_empty() {
        frame.painted(&palette, ColorRole::Error, settings::EMPTY_LIST);
    } else {
        for (number, task, accent) in state.tasks.rows() {
            frame.lines(render_task_box(&palette, number, task, accent));
        }
    }

    frame.blank();
    frame.painted(&palette, ColorRole::Prompt, settings::KEY_HINT);
    if let Some(notice) = state.notice() {
        frame.painted(&palette, notice.role, &notice.text);
    }
    frame
}

/// Numbered theme names framed in one box.
pub fn theme_menu_frame(state: &AppState, names: &[String]) -> Frame {
    let palette = state.themes.active_colors();
    let mut frame = Frame::begin(&palette);
    frame.painted(&palette, ColorRole::Title, settings::THEMES_HEADING);
    frame.blank();
    frame.lines(render_menu(&palette, &numbered_labels(names)));
    frame
}
