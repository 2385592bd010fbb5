//! Framed text blocks drawn with double-line box glyphs.
//!
//! Both renderers are pure: output depends only on the content and the
//! palette. Widths count characters, so `✓` occupies one column.

use crate::tasks::{AccentSlot, Task};
use crate::ui::settings;
use crate::ui::theme::{ColorRole, Palette};

/// Content line of a task box, e.g. `1. [ ] Buy milk`.
pub fn task_line_content(number: usize, task: &Task) -> String {
    let mark = if task.done {
        settings::MARK_DONE
    } else {
        settings::MARK_OPEN
    };
    format!("{number}. {mark} {}", task.title)
}

/// One task in its own three-line box, colored by the task's accent slot.
///
/// Width is `content + 2` per task; boxes in a list are not aligned.
pub fn render_task_box(
    palette: &Palette<'_>,
    number: usize,
    task: &Task,
    accent: AccentSlot,
) -> Vec<String> {
    let content = task_line_content(number, task);
    let width = visible_width(&content) + 2;
    let color = palette.escape(accent.role());
    let reset = palette.reset();
    vec![
        format!("{color}{}{reset}", horizontal_edge(width, Edge::Top)),
        format!(
            "{color}{v} {content} {v}{reset}",
            v = settings::BOX_VERTICAL
        ),
        format!("{color}{}{reset}", horizontal_edge(width, Edge::Bottom)),
    ]
}

/// Several labels framed by one shared border in the title color.
///
/// Every row is left-justified to the widest label. Returns no rows for an
/// empty label list; callers show an explicit empty message instead.
pub fn render_menu(palette: &Palette<'_>, labels: &[String]) -> Vec<String> {
    let Some(widest) = labels.iter().map(|label| visible_width(label)).max() else {
        return Vec::new();
    };
    let width = widest + 2;
    let color = palette.escape(ColorRole::Title);
    let reset = palette.reset();

    let mut out = Vec::with_capacity(labels.len() + 2);
    out.push(format!("{color}{}{reset}", horizontal_edge(width, Edge::Top)));
    for label in labels {
        let pad = " ".repeat(width - 1 - visible_width(label));
        out.push(format!(
            "{color}{v} {label}{pad}{v}{reset}",
            v = settings::BOX_VERTICAL
        ));
    }
    out.push(format!(
        "{color}{}{reset}",
        horizontal_edge(width, Edge::Bottom)
    ));
    out
}

/// `1. name` labels for a theme menu.
pub fn numbered_labels(names: &[String]) -> Vec<String> {
    names
        .iter()
        .enumerate()
        .map(|(idx, name)| format!("{}. {name}", idx + 1))
        .collect()
}

#[derive(Debug, Clone, Copy)]
enum Edge {
    Top,
    Bottom,
}

fn horizontal_edge(width: usize, edge: Edge) -> String {
    let (left, right) = match edge {
        Edge::Top => (settings::BOX_TOP_LEFT, settings::BOX_TOP_RIGHT),
        Edge::Bottom => (settings::BOX_BOTTOM_LEFT, settings::BOX_BOTTOM_RIGHT),
    };
    let mut line = String::with_capacity((width + 2) * 3);
    line.push(left);
    line.extend(std::iter::repeat(settings::BOX_HORIZONTAL).take(width));
    line.push(right);
    line
}

/// Count visible character width (single-cell approximation).
fn visible_width(s: &str) -> usize {
    s.chars().count()
}
