use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::app::{Model, ToastLevel};

const SEARCH_PROMPT: &str = "Find: ";

pub fn render_search_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let query = model.search_input.as_deref().unwrap_or_default();
    let text = format!("{SEARCH_PROMPT}{query}  Enter: search  Esc: cancel");
    let bar = Paragraph::new(text).style(Style::default().bg(Color::Blue).fg(Color::White));
    frame.render_widget(bar, area);
    let x = prompt_cursor_x(area, query);
    frame.set_cursor_position((x, area.y));
}

/// Screen column just after `query` in the search prompt, clamped to `area`.
fn prompt_cursor_x(area: Rect, query: &str) -> u16 {
    let offset = SEARCH_PROMPT.width() + query.width();
    let x = usize::from(area.x).saturating_add(offset);
    let max_x = area.right().saturating_sub(1);
    u16::try_from(x).map_or(max_x, |x| x.min(max_x))
}

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let buf = &model.buffer;
    let cursor = buf.cursor();
    let dirty_indicator = if buf.is_dirty() { " [modified]" } else { "" };
    let match_info = model
        .current_search_match()
        .map(|(current, total)| format!("  [match {current}/{total}]"))
        .unwrap_or_default();

    let status = format!(
        " {}{dirty_indicator}  Lines: {}  Ln {}, Col {}{match_info}  Ctrl+S:save Ctrl+Z:undo Ctrl+Y:redo Ctrl+F:find Esc:quit",
        model.display_name(),
        buf.line_count(),
        cursor.line + 1,
        cursor.col + 1,
    );

    let status_bar =
        Paragraph::new(status).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(status_bar, area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, style) = match level {
        ToastLevel::Info => (
            "[info]",
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ),
        ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
        ToastLevel::Error => ("[error]", Style::default().bg(Color::Red).fg(Color::White)),
    };
    let toast = Paragraph::new(format!("{prefix} {message}")).style(style);
    frame.render_widget(toast, area);
}
