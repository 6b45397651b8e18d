use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::app::Model;
use crate::search::SearchResults;

use super::status;

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    let text_area = Rect {
        height: area.height.saturating_sub(1),
        ..area
    };
    let footer_area = Rect {
        y: area.y + area.height.saturating_sub(1),
        height: area.height.min(1),
        ..area
    };

    render_text(model, frame, text_area);

    if model.search_prompt_active() {
        status::render_search_bar(model, frame, footer_area);
    } else if model.active_toast().is_some() {
        status::render_toast_bar(model, frame, footer_area);
    } else {
        status::render_status_bar(model, frame, footer_area);
    }
}

fn render_text(model: &Model, frame: &mut Frame, area: Rect) {
    let buf = &model.buffer;
    let gutter_width = line_number_width(buf.line_count());
    let cursor = buf.cursor();
    let range = model.viewport.visible_range();
    let offset = range.start;

    let content: Vec<Line> = range
        .map(|row| {
            let chars = buf.document().line_chars(row);
            let line_num = format!("{:>width$} ", row + 1, width = gutter_width as usize);
            let mut spans = vec![Span::styled(line_num, Style::default().fg(Color::DarkGray))];
            spans.extend(highlighted_spans(&chars, row, model.search.as_ref()));
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(content), area);

    if model.search_prompt_active() || area.width == 0 || area.height == 0 {
        return;
    }
    let Some(screen_row) = cursor.line.checked_sub(offset) else {
        return;
    };
    let Ok(screen_row) = u16::try_from(screen_row) else {
        return;
    };
    if screen_row >= area.height {
        return;
    }
    let before_cursor: usize = buf
        .document()
        .line_chars(cursor.line)
        .iter()
        .take(cursor.col)
        .map(|c| c.width().unwrap_or(0))
        .sum();
    let x = usize::from(area.x) + usize::from(gutter_width) + 1 + before_cursor;
    let max_x = usize::from(area.x + area.width - 1);
    let x = u16::try_from(x.min(max_x)).unwrap_or(area.x + area.width - 1);
    frame.set_cursor_position((x, area.y + screen_row));
}

/// Spans for one line, with search matches on that line highlighted.
fn highlighted_spans(chars: &[char], row: usize, search: Option<&SearchResults>) -> Vec<Span<'static>> {
    let mut marked = vec![false; chars.len()];
    if let Some(results) = search {
        let len = results.query_len();
        for col in results.columns_on(row) {
            for m in marked.iter_mut().skip(col).take(len) {
                *m = true;
            }
        }
    }

    let highlight = Style::default().bg(Color::Yellow).fg(Color::Black);
    let mut spans = Vec::new();
    let mut start = 0;
    while start < chars.len() {
        let is_match = marked[start];
        let end = marked[start..]
            .iter()
            .position(|&m| m != is_match)
            .map_or(chars.len(), |n| start + n);
        let text: String = chars[start..end].iter().collect();
        spans.push(if is_match {
            Span::styled(text, highlight)
        } else {
            Span::raw(text)
        });
        start = end;
    }
    spans
}

/// Calculate the width needed for line numbers.
pub const fn line_number_width(total_lines: usize) -> u16 {
    if total_lines < 10 {
        1
    } else if total_lines < 100 {
        2
    } else if total_lines < 1_000 {
        3
    } else if total_lines < 10_000 {
        4
    } else if total_lines < 100_000 {
        5
    } else {
        6
    }
}
