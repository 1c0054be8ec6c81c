use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use super::helpers::{spans_width, truncate_to_width};
use crate::tui::app::App;
use crate::tui::view::{Control, EMPTY_PLACEHOLDER, TaskRow, task_rows, visible_offset};

/// Render the routine list, one task per row
pub fn render_routine_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let rows = task_rows(&app.routine);

    if rows.is_empty() {
        let line = Line::from(Span::styled(
            format!(" {}", EMPTY_PLACEHOLDER),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
        return;
    }

    let height = area.height as usize;
    let offset = visible_offset(app.cursor, height);
    let lines: Vec<Line> = rows
        .iter()
        .enumerate()
        .skip(offset)
        .take(height)
        .map(|(i, row)| render_row(app, row, i == app.cursor, area.width as usize))
        .collect();

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

fn render_row<'a>(app: &App, row: &'a TaskRow, selected: bool, width: usize) -> Line<'a> {
    let theme = &app.theme;
    let bg = if selected {
        theme.selection_bg
    } else {
        theme.background
    };
    let base = Style::default().fg(theme.text).bg(bg);
    let done = !row.control.is_enabled();

    let marker = if selected { " ▸ " } else { "   " };
    let mut spans = vec![
        Span::styled(marker, base.fg(theme.highlight)),
        Span::styled(row.glyph, base),
        Span::styled("  ", base),
    ];

    let label = row.control.label();
    let control_style = match row.control {
        Control::Complete { .. } => base.fg(theme.green).add_modifier(theme.emphasis()),
        Control::Done => base.fg(theme.dim),
    };

    // Name takes whatever is left between the prefix and the control
    let reserved = spans_width(&spans) + label.width() + 2;
    let name = truncate_to_width(&row.name, width.saturating_sub(reserved));
    let name_style = if done {
        base.fg(theme.dim).add_modifier(Modifier::CROSSED_OUT)
    } else if selected {
        base.fg(theme.text_bright)
    } else {
        base
    };
    spans.push(Span::styled(name, name_style));

    let used = spans_width(&spans) + label.width() + 1;
    if used <= width {
        spans.push(Span::styled(" ".repeat(width - used), base));
    }
    spans.push(Span::styled(label, control_style));
    spans.push(Span::styled(" ", base));
    Line::from(spans)
}
