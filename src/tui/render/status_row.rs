use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use super::helpers::spans_width;
use crate::tui::app::App;
use crate::tui::layout::ADD_BUTTON;

const KEY_HINTS: &str = "⏎ concluir  d escuro  s calmo  ? ajuda  q sair ";

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans = vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(
            ADD_BUTTON,
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(app.theme.emphasis()),
        ),
    ];

    // A status message wins over the key hints
    if let Some(msg) = &app.status_message {
        spans.push(Span::styled(
            format!("  {}", msg),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
    } else if app.ui.show_key_hints {
        let content_width = spans_width(&spans);
        let hint_width = KEY_HINTS.width();
        if content_width + hint_width < width {
            let padding = width - content_width - hint_width;
            spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
            spans.push(Span::styled(
                KEY_HINTS,
                Style::default().fg(app.theme.dim).bg(bg),
            ));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
