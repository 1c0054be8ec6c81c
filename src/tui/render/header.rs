use chrono::Local;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, Paragraph};

use super::helpers::spans_width;
use crate::ops::stats::compute_stats;
use crate::tui::app::App;
use crate::tui::view::stats_view;

const TITLE: &str = " Minha Rotina";

/// Render the two header rows: title, date and modes, then points and level
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let stats = stats_view(&compute_stats(app.routine.tasks()));

    let title_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(app.theme.emphasis());
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let value_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(app.theme.emphasis());

    // Row 1: title on the left, active modes and date on the right
    let mut left = vec![Span::styled(TITLE, title_style)];
    let mut right: Vec<Span> = Vec::new();
    if app.prefs.dark_mode {
        right.push(Span::styled("☾ escuro  ", dim_style));
    }
    if app.prefs.low_stimulus {
        right.push(Span::styled("◌ calmo  ", dim_style));
    }
    right.push(Span::styled(
        Local::now().format("%d/%m/%Y ").to_string(),
        dim_style,
    ));
    let used = spans_width(&left) + spans_width(&right);
    if used < width {
        left.push(Span::styled(" ".repeat(width - used), text_style));
        left.extend(right);
    }

    // Row 2: points and level
    let scores = vec![
        Span::styled(" Pontos: ", text_style),
        Span::styled(stats.points, value_style),
        Span::styled("   Nível: ", text_style),
        Span::styled(stats.level, value_style),
    ];

    let paragraph = Paragraph::new(vec![Line::from(left), Line::from(scores)])
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Render the progress bar with its caption
pub fn render_progress(frame: &mut Frame, app: &App, area: Rect) {
    let stats = stats_view(&compute_stats(app.routine.tasks()));
    let area = Rect::new(
        area.x + 1,
        area.y,
        area.width.saturating_sub(2),
        area.height,
    );
    let gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(app.theme.gauge_fill)
                .bg(app.theme.selection_bg),
        )
        .ratio(stats.ratio)
        .use_unicode(!app.theme.calm)
        .label(Span::styled(
            stats.caption,
            Style::default().fg(app.theme.text_bright),
        ));
    frame.render_widget(gauge, area);
}
