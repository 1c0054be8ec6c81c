pub mod ack_popup;
pub mod header;
pub mod help_overlay;
pub mod helpers;
pub mod routine_view;
pub mod status_row;
pub mod task_form;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;
use super::layout::screen_layout;

/// Redraw the whole screen from app state
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    let layout = screen_layout(area);

    header::render_header(frame, app, layout.header);
    header::render_progress(frame, app, layout.gauge);
    routine_view::render_routine_view(frame, app, layout.list);
    status_row::render_status_row(frame, app, layout.status);

    // Overlays, bottom to top
    if app.form_open() {
        task_form::render_task_form(frame, app, area);
    }
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
    if app.acknowledgement.is_some() {
        ack_popup::render_ack_popup(frame, app, area);
    }
}
