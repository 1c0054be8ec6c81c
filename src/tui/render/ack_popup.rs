use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::helpers::wrap_text;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::view::acknowledgement_text;

/// Render the popup shown right after a task is completed
pub fn render_ack_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ack) = &app.acknowledgement else {
        return;
    };
    let popup_w: u16 = 64.min(area.width.saturating_sub(2));
    let inner_w = popup_w.saturating_sub(2) as usize;

    let bg = app.theme.background;
    let accent = if app.theme.calm {
        app.theme.text_bright
    } else {
        app.theme.yellow
    };
    let message_style = Style::default()
        .fg(accent)
        .bg(bg)
        .add_modifier(app.theme.emphasis());
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let text = acknowledgement_text(&ack.task_name, ack.points, app.theme.calm);
    let mut styled_lines: Vec<(String, Style)> = vec![("".into(), dim_style)];
    for s in wrap_text(" ", &text, inner_w) {
        styled_lines.push((s, message_style));
    }
    styled_lines.push(("".into(), dim_style));
    for s in wrap_text(" ", "Pressione qualquer tecla para continuar.", inner_w) {
        styled_lines.push((s, dim_style));
    }

    // Dynamic height from content + 2 for borders
    let popup_h = ((styled_lines.len() as u16) + 2).min(area.height.saturating_sub(2));
    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let lines: Vec<Line> = styled_lines
        .into_iter()
        .map(|(text, style)| Line::from(Span::styled(text, style)))
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, overlay_area);
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::*;
    use super::*;
    use crate::model::PrefKey;
    use crate::tui::app::Action;

    fn render_popup(app: &App) -> String {
        render_to_string(TERM_W, TERM_H, |frame, area| {
            render_ack_popup(frame, app, area);
        })
    }

    #[test]
    fn nothing_without_acknowledgement() {
        let app = app_with_tasks(&[("Read", 20)]);
        assert_eq!(render_popup(&app), "");
    }

    #[test]
    fn celebrates_completed_task() {
        let mut app = app_with_tasks(&[("Read", 20)]);
        app.dispatch(Action::CompleteSelected);
        let output = render_popup(&app);
        assert!(output.contains("🎉"));
        assert!(output.contains("Parabéns! Você completou: Read!"));
        assert!(output.contains("Você ganhou 20 pontos!"));
    }

    #[test]
    fn calm_mode_drops_the_emoji() {
        let mut app = app_with_tasks(&[("Read", 20)]);
        app.dispatch(Action::ToggleLowStimulus);
        app.dispatch(Action::CompleteSelected);
        assert!(app.prefs.get(PrefKey::LowStimulus));
        let output = render_popup(&app);
        assert!(!output.contains("🎉"));
        assert!(output.contains("Você ganhou 20 pontos!"));
    }
}
