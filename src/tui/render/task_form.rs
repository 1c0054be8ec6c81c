use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, FormField};
use crate::tui::layout::{CANCEL_BUTTON, SAVE_BUTTON, form_buttons, form_rect};

const FIELD_LABEL_W: usize = 8;
const ICON_HINT: &str = "ícones: tooth, coffee, book, bed, dumbbell…";

/// Render the add-task modal over the routine
pub fn render_task_form(frame: &mut Frame, app: &App, area: Rect) {
    let form_area = form_rect(area);
    frame.render_widget(Clear, form_area);

    let bg = app.theme.background;
    let form = &app.form;
    let label_style = Style::default().fg(app.theme.text).bg(bg);
    let value_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let focus_label_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(app.theme.emphasis());
    let cursor_style = Style::default().fg(app.theme.highlight).bg(bg);

    let field_line = |field: FormField, label: &str, value: &str| -> Line<'static> {
        let focused = form.focus == field;
        let mut spans = vec![
            Span::styled(" ", label_style),
            Span::styled(
                format!("{:<width$}", label, width = FIELD_LABEL_W),
                if focused {
                    focus_label_style
                } else {
                    label_style
                },
            ),
            Span::styled(value.to_string(), value_style),
        ];
        if focused {
            spans.push(Span::styled("\u{258C}", cursor_style)); // ▌ cursor
        }
        Line::from(spans)
    };

    let mut lines = vec![
        field_line(FormField::Name, "Nome:", &form.name),
        field_line(FormField::Icon, "Ícone:", &form.icon),
        field_line(FormField::Points, "Pontos:", &form.points),
        Line::from(""),
    ];

    // Validation error replaces the icon hint
    lines.push(match &form.error {
        Some(err) => Line::from(Span::styled(
            format!(" {}", err),
            Style::default().fg(app.theme.red).bg(bg),
        )),
        None => Line::from(Span::styled(
            format!(" {}", ICON_HINT),
            Style::default().fg(app.theme.dim).bg(bg),
        )),
    });
    lines.push(Line::from(""));

    // Buttons, placed where mouse hit-testing expects them
    let buttons = form_buttons(form_area);
    let inner_x = form_area.x + 1;
    let button_style = |field: FormField| {
        if form.focus == field {
            Style::default()
                .fg(app.theme.background)
                .bg(app.theme.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text_bright).bg(bg)
        }
    };
    let gap = buttons
        .cancel
        .x
        .saturating_sub(buttons.save.x + buttons.save.width);
    lines.push(Line::from(vec![
        Span::styled(
            " ".repeat(buttons.save.x.saturating_sub(inner_x) as usize),
            label_style,
        ),
        Span::styled(SAVE_BUTTON, button_style(FormField::Save)),
        Span::styled(" ".repeat(gap as usize), label_style),
        Span::styled(CANCEL_BUTTON, button_style(FormField::Cancel)),
    ]));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" Nova tarefa ", focus_label_style))
        .border_style(Style::default().fg(app.theme.border).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, form_area);
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::*;
    use super::*;
    use crate::tui::app::Action;

    fn render_form(app: &App) -> String {
        render_to_string(TERM_W, TERM_H, |frame, area| {
            render_task_form(frame, app, area);
        })
    }

    #[test]
    fn form_shows_fields_and_buttons() {
        let mut app = app_with_tasks(&[]);
        app.dispatch(Action::OpenForm);
        let output = render_form(&app);
        assert!(output.contains("Nova tarefa"));
        assert!(output.contains("Nome:"));
        assert!(output.contains("Ícone:"));
        assert!(output.contains("Pontos:"));
        assert!(output.contains("[ Salvar ]  [ Cancelar ]"));
    }

    #[test]
    fn typed_text_and_cursor_on_focused_field() {
        let mut app = app_with_tasks(&[]);
        app.dispatch(Action::OpenForm);
        for c in "Ler".chars() {
            app.dispatch(Action::FormInput(c));
        }
        let output = render_form(&app);
        assert!(output.contains("Ler\u{258C}"));
    }

    #[test]
    fn buttons_land_on_hit_test_rects() {
        let mut app = app_with_tasks(&[]);
        app.dispatch(Action::OpenForm);
        let output = render_form(&app);
        let form = form_rect(Rect::new(0, 0, TERM_W, TERM_H));
        let buttons = form_buttons(form);
        let row = output.lines().nth(buttons.cancel.y as usize).unwrap_or("");
        let col = row
            .chars()
            .position(|c| c == '[')
            .map(|i| i as u16);
        assert_eq!(col, Some(buttons.save.x));
    }

    #[test]
    fn validation_error_is_shown() {
        let mut app = app_with_tasks(&[]);
        app.dispatch(Action::OpenForm);
        app.dispatch(Action::SubmitForm);
        let output = render_form(&app);
        assert!(output.contains(&crate::ops::form::FormError::EmptyName.to_string()));
        assert!(!output.contains("ícones:"));
    }
}
