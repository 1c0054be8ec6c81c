use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::tui::app::{Action, App, FormField};
use crate::tui::layout::{
    add_button_rect, control_rect, form_buttons, form_field_row, form_rect, row_at, screen_layout,
};
use crate::tui::view::task_rows;

/// Map a mouse event to an action by hit-testing the current layout
pub fn mouse_action(app: &App, mouse: MouseEvent) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {}
        MouseEventKind::ScrollDown if !app.form_open() => return Some(Action::CursorDown),
        MouseEventKind::ScrollUp if !app.form_open() => return Some(Action::CursorUp),
        _ => return None,
    }
    let pos = Position::new(mouse.column, mouse.row);

    if app.acknowledgement.is_some() {
        return Some(Action::DismissAck);
    }
    if app.show_help {
        return Some(Action::ToggleHelp);
    }

    if app.form_open() {
        let form = form_rect(app.viewport);
        let buttons = form_buttons(form);
        if buttons.cancel.contains(pos) {
            return Some(Action::CloseForm);
        }
        if buttons.save.contains(pos) {
            return Some(Action::SubmitForm);
        }
        // Backdrop
        if !form.contains(pos) {
            return Some(Action::CloseForm);
        }
        let fields = [FormField::Name, FormField::Icon, FormField::Points];
        return fields
            .iter()
            .enumerate()
            .find(|(i, _)| form_field_row(form, *i as u16).contains(pos))
            .map(|(_, field)| Action::Focus(*field));
    }

    let layout = screen_layout(app.viewport);
    if add_button_rect(layout.status).contains(pos) {
        return Some(Action::OpenForm);
    }

    let index = row_at(layout.list, app.cursor, pos.y)?;
    let row = task_rows(&app.routine).into_iter().nth(index)?;
    let on_control = control_rect(layout.list, app.cursor, index, &row.control.label())
        .is_some_and(|rect| rect.contains(pos));
    if on_control && row.control.is_enabled() {
        Some(Action::Complete(row.id))
    } else {
        Some(Action::Select(index))
    }
}
