use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{Action, App, FormField};

/// Keys while the add-task form is open. There is no cancel key: the form
/// closes through its Cancel button or a click outside it.
pub(super) fn form_action(app: &App, key: KeyEvent) -> Option<Action> {
    let focus = app.form.focus;
    match key.code {
        KeyCode::Tab | KeyCode::Down => Some(Action::FocusNext),
        KeyCode::BackTab | KeyCode::Up => Some(Action::FocusPrev),
        KeyCode::Enter => match focus {
            FormField::Cancel => Some(Action::CloseForm),
            _ => Some(Action::SubmitForm),
        },
        KeyCode::Backspace if focus.is_text() => Some(Action::FormBackspace),
        KeyCode::Char(c)
            if focus.is_text()
                && !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(Action::FormInput(c))
        }
        _ => None,
    }
}
