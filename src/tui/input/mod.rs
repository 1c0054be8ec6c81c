mod form;
mod mouse;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};

use super::app::{Action, App};

use form::form_action;
use navigate::{help_action, navigate_action};

pub use mouse::mouse_action;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.status_message = None;
    if let Some(action) = key_action(app, key) {
        app.dispatch(action);
    }
}

/// Handle a mouse event (clicks and wheel)
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if let Some(action) = mouse_action(app, mouse) {
        app.status_message = None;
        app.dispatch(action);
    }
}

/// Map a key to an action, given what is on screen
pub fn key_action(app: &App, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    // The acknowledgement popup swallows the next key
    if app.acknowledgement.is_some() {
        return Some(Action::DismissAck);
    }

    if app.show_help {
        return help_action(key);
    }

    if app.form_open() {
        return form_action(app, key);
    }

    navigate_action(key)
}
