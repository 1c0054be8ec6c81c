use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::Action;

pub(super) fn navigate_action(key: KeyEvent) -> Option<Action> {
    let action = match key.code {
        KeyCode::Char('j') | KeyCode::Down => Action::CursorDown,
        KeyCode::Char('k') | KeyCode::Up => Action::CursorUp,
        KeyCode::Char('g') | KeyCode::Home => Action::CursorTop,
        KeyCode::Char('G') | KeyCode::End => Action::CursorBottom,
        KeyCode::Enter | KeyCode::Char(' ') => Action::CompleteSelected,
        KeyCode::Char('a') => Action::OpenForm,
        KeyCode::Char('d') => Action::ToggleDarkMode,
        KeyCode::Char('s') => Action::ToggleLowStimulus,
        KeyCode::Char('?') => Action::ToggleHelp,
        KeyCode::Char('q') => Action::Quit,
        _ => return None,
    };
    Some(action)
}

/// While the help overlay is up only `?` and Esc do anything
pub(super) fn help_action(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('?') | KeyCode::Esc => Some(Action::ToggleHelp),
        _ => None,
    }
}
