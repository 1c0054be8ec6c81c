//! Screen geometry shared by the renderer and mouse hit-testing.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unicode_width::UnicodeWidthStr;

use super::view::visible_offset;

/// Label of the clickable add-task trigger in the status row
pub const ADD_BUTTON: &str = "[+ Nova tarefa]";
pub const SAVE_BUTTON: &str = "[ Salvar ]";
pub const CANCEL_BUTTON: &str = "[ Cancelar ]";

const FORM_W: u16 = 56;
const FORM_H: u16 = 9;
/// Inner row of the form (below the top border) holding the buttons
const FORM_BUTTON_ROW: u16 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub gauge: Rect,
    pub list: Rect,
    pub status: Rect,
}

/// Layout: header (2 rows) | gauge | spacer | list | status row
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);
    ScreenLayout {
        header: chunks[0],
        gauge: chunks[1],
        list: chunks[3],
        status: chunks[4],
    }
}

pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}

/// The add-task modal
pub fn form_rect(area: Rect) -> Rect {
    centered_rect_fixed(FORM_W, FORM_H, area)
}

/// Row of the form's text field `index` (0 = name, 1 = icon, 2 = points)
pub fn form_field_row(form: Rect, index: u16) -> Rect {
    Rect::new(
        form.x + 1,
        form.y + 1 + index,
        form.width.saturating_sub(2),
        1,
    )
    .intersection(form)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormButtons {
    pub save: Rect,
    pub cancel: Rect,
}

/// Save and cancel buttons, right-aligned on the button row
pub fn form_buttons(form: Rect) -> FormButtons {
    let y = form.y + 1 + FORM_BUTTON_ROW;
    let cancel_w = CANCEL_BUTTON.width() as u16;
    let save_w = SAVE_BUTTON.width() as u16;
    let right = form.x + form.width.saturating_sub(2);
    let cancel_x = right.saturating_sub(cancel_w).max(form.x + 1);
    let save_x = cancel_x.saturating_sub(save_w + 2).max(form.x + 1);
    FormButtons {
        save: Rect::new(save_x, y, save_w, 1).intersection(form),
        cancel: Rect::new(cancel_x, y, cancel_w, 1).intersection(form),
    }
}

/// Clickable add-task trigger at the left of the status row
pub fn add_button_rect(status: Rect) -> Rect {
    Rect::new(status.x + 1, status.y, ADD_BUTTON.width() as u16, 1).intersection(status)
}

/// Where the control of task `index` is drawn, given the cursor position.
/// `None` when the row is scrolled out of view.
pub fn control_rect(list: Rect, cursor: usize, index: usize, label: &str) -> Option<Rect> {
    let offset = visible_offset(cursor, list.height as usize);
    if index < offset || index - offset >= list.height as usize {
        return None;
    }
    let w = (label.width() as u16).min(list.width);
    let x = (list.x + list.width).saturating_sub(w + 1).max(list.x);
    let y = list.y + (index - offset) as u16;
    Some(Rect::new(x, y, w, 1))
}

/// Task index under screen row `y`, given the cursor position
pub fn row_at(list: Rect, cursor: usize, y: u16) -> Option<usize> {
    if y < list.y || y >= list.y + list.height {
        return None;
    }
    Some(visible_offset(cursor, list.height as usize) + (y - list.y) as usize)
}
