use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::io::prefs_store::MemoryStore;
use crate::model::{Icon, Routine, UiConfig};
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Build an App over an in-memory preference store, every task with the tooth icon.
pub fn app_with_tasks(tasks: &[(&str, u32)]) -> App {
    let mut routine = Routine::default();
    for (name, points) in tasks {
        routine.add_task(name.to_string(), Icon::sanitize("tooth").unwrap(), *points);
    }
    let mut app = App::new(routine, Box::new(MemoryStore::new()), UiConfig::default());
    app.viewport = Rect::new(0, 0, TERM_W, TERM_H);
    app
}
