use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use unicode_segmentation::UnicodeSegmentation;

use crate::io::config_io::build_routine;
use crate::io::prefs_store::{FileStore, PreferenceStore};
use crate::model::{AppConfig, PrefKey, Preferences, Routine, TaskId, UiConfig};
use crate::ops::form::{FormError, parse_new_task};
use crate::ops::prefs_ops::{load_preferences, toggle};

use super::input;
use super::render;
use super::theme::Theme;

/// Whether the add-task modal is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Open,
}

/// Focusable parts of the add-task form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Icon,
    Points,
    Save,
    Cancel,
}

impl FormField {
    const ORDER: [FormField; 5] = [
        FormField::Name,
        FormField::Icon,
        FormField::Points,
        FormField::Save,
        FormField::Cancel,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn is_text(self) -> bool {
        matches!(self, FormField::Name | FormField::Icon | FormField::Points)
    }
}

/// Raw contents of the add-task form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    pub name: String,
    pub icon: String,
    pub points: String,
    pub focus: FormField,
    /// Rejection from the last submit attempt
    pub error: Option<FormError>,
}

impl Default for TaskForm {
    fn default() -> Self {
        TaskForm {
            name: String::new(),
            icon: String::new(),
            points: String::new(),
            focus: FormField::Name,
            error: None,
        }
    }
}

impl TaskForm {
    /// The text buffer of the focused field, if it is a text field
    pub fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Name => Some(&mut self.name),
            FormField::Icon => Some(&mut self.icon),
            FormField::Points => Some(&mut self.points),
            FormField::Save | FormField::Cancel => None,
        }
    }
}

/// Popup shown after a task is completed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgement {
    pub task_name: String,
    pub points: u32,
}

/// Everything the user can do, independent of which key or click did it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CursorUp,
    CursorDown,
    CursorTop,
    CursorBottom,
    Select(usize),
    CompleteSelected,
    Complete(TaskId),
    OpenForm,
    CloseForm,
    SubmitForm,
    FocusNext,
    FocusPrev,
    Focus(FormField),
    FormInput(char),
    FormBackspace,
    ToggleDarkMode,
    ToggleLowStimulus,
    ToggleHelp,
    DismissAck,
    Quit,
}

/// Main application state
pub struct App {
    pub routine: Routine,
    pub prefs: Preferences,
    store: Box<dyn PreferenceStore>,
    pub ui: UiConfig,
    pub theme: Theme,
    pub modal: ModalState,
    /// Kept across close/reopen; cleared after a successful submit
    pub form: TaskForm,
    /// Index into the routine's task list
    pub cursor: usize,
    pub acknowledgement: Option<Acknowledgement>,
    pub show_help: bool,
    pub status_message: Option<String>,
    pub should_quit: bool,
    /// Size of the last drawn frame, for mouse hit-testing
    pub viewport: Rect,
}

impl App {
    pub fn new(routine: Routine, store: Box<dyn PreferenceStore>, ui: UiConfig) -> Self {
        let prefs = load_preferences(store.as_ref());
        let theme = Theme::resolve(&prefs, &ui);
        App {
            routine,
            prefs,
            store,
            ui,
            theme,
            modal: ModalState::Closed,
            form: TaskForm::default(),
            cursor: 0,
            acknowledgement: None,
            show_help: false,
            status_message: None,
            should_quit: false,
            viewport: Rect::default(),
        }
    }

    pub fn store(&self) -> &dyn PreferenceStore {
        self.store.as_ref()
    }

    pub fn form_open(&self) -> bool {
        self.modal == ModalState::Open
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::CursorUp => self.cursor = self.cursor.saturating_sub(1),
            Action::CursorDown => {
                if self.cursor + 1 < self.routine.len() {
                    self.cursor += 1;
                }
            }
            Action::CursorTop => self.cursor = 0,
            Action::CursorBottom => self.cursor = self.routine.len().saturating_sub(1),
            Action::Select(index) => {
                if index < self.routine.len() {
                    self.cursor = index;
                }
            }
            Action::CompleteSelected => {
                if let Some(id) = self.routine.tasks().get(self.cursor).map(|t| t.id) {
                    self.complete(id);
                }
            }
            Action::Complete(id) => self.complete(id),
            Action::OpenForm => {
                self.modal = ModalState::Open;
                self.form.focus = FormField::Name;
            }
            Action::CloseForm => {
                self.modal = ModalState::Closed;
                self.form.error = None;
            }
            Action::SubmitForm => self.submit_form(),
            Action::FocusNext => self.form.focus = self.form.focus.next(),
            Action::FocusPrev => self.form.focus = self.form.focus.prev(),
            Action::Focus(field) => self.form.focus = field,
            Action::FormInput(c) => {
                if let Some(text) = self.form.focused_text_mut() {
                    text.push(c);
                }
            }
            Action::FormBackspace => {
                if let Some(text) = self.form.focused_text_mut() {
                    let cut = text.grapheme_indices(true).next_back().map(|(idx, _)| idx);
                    if let Some(idx) = cut {
                        text.truncate(idx);
                    }
                }
            }
            Action::ToggleDarkMode => self.toggle_pref(PrefKey::DarkMode),
            Action::ToggleLowStimulus => self.toggle_pref(PrefKey::LowStimulus),
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::DismissAck => self.acknowledgement = None,
            Action::Quit => self.should_quit = true,
        }
    }

    fn complete(&mut self, id: TaskId) {
        let Some(points) = self.routine.complete_task(id) else {
            return;
        };
        let task_name = self
            .routine
            .get(id)
            .map(|t| t.name.clone())
            .unwrap_or_default();
        log::info!("completed task {} ({:?}) +{} points", id, task_name, points);
        self.acknowledgement = Some(Acknowledgement { task_name, points });
    }

    fn submit_form(&mut self) {
        match parse_new_task(&self.form.name, &self.form.icon, &self.form.points) {
            Ok(new) => {
                let name = new.name.clone();
                let id = self.routine.add_task(new.name, new.icon, new.points);
                log::info!("added task {} ({:?})", id, name);
                self.form = TaskForm::default();
                self.modal = ModalState::Closed;
                self.cursor = self.routine.len().saturating_sub(1);
                self.status_message = Some(format!("tarefa \"{}\" adicionada", name));
            }
            Err(e) => {
                log::debug!("add-task form rejected: {}", e);
                self.form.error = Some(e);
            }
        }
    }

    fn toggle_pref(&mut self, key: PrefKey) {
        match toggle(&mut self.prefs, self.store.as_mut(), key) {
            Ok(value) => {
                let state = if value { "ativado" } else { "desativado" };
                self.status_message = Some(format!("{} {}", key.label(), state));
            }
            Err(e) => {
                log::error!("could not save {}: {}", key.storage_key(), e);
                self.status_message = Some(format!("não foi possível salvar: {}", e));
            }
        }
        self.theme = Theme::resolve(&self.prefs, &self.ui);
    }
}

/// Run the TUI application
pub fn run(config: AppConfig, prefs_path: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let routine = build_routine(&config.routine)?;
    let store = FileStore::open(&prefs_path);
    log::info!(
        "starting TUI with {} tasks, preferences at {}",
        routine.len(),
        prefs_path.display()
    );

    let mut app = App::new(routine, Box::new(store), config.ui);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| {
            app.viewport = frame.area();
            render::render(frame, app);
        })?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::prefs_store::MemoryStore;
    use crate::model::Icon;
    use crate::ops::stats::compute_stats;

    fn app_with(tasks: &[(&str, u32)]) -> App {
        let mut routine = Routine::default();
        for (name, points) in tasks {
            routine.add_task(name.to_string(), Icon::sanitize("sun").unwrap(), *points);
        }
        App::new(routine, Box::new(MemoryStore::new()), UiConfig::default())
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.dispatch(Action::FormInput(c));
        }
    }

    #[test]
    fn completing_shows_acknowledgement_once() {
        let mut app = app_with(&[("Brush Teeth", 10)]);
        app.dispatch(Action::CompleteSelected);
        assert_eq!(
            app.acknowledgement,
            Some(Acknowledgement {
                task_name: "Brush Teeth".into(),
                points: 10,
            })
        );

        app.dispatch(Action::DismissAck);
        app.dispatch(Action::CompleteSelected);
        assert!(app.acknowledgement.is_none());
        assert_eq!(compute_stats(app.routine.tasks()).points, 10);
    }

    #[test]
    fn complete_unknown_id_is_silent() {
        let mut app = app_with(&[("A", 1)]);
        app.dispatch(Action::Complete(TaskId(42)));
        assert!(app.acknowledgement.is_none());
        assert!(!app.routine.tasks()[0].completed);
    }

    #[test]
    fn complete_on_empty_routine_is_silent() {
        let mut app = app_with(&[]);
        app.dispatch(Action::CompleteSelected);
        assert!(app.acknowledgement.is_none());
    }

    #[test]
    fn modal_open_cancel_keeps_draft() {
        let mut app = app_with(&[]);
        app.dispatch(Action::OpenForm);
        assert!(app.form_open());
        type_text(&mut app, "Ler");
        app.dispatch(Action::CloseForm);
        assert!(!app.form_open());
        assert_eq!(app.form.name, "Ler");

        app.dispatch(Action::OpenForm);
        assert_eq!(app.form.name, "Ler");
        assert_eq!(app.form.focus, FormField::Name);
    }

    #[test]
    fn submit_appends_closes_and_clears() {
        let mut app = app_with(&[("A", 1)]);
        app.dispatch(Action::OpenForm);
        type_text(&mut app, "Ler");
        app.dispatch(Action::FocusNext);
        type_text(&mut app, "Fa-Book!!");
        app.dispatch(Action::FocusNext);
        type_text(&mut app, "20");
        app.dispatch(Action::SubmitForm);

        assert!(!app.form_open());
        assert_eq!(app.form, TaskForm::default());
        assert_eq!(app.routine.len(), 2);
        let task = &app.routine.tasks()[1];
        assert_eq!(task.name, "Ler");
        assert_eq!(task.icon.as_str(), "fa-book");
        assert_eq!(task.points, 20);
        assert!(!task.completed);
        assert_eq!(task.id, TaskId(2));
        assert_eq!(app.cursor, 1);
        assert!(app.status_message.as_deref().unwrap().contains("Ler"));
    }

    #[test]
    fn invalid_submit_keeps_form_open_with_error() {
        let mut app = app_with(&[]);
        app.dispatch(Action::OpenForm);
        type_text(&mut app, "Ler");
        app.dispatch(Action::Focus(FormField::Icon));
        type_text(&mut app, "book");
        app.dispatch(Action::Focus(FormField::Points));
        type_text(&mut app, "dez");
        app.dispatch(Action::SubmitForm);

        assert!(app.form_open());
        assert_eq!(app.form.error, Some(FormError::InvalidPoints("dez".into())));
        assert!(app.routine.is_empty());

        app.dispatch(Action::CloseForm);
        assert!(app.form.error.is_none());
    }

    #[test]
    fn backspace_removes_whole_grapheme() {
        let mut app = app_with(&[]);
        app.dispatch(Action::OpenForm);
        type_text(&mut app, "Café");
        app.dispatch(Action::FormBackspace);
        assert_eq!(app.form.name, "Caf");
        app.dispatch(Action::Focus(FormField::Save));
        app.dispatch(Action::FormBackspace);
        app.dispatch(Action::FormInput('x'));
        assert_eq!(app.form.name, "Caf");
    }

    #[test]
    fn focus_cycles_in_both_directions() {
        assert_eq!(FormField::Cancel.next(), FormField::Name);
        assert_eq!(FormField::Name.prev(), FormField::Cancel);
        assert_eq!(FormField::Icon.next(), FormField::Points);
        assert!(FormField::Points.is_text());
        assert!(!FormField::Save.is_text());
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut app = app_with(&[("A", 1), ("B", 1)]);
        app.dispatch(Action::CursorUp);
        assert_eq!(app.cursor, 0);
        app.dispatch(Action::CursorDown);
        app.dispatch(Action::CursorDown);
        assert_eq!(app.cursor, 1);
        app.dispatch(Action::CursorTop);
        assert_eq!(app.cursor, 0);
        app.dispatch(Action::CursorBottom);
        assert_eq!(app.cursor, 1);
        app.dispatch(Action::Select(7));
        assert_eq!(app.cursor, 1);
        app.dispatch(Action::Select(0));
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn dark_mode_toggle_persists_and_retheme() {
        let mut app = app_with(&[]);
        assert_eq!(app.theme, Theme::light());

        app.dispatch(Action::ToggleDarkMode);
        assert!(app.prefs.dark_mode);
        assert_eq!(app.store().get("darkMode"), Some(true));
        assert_eq!(app.theme, Theme::dark());
        assert_eq!(app.status_message.as_deref(), Some("modo escuro ativado"));

        app.dispatch(Action::ToggleDarkMode);
        assert!(!app.prefs.dark_mode);
        assert_eq!(app.store().get("darkMode"), Some(false));
    }

    #[test]
    fn preferences_loaded_at_startup() {
        let mut store = MemoryStore::new();
        store.insert_raw("lowStimulus", "true");
        let app = App::new(Routine::default(), Box::new(store), UiConfig::default());
        assert!(app.prefs.low_stimulus);
        assert!(!app.prefs.dark_mode);
        assert!(app.theme.calm);
    }
}
