use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io;
use crate::io::store::Store;
use crate::model::catalog;
use crate::model::config::AppConfig;
use crate::model::route::Route;
use crate::ops::session::Session;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Editing the route fields
    EditRoute,
    /// Pending yes/no confirmation
    Confirm,
    /// Completion dialog is showing
    Finish,
    /// Manual-copy report popup is showing
    Report,
}

/// Which route field the edit cursor is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteField {
    Start,
    End,
}

/// Action pending behind the confirmation prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    Reset,
}

/// Main application state
pub struct App {
    pub session: Session,
    pub config: AppConfig,
    pub theme: Theme,
    pub mode: Mode,
    pub should_quit: bool,
    /// Cursor index into the catalog grid (0..26)
    pub cursor: usize,
    /// Column count of the last rendered grid; navigation moves by this
    pub grid_columns: usize,
    /// Help overlay visible
    pub show_help: bool,
    pub confirm_action: Option<ConfirmAction>,
    /// Field with the edit cursor while in EditRoute
    pub route_field: RouteField,
    /// Raw edit buffer; persisted (trimmed) on every keystroke
    pub route_input: Route,
    /// Report text shown in the manual-copy fallback popup
    pub report_text: Option<String>,
    /// Transient message for the status row
    pub status_message: Option<String>,
}

impl App {
    pub fn new(session: Session, config: AppConfig) -> Self {
        let theme = Theme::from_config(&config.ui);
        let route_input = session.route().clone();
        App {
            session,
            config,
            theme,
            mode: Mode::Navigate,
            should_quit: false,
            cursor: 0,
            grid_columns: 1,
            show_help: false,
            confirm_action: None,
            route_field: RouteField::Start,
            route_input,
            report_text: None,
            status_message: None,
        }
    }

    /// The canton under the cursor
    pub fn cursor_canton(&self) -> &'static catalog::Canton {
        &catalog::CANTONS[self.cursor.min(catalog::TOTAL - 1)]
    }

    /// Toggle the canton under the cursor, persist, run the finish check.
    pub fn toggle_at_cursor(&mut self) {
        let code = self.cursor_canton().code;
        match self.session.toggle(code) {
            Ok(_) => self.finish_check(),
            Err(e) => self.status_message = Some(e.to_string()),
        }
    }

    /// Mark all cantons done, persist, run the finish check.
    pub fn select_all(&mut self) {
        match self.session.select_all() {
            Ok(()) => self.finish_check(),
            Err(e) => self.status_message = Some(e.to_string()),
        }
    }

    /// Start a new run: closes the completion dialog if open, clears
    /// selection and marker, keeps the route.
    pub fn new_run(&mut self) {
        self.mode = Mode::Navigate;
        self.session.new_run();
        self.status_message = Some("Neue Runde".to_string());
    }

    /// Surface the completion dialog if the marker was newly set.
    fn finish_check(&mut self) {
        match self.session.mark_finished_if_complete(chrono::Utc::now()) {
            Ok(true) => self.mode = Mode::Finish,
            Ok(false) => {}
            Err(e) => self.status_message = Some(e.to_string()),
        }
    }

    /// Write the current edit buffer through to the store.
    pub fn persist_route_input(&mut self) {
        if let Err(e) = self.session.set_route(self.route_input.clone()) {
            self.status_message = Some(e.to_string());
        }
    }

    /// Reload the edit buffer from the session (entering edit mode).
    pub fn load_route_input(&mut self) {
        self.route_input = self.session.route().clone();
    }
}

/// Run the TUI application
pub fn run(data_dir: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let dir = config_io::data_dir(data_dir);
    let config = config_io::read_config(&dir);
    let store = Store::open(&dir)?;
    let session = Session::open(store);

    let mut app = App::new(session, config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
