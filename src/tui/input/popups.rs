use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

/// Completion dialog: close, or start a new run directly.
pub(super) fn handle_finish(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
            app.mode = Mode::Navigate;
        }
        KeyCode::Char('n') => {
            app.new_run();
        }
        _ => {}
    }
}

/// Manual-copy report popup.
pub(super) fn handle_report(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
            app.report_text = None;
            app.mode = Mode::Navigate;
        }
        _ => {}
    }
}
