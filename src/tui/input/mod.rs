mod confirm;
mod navigate;
mod popups;
mod route;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Mode};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // A fresh keypress clears the previous status message
    app.status_message = None;

    // Help overlay intercepts all input
    if app.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    match app.mode {
        Mode::Navigate => navigate::handle_navigate(app, key),
        Mode::EditRoute => route::handle_route(app, key),
        Mode::Confirm => confirm::handle_confirm(app, key),
        Mode::Finish => popups::handle_finish(app, key),
        Mode::Report => popups::handle_report(app, key),
    }
}
