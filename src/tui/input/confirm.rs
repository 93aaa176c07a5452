use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, ConfirmAction, Mode};

pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Confirm: y
        (KeyModifiers::NONE, KeyCode::Char('y')) => {
            let action = app.confirm_action.take();
            app.mode = Mode::Navigate;
            if let Some(ConfirmAction::Reset) = action {
                app.session.reset();
                app.load_route_input();
                app.cursor = 0;
                app.status_message = Some("Alles zurueckgesetzt".to_string());
            }
        }
        // Cancel: n or Esc. No state change at all.
        (KeyModifiers::NONE, KeyCode::Char('n')) | (_, KeyCode::Esc) => {
            app.confirm_action = None;
            app.mode = Mode::Navigate;
        }
        _ => {}
    }
}
