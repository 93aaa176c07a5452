use crossterm::event::{KeyCode, KeyEvent};

use crate::io::external;
use crate::model::catalog;
use crate::ops::export;

use crate::tui::app::{App, ConfirmAction, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }

        // Cursor movement: one cell sideways, one grid row vertically
        KeyCode::Left | KeyCode::Char('h') => move_cursor(app, -1),
        KeyCode::Right | KeyCode::Char('l') => move_cursor(app, 1),
        KeyCode::Up | KeyCode::Char('k') => move_cursor(app, -(app.grid_columns as i32)),
        KeyCode::Down | KeyCode::Char('j') => move_cursor(app, app.grid_columns as i32),
        KeyCode::Char('g') => app.cursor = 0,
        KeyCode::Char('G') => app.cursor = catalog::TOTAL - 1,

        // Toggle the canton under the cursor
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_at_cursor(),

        // Mark everything done
        KeyCode::Char('a') => app.select_all(),

        // New run (keeps the route)
        KeyCode::Char('n') => app.new_run(),

        // Reset, gated behind confirmation
        KeyCode::Char('r') => {
            app.confirm_action = Some(ConfirmAction::Reset);
            app.mode = Mode::Confirm;
        }

        // Route editing
        KeyCode::Char('e') => {
            app.load_route_input();
            app.mode = Mode::EditRoute;
        }

        // Mail export
        KeyCode::Char('m') => {
            let url = export::mailto_url(&app.session, &app.config.export);
            match external::open_url(&url) {
                Ok(()) => app.status_message = Some("Mail geoeffnet".to_string()),
                Err(_) => {
                    // No opener available: show the report for manual use
                    app.report_text =
                        Some(export::mail_body(&app.session, &app.config.export));
                    app.mode = Mode::Report;
                }
            }
        }

        // Copy report, with manual-copy fallback
        KeyCode::Char('c') => {
            let text = export::mail_body(&app.session, &app.config.export);
            match external::clipboard_set(&text) {
                Ok(()) => app.status_message = Some("Text kopiert".to_string()),
                Err(_) => {
                    app.report_text = Some(text);
                    app.mode = Mode::Report;
                }
            }
        }

        _ => {}
    }
}

/// Move the grid cursor by `delta` positions, clamped to the catalog.
fn move_cursor(app: &mut App, delta: i32) {
    let total = catalog::TOTAL as i32;
    let next = (app.cursor as i32 + delta).clamp(0, total - 1);
    app.cursor = next as usize;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::test_app;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn space_toggles_canton_under_cursor() {
        let (_dir, mut app) = test_app();
        app.cursor = 0; // AG
        handle_navigate(&mut app, key(KeyCode::Char(' ')));
        assert!(app.session.is_done("AG"));
        handle_navigate(&mut app, key(KeyCode::Char(' ')));
        assert!(!app.session.is_done("AG"));
    }

    #[test]
    fn select_all_opens_finish_dialog_once() {
        let (_dir, mut app) = test_app();
        handle_navigate(&mut app, key(KeyCode::Char('a')));
        assert_eq!(app.mode, Mode::Finish);

        // Close, toggle one off and re-complete: dialog must not reopen
        app.mode = Mode::Navigate;
        app.cursor = 0;
        handle_navigate(&mut app, key(KeyCode::Char(' ')));
        handle_navigate(&mut app, key(KeyCode::Char(' ')));
        assert_eq!(app.mode, Mode::Navigate);
    }

    #[test]
    fn new_run_from_dialog_allows_refiring() {
        let (_dir, mut app) = test_app();
        handle_navigate(&mut app, key(KeyCode::Char('a')));
        assert_eq!(app.mode, Mode::Finish);

        app.new_run();
        assert!(app.session.selected().is_empty());

        handle_navigate(&mut app, key(KeyCode::Char('a')));
        assert_eq!(app.mode, Mode::Finish);
    }

    #[test]
    fn cursor_moves_by_grid_columns_vertically() {
        let (_dir, mut app) = test_app();
        app.grid_columns = 4;
        handle_navigate(&mut app, key(KeyCode::Down));
        assert_eq!(app.cursor, 4);
        handle_navigate(&mut app, key(KeyCode::Right));
        assert_eq!(app.cursor, 5);
        handle_navigate(&mut app, key(KeyCode::Up));
        assert_eq!(app.cursor, 1);
        handle_navigate(&mut app, key(KeyCode::Char('G')));
        assert_eq!(app.cursor, 25);
        handle_navigate(&mut app, key(KeyCode::Char('g')));
        assert_eq!(app.cursor, 0);
    }
}
