use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode, RouteField};

pub(super) fn handle_route(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            app.mode = Mode::Navigate;
        }
        // Switch between the start and end fields
        KeyCode::Tab | KeyCode::BackTab => {
            app.route_field = match app.route_field {
                RouteField::Start => RouteField::End,
                RouteField::End => RouteField::Start,
            };
        }
        KeyCode::Backspace => {
            field_mut(app).pop();
            app.persist_route_input();
        }
        KeyCode::Char(c) => {
            field_mut(app).push(c);
            app.persist_route_input();
        }
        _ => {}
    }
}

fn field_mut(app: &mut App) -> &mut String {
    match app.route_field {
        RouteField::Start => &mut app.route_input.start,
        RouteField::End => &mut app.route_input.end,
    }
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
    fn every_keystroke_persists_trimmed() {
        let (_dir, mut app) = test_app();
        app.mode = Mode::EditRoute;
        for c in "Basel ".chars() {
            handle_route(&mut app, key(KeyCode::Char(c)));
        }
        // Raw buffer keeps the trailing space, the store does not
        assert_eq!(app.route_input.start, "Basel ");
        assert_eq!(app.session.route().start, "Basel");
        assert_eq!(app.session.store().load_route().start, "Basel");
    }

    #[test]
    fn tab_switches_field_and_backspace_edits() {
        let (_dir, mut app) = test_app();
        app.mode = Mode::EditRoute;
        handle_route(&mut app, key(KeyCode::Tab));
        assert_eq!(app.route_field, RouteField::End);

        handle_route(&mut app, key(KeyCode::Char('C')));
        handle_route(&mut app, key(KeyCode::Char('x')));
        handle_route(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.session.route().end, "C");

        handle_route(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Navigate);
    }
}
