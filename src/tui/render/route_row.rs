use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode, RouteField};

/// Render the route row: start/end labels, with an edit cursor while
/// the fields are being edited.
pub fn render_route_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let editing = app.mode == Mode::EditRoute;

    // While editing, show the raw buffer; otherwise the stored route
    let route = if editing {
        app.route_input.clone()
    } else {
        app.session.route().clone()
    };

    let label_style = Style::default().fg(app.theme.dim).bg(bg);
    let value_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let active_label_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut spans = Vec::new();
    for (field, label, value) in [
        (RouteField::Start, " Start: ", &route.start),
        (RouteField::End, "   Ziel: ", &route.end),
    ] {
        let active = editing && app.route_field == field;
        spans.push(Span::styled(
            label,
            if active { active_label_style } else { label_style },
        ));
        let shown = if value.is_empty() && !active {
            Span::styled("-", label_style)
        } else {
            Span::styled(value.clone(), value_style)
        };
        spans.push(shown);
        if active {
            // ▌ edit cursor
            spans.push(Span::styled(
                "\u{258C}",
                Style::default().fg(app.theme.highlight).bg(bg),
            ));
        }
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::route::Route;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn empty_route_shows_dashes() {
        let (_dir, app) = test_app();
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_route_row(frame, &app, area);
        });
        assert!(output.contains("Start: -"));
        assert!(output.contains("Ziel: -"));
    }

    #[test]
    fn stored_route_is_shown() {
        let (_dir, mut app) = test_app();
        app.session.set_route(Route::new("Basel", "Chur")).unwrap();
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_route_row(frame, &app, area);
        });
        assert!(output.contains("Start: Basel"));
        assert!(output.contains("Ziel: Chur"));
    }

    #[test]
    fn editing_shows_cursor_in_active_field() {
        let (_dir, mut app) = test_app();
        app.mode = Mode::EditRoute;
        app.route_input = Route::new("Ba", "");
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_route_row(frame, &app, area);
        });
        assert!(output.contains("Ba\u{258C}"));
    }
}
