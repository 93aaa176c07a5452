use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, Paragraph};

use crate::model::catalog;
use crate::tui::app::App;

/// Render the header: title line, counters, progress gauge
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let stats = app.session.stats();

    if area.height == 0 {
        return;
    }

    // Row 0: title
    let title = Line::from(vec![
        Span::styled(
            " Kantonspiel",
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  alle 26 auf einer Tour",
            Style::default().fg(app.theme.dim).bg(bg),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(title).style(Style::default().bg(bg)),
        Rect { height: 1, ..area },
    );

    // Row 1: counters
    if area.height >= 2 {
        let counters = Line::from(vec![
            Span::styled(
                format!(" {} ", stats.done),
                Style::default()
                    .fg(app.theme.green)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("abgehakt   ", Style::default().fg(app.theme.text).bg(bg)),
            Span::styled(
                format!("{} ", stats.left),
                Style::default()
                    .fg(app.theme.yellow)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("offen", Style::default().fg(app.theme.text).bg(bg)),
        ]);
        frame.render_widget(
            Paragraph::new(counters).style(Style::default().bg(bg)),
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }

    // Row 2: proportional fill indicator
    if area.height >= 3 {
        let gauge = Gauge::default()
            .ratio(stats.done as f64 / catalog::TOTAL as f64)
            .label(format!("{}/{} ({}%)", stats.done, catalog::TOTAL, stats.percent))
            .gauge_style(Style::default().fg(app.theme.green).bg(app.theme.selection_bg))
            .style(Style::default().bg(bg));
        let gauge_area = Rect {
            x: area.x + 1,
            y: area.y + 2,
            width: area.width.saturating_sub(2),
            height: 1,
        };
        frame.render_widget(gauge, gauge_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn header_shows_counters() {
        let (_dir, mut app) = test_app();
        app.session.toggle("AG").unwrap();
        app.session.toggle("ZH").unwrap();
        let output = render_to_string(TERM_W, 3, |frame, area| {
            render_header(frame, &app, area);
        });
        assert!(output.contains("Kantonspiel"));
        assert!(output.contains("2 abgehakt"));
        assert!(output.contains("24 offen"));
        assert!(output.contains("2/26 (8%)"));
    }
}
