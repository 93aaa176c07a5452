use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen): transient message on the
/// left, key hints for the current mode on the right.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let message = app.status_message.as_deref().unwrap_or("");
    let hint = match app.mode {
        Mode::Navigate => "space abhaken  a alle  e route  m mail  c kopieren  r reset  ? hilfe",
        Mode::EditRoute => "tippen  Tab Feld wechseln  Esc fertig",
        Mode::Confirm => "Wirklich alles zuruecksetzen?  y ja  n nein",
        Mode::Finish => "n neue Runde  Esc schliessen",
        Mode::Report => "Esc schliessen",
    };

    let message_style = if app.mode == Mode::Confirm {
        Style::default().fg(app.theme.yellow).bg(bg)
    } else {
        Style::default().fg(app.theme.text_bright).bg(bg)
    };

    let mut spans = vec![Span::styled(format!(" {}", message), message_style)];
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hint_width = hint.chars().count();
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}
