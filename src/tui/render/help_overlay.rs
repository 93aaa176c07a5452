use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::tui::render::centered_rect_fixed;

const BINDINGS: &[(&str, &str)] = &[
    ("space / Enter", "Kanton abhaken"),
    ("h j k l / pfeile", "Cursor bewegen"),
    ("g / G", "erster / letzter Kanton"),
    ("a", "alle markieren"),
    ("e", "Start/Ziel bearbeiten"),
    ("m", "per Mail exportieren"),
    ("c", "Report kopieren"),
    ("n", "neue Runde (Route bleibt)"),
    ("r", "alles zuruecksetzen"),
    ("?", "diese Hilfe"),
    ("q", "beenden"),
];

/// Render the help overlay listing all key bindings
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let text_style = Style::default().fg(app.theme.text).bg(bg);

    let mut lines = vec![
        Line::from(Span::styled(" Tasten", header_style)),
        Line::from(Span::styled("", text_style)),
    ];
    for (key, description) in BINDINGS {
        lines.push(Line::from(vec![
            Span::styled(format!(" {:<18}", key), key_style),
            Span::styled(*description, text_style),
        ]));
    }

    let popup_w: u16 = 48.min(area.width.saturating_sub(2));
    let popup_h = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));
    let overlay = centered_rect_fixed(popup_w, popup_h, area);

    frame.render_widget(Clear, overlay);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .style(Style::default().bg(bg));
    frame.render_widget(Paragraph::new(lines).block(block).style(Style::default().bg(bg)), overlay);
}
