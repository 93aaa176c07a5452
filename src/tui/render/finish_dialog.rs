use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::tui::render::centered_rect_fixed;

/// Render the completion dialog, shown once per run when 26/26 is reached
pub fn render_finish_dialog(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let bright_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let mut lines = vec![
        Line::from(Span::styled(" Alle 26 Kantone!", header_style)),
        Line::from(Span::styled("", text_style)),
        Line::from(Span::styled(
            " Die ganze Schweiz ist abgehakt.",
            bright_style,
        )),
    ];
    if let Some(at) = app.session.completed_at() {
        lines.push(Line::from(Span::styled(
            format!(
                " Abgeschlossen: {}",
                at.to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
            ),
            text_style,
        )));
    }
    lines.push(Line::from(Span::styled("", text_style)));
    lines.push(Line::from(Span::styled(
        " n neue Runde   Esc schliessen",
        dim_style,
    )));

    let popup_w: u16 = 44.min(area.width.saturating_sub(2));
    let popup_h = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));
    let overlay = centered_rect_fixed(popup_w, popup_h, area);

    frame.render_widget(Clear, overlay);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.green).bg(bg))
        .style(Style::default().bg(bg));
    frame.render_widget(Paragraph::new(lines).block(block).style(Style::default().bg(bg)), overlay);
}
