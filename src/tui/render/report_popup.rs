use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::tui::render::centered_rect_fixed;

/// Render the manual-copy fallback: the full report in a popup so it can
/// be selected and copied by hand when the clipboard is unavailable.
pub fn render_report_popup(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let text = app.report_text.as_deref().unwrap_or("");

    let header_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let mut lines = vec![
        Line::from(Span::styled(" Manuell kopieren:", header_style)),
        Line::from(Span::styled("", text_style)),
    ];
    for report_line in text.lines() {
        lines.push(Line::from(Span::styled(
            format!(" {}", report_line),
            text_style,
        )));
    }
    lines.push(Line::from(Span::styled("", text_style)));
    lines.push(Line::from(Span::styled(" Esc schliessen", dim_style)));

    let longest = lines
        .iter()
        .map(|l| l.width() as u16)
        .max()
        .unwrap_or(0);
    let popup_w = (longest + 4).min(area.width.saturating_sub(2));
    let popup_h = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));
    let overlay = centered_rect_fixed(popup_w, popup_h, area);

    frame.render_widget(Clear, overlay);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .style(Style::default().bg(bg));
    frame.render_widget(Paragraph::new(lines).block(block).style(Style::default().bg(bg)), overlay);
}
