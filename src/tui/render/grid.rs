use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::catalog;
use crate::tui::app::{App, Mode};
use crate::util::unicode::pad_to_width;

/// Width of one grid cell in terminal cells, including trailing gap
const CELL_W: u16 = 28;

/// Render the canton grid. Also records the column count on the app so
/// vertical cursor movement matches what is on screen.
pub fn render_grid(frame: &mut Frame, app: &mut App, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let columns = (area.width / CELL_W).max(1) as usize;
    app.grid_columns = columns;

    let rows = catalog::TOTAL.div_ceil(columns);
    let visible = area.height as usize;

    // Keep the cursor row on screen
    let cursor_row = app.cursor / columns;
    let first_row = if rows <= visible {
        0
    } else {
        cursor_row
            .saturating_sub(visible - 1)
            .min(rows - visible)
    };

    let bg = app.theme.background;
    let show_cursor = app.mode == Mode::Navigate || app.mode == Mode::Confirm;

    let mut lines = Vec::new();
    for row in first_row..rows.min(first_row + visible) {
        let mut spans = vec![Span::styled(" ", Style::default().bg(bg))];
        for col in 0..columns {
            let idx = row * columns + col;
            if idx >= catalog::TOTAL {
                break;
            }
            let canton = &catalog::CANTONS[idx];
            let done = app.session.is_done(canton.code);
            let is_cursor = show_cursor && idx == app.cursor;

            let mark = if done { '\u{2713}' } else { ' ' };
            let text = pad_to_width(
                &format!("[{}] {} {}", mark, canton.code, canton.name),
                CELL_W as usize - 1,
            );

            let mut style = if done {
                Style::default().fg(app.theme.green).bg(bg)
            } else {
                Style::default().fg(app.theme.text).bg(bg)
            };
            if is_cursor {
                style = style
                    .bg(app.theme.selection_bg)
                    .add_modifier(Modifier::BOLD);
            }
            spans.push(Span::styled(text, style));
            spans.push(Span::styled(" ", Style::default().bg(bg)));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg)),
        area,
    );
}
