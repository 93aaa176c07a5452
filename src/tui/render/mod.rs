pub mod finish_dialog;
pub mod grid;
pub mod header;
pub mod help_overlay;
pub mod report_popup;
pub mod route_row;
pub mod status_row;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, Mode};

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (3 rows) | spacer | grid | route row | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title + stats + progress
            Constraint::Length(1), // spacer
            Constraint::Min(1),    // canton grid
            Constraint::Length(1), // route row
            Constraint::Length(1), // status row
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    grid::render_grid(frame, app, chunks[2]);
    route_row::render_route_row(frame, app, chunks[3]);
    status_row::render_status_row(frame, app, chunks[4]);

    // Popups (rendered on top of everything)
    if app.mode == Mode::Finish {
        finish_dialog::render_finish_dialog(frame, app, area);
    }
    if app.mode == Mode::Report {
        report_popup::render_report_popup(frame, app, area);
    }
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
}

/// A fixed-size rect centered in `area`
pub(super) fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}
