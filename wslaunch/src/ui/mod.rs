mod grid;
mod status;

use crate::app::App;
use ratatui::prelude::*;
use ratatui::Frame;

/// Draw one frame: variant selector, two-column workspace grid,
/// status bar. The layout is re-derived from the live terminal area on
/// every draw, so resizing never touches the focus.
pub fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(2),
    ])
    .split(f.area());

    status::render_variant_line(f, app, chunks[0]);
    grid::render(f, app, chunks[1]);
    status::render_status_bar(f, app, chunks[2]);
}
