use crate::app::App;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

/// Two-column grid of workspace buttons. Items alternate columns
/// (left, right, left...), matching `wslaunch_core::grid_slot`; the
/// focused button renders reversed.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Workspaces ({}) ", app.items.len()));

    if app.items.is_empty() {
        let empty = Paragraph::new("No workspace files found in the configured roots")
            .style(Style::default().dim())
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    for column in 0..2 {
        let items: Vec<ListItem> = app
            .items
            .iter()
            .enumerate()
            .filter(|(i, _)| wslaunch_core::grid_slot(*i).0 == column)
            .map(|(i, item)| {
                let text = format!(" {}  [{}]", item.display_name, item.environment);
                let style = if app.selection.focused() == Some(i) {
                    Style::default().reversed().bold()
                } else {
                    Style::default()
                };
                ListItem::new(text).style(style)
            })
            .collect();

        f.render_widget(List::new(items), columns[column]);
    }
}
