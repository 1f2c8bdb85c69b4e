use crate::app::{App, KEY_HINTS};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use wslaunch_core::EditorVariant;

pub fn render_variant_line(f: &mut Frame, app: &App, area: Rect) {
    let selected = |v: EditorVariant| {
        if app.variant == v {
            Span::styled(format!("[{}]", v), Style::default().reversed().bold())
        } else {
            Span::raw(format!(" {} ", v))
        }
    };

    let line = Line::from(vec![
        Span::styled("VS Code variant: ", Style::default().bold()),
        selected(EditorVariant::Standard),
        Span::raw("  "),
        selected(EditorVariant::Insiders),
    ]);

    f.render_widget(Paragraph::new(line), area);
}

pub fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let message = match (&app.status, app.focused_item()) {
        (Some(status), _) => status.clone(),
        (None, Some(item)) => format!("Selected: {}", item.display_name),
        (None, None) => String::new(),
    };

    let lines = vec![
        Line::from(Span::raw(message)),
        Line::from(Span::styled(KEY_HINTS, Style::default().dim())),
    ];

    f.render_widget(Paragraph::new(lines), area);
}
