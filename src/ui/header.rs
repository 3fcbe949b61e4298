//! Header Component
//!
//! Displays the app title, shelf tabs and key hints.

use crate::app::App;
use crate::theme::color;
use crate::VERSION;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color(theme.border)))
        .title(Span::styled(
            format!(" tshelf v{} ", VERSION),
            Style::default()
                .fg(color(theme.title))
                .add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center);

    let inner = block.inner(area);
    f.render_widget(block, area);

    // Empty shelves have no tab
    let mut spans = Vec::new();
    for index in app.focusable_shelves() {
        let shelf = &app.catalog.shelves[index];
        let style = if index == app.focused {
            Style::default()
                .fg(color(shelf.accent.style().text))
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(color(theme.muted))
        };
        spans.push(Span::styled(
            format!(" {} {} ", shelf.icon.glyph(), shelf.title),
            style,
        ));
    }

    spans.push(Span::styled(
        "  ?:help  q:quit",
        Style::default().fg(color(theme.muted)),
    ));

    if app.wrap {
        spans.push(Span::styled(
            "  [WRAP]",
            Style::default()
                .fg(color(theme.rating))
                .add_modifier(Modifier::BOLD),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), inner);
}
