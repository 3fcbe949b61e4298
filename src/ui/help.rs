//! Help Overlay
//!
//! Shows keyboard shortcuts.

use super::centered_rect;
use crate::app::App;
use crate::theme::color;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Pages",
        &[
            ("  l, →, ]     ", "Next page"),
            ("  h, ←, [     ", "Previous page"),
            ("  1-9         ", "Jump to page"),
            ("  g <n> Enter ", "Go to page n"),
            ("  Home/End    ", "First/last page"),
            ("  w           ", "Toggle wrap-around"),
        ],
    ),
    (
        "Shelves",
        &[
            ("  j/k, ↓/↑    ", "Next/previous shelf"),
        ],
    ),
    (
        "Cards",
        &[
            ("  Tab/S-Tab   ", "Select next/previous card"),
            ("  Enter       ", "Show details"),
        ],
    ),
    (
        "",
        &[
            ("  ?/Esc       ", "Close help"),
            ("  q           ", "Quit application"),
        ],
    ),
];

pub fn render(f: &mut Frame, app: &App) {
    let popup_area = centered_rect(60, 70, f.area());
    f.render_widget(Clear, popup_area);

    let title_style = Style::default()
        .fg(color(app.theme.title))
        .add_modifier(Modifier::BOLD);

    let mut help_text = vec![
        Line::from(Span::styled("Keyboard Shortcuts", title_style)),
        Line::from(""),
    ];

    for (heading, keys) in SECTIONS {
        if !heading.is_empty() {
            help_text.push(Line::from(Span::styled(
                *heading,
                Style::default().add_modifier(Modifier::BOLD),
            )));
        }
        for (key, description) in *keys {
            help_text.push(Line::from(vec![
                Span::styled(*key, Style::default().fg(Color::Yellow)),
                Span::raw(*description),
            ]));
        }
        help_text.push(Line::from(""));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color(app.theme.title)))
        .title(Span::styled(" Help ", title_style));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .alignment(Alignment::Left);

    f.render_widget(paragraph, popup_area);
}
