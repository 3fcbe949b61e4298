//! Page Prompt
//!
//! Page number input opened with `g`.

use crate::app::App;
use crate::theme::color;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, app: &App) {
    let area = f.area();

    // Prompt sits above the crumb line
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    let prompt_area = chunks[1];
    f.render_widget(Clear, prompt_area);

    let total = app.total_pages(app.focused);
    let accent = color(app.theme.title);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .title(Span::styled(
            format!(" Go to page (1-{}) ", total),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ));

    let input = Line::from(vec![
        Span::styled("page ", Style::default().fg(accent)),
        Span::styled(
            app.page_input.as_str(),
            Style::default().fg(color(app.theme.foreground)),
        ),
        Span::styled("_", Style::default().fg(color(app.theme.muted))),
    ]);

    f.render_widget(Paragraph::new(input).block(block), prompt_area);
}
