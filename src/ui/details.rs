//! Details Overlay
//!
//! Full metadata of the selected card, including where its action points.

use super::centered_rect;
use crate::app::App;
use crate::card::CardView;
use crate::theme::color;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, app: &App) {
    let (Some(shelf), Some(resource)) = (app.focused_shelf(), app.selected_resource()) else {
        return;
    };

    let card = CardView::new(resource, shelf.accent);
    let theme = &app.theme;
    let label = Style::default().fg(color(theme.muted));
    let value = Style::default().fg(color(theme.foreground));

    let popup_area = centered_rect(70, 70, f.area());
    f.render_widget(Clear, popup_area);

    let field = |name: &'static str, text: String| {
        Line::from(vec![
            Span::styled(format!("{:<12}", name), label),
            Span::styled(text, value),
        ])
    };

    let mut tags = card.tags.visible.join(" ");
    if let Some(more) = &card.tags.more {
        tags.push(' ');
        tags.push_str(more);
    }

    let lines = vec![
        Line::from(Span::styled(
            resource.title.clone(),
            Style::default()
                .fg(color(card.accent.text))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(resource.description.clone(), value)),
        Line::from(""),
        field("Type", format!("{} {}", card.icon, card.badge)),
        field("Duration", resource.duration.clone()),
        field("Rating", card.rating.clone()),
        field("Category", resource.category.clone()),
        field("Languages", card.languages.clone()),
        Line::from(vec![
            Span::styled(format!("{:<12}", "Difficulty"), label),
            Span::styled(card.difficulty, Style::default().fg(color(card.difficulty_color))),
        ]),
        field("Tags", tags),
        field("Thumbnail", resource.thumbnail.clone()),
        Line::from(""),
        field(card.action_label, resource.action_target().to_string()),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color(card.accent.border)))
        .title(Span::styled(
            format!(" {} ", resource.id),
            Style::default()
                .fg(color(theme.title))
                .add_modifier(Modifier::BOLD),
        ));

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        popup_area,
    );
}
