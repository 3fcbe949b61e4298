//! Card Component
//!
//! Lays out a [`CardView`]: type badge, duration and rating, title,
//! description, tags, metadata and the action button.

use crate::card::CardView;
use crate::theme::{color, Theme};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, card: &CardView, selected: bool, theme: &Theme, area: Rect) {
    let border_color = if selected {
        theme.selected
    } else {
        card.accent.border
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color(border_color)));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    f.render_widget(
        Paragraph::new(body_lines(card, theme)).wrap(Wrap { trim: true }),
        rows[0],
    );

    let button_bg = if selected {
        card.accent.hover
    } else {
        card.accent.solid
    };
    let button = Paragraph::new(Span::styled(
        format!(" {} ", card.action_text()),
        Style::default()
            .fg(Color::White)
            .bg(color(button_bg))
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    f.render_widget(button, rows[1]);
}

fn body_lines<'a>(card: &'a CardView, theme: &Theme) -> Vec<Line<'a>> {
    let resource = card.resource;
    let muted = Style::default().fg(color(theme.muted));
    let value = Style::default().fg(color(theme.foreground));

    let badge = Line::from(vec![
        Span::styled(
            format!(" {} {} ", card.icon, card.badge),
            Style::default()
                .fg(Color::White)
                .bg(color(card.accent.solid))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  ⏱ {}", resource.duration), muted),
        Span::styled(format!("  ★ {}", card.rating), Style::default().fg(color(theme.rating))),
    ]);

    let title = Line::from(Span::styled(
        &resource.title,
        Style::default()
            .fg(color(theme.foreground))
            .add_modifier(Modifier::BOLD),
    ));

    let mut tag_spans = Vec::new();
    for tag in &card.tags.visible {
        tag_spans.push(Span::styled(
            tag.clone(),
            Style::default()
                .fg(color(card.accent.text))
                .bg(color(card.accent.light)),
        ));
        tag_spans.push(Span::raw(" "));
    }
    if let Some(more) = &card.tags.more {
        tag_spans.push(Span::styled(more.clone(), muted));
    }

    vec![
        badge,
        Line::from(""),
        title,
        Line::from(Span::styled(&resource.description, muted)),
        Line::from(""),
        Line::from(tag_spans),
        Line::from(""),
        Line::from(vec![
            Span::styled("Category:   ", muted),
            Span::styled(&resource.category, value),
        ]),
        Line::from(vec![
            Span::styled("Languages:  ", muted),
            Span::styled(card.languages.clone(), value),
        ]),
        Line::from(vec![
            Span::styled("Difficulty: ", muted),
            Span::styled(
                card.difficulty,
                Style::default()
                    .fg(color(card.difficulty_color))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ]
}
