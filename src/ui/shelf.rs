//! Shelf Carousel
//!
//! Draws one shelf: title and subtitle, prev/next controls, the current
//! page of cards, page indicators and the running count. An empty shelf
//! draws nothing.

use super::card;
use crate::card::CardView;
use crate::carousel::{self, CarouselState, Slot, PAGE_SIZE};
use crate::catalog::Shelf;
use crate::theme::{color, Theme};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Inputs for drawing one shelf
pub struct ShelfView<'a> {
    pub shelf: &'a Shelf,
    pub state: CarouselState,
    /// Highlighted slot on the page, if the shelf has focus
    pub selected_slot: Option<usize>,
    pub theme: &'a Theme,
}

pub fn render(f: &mut Frame, view: &ShelfView, area: Rect) {
    let shelf = view.shelf;
    if shelf.resources.is_empty() {
        return;
    }

    let accent = shelf.accent.style();
    let total_pages = carousel::total_pages(shelf.resources.len());
    let show_controls = carousel::shows_controls(total_pages);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color(accent.border)));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title, subtitle, controls
            Constraint::Min(3),    // Cards
            Constraint::Length(1), // Indicators
            Constraint::Length(1), // Summary
        ])
        .split(inner);

    render_heading(f, view, show_controls, total_pages, rows[0]);
    render_page(f, view, rows[1]);

    if show_controls {
        render_indicators(f, view, total_pages, rows[2]);
    }

    let summary = Paragraph::new(Span::styled(
        carousel::summary(view.state.current_page, shelf.resources.len()),
        Style::default().fg(color(view.theme.muted)),
    ))
    .alignment(Alignment::Center);
    f.render_widget(summary, rows[3]);
}

fn render_heading(
    f: &mut Frame,
    view: &ShelfView,
    show_controls: bool,
    total_pages: usize,
    area: Rect,
) {
    let shelf = view.shelf;
    let accent = shelf.accent.style();

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(18)])
        .split(area);

    let heading = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", shelf.icon.glyph()),
                Style::default().fg(color(accent.text)),
            ),
            Span::styled(
                &shelf.title,
                Style::default()
                    .fg(color(view.theme.foreground))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("    {}", shelf.subtitle),
            Style::default().fg(color(view.theme.muted)),
        )),
    ];
    f.render_widget(Paragraph::new(heading), columns[0]);

    if !show_controls {
        return;
    }

    let control_style = |enabled: bool| {
        if enabled {
            Style::default()
                .fg(color(accent.text))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color(view.theme.disabled))
        }
    };

    let controls = Line::from(vec![
        Span::styled(" ‹ prev ", control_style(view.state.can_prev())),
        Span::raw(" "),
        Span::styled(
            " next › ",
            control_style(view.state.can_next(total_pages)),
        ),
    ]);
    f.render_widget(
        Paragraph::new(controls).alignment(Alignment::Right),
        columns[1],
    );
}

fn render_page(f: &mut Frame, view: &ShelfView, area: Rect) {
    let slots = carousel::page_slots(&view.shelf.resources, view.state.current_page);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, PAGE_SIZE as u32); PAGE_SIZE])
        .spacing(1)
        .split(area);

    for (index, (slot, column)) in slots.iter().zip(columns.iter()).enumerate() {
        // Placeholders keep the grid uniform and draw nothing
        let Slot::Item(resource) = slot else {
            continue;
        };

        let selected = view.selected_slot == Some(index);
        let card_view = CardView::new(resource, view.shelf.accent);
        card::render(f, &card_view, selected, view.theme, *column);
    }
}

fn render_indicators(f: &mut Frame, view: &ShelfView, total_pages: usize, area: Rect) {
    let accent = view.shelf.accent.style();

    let mut spans = Vec::with_capacity(total_pages * 2);
    for page in 0..total_pages {
        if page > 0 {
            spans.push(Span::raw(" "));
        }
        if page == view.state.current_page {
            spans.push(Span::styled(
                "●",
                Style::default()
                    .fg(color(accent.solid))
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled("○", Style::default().fg(Color::Gray)));
        }
    }

    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}
