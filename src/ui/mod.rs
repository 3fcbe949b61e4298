//! Terminal User Interface rendering module
//!
//! This module handles all UI rendering for tshelf using the ratatui
//! framework. The focused shelf is drawn as a carousel of cards; other
//! shelves appear as tabs in the header and keep their own page.
//!
//! # Architecture
//!
//! - `header` - Title bar with shelf tabs
//! - [`shelf`] - Carousel: controls, one page of cards, indicators, summary
//! - [`card`] - A single resource card
//! - `help` - Help overlay showing keybindings
//! - `details` - Full metadata of the selected card
//! - `page_prompt` - Page number input

pub mod card;
mod details;
mod header;
mod help;
mod page_prompt;
pub mod shelf;

use crate::app::{App, Mode};
use crate::carousel;
use crate::theme::color;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with shelf tabs
            Constraint::Min(1),    // Focused carousel
            Constraint::Length(1), // Footer/crumb
        ])
        .split(f.area());

    header::render(f, app, chunks[0]);

    if let Some(shelf_def) = app.focused_shelf() {
        let view = shelf::ShelfView {
            shelf: shelf_def,
            state: app.carousels.get(app.focused).copied().unwrap_or_default(),
            selected_slot: Some(app.selected_slot),
            theme: &app.theme,
        };
        shelf::render(f, &view, chunks[1]);
    }

    render_crumb(f, app, chunks[2]);

    // Overlays
    match app.mode {
        Mode::Help => help::render(f, app),
        Mode::Details => details::render(f, app),
        Mode::PageJump => page_prompt::render(f, app),
        Mode::Normal => {},
    }
}

fn render_crumb(f: &mut Frame, app: &App, area: Rect) {
    let muted = Style::default().fg(color(app.theme.muted));

    let text = if let Some(message) = &app.status_message {
        message.clone()
    } else if app.mode == Mode::Details || app.mode == Mode::Help {
        "Esc: back".to_string()
    } else if app.mode == Mode::PageJump {
        "Enter: go  Esc: cancel".to_string()
    } else if let Some(shelf) = app.focused_shelf().filter(|s| !s.resources.is_empty()) {
        let total = carousel::total_pages(shelf.resources.len());
        format!(
            "{} > page {}/{}",
            shelf.title,
            app.current_page(app.focused) + 1,
            total
        )
    } else {
        "No resources".to_string()
    };

    f.render_widget(Paragraph::new(Line::from(Span::styled(text, muted))), area);
}

/// Rect of `percent_x` by `percent_y` centered in `r`
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
