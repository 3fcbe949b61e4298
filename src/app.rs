//! Application State
//!
//! Central application state management for tshelf. Each shelf owns an
//! independent [`CarouselState`]; page changes go through
//! [`carousel::update`].

use crate::carousel::{self, Action, CarouselState};
use crate::catalog::{Catalog, Shelf};
use crate::config::Config;
use crate::resource::Resource;
use crate::theme::Theme;

/// Application modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,   // Browsing shelves
    Help,     // ? help popup
    Details,  // Details of the selected card
    PageJump, // g page number prompt
}

/// Main application state
pub struct App {
    pub catalog: Catalog,

    // One carousel per shelf, same order as catalog.shelves
    pub carousels: Vec<CarouselState>,

    // Navigation state
    pub focused: usize,
    pub selected_slot: usize,
    pub mode: Mode,

    // Page number typed at the g prompt
    pub page_input: String,

    // Lets next/prev wrap past the boundary pages
    pub wrap: bool,

    pub status_message: Option<String>,

    pub theme: Theme,
    pub config: Config,
}

impl App {
    pub fn new(catalog: Catalog, config: Config, wrap: bool, initial_shelf: Option<&str>) -> Self {
        let carousels = vec![CarouselState::new(); catalog.shelves.len()];
        let theme = Theme::resolve(config.theme.as_deref());

        let mut app = Self {
            catalog,
            carousels,
            focused: 0,
            selected_slot: 0,
            mode: Mode::Normal,
            page_input: String::new(),
            wrap,
            status_message: None,
            theme,
            config,
        };

        let requested = initial_shelf.and_then(|title| app.catalog.shelf_index(title));
        match requested {
            Some(index) if app.is_focusable(index) => app.focused = index,
            _ => {
                if let Some(title) = initial_shelf {
                    tracing::warn!("Shelf '{}' not found or empty, using first shelf", title);
                }
                app.focused = app.focusable_shelves().first().copied().unwrap_or(0);
            }
        }

        app
    }

    // =========================================================================
    // Shelf focus
    // =========================================================================

    /// Empty shelves render nothing and cannot take focus
    pub fn is_focusable(&self, index: usize) -> bool {
        self.catalog
            .shelves
            .get(index)
            .is_some_and(|s| !s.resources.is_empty())
    }

    pub fn focusable_shelves(&self) -> Vec<usize> {
        (0..self.catalog.shelves.len())
            .filter(|&i| self.is_focusable(i))
            .collect()
    }

    pub fn focused_shelf(&self) -> Option<&Shelf> {
        self.catalog.shelves.get(self.focused)
    }

    pub fn next_shelf(&mut self) {
        let focusable = self.focusable_shelves();
        if let Some(&index) = focusable.iter().find(|&&i| i > self.focused) {
            self.focus_shelf(index);
        }
    }

    pub fn previous_shelf(&mut self) {
        let focusable = self.focusable_shelves();
        if let Some(&index) = focusable.iter().rev().find(|&&i| i < self.focused) {
            self.focus_shelf(index);
        }
    }

    fn focus_shelf(&mut self, index: usize) {
        self.focused = index;
        self.selected_slot = 0;
    }

    // =========================================================================
    // Pagination
    // =========================================================================

    pub fn total_pages(&self, shelf: usize) -> usize {
        self.catalog
            .shelves
            .get(shelf)
            .map_or(0, |s| carousel::total_pages(s.resources.len()))
    }

    pub fn current_page(&self, shelf: usize) -> usize {
        self.carousels
            .get(shelf)
            .map_or(0, |state| state.current_page)
    }

    /// Next page on the focused shelf. Disabled on the last page unless
    /// wrap-around is enabled.
    pub fn next_page(&mut self) {
        let total = self.total_pages(self.focused);
        if !carousel::shows_controls(total) {
            return;
        }

        let Some(state) = self.carousels.get(self.focused).copied() else {
            return;
        };

        if !self.wrap && !state.can_next(total) {
            return;
        }

        self.apply(Action::Next);
    }

    /// Previous page on the focused shelf. Disabled on the first page unless
    /// wrap-around is enabled.
    pub fn prev_page(&mut self) {
        let total = self.total_pages(self.focused);
        if !carousel::shows_controls(total) {
            return;
        }

        let Some(state) = self.carousels.get(self.focused).copied() else {
            return;
        };

        if !self.wrap && !state.can_prev() {
            return;
        }

        self.apply(Action::Prev);
    }

    /// Jump via a page indicator. Indicators only exist for real pages.
    pub fn jump_to_page(&mut self, page: usize) {
        let total = self.total_pages(self.focused);
        if !carousel::shows_controls(total) || page >= total {
            return;
        }

        self.apply(Action::JumpTo(page));
    }

    pub fn first_page(&mut self) {
        self.jump_to_page(0);
    }

    pub fn last_page(&mut self) {
        let total = self.total_pages(self.focused);
        if total > 0 {
            self.jump_to_page(total - 1);
        }
    }

    fn apply(&mut self, action: Action) {
        let total = self.total_pages(self.focused);
        let Some(state) = self.carousels.get_mut(self.focused) else {
            return;
        };

        let before = state.current_page;
        *state = carousel::update(*state, action, total);
        self.selected_slot = 0;

        tracing::debug!(
            "Shelf {} {:?}: page {} -> {} of {}",
            self.focused,
            action,
            before,
            state.current_page,
            total
        );
    }

    pub fn toggle_wrap(&mut self) {
        self.wrap = !self.wrap;
        self.status_message = Some(if self.wrap {
            "Wrap-around navigation on".to_string()
        } else {
            "Wrap-around navigation off".to_string()
        });
    }

    // =========================================================================
    // Card selection
    // =========================================================================

    /// Resources on the visible page of the focused shelf
    pub fn visible_resources(&self) -> &[Resource] {
        match self.focused_shelf() {
            Some(shelf) => {
                carousel::page_items(&shelf.resources, self.current_page(self.focused))
            }
            None => &[],
        }
    }

    /// Move selection to the next real card; placeholders are skipped
    pub fn select_next_card(&mut self) {
        let count = self.visible_resources().len();
        if count > 0 {
            self.selected_slot = (self.selected_slot + 1) % count;
        }
    }

    pub fn select_previous_card(&mut self) {
        let count = self.visible_resources().len();
        if count > 0 {
            self.selected_slot = (self.selected_slot + count - 1) % count;
        }
    }

    pub fn selected_resource(&self) -> Option<&Resource> {
        self.visible_resources().get(self.selected_slot)
    }

    // =========================================================================
    // Modes
    // =========================================================================

    pub fn enter_help_mode(&mut self) {
        self.mode = Mode::Help;
    }

    pub fn enter_details_mode(&mut self) {
        if self.selected_resource().is_some() {
            self.mode = Mode::Details;
        }
    }

    pub fn exit_mode(&mut self) {
        self.mode = Mode::Normal;
        self.page_input.clear();
    }

    /// Open the page number prompt; only shelves with indicators have one
    pub fn enter_page_jump_mode(&mut self) {
        if carousel::shows_controls(self.total_pages(self.focused)) {
            self.page_input.clear();
            self.mode = Mode::PageJump;
        }
    }

    pub fn push_page_digit(&mut self, digit: char) {
        // More digits than any page count needs
        if digit.is_ascii_digit() && self.page_input.len() < 6 {
            self.page_input.push(digit);
        }
    }

    /// Jump to the typed 1-based page number and close the prompt.
    /// Numbers outside the shelf's pages are reported and ignored.
    pub fn submit_page_jump(&mut self) {
        let total = self.total_pages(self.focused);
        match self.page_input.parse::<usize>() {
            Ok(page) if (1..=total).contains(&page) => self.jump_to_page(page - 1),
            _ if self.page_input.is_empty() => {}
            _ => {
                self.status_message = Some(format!(
                    "No page {} (pages 1-{})",
                    self.page_input, total
                ));
            }
        }
        self.exit_mode();
    }

    /// Persist the focused shelf for the next start
    pub fn save_session(&mut self) {
        let Some(title) = self.focused_shelf().map(|s| s.title.clone()) else {
            return;
        };

        if let Err(e) = self.config.set_last_shelf(&title) {
            tracing::warn!("Failed to save config: {}", e);
        }
    }
}
