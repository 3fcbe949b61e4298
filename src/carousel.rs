//! Carousel Pagination
//!
//! Pure pagination state for a shelf of resources. A shelf is split into
//! pages of [`PAGE_SIZE`] slots; the carousel tracks which page is visible.
//!
//! State changes go through [`update`], which takes the current state, an
//! [`Action`] and the page count and returns the next state. Rendering code
//! asks [`CarouselState`] which controls are enabled and never mutates it.

use crate::resource::Resource;

/// Number of cards shown on one page
pub const PAGE_SIZE: usize = 3;

/// Number of pages needed for `len` resources
pub fn total_pages(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// Navigation actions a carousel understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Next,
    Prev,
    JumpTo(usize),
}

/// Current page of a single carousel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarouselState {
    pub current_page: usize,
}

impl CarouselState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the "previous" control is enabled
    pub fn can_prev(&self) -> bool {
        self.current_page > 0
    }

    /// Whether the "next" control is enabled
    pub fn can_next(&self, total_pages: usize) -> bool {
        self.current_page + 1 < total_pages
    }
}

/// Apply a navigation action.
///
/// `Next` and `Prev` wrap around modulo `total_pages`. With no pages the
/// state is returned unchanged.
pub fn update(state: CarouselState, action: Action, total_pages: usize) -> CarouselState {
    if total_pages == 0 {
        return state;
    }

    let current_page = match action {
        Action::Next => (state.current_page + 1) % total_pages,
        Action::Prev => (state.current_page + total_pages - 1) % total_pages,
        Action::JumpTo(index) => index.min(total_pages - 1),
    };

    CarouselState { current_page }
}

/// Whether navigation controls (arrows and page indicators) are shown
pub fn shows_controls(total_pages: usize) -> bool {
    total_pages > 1
}

/// One grid position on a page
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slot<'a> {
    Item(&'a Resource),
    Placeholder,
}

impl<'a> Slot<'a> {
    pub fn resource(&self) -> Option<&'a Resource> {
        match self {
            Slot::Item(resource) => Some(resource),
            Slot::Placeholder => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Slot::Placeholder)
    }
}

/// Resources visible on `page`, clipped to the end of the list
pub fn page_items(resources: &[Resource], page: usize) -> &[Resource] {
    let start = (page * PAGE_SIZE).min(resources.len());
    let end = (start + PAGE_SIZE).min(resources.len());
    &resources[start..end]
}

/// The [`PAGE_SIZE`] slots of `page`: real items first, placeholders after
pub fn page_slots(resources: &[Resource], page: usize) -> [Slot<'_>; PAGE_SIZE] {
    let items = page_items(resources, page);
    std::array::from_fn(|i| items.get(i).map_or(Slot::Placeholder, Slot::Item))
}

/// Index of the last visible item on `page`, capped at `len`
pub fn shown_count(page: usize, len: usize) -> usize {
    ((page + 1) * PAGE_SIZE).min(len)
}

/// Running count shown under the carousel
pub fn summary(page: usize, len: usize) -> String {
    format!("Showing {} of {} resources", shown_count(page, len), len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::test_resource;

    fn resources(n: usize) -> Vec<Resource> {
        (0..n).map(|i| test_resource(&format!("r{}", i))).collect()
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(3), 1);
        assert_eq!(total_pages(4), 2);
        assert_eq!(total_pages(7), 3);
    }

    #[test]
    fn test_next_wraps_to_first_page() {
        let state = CarouselState { current_page: 2 };
        assert_eq!(update(state, Action::Next, 3).current_page, 0);
    }

    #[test]
    fn test_prev_wraps_to_last_page() {
        let state = CarouselState::new();
        assert_eq!(update(state, Action::Prev, 3).current_page, 2);
    }

    #[test]
    fn test_jump_to_clamps_to_last_page() {
        let state = CarouselState::new();
        assert_eq!(update(state, Action::JumpTo(1), 3).current_page, 1);
        assert_eq!(update(state, Action::JumpTo(9), 3).current_page, 2);
    }

    #[test]
    fn test_update_without_pages_is_noop() {
        let state = CarouselState::new();
        assert_eq!(update(state, Action::Next, 0), state);
        assert_eq!(update(state, Action::Prev, 0), state);
    }

    #[test]
    fn test_controls_disabled_at_boundaries() {
        let first = CarouselState::new();
        assert!(!first.can_prev());
        assert!(first.can_next(3));

        let last = CarouselState { current_page: 2 };
        assert!(last.can_prev());
        assert!(!last.can_next(3));
    }

    #[test]
    fn test_controls_hidden_for_single_page() {
        assert!(!shows_controls(0));
        assert!(!shows_controls(total_pages(3)));
        assert!(shows_controls(total_pages(4)));
    }

    #[test]
    fn test_final_page_padded_with_placeholders() {
        let list = resources(5);

        let first = page_slots(&list, 0);
        assert!(first.iter().all(|s| !s.is_placeholder()));

        let second = page_slots(&list, 1);
        assert_eq!(second[0].resource().map(|r| r.id.as_str()), Some("r3"));
        assert_eq!(second[1].resource().map(|r| r.id.as_str()), Some("r4"));
        assert!(second[2].is_placeholder());
    }

    #[test]
    fn test_summary_for_seven_resources() {
        assert_eq!(summary(0, 7), "Showing 3 of 7 resources");
        assert_eq!(summary(1, 7), "Showing 6 of 7 resources");
        assert_eq!(summary(2, 7), "Showing 7 of 7 resources");
    }

    #[test]
    fn test_summary_for_five_resources() {
        assert_eq!(shown_count(1, 5), 5);
        assert_eq!(summary(1, 5), "Showing 5 of 5 resources");
    }
}
