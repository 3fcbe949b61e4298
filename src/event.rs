//! Event Handling
//!
//! Keyboard handling for tshelf. Events are applied one at a time in the
//! order they arrive.

use crate::app::{App, Mode};
use anyhow::Result;
use crossterm::event::{poll, read, Event, KeyCode, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Handle events, returns true if app should quit
pub fn handle_events(app: &mut App) -> Result<bool> {
    if poll(Duration::from_millis(100))? {
        if let Event::Key(key) = read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(handle_key_event(app, key.code, key.modifiers));
            }
        }
    }
    Ok(false)
}

pub fn handle_key_event(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> bool {
    // Global quit shortcut
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    match app.mode {
        Mode::Normal => handle_normal_mode(app, code, modifiers),
        Mode::Help | Mode::Details => handle_overlay_mode(app, code),
        Mode::PageJump => handle_page_jump_mode(app, code),
    }
}

fn handle_normal_mode(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> bool {
    app.status_message = None;

    match code {
        KeyCode::Char('q') => return true,

        // Pages
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Char(']') => app.next_page(),
        KeyCode::Char('h') | KeyCode::Left | KeyCode::Char('[') => app.prev_page(),
        KeyCode::Char(c @ '1'..='9') if !modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(digit) = c.to_digit(10) {
                app.jump_to_page(digit as usize - 1);
            }
        },
        KeyCode::Char('g') => app.enter_page_jump_mode(),
        KeyCode::Home => app.first_page(),
        KeyCode::End => app.last_page(),

        // Shelves
        KeyCode::Char('j') | KeyCode::Down => app.next_shelf(),
        KeyCode::Char('k') | KeyCode::Up => app.previous_shelf(),

        // Cards
        KeyCode::Tab => app.select_next_card(),
        KeyCode::BackTab => app.select_previous_card(),
        KeyCode::Enter => app.enter_details_mode(),

        KeyCode::Char('w') => app.toggle_wrap(),
        KeyCode::Char('?') => app.enter_help_mode(),

        _ => {},
    }

    false
}

fn handle_overlay_mode(app: &mut App, code: KeyCode) -> bool {
    match code {
        KeyCode::Char('q') => return true,
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Enter => app.exit_mode(),
        _ => {},
    }
    false
}

fn handle_page_jump_mode(app: &mut App, code: KeyCode) -> bool {
    match code {
        KeyCode::Esc => app.exit_mode(),
        KeyCode::Enter => app.submit_page_jump(),
        KeyCode::Backspace => {
            app.page_input.pop();
        },
        KeyCode::Char(c) if c.is_ascii_digit() => app.push_page_digit(c),
        _ => {},
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{self, Catalog, Shelf, ShelfIcon};
    use crate::config::Config;
    use crate::resource::test_resource;
    use crate::theme::Accent;

    fn app() -> App {
        App::new(catalog::builtin().clone(), Config::default(), false, None)
    }

    /// One shelf of 30 resources, ten pages
    fn ten_page_app() -> App {
        let shelf = Shelf {
            title: "Archive".to_string(),
            subtitle: String::new(),
            icon: ShelfIcon::Book,
            accent: Accent::Violet,
            resources: (0..30).map(|i| test_resource(&format!("r{}", i))).collect(),
        };
        let catalog = Catalog { shelves: vec![shelf] };
        App::new(catalog, Config::default(), false, None)
    }

    fn type_keys(app: &mut App, keys: &str) {
        for c in keys.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        handle_key_event(app, code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert!(press(&mut app, KeyCode::Char('q')));
        assert!(handle_key_event(
            &mut app,
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        ));
    }

    #[test]
    fn test_arrow_keys_page() {
        let mut app = app();
        assert!(!press(&mut app, KeyCode::Right));
        assert_eq!(app.current_page(app.focused), 1);
        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.current_page(app.focused), 0);
    }

    #[test]
    fn test_digit_jumps_to_indicator() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.current_page(app.focused), 2);
    }

    #[test]
    fn test_page_prompt_jumps_to_last_of_ten_pages() {
        let mut app = ten_page_app();
        assert_eq!(app.total_pages(0), 10);

        type_keys(&mut app, "g10");
        assert_eq!(app.mode, Mode::PageJump);
        assert_eq!(app.page_input, "10");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.current_page(0), 9);
    }

    #[test]
    fn test_every_indicator_is_reachable() {
        let mut app = ten_page_app();
        for page in 1..=10 {
            type_keys(&mut app, &format!("g{}", page));
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.current_page(0), page - 1);
        }
    }

    #[test]
    fn test_page_prompt_editing() {
        let mut app = ten_page_app();
        type_keys(&mut app, "g17");
        press(&mut app, KeyCode::Backspace);
        type_keys(&mut app, "x");
        assert_eq!(app.page_input, "1");

        // Keys that page in normal mode are swallowed by the prompt
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.current_page(0), 0);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, Mode::Normal);
        assert!(app.page_input.is_empty());
        assert_eq!(app.current_page(0), 0);
    }

    #[test]
    fn test_home_and_end_keys() {
        let mut app = ten_page_app();
        press(&mut app, KeyCode::End);
        assert_eq!(app.current_page(0), 9);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.current_page(0), 0);
    }

    #[test]
    fn test_overlay_keys_are_isolated() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.mode, Mode::Help);

        press(&mut app, KeyCode::Right);
        assert_eq!(app.current_page(app.focused), 0);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn test_enter_opens_details() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Details);
        assert_eq!(app.selected_slot, 1);
    }

    #[test]
    fn test_w_toggles_wrap() {
        let mut app = app();
        press(&mut app, KeyCode::Char('w'));
        assert!(app.wrap);
        press(&mut app, KeyCode::Left);
        assert_eq!(
            app.current_page(app.focused),
            app.total_pages(app.focused) - 1
        );
    }
}
