//! tshelf - browse learning resources in the terminal
//!
//! Shelves of videos, audio and PDFs are shown as carousels of cards, three
//! cards per page.

pub mod app;
pub mod card;
pub mod carousel;
pub mod catalog;
pub mod config;
pub mod event;
pub mod resource;
pub mod theme;
pub mod ui;

/// Version injected at compile time via TSHELF_VERSION env var (set by CI/CD),
/// or "dev" for local builds.
pub const VERSION: &str = match option_env!("TSHELF_VERSION") {
    Some(v) => v,
    None => "dev",
};
