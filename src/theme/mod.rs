//! Theme System
//!
//! Colors for tshelf. Accents and difficulty colors are closed sets mapped
//! with exhaustive matches; the base palette can be swapped for a built-in
//! or a user YAML theme.

use crate::resource::Difficulty;
use anyhow::Result;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Validate theme name to prevent path traversal attacks
/// Theme names can only contain alphanumeric characters, hyphens, and underscores
fn validate_theme_name(name: &str) -> bool {
    if name.is_empty() || name.len() > 64 {
        return false;
    }

    if name.starts_with('.') || name.starts_with('-') {
        return false;
    }

    name.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// RGB color as [r, g, b]
pub type Rgb = [u8; 3];

pub fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb[0], rgb[1], rgb[2])
}

/// Visual theme applied consistently to a shelf and its cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Violet,
    Purple,
    Indigo,
}

/// Colors derived from an [`Accent`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccentStyle {
    /// Solid fill (type badge, action button, active indicator)
    pub solid: Rgb,
    /// Fill for a focused action button
    pub hover: Rgb,
    /// Accent text (tags, enabled controls)
    pub text: Rgb,
    /// Light background (tags, shelf icon)
    pub light: Rgb,
    pub border: Rgb,
}

impl Accent {
    pub fn style(&self) -> AccentStyle {
        match self {
            Accent::Violet => AccentStyle {
                solid: [124, 58, 237],
                hover: [109, 40, 217],
                text: [124, 58, 237],
                light: [245, 243, 255],
                border: [221, 214, 254],
            },
            Accent::Purple => AccentStyle {
                solid: [147, 51, 234],
                hover: [126, 34, 206],
                text: [147, 51, 234],
                light: [250, 245, 255],
                border: [233, 213, 255],
            },
            Accent::Indigo => AccentStyle {
                solid: [79, 70, 229],
                hover: [67, 56, 202],
                text: [79, 70, 229],
                light: [238, 242, 255],
                border: [199, 210, 254],
            },
        }
    }
}

/// Display color for a difficulty level
pub fn difficulty_color(difficulty: Difficulty) -> Rgb {
    match difficulty {
        Difficulty::Beginner => [22, 163, 74],
        Difficulty::Intermediate => [202, 138, 4],
        Difficulty::Advanced => [220, 38, 38],
    }
}

/// Base palette
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default = "default_name")]
    pub name: String,
    /// Main foreground/text
    #[serde(default = "default_fg")]
    pub foreground: Rgb,
    /// Border color
    #[serde(default = "default_border")]
    pub border: Rgb,
    /// Muted/secondary text
    #[serde(default = "default_muted")]
    pub muted: Rgb,
    /// Disabled controls
    #[serde(default = "default_disabled")]
    pub disabled: Rgb,
    /// Titles and headings
    #[serde(default = "default_title")]
    pub title: Rgb,
    /// Rating stars
    #[serde(default = "default_rating")]
    pub rating: Rgb,
    /// Selected card border
    #[serde(default = "default_selected")]
    pub selected: Rgb,
}

fn default_name() -> String {
    "default".to_string()
}
fn default_fg() -> Rgb {
    [255, 255, 255]
}
fn default_border() -> Rgb {
    [128, 128, 128]
}
fn default_muted() -> Rgb {
    [150, 150, 150]
}
fn default_disabled() -> Rgb {
    [80, 80, 80]
}
fn default_title() -> Rgb {
    [0, 255, 255]
}
fn default_rating() -> Rgb {
    [250, 204, 21]
}
fn default_selected() -> Rgb {
    [255, 255, 85]
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: default_name(),
            foreground: default_fg(),
            border: default_border(),
            muted: default_muted(),
            disabled: default_disabled(),
            title: default_title(),
            rating: default_rating(),
            selected: default_selected(),
        }
    }
}

impl Theme {
    /// Get built-in theme by name
    pub fn builtin(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::default()),
            "dracula" => Some(Self::dracula()),
            "nord" => Some(Self::nord()),
            _ => None,
        }
    }

    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            foreground: [248, 248, 242],
            border: [68, 71, 90],
            muted: [98, 114, 164],
            disabled: [68, 71, 90],
            title: [139, 233, 253],
            rating: [241, 250, 140],
            selected: [255, 121, 198],
        }
    }

    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            foreground: [236, 239, 244],
            border: [76, 86, 106],
            muted: [129, 161, 193],
            disabled: [67, 76, 94],
            title: [136, 192, 208],
            rating: [235, 203, 139],
            selected: [163, 190, 140],
        }
    }

    /// Load theme from a YAML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let theme: Theme = serde_yaml::from_str(&content)?;
        Ok(theme)
    }

    /// Resolve a theme name: built-in first, then `<config_dir>/tshelf/skins/<name>.yaml`.
    /// Falls back to the default theme.
    pub fn resolve(name: Option<&str>) -> Self {
        let Some(name) = name else {
            return Self::default();
        };

        if !validate_theme_name(name) {
            tracing::warn!("Invalid theme name: '{}' contains unsafe characters", name);
            return Self::default();
        }

        if let Some(theme) = Self::builtin(name) {
            return theme;
        }

        let Some(path) = skin_path(name) else {
            return Self::default();
        };

        match Self::load_from_file(&path) {
            Ok(theme) => theme,
            Err(e) => {
                tracing::warn!("Failed to load theme {:?}: {}", path, e);
                Self::default()
            }
        }
    }
}

fn skin_path(name: &str) -> Option<PathBuf> {
    dirs::config_dir().map(|p| {
        p.join("tshelf")
            .join("skins")
            .join(format!("{}.yaml", name))
    })
}
