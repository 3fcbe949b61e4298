//! Card View
//!
//! Display model for one resource. A [`CardView`] is a pure function of a
//! [`Resource`] and an [`Accent`]; the `ui` module only lays it out.

use crate::resource::{Resource, ResourceKind};
use crate::theme::{difficulty_color, Accent, AccentStyle, Rgb};

/// Number of tags rendered before the rest collapse into `+N more`
pub const MAX_VISIBLE_TAGS: usize = 3;

/// Glyph shown in the type badge and on the action button
pub fn kind_icon(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Video => "▶",
        ResourceKind::Audio => "♪",
        ResourceKind::Pdf => "⬇",
        ResourceKind::Other => "↗",
    }
}

/// Label on the action button
pub fn action_label(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Video => "Watch Now",
        ResourceKind::Audio => "Listen Now",
        ResourceKind::Pdf => "Download PDF",
        ResourceKind::Other => "Open Resource",
    }
}

/// Tags to render and the collapsed remainder, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSummary {
    pub visible: Vec<String>,
    pub more: Option<String>,
}

pub fn summarize_tags(tags: &[String]) -> TagSummary {
    let visible = tags
        .iter()
        .take(MAX_VISIBLE_TAGS)
        .map(|tag| format!("#{}", tag))
        .collect();

    let more = (tags.len() > MAX_VISIBLE_TAGS)
        .then(|| format!("+{} more", tags.len() - MAX_VISIBLE_TAGS));

    TagSummary { visible, more }
}

/// Everything needed to draw one card
#[derive(Debug, Clone, PartialEq)]
pub struct CardView<'a> {
    pub resource: &'a Resource,
    pub accent: AccentStyle,
    pub icon: &'static str,
    pub badge: &'static str,
    pub action_label: &'static str,
    pub tags: TagSummary,
    pub languages: String,
    pub difficulty: &'static str,
    pub difficulty_color: Rgb,
    pub rating: String,
}

impl<'a> CardView<'a> {
    pub fn new(resource: &'a Resource, accent: Accent) -> Self {
        Self {
            resource,
            accent: accent.style(),
            icon: kind_icon(resource.kind),
            badge: resource.kind.label(),
            action_label: action_label(resource.kind),
            tags: summarize_tags(&resource.tags),
            languages: resource.languages_display(),
            difficulty: resource.difficulty.label(),
            difficulty_color: difficulty_color(resource.difficulty),
            rating: format!("{}", resource.rating),
        }
    }

    /// Text of the action button, icon first
    pub fn action_text(&self) -> String {
        format!("{} {}", self.icon, self.action_label)
    }
}
