//! Resource Model
//!
//! A resource is one catalogued learning item (video, audio or PDF) with
//! descriptive metadata. Resources are immutable once loaded from a catalog.
//!
//! `type` and `difficulty` are closed enumerations. An unrecognized `type`
//! deserializes to [`ResourceKind::Other`] and renders with a generic link
//! icon; an unrecognized `difficulty` is rejected when the catalog loads.

use serde::{Deserialize, Serialize};

/// Kind of media a resource points to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Video,
    Audio,
    Pdf,
    #[serde(other)]
    Other,
}

impl ResourceKind {
    /// Capitalized name shown in the type badge
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Video => "Video",
            ResourceKind::Audio => "Audio",
            ResourceKind::Pdf => "Pdf",
            ResourceKind::Other => "Link",
        }
    }
}

/// Declared difficulty of a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

/// A catalogued learning resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub difficulty: Difficulty,
    pub url: String,

    /// Embedded video player
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed_url: Option<String>,
    /// External video page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_url: Option<String>,
    /// Embedded audio stream
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    /// External audio page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_external_url: Option<String>,
    /// PDF preview
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<String>,
    /// PDF download
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_download_url: Option<String>,
}

impl Resource {
    /// Destination the card's action control points at.
    ///
    /// External links are preferred over embeds; `url` is the fallback for
    /// every kind.
    pub fn action_target(&self) -> &str {
        let preferred = match self.kind {
            ResourceKind::Video => self.youtube_url.as_ref().or(self.embed_url.as_ref()),
            ResourceKind::Audio => self
                .audio_external_url
                .as_ref()
                .or(self.audio_url.as_ref()),
            ResourceKind::Pdf => self.pdf_download_url.as_ref().or(self.pdf_url.as_ref()),
            ResourceKind::Other => None,
        };

        preferred.map(String::as_str).unwrap_or(&self.url)
    }

    /// Languages joined for display
    pub fn languages_display(&self) -> String {
        self.languages.join(", ")
    }
}

#[cfg(test)]
pub(crate) fn test_resource(id: &str) -> Resource {
    Resource {
        id: id.to_string(),
        title: format!("Resource {}", id),
        description: String::new(),
        kind: ResourceKind::Video,
        thumbnail: String::new(),
        duration: "10 min".to_string(),
        rating: 4.5,
        category: "General".to_string(),
        languages: vec!["English".to_string()],
        tags: Vec::new(),
        difficulty: Difficulty::Beginner,
        url: format!("https://example.com/{}", id),
        embed_url: None,
        youtube_url: None,
        audio_url: None,
        audio_external_url: None,
        pdf_url: None,
        pdf_download_url: None,
    }
}
