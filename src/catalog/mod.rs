//! Catalog Loading
//!
//! A catalog is a list of shelves, each a titled carousel over resources.
//! The built-in catalog is embedded at compile time; a user catalog can be
//! loaded from a JSON or YAML file of the same shape.

use crate::resource::Resource;
use crate::theme::Accent;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

/// Embedded catalog (compiled into the binary)
const BUILTIN_CATALOG: &str = include_str!("../catalogs/learning.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid YAML catalog: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unsupported catalog format: {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),
    #[error("duplicate resource id '{id}' in shelf '{shelf}'")]
    DuplicateId { shelf: String, id: String },
    #[error("catalog contains no shelves")]
    EmptyCatalog,
}

/// Glyph shown next to a shelf title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShelfIcon {
    #[default]
    Book,
    Video,
    Headphones,
    File,
    Star,
    Sparkles,
}

impl ShelfIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            ShelfIcon::Book => "📖",
            ShelfIcon::Video => "🎬",
            ShelfIcon::Headphones => "🎧",
            ShelfIcon::File => "📄",
            ShelfIcon::Star => "★",
            ShelfIcon::Sparkles => "✨",
        }
    }
}

/// A titled carousel over one list of resources
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shelf {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub icon: ShelfIcon,
    pub accent: Accent,
    #[serde(default)]
    pub resources: Vec<Resource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub shelves: Vec<Shelf>,
}

impl Catalog {
    /// Parse a JSON catalog and validate it
    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(content)?;
        catalog.validated()
    }

    /// Parse a YAML catalog and validate it
    pub fn from_yaml(content: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_yaml::from_str(content)?;
        catalog.validated()
    }

    /// Load a catalog file, choosing the parser by extension
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        if !matches!(extension.as_str(), "json" | "yaml" | "yml") {
            return Err(CatalogError::UnsupportedFormat(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = if extension == "json" {
            Self::from_json(&content)?
        } else {
            Self::from_yaml(&content)?
        };

        tracing::info!(
            "Loaded catalog {:?}: {} shelves, {} resources",
            path,
            catalog.shelves.len(),
            catalog.resource_count()
        );

        Ok(catalog)
    }

    fn validated(self) -> Result<Self, CatalogError> {
        if self.shelves.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        for shelf in &self.shelves {
            let mut seen = HashSet::new();
            for resource in &shelf.resources {
                if !seen.insert(resource.id.as_str()) {
                    return Err(CatalogError::DuplicateId {
                        shelf: shelf.title.clone(),
                        id: resource.id.clone(),
                    });
                }
            }
        }

        Ok(self)
    }

    pub fn resource_count(&self) -> usize {
        self.shelves.iter().map(|s| s.resources.len()).sum()
    }

    /// Index of the shelf with the given title (case-insensitive)
    pub fn shelf_index(&self, title: &str) -> Option<usize> {
        self.shelves
            .iter()
            .position(|s| s.title.eq_ignore_ascii_case(title))
    }
}

/// The catalog shipped with the binary
pub fn builtin() -> &'static Catalog {
    static BUILTIN: OnceLock<Catalog> = OnceLock::new();
    BUILTIN.get_or_init(|| match Catalog::from_json(BUILTIN_CATALOG) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("Failed to parse built-in catalog: {}", e);
            Catalog { shelves: Vec::new() }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "shelves": [{
            "title": "Videos",
            "accent": "violet",
            "resources": [
                {"id": "a", "title": "A", "type": "video", "difficulty": "beginner", "url": "u"},
                {"id": "b", "title": "B", "type": "audio", "difficulty": "advanced", "url": "u"}
            ]
        }]
    }"#;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = builtin();
        assert!(!catalog.shelves.is_empty(), "Built-in catalog should have shelves");
        assert!(catalog.resource_count() > 0);
    }

    #[test]
    fn test_builtin_catalog_has_partial_final_page() {
        let catalog = builtin();
        assert!(catalog
            .shelves
            .iter()
            .any(|s| s.resources.len() % crate::carousel::PAGE_SIZE != 0));
    }

    #[test]
    fn test_minimal_json_catalog() {
        let catalog = Catalog::from_json(MINIMAL).unwrap();
        assert_eq!(catalog.shelves.len(), 1);
        assert_eq!(catalog.shelves[0].icon, ShelfIcon::Book);
        assert_eq!(catalog.shelves[0].accent, Accent::Violet);
        assert_eq!(catalog.resource_count(), 2);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let content = MINIMAL.replace("\"id\": \"b\"", "\"id\": \"a\"");
        let err = Catalog::from_json(&content).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { ref id, .. } if id == "a"));
    }

    #[test]
    fn test_unknown_difficulty_rejected() {
        let content = MINIMAL.replace("\"advanced\"", "\"expert\"");
        assert!(matches!(
            Catalog::from_json(&content),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn test_unknown_accent_rejected() {
        let content = MINIMAL.replace("\"violet\"", "\"teal\"");
        assert!(Catalog::from_json(&content).is_err());
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(
            Catalog::from_json(r#"{"shelves": []}"#),
            Err(CatalogError::EmptyCatalog)
        ));
    }

    #[test]
    fn test_empty_shelf_is_allowed() {
        let catalog =
            Catalog::from_json(r#"{"shelves": [{"title": "Soon", "accent": "indigo"}]}"#).unwrap();
        assert!(catalog.shelves[0].resources.is_empty());
    }

    #[test]
    fn test_yaml_catalog() {
        let yaml = "shelves:\n  - title: Podcasts\n    icon: headphones\n    accent: purple\n    resources:\n      - id: p1\n        title: Episode 1\n        type: audio\n        difficulty: intermediate\n        url: https://example.com/p1\n        tags: [a, b, c, d]\n";
        let catalog = Catalog::from_yaml(yaml).unwrap();
        assert_eq!(catalog.shelves[0].icon, ShelfIcon::Headphones);
        assert_eq!(catalog.shelves[0].resources[0].tags.len(), 4);
    }

    #[test]
    fn test_shelf_index_is_case_insensitive() {
        let catalog = Catalog::from_json(MINIMAL).unwrap();
        assert_eq!(catalog.shelf_index("videos"), Some(0));
        assert_eq!(catalog.shelf_index("missing"), None);
    }

    #[test]
    fn test_unsupported_extension() {
        let err = Catalog::load_from_file(Path::new("catalog.toml")).unwrap_err();
        assert!(matches!(err, CatalogError::UnsupportedFormat(_)));
    }
}
