//! Catalog file loading tests
//!
//! Catalog files are written to a temporary directory and loaded through
//! the same path the binary uses for --catalog.

use std::fs;
use tshelf::catalog::{Catalog, CatalogError};
use tshelf::resource::ResourceKind;
use tshelf::theme::Accent;

const JSON_CATALOG: &str = r#"{
  "shelves": [
    {
      "title": "Podcasts",
      "subtitle": "Listen on the go",
      "icon": "headphones",
      "accent": "purple",
      "resources": [
        {
          "id": "ep1",
          "title": "Episode 1",
          "type": "audio",
          "duration": "30 min",
          "rating": 4.1,
          "languages": ["English"],
          "tags": ["intro"],
          "difficulty": "beginner",
          "url": "https://example.com/ep1",
          "audioUrl": "https://example.com/ep1.mp3"
        },
        {
          "id": "ep2",
          "title": "Episode 2",
          "type": "webinar",
          "difficulty": "advanced",
          "url": "https://example.com/ep2"
        }
      ]
    }
  ]
}"#;

const YAML_CATALOG: &str = "\
shelves:
  - title: Guides
    accent: indigo
    resources:
      - id: g1
        title: Getting Started
        type: pdf
        difficulty: beginner
        url: https://example.com/g1
        pdfDownloadUrl: https://example.com/g1.pdf
";

#[test]
fn loads_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(&path, JSON_CATALOG).unwrap();

    let catalog = Catalog::load_from_file(&path).unwrap();
    let shelf = &catalog.shelves[0];
    assert_eq!(shelf.accent, Accent::Purple);
    assert_eq!(shelf.resources.len(), 2);
    assert_eq!(shelf.resources[0].action_target(), "https://example.com/ep1.mp3");
    assert_eq!(shelf.resources[1].kind, ResourceKind::Other);
}

#[test]
fn loads_yaml_file_with_either_extension() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["catalog.yaml", "catalog.YML"] {
        let path = dir.path().join(name);
        fs::write(&path, YAML_CATALOG).unwrap();

        let catalog = Catalog::load_from_file(&path).unwrap();
        assert_eq!(catalog.shelves[0].title, "Guides");
        assert_eq!(
            catalog.shelves[0].resources[0].action_target(),
            "https://example.com/g1.pdf"
        );
    }
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Catalog::load_from_file(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn malformed_yaml_is_yaml_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.yaml");
    fs::write(&path, "shelves: [ {title: ").unwrap();

    assert!(matches!(
        Catalog::load_from_file(&path),
        Err(CatalogError::Yaml(_))
    ));
}

#[test]
fn unknown_difficulty_in_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(&path, JSON_CATALOG.replace("\"advanced\"", "\"guru\"")).unwrap();

    assert!(matches!(
        Catalog::load_from_file(&path),
        Err(CatalogError::Json(_))
    ));
}
