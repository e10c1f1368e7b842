//! Catalog loading and filtering edge cases

use std::io::Write;

use catalog_core::{visible_count, Catalog, CatalogError, Category, CellVisual, ViewState};
use tempfile::{NamedTempFile, TempDir};

fn write_catalog(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn load_from_file() {
    let file = write_catalog(
        r##"{
            "compass": [{ "name": "Tools", "color": "#e4572e" }],
            "items": [
                { "name": "Widget", "slug": "WID", "category": "Tools", "icon": "icons/wid.png" },
                { "name": "Bolt", "slug": "BLT", "category": "Parts", "length": "6-40" }
            ]
        }"##,
    );

    let catalog = Catalog::load(file.path()).unwrap();
    assert_eq!(catalog.items.len(), 2);
    assert_eq!(catalog.items[0].icon.as_deref(), Some("icons/wid.png"));
    assert_eq!(catalog.items[0].length_label(), "1-100");
    assert_eq!(catalog.items[1].length_label(), "6-40");
}

#[test]
fn missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = Catalog::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, CatalogError::Io(_)));
}

#[test]
fn malformed_json_is_parse_error() {
    let file = write_catalog("{ \"items\": [ }");
    assert!(matches!(
        Catalog::load(file.path()),
        Err(CatalogError::Parse(_))
    ));
}

#[test]
fn empty_compass_color_is_rejected() {
    let file = write_catalog(
        r#"{
            "compass": [{ "name": "Tools", "color": " " }],
            "items": []
        }"#,
    );
    assert!(matches!(
        Catalog::load(file.path()),
        Err(CatalogError::InvalidCompassEntry(_))
    ));
}

#[test]
fn empty_catalog_is_valid() {
    let catalog = Catalog::from_json(r#"{ "items": [] }"#).unwrap();
    assert!(catalog.items.is_empty());
    assert!(catalog.categories.is_empty());
    assert_eq!(visible_count(&catalog.items, &ViewState::default()), 0);
}

#[test]
fn sample_catalog_filters_by_category() {
    let catalog = Catalog::sample().unwrap();
    let tools = Category::new("Tools").unwrap();
    let view = ViewState {
        active_category: Some(tools.clone()),
        ..ViewState::default()
    };

    let expected = catalog
        .items
        .iter()
        .filter(|item| item.category == tools)
        .count();
    assert!(expected > 0);
    assert_eq!(visible_count(&catalog.items, &view), expected);

    for item in &catalog.items {
        let visual = CellVisual::for_view(item, &view, &catalog.compass);
        assert_eq!(visual.disabled, item.category != tools, "{}", item.slug);
    }
}

#[test]
fn search_and_category_combine() {
    let catalog = Catalog::sample().unwrap();
    let view = ViewState {
        active_category: Some(Category::new("Tools").unwrap()),
        text_search: "ham".to_string(),
        ..ViewState::default()
    };
    assert_eq!(visible_count(&catalog.items, &view), 1);

    // Matching name in another category stays disabled
    let view = ViewState {
        active_category: Some(Category::new("Parts").unwrap()),
        text_search: "HAMMER".to_string(),
        ..ViewState::default()
    };
    assert_eq!(visible_count(&catalog.items, &view), 0);
}
