//! Catalog loading.
//!
//! A catalog file is a JSON document:
//!
//! ```json
//! {
//!   "categories": ["Tools", "Parts"],
//!   "compass": [{ "name": "Tools", "color": "#e4572e" }],
//!   "items": [{ "name": "Widget", "slug": "WID", "category": "Tools" }]
//! }
//! ```
//!
//! `categories` is optional; without it the order comes from the compass
//! table followed by any item category the table does not mention. An explicit
//! list is deduplicated, and item categories it omits are appended.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::CatalogResult;
use crate::types::{Category, CompassData, Item};

const SAMPLE_CATALOG: &str = include_str!("../data/sample_catalog.json");

#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    categories: Option<Vec<Category>>,
    #[serde(default)]
    compass: CompassData,
    items: Vec<Item>,
}

/// Items plus the lookup tables the grid needs to render them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub items: Vec<Item>,
    pub compass: CompassData,
    pub categories: Vec<Category>,
}

impl Catalog {
    /// Build and validate a catalog from parts
    pub fn new(
        items: Vec<Item>,
        compass: CompassData,
        categories: Option<Vec<Category>>,
    ) -> CatalogResult<Self> {
        for (index, item) in items.iter().enumerate() {
            item.validate(index)?;
        }
        compass.validate()?;

        for item in &items {
            if compass.color_for(&item.category).is_none() {
                debug!(slug = %item.slug, category = %item.category, "No compass color for item category");
            }
        }

        let categories = match categories {
            Some(categories) => complete_categories(categories, &items),
            None => derive_categories(&items, &compass),
        };

        Ok(Self {
            items,
            compass,
            categories,
        })
    }

    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.items, file.compass, file.categories)
    }

    /// Read a catalog from a JSON file
    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        info!(
            "Loaded catalog {:?}: {} items, {} categories",
            path,
            catalog.items.len(),
            catalog.categories.len()
        );
        Ok(catalog)
    }

    /// The catalog bundled with the crate
    pub fn sample() -> CatalogResult<Self> {
        Self::from_json(SAMPLE_CATALOG)
    }

    pub fn to_json(&self) -> CatalogResult<String> {
        let file = CatalogFile {
            categories: Some(self.categories.clone()),
            compass: self.compass.clone(),
            items: self.items.clone(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }
}

fn derive_categories(items: &[Item], compass: &CompassData) -> Vec<Category> {
    let mut categories: Vec<Category> = Vec::new();
    let candidates = compass
        .categories()
        .chain(items.iter().map(|item| &item.category));
    for category in candidates {
        if !categories.contains(category) {
            categories.push(category.clone());
        }
    }
    categories
}

fn complete_categories(explicit: Vec<Category>, items: &[Item]) -> Vec<Category> {
    let mut categories: Vec<Category> = Vec::with_capacity(explicit.len());
    for category in explicit {
        if !categories.contains(&category) {
            categories.push(category);
        }
    }
    for item in items {
        if !categories.contains(&item.category) {
            debug!(category = %item.category, "Category missing from catalog list, appending");
            categories.push(item.category.clone());
        }
    }
    categories
}
