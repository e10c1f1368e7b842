//! Core types for the Catalog Browser

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// Label shown in a cell when an item carries no explicit length.
pub const DEFAULT_LENGTH_LABEL: &str = "1-100";

/// Identifier of an item category.
///
/// The set of categories comes from the catalog, so this is a validated
/// name rather than a closed enum. Names are compared exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Category(String);

impl Category {
    /// Create a category from a non-empty name
    pub fn new(name: impl Into<String>) -> CatalogResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CatalogError::EmptyCategory);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Category {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.0
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Full display name
    pub name: String,
    /// Short identifier shown in bold
    pub slug: String,
    /// Category used for filtering and coloring
    pub category: Category,
    /// Optional icon image reference (URL or asset path)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Optional range label; see [`Item::length_label`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<String>,
}

impl Item {
    pub fn new(name: impl Into<String>, slug: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            category,
            icon: None,
            length: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_length(mut self, length: impl Into<String>) -> Self {
        self.length = Some(length.into());
        self
    }

    /// The length label, falling back to [`DEFAULT_LENGTH_LABEL`]
    pub fn length_label(&self) -> &str {
        self.length.as_deref().unwrap_or(DEFAULT_LENGTH_LABEL)
    }

    /// Check the required text fields. `index` is the position in the
    /// catalog and is only used in the error.
    pub fn validate(&self, index: usize) -> CatalogResult<()> {
        let reason = if self.name.trim().is_empty() {
            "name is empty"
        } else if self.slug.trim().is_empty() {
            "slug is empty"
        } else {
            return Ok(());
        };
        Err(CatalogError::InvalidItem {
            index,
            reason: reason.to_string(),
        })
    }
}

/// One `{name, color}` row of the compass table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompassEntry {
    pub name: Category,
    /// Any CSS color value
    pub color: String,
}

/// Ordered category-to-color lookup table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompassData(Vec<CompassEntry>);

impl CompassData {
    pub fn new(entries: Vec<CompassEntry>) -> Self {
        Self(entries)
    }

    /// Build a table from `(category, color)` pairs, keeping their order
    pub fn from_pairs<I, C>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Category, C)>,
        C: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(name, color)| CompassEntry {
                    name,
                    color: color.into(),
                })
                .collect(),
        )
    }

    /// Color of the first entry named `category`, if any
    pub fn color_for(&self, category: &Category) -> Option<&str> {
        self.0
            .iter()
            .find(|entry| &entry.name == category)
            .map(|entry| entry.color.as_str())
    }

    /// Categories in table order
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.0.iter().map(|entry| &entry.name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompassEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reject entries without a color
    pub fn validate(&self) -> CatalogResult<()> {
        match self.0.iter().find(|entry| entry.color.trim().is_empty()) {
            Some(entry) => Err(CatalogError::InvalidCompassEntry(entry.name.to_string())),
            None => Ok(()),
        }
    }
}

/// Discrete cell size tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ZoomLevel {
    #[default]
    Small,
    Medium,
    Large,
}

impl ZoomLevel {
    pub const ALL: [ZoomLevel; 3] = [ZoomLevel::Small, ZoomLevel::Medium, ZoomLevel::Large];

    /// Numeric tier (0, 1 or 2)
    pub fn index(self) -> u8 {
        match self {
            ZoomLevel::Small => 0,
            ZoomLevel::Medium => 1,
            ZoomLevel::Large => 2,
        }
    }

    /// Edge length of the square cell in CSS pixels
    pub fn size_px(self) -> u32 {
        match self {
            ZoomLevel::Small => 64,
            ZoomLevel::Medium => 70,
            ZoomLevel::Large => 112,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ZoomLevel::Small => "S",
            ZoomLevel::Medium => "M",
            ZoomLevel::Large => "L",
        }
    }
}

impl TryFrom<u8> for ZoomLevel {
    type Error = CatalogError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ZoomLevel::Small),
            1 => Ok(ZoomLevel::Medium),
            2 => Ok(ZoomLevel::Large),
            other => Err(CatalogError::InvalidZoomLevel(other)),
        }
    }
}

impl From<ZoomLevel> for u8 {
    fn from(level: ZoomLevel) -> Self {
        level.index()
    }
}

/// View state owned by the parent and passed down on every render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Highlighted category, `None` when no category filter is active
    pub active_category: Option<Category>,
    /// Case-insensitive substring filter over name and slug
    pub text_search: String,
    pub zoom_level: ZoomLevel,
    /// Last item selected in the grid
    pub active_element: Option<Item>,
}

impl ViewState {
    pub fn new(zoom_level: ZoomLevel) -> Self {
        Self {
            zoom_level,
            ..Self::default()
        }
    }

    /// Activate `category`, or clear the filter if it is already active
    pub fn toggle_category(&mut self, category: Option<Category>) {
        if category.is_some() && self.active_category == category {
            self.active_category = None;
        } else {
            self.active_category = category;
        }
    }
}
