//! Visual state of a grid cell.
//!
//! Everything here is a pure function of the item and the view state the
//! parent passes down. Nothing is cached between renders.

use crate::types::{Category, CompassData, Item, ViewState, ZoomLevel};

/// Background of a cell that does not match the current filters
pub const DISABLED_BACKGROUND: &str = "#9ca3af";

/// Opacity of a cell that does not match the current filters
pub const DISABLED_OPACITY: f32 = 0.5;

/// Scale applied on hover to enabled cells
pub const HOVER_SCALE: f32 = 1.5;

/// `true` when no category filter is active or the item belongs to it
pub fn matches_category(active_category: Option<&Category>, item: &Item) -> bool {
    active_category.map_or(true, |active| *active == item.category)
}

/// `true` when the search is empty or is a case-insensitive substring of the
/// item's name or slug
pub fn matches_search(text_search: &str, item: &Item) -> bool {
    if text_search.is_empty() {
        return true;
    }
    let needle = text_search.to_lowercase();
    item.name.to_lowercase().contains(&needle) || item.slug.to_lowercase().contains(&needle)
}

pub fn is_disabled(active_category: Option<&Category>, text_search: &str, item: &Item) -> bool {
    !matches_category(active_category, item) || !matches_search(text_search, item)
}

/// Number of items that render enabled under `view`
pub fn visible_count(items: &[Item], view: &ViewState) -> usize {
    items
        .iter()
        .filter(|item| !is_disabled(view.active_category.as_ref(), &view.text_search, item))
        .count()
}

/// Resolved appearance of one cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellVisual {
    pub disabled: bool,
    /// CSS background color; `None` leaves the background unset
    pub background: Option<String>,
    pub opacity: f32,
    /// Hover scale factor, `None` when hover interaction is suppressed
    pub hover_scale: Option<f32>,
    /// Edge length of the square box in CSS pixels
    pub size_px: u32,
}

impl CellVisual {
    pub fn compute(
        item: &Item,
        active_category: Option<&Category>,
        text_search: &str,
        zoom_level: ZoomLevel,
        compass: &CompassData,
    ) -> Self {
        let disabled = is_disabled(active_category, text_search, item);
        if disabled {
            Self {
                disabled,
                background: Some(DISABLED_BACKGROUND.to_string()),
                opacity: DISABLED_OPACITY,
                hover_scale: None,
                size_px: zoom_level.size_px(),
            }
        } else {
            Self {
                disabled,
                background: compass.color_for(&item.category).map(str::to_string),
                opacity: 1.0,
                hover_scale: Some(HOVER_SCALE),
                size_px: zoom_level.size_px(),
            }
        }
    }

    /// Convenience wrapper reading the filters from a [`ViewState`]
    pub fn for_view(item: &Item, view: &ViewState, compass: &CompassData) -> Self {
        Self::compute(
            item,
            view.active_category.as_ref(),
            &view.text_search,
            view.zoom_level,
            compass,
        )
    }

    /// Clicks on disabled cells are ignored
    pub fn accepts_click(&self) -> bool {
        !self.disabled
    }

    pub fn class(&self) -> &'static str {
        if self.disabled {
            "cell disabled"
        } else {
            "cell hoverable"
        }
    }

    /// Inline style for the cell root
    pub fn style(&self) -> String {
        let mut style = format!(
            "width: {size}px; height: {size}px; opacity: {opacity};",
            size = self.size_px,
            opacity = self.opacity
        );
        if let Some(background) = &self.background {
            style.push_str(&format!(" background-color: {background};"));
        }
        if let Some(scale) = self.hover_scale {
            style.push_str(&format!(" --hover-scale: {scale};"));
        }
        style
    }
}
