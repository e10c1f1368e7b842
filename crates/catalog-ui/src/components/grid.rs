//! Grid Component
//!
//! Vertical column of [`Cell`]s, one per catalog item.

use catalog_core::{Category, CompassData, Item, ZoomLevel};
use dioxus::prelude::*;

use super::cell::Cell;

/// Properties for the Grid component
#[derive(Clone, PartialEq, Props)]
pub struct GridProps {
    /// Items in display order
    pub items: Vec<Item>,
    /// Highlighted category, `None` when no category filter is active
    pub active_category: Option<Category>,
    /// Case-insensitive search over name and slug
    pub text_search: String,
    /// Size tier shared by all cells
    #[props(default)]
    pub zoom_level: ZoomLevel,
    /// Category color table
    pub compass: CompassData,
    /// Records the clicked item as the active element
    pub on_activate: EventHandler<Item>,
    /// Called after `on_activate` when an enabled cell is clicked
    pub on_select: EventHandler<()>,
    /// Notified when a cell asks to be scrolled into view
    #[props(default)]
    pub on_scroll_request: Option<EventHandler<Item>>,
}

/// Lays out one cell per item, keyed by position.
///
/// The grid holds no state of its own. An empty item list renders an empty
/// container.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Grid {
///         items: catalog.items.clone(),
///         active_category: active_category(),
///         text_search: search(),
///         zoom_level: zoom(),
///         compass: catalog.compass.clone(),
///         on_activate: move |item| active_element.set(Some(item)),
///         on_select: move |_| {},
///     }
/// }
/// ```
#[component]
pub fn Grid(props: GridProps) -> Element {
    rsx! {
        div { class: "catalog-grid",
            for (index, item) in props.items.iter().enumerate() {
                Cell {
                    key: "{index}",
                    item: item.clone(),
                    zoom_level: props.zoom_level,
                    active_category: props.active_category.clone(),
                    text_search: props.text_search.clone(),
                    compass: props.compass.clone(),
                    on_activate: props.on_activate,
                    on_select: props.on_select,
                    on_scroll_request: props.on_scroll_request,
                }
            }
        }
    }
}
