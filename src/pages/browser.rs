//! The Browser - main catalog view.
//!
//! Owns the view state and passes it down to the controls and the grid.

use catalog_core::{visible_count, Item, ViewState, ZoomLevel};
use catalog_ui::{use_mobile, CategoryPills, Grid, SearchInput, ZoomControl};
use dioxus::prelude::*;

use crate::components::ActiveElementPanel;
use crate::context::use_catalog;

/// Main catalog view component.
#[component]
pub fn Browser(initial_zoom: ZoomLevel) -> Element {
    let catalog = use_catalog();
    let is_mobile = use_mobile();

    // All view state lives here and flows down as props
    let mut view: Signal<ViewState> = use_signal(|| ViewState::new(initial_zoom));
    let mut detail_open: Signal<bool> = use_signal(|| false);

    let state = view.read().clone();
    let shown = visible_count(&catalog.items, &state);
    let total = catalog.items.len();
    let selected = if detail_open() {
        state.active_element.clone()
    } else {
        None
    };
    let selected_color = selected
        .as_ref()
        .and_then(|item| catalog.compass.color_for(&item.category))
        .map(str::to_string);

    let on_activate = move |item: Item| {
        tracing::debug!(slug = %item.slug, "Item selected");
        view.write().active_element = Some(item);
    };

    rsx! {
        div { class: if is_mobile { "browser mobile" } else { "browser" },
            header { class: "browser-controls",
                h1 { class: "browser-title", "catalog" }
                SearchInput {
                    value: state.text_search.clone(),
                    oninput: move |text: String| view.write().text_search = text,
                }
                CategoryPills {
                    categories: catalog.categories.clone(),
                    selected: state.active_category.clone(),
                    compass: catalog.compass.clone(),
                    on_select: move |category| view.write().toggle_category(category),
                }
                div { class: "browser-toolbar",
                    ZoomControl {
                        current: state.zoom_level,
                        on_change: move |level| view.write().zoom_level = level,
                    }
                    p { class: "filter-summary", "{shown} of {total} items" }
                }
            }
            div { class: "browser-body",
                div { class: "grid-scroll",
                    Grid {
                        items: catalog.items.clone(),
                        active_category: state.active_category.clone(),
                        text_search: state.text_search.clone(),
                        zoom_level: state.zoom_level,
                        compass: catalog.compass.clone(),
                        on_activate: on_activate,
                        on_select: move |_| detail_open.set(true),
                    }
                }
                if let Some(item) = selected {
                    ActiveElementPanel {
                        item: item,
                        color: selected_color,
                        on_close: move |_| detail_open.set(false),
                    }
                }
            }
        }
    }
}
