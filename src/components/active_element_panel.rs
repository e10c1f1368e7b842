//! Active Element Panel
//!
//! Details of the item last selected in the grid.

use catalog_core::Item;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ActiveElementPanelProps {
    /// The selected item
    pub item: Item,
    /// Compass color of the item's category, if any
    #[props(default)]
    pub color: Option<String>,
    /// Callback when the close button is clicked
    pub on_close: EventHandler<()>,
}

/// Side panel showing the active element
#[component]
pub fn ActiveElementPanel(props: ActiveElementPanelProps) -> Element {
    let item = &props.item;
    let swatch = props
        .color
        .as_deref()
        .map(|color| format!("background-color: {color};"))
        .unwrap_or_default();
    let length = item.length_label();
    let on_close = props.on_close;

    rsx! {
        aside { class: "active-element-panel",
            div { class: "active-element-header",
                span { class: "active-element-swatch", style: "{swatch}" }
                h2 { class: "active-element-slug", "{item.slug}" }
                button {
                    class: "icon-btn close-btn",
                    "aria-label": "Close",
                    onclick: move |_| on_close.call(()),
                    "\u{00D7}"
                }
            }
            if let Some(icon) = &item.icon {
                img { class: "active-element-icon", src: "{icon}", alt: "icon for {item.name}" }
            }
            dl { class: "active-element-fields",
                dt { "name" }
                dd { "{item.name}" }
                dt { "category" }
                dd { "{item.category}" }
                dt { "length" }
                dd { "{length}" }
            }
        }
    }
}
