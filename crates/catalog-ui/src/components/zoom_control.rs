//! Zoom Control Component
//!
//! Three buttons, one per cell size tier.

use catalog_core::ZoomLevel;
use dioxus::prelude::*;

/// CSS class of the button for `level`
pub fn zoom_button_class(level: ZoomLevel, current: ZoomLevel) -> &'static str {
    if level == current {
        "zoom-btn active"
    } else {
        "zoom-btn"
    }
}

/// Properties for the ZoomControl component
#[derive(Clone, PartialEq, Props)]
pub struct ZoomControlProps {
    /// Currently selected tier
    pub current: ZoomLevel,
    /// Handler called with the chosen tier
    pub on_change: EventHandler<ZoomLevel>,
}

/// Segmented S / M / L size switch
///
/// # Example
///
/// ```rust,ignore
/// let mut zoom = use_signal(ZoomLevel::default);
///
/// rsx! {
///     ZoomControl {
///         current: zoom(),
///         on_change: move |level| zoom.set(level),
///     }
/// }
/// ```
#[component]
pub fn ZoomControl(props: ZoomControlProps) -> Element {
    let on_change = props.on_change;

    rsx! {
        div {
            class: "zoom-control",
            role: "group",
            "aria-label": "Cell size",
            for level in ZoomLevel::ALL {
                {
                    let is_current = level == props.current;
                    let index = level.index();
                    let size = level.size_px();
                    let label = level.label();
                    rsx! {
                        button {
                            key: "{index}",
                            class: zoom_button_class(level, props.current),
                            r#type: "button",
                            "aria-pressed": if is_current { "true" } else { "false" },
                            title: "{size}px",
                            onclick: move |_| on_change.call(level),
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
