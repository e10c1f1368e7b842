//! Search Input Component
//!
//! Text filter for the grid. Every keystroke is forwarded as the new
//! search text; matching is done by the cells.

use dioxus::prelude::*;

/// Properties for the SearchInput component
#[derive(Clone, PartialEq, Props)]
pub struct SearchInputProps {
    /// Current search value
    pub value: String,
    /// Handler called with the full text on every change
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default = "search name or slug...".to_string())]
    pub placeholder: String,
}

/// Search field with a clear button
///
/// # Example
///
/// ```rust,ignore
/// let mut search = use_signal(String::new);
///
/// rsx! {
///     SearchInput {
///         value: search(),
///         oninput: move |text| search.set(text),
///     }
/// }
/// ```
#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    let has_text = !props.value.is_empty();
    let oninput = props.oninput;

    rsx! {
        div { class: "search-input-wrapper",
            span { class: "search-icon", "\u{1F50D}" }
            input {
                class: "input-field search-input",
                r#type: "search",
                "aria-label": "Search items",
                placeholder: "{props.placeholder}",
                value: "{props.value}",
                oninput: move |e| oninput.call(e.value()),
            }
            if has_text {
                button {
                    class: "search-clear",
                    "aria-label": "Clear search",
                    onclick: move |_| oninput.call(String::new()),
                    "\u{00D7}"
                }
            }
        }
    }
}
