//! Category Pills Component
//!
//! Horizontal selection of category filter pills. The leading "all" pill
//! reports `None`; deciding what a click does to the filter (e.g. toggling
//! the active category off) is left to the owner of the view state.

use catalog_core::{Category, CompassData};
use dioxus::prelude::*;

/// Label of the pill that clears the category filter
pub const ALL_CATEGORIES_LABEL: &str = "all";

/// Properties for the CategoryPills component
#[derive(Clone, PartialEq, Props)]
pub struct CategoryPillsProps {
    /// Categories in display order
    pub categories: Vec<Category>,
    /// Currently active category
    pub selected: Option<Category>,
    /// Used to tint each pill with its category color
    #[props(default)]
    pub compass: CompassData,
    /// Handler called with the clicked pill's category (`None` for "all")
    pub on_select: EventHandler<Option<Category>>,
}

/// Displays a horizontal row of selectable category pills
///
/// # Example
///
/// ```rust,ignore
/// let mut view = use_signal(ViewState::default);
///
/// rsx! {
///     CategoryPills {
///         categories: catalog.categories.clone(),
///         selected: view.read().active_category.clone(),
///         compass: catalog.compass.clone(),
///         on_select: move |cat| view.write().toggle_category(cat)
///     }
/// }
/// ```
#[component]
pub fn CategoryPills(props: CategoryPillsProps) -> Element {
    let selected = props.selected.clone();
    let on_select = props.on_select;
    let all_selected = selected.is_none();

    rsx! {
        div {
            class: "category-pills",
            role: "radiogroup",
            "aria-label": "Category selection",
            button {
                class: if all_selected { "pill selected" } else { "pill" },
                role: "radio",
                "aria-checked": if all_selected { "true" } else { "false" },
                onclick: move |_| on_select.call(None),
                "{ALL_CATEGORIES_LABEL}"
            }
            for cat in props.categories.iter() {
                {
                    let is_selected = selected.as_ref() == Some(cat);
                    let clicked = cat.clone();
                    let swatch = props
                        .compass
                        .color_for(cat)
                        .map(|color| format!("border-color: {color};"))
                        .unwrap_or_default();
                    rsx! {
                        button {
                            key: "{cat}",
                            class: if is_selected { "pill selected" } else { "pill" },
                            style: "{swatch}",
                            role: "radio",
                            "aria-checked": if is_selected { "true" } else { "false" },
                            onclick: move |_| {
                                on_select.call(Some(clicked.clone()));
                            },
                            "{cat}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use super::*;

    fn render(root: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(root);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn categories() -> Vec<Category> {
        ["Tools", "Parts"]
            .into_iter()
            .map(|name| Category::new(name).unwrap())
            .collect()
    }

    #[test]
    fn all_pill_selected_without_filter() {
        fn Root() -> Element {
            rsx! {
                CategoryPills {
                    categories: categories(),
                    selected: None::<Category>,
                    on_select: move |_| {},
                }
            }
        }

        let html = render(Root);
        assert_eq!(html.matches("class=\"pill selected\"").count(), 1);
        assert_eq!(html.matches("role=\"radio\"").count(), 3);
        assert!(html.contains(ALL_CATEGORIES_LABEL));
    }

    #[test]
    fn active_category_pill_is_tinted_and_selected() {
        fn Root() -> Element {
            rsx! {
                CategoryPills {
                    categories: categories(),
                    selected: Some(Category::new("Parts").unwrap()),
                    compass: CompassData::from_pairs([(Category::new("Parts").unwrap(), "#29335c")]),
                    on_select: move |_| {},
                }
            }
        }

        let html = render(Root);
        assert_eq!(html.matches("class=\"pill selected\"").count(), 1);
        assert!(html.contains("border-color: #29335c;"));
        let selected = html.find("pill selected").unwrap();
        let parts = html.find(">Parts<").unwrap();
        assert!(selected < parts);
        assert!(html.find(">Tools<").unwrap() < selected);
    }
}
