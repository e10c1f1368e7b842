//! Cell Component
//!
//! One catalog item rendered as a fixed-size clickable box.

use std::rc::Rc;

use catalog_core::{Category, CellVisual, CompassData, Item, ScrollTrigger, ZoomLevel};
use dioxus::prelude::*;

use crate::viewport::use_mobile;

/// Properties for the Cell component
#[derive(Clone, PartialEq, Props)]
pub struct CellProps {
    /// The item to render
    pub item: Item,
    /// Size tier of the box
    #[props(default)]
    pub zoom_level: ZoomLevel,
    /// Highlighted category, `None` when no category filter is active
    pub active_category: Option<Category>,
    /// Case-insensitive search over name and slug
    pub text_search: String,
    /// Category color table
    pub compass: CompassData,
    /// Records the clicked item as the active element
    pub on_activate: EventHandler<Item>,
    /// Called after `on_activate` when an enabled cell is clicked
    pub on_select: EventHandler<()>,
    /// Notified each time the cell asks to be scrolled into view
    #[props(default)]
    pub on_scroll_request: Option<EventHandler<Item>>,
}

/// Displays one item, grayed out when it does not match the filters
///
/// # Design Notes
///
/// - Enabled cells take the compass color of their category and scale up
///   on hover
/// - Disabled cells are gray, half transparent, and ignore clicks
/// - On mobile viewports the cell scrolls itself into view when its
///   category becomes the active one. A transition that happens before the
///   element is mounted is replayed from `onmounted`.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Cell {
///         item: item.clone(),
///         zoom_level: ZoomLevel::Medium,
///         active_category: active_category(),
///         text_search: search(),
///         compass: catalog.compass.clone(),
///         on_activate: move |item| active_element.set(Some(item)),
///         on_select: move |_| detail_open.set(true),
///     }
/// }
/// ```
#[component]
pub fn Cell(props: CellProps) -> Element {
    let is_mobile = use_mobile();
    let mut root: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let mut trigger = use_signal(ScrollTrigger::new);

    let visual = CellVisual::compute(
        &props.item,
        props.active_category.as_ref(),
        &props.text_search,
        props.zoom_level,
        &props.compass,
    );

    let category = props.item.category.clone();
    let active_category = props.active_category.clone();
    let scroll_item = props.item.clone();
    let on_scroll_request = props.on_scroll_request;

    use_effect(use_reactive(
        (&category, &active_category, &is_mobile),
        move |(category, active_category, is_mobile)| {
            let fire = trigger
                .write()
                .observe(&category, active_category.as_ref(), is_mobile);
            if !fire {
                return;
            }
            if let Some(handler) = on_scroll_request {
                handler.call(scroll_item.clone());
            }
            let node = root.peek().as_ref().map(Rc::clone);
            match node {
                Some(node) => scroll_into_view(node, &scroll_item.slug),
                // Not mounted yet
                None => trigger.write().defer(),
            }
        },
    ));

    let item = props.item.clone();
    let accepts_click = visual.accepts_click();
    let on_activate = props.on_activate;
    let on_select = props.on_select;

    let class = visual.class();
    let style = visual.style();
    let slug = props.item.slug.clone();
    let name = props.item.name.clone();
    let length = props.item.length_label().to_string();
    let icon = props.item.icon.clone();
    let mounted_slug = props.item.slug.clone();

    rsx! {
        div {
            class: "{class}",
            style: "{style}",
            "data-slug": "{slug}",
            "aria-disabled": if visual.disabled { "true" } else { "false" },
            onmounted: move |evt| {
                let node = evt.data();
                root.set(Some(Rc::clone(&node)));
                if trigger.write().take_deferred() {
                    scroll_into_view(node, &mounted_slug);
                }
            },
            onclick: move |_| {
                if !accepts_click {
                    return;
                }
                on_activate.call(item.clone());
                on_select.call(());
            },
            div { class: "cell-body",
                div { class: "cell-header",
                    if let Some(src) = &icon {
                        img {
                            class: "cell-icon",
                            src: "{src}",
                            alt: "icon for {name}",
                            width: "10",
                            height: "10",
                        }
                    }
                    span { class: "cell-length", "{length}" }
                }
                div { class: "cell-slug", "{slug}" }
                div { class: "cell-name",
                    span { "{name}" }
                }
            }
        }
    }
}

fn scroll_into_view(node: Rc<MountedData>, slug: &str) {
    tracing::debug!(slug = %slug, "Scrolling cell into view");
    spawn(async move {
        if let Err(e) = node.scroll_to(ScrollBehavior::Instant).await {
            tracing::warn!("Failed to scroll cell into view: {:?}", e);
        }
    });
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use super::*;
    use std::any::Any;
    use std::cell::{Cell as StdCell, RefCell};
    use std::sync::Arc;

    use catalog_core::{BreakpointClassifier, ViewportSize};
    use dioxus::dioxus_core::{ElementId, NoOpMutations, ScopeId};
    use dioxus_html::{
        set_event_converter, PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData,
    };

    use crate::viewport::use_mobile_provider;

    fn render(root: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(root);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn widget() -> Item {
        Item::new("Widget", "WID", Category::new("Tools").unwrap())
    }

    fn compass() -> CompassData {
        CompassData::from_pairs([(Category::new("Tools").unwrap(), "#e4572e")])
    }

    // State for the live `VirtualDom` tests below. Each test runs on its own
    // thread, so thread locals keep them apart.
    thread_local! {
        static ACTIVE: RefCell<Option<Category>> = const { RefCell::new(None) };
        static WIDTH: StdCell<f64> = const { StdCell::new(300.0) };
        static EVENTS: RefCell<Vec<&'static str>> = const { RefCell::new(Vec::new()) };
    }

    fn set_active(category: Option<&str>) {
        let category = category.map(|name| Category::new(name).unwrap());
        ACTIVE.with(|active| *active.borrow_mut() = category);
    }

    fn record(event: &'static str) {
        EVENTS.with(|events| events.borrow_mut().push(event));
    }

    fn events() -> Vec<&'static str> {
        EVENTS.with(|events| events.borrow().clone())
    }

    /// A single `Widget` cell under a mobile provider, driven by the thread
    /// locals above.
    fn LiveRoot() -> Element {
        let viewport = use_signal(|| ViewportSize::new(WIDTH.with(StdCell::get), 600.0));
        use_mobile_provider(viewport.into(), Arc::new(BreakpointClassifier::default()));
        let active = ACTIVE.with(|active| active.borrow().clone());

        rsx! {
            Cell {
                item: widget(),
                active_category: active,
                text_search: String::new(),
                compass: compass(),
                on_activate: move |_| record("activate"),
                on_select: move |_| record("select"),
                on_scroll_request: Some(EventHandler::new(move |_: Item| record("scroll"))),
            }
        }
    }

    fn live_dom() -> VirtualDom {
        let mut dom = VirtualDom::new(LiveRoot);
        dom.rebuild_in_place();
        settle(&mut dom);
        dom
    }

    /// Flush queued signal updates and effects
    fn settle(dom: &mut VirtualDom) {
        for _ in 0..3 {
            dom.process_events();
            dom.render_immediate(&mut NoOpMutations);
        }
    }

    /// Re-render the root after the thread locals changed
    fn rerender(dom: &mut VirtualDom) {
        dom.mark_dirty(ScopeId::APP);
        settle(dom);
    }

    /// Click the cell's outer element, the first element the root creates
    fn click_cell(dom: &VirtualDom) {
        set_event_converter(Box::new(SerializedHtmlEventConverter));
        let data = PlatformEventData::new(Box::<SerializedMouseData>::default());
        let event = Event::new(Rc::new(data) as Rc<dyn Any>, true);
        dom.runtime().handle_event("click", event, ElementId(1));
    }

    #[test]
    fn enabled_cell_uses_compass_color() {
        fn Root() -> Element {
            rsx! {
                Cell {
                    item: widget(),
                    active_category: None::<Category>,
                    text_search: String::new(),
                    compass: compass(),
                    on_activate: move |_| {},
                    on_select: move |_| {},
                }
            }
        }

        let html = render(Root);
        assert!(html.contains("cell hoverable"));
        assert!(html.contains("background-color: #e4572e"));
        assert!(html.contains("aria-disabled=\"false\""));
        assert!(html.contains("1-100"));
        assert!(html.contains("WID"));
        assert!(html.contains("Widget"));
        assert!(!html.contains("cell-icon"));
    }

    #[test]
    fn other_category_grays_out_cell() {
        fn Root() -> Element {
            rsx! {
                Cell {
                    item: widget(),
                    active_category: Some(Category::new("Parts").unwrap()),
                    text_search: String::new(),
                    compass: compass(),
                    on_activate: move |_| {},
                    on_select: move |_| {},
                }
            }
        }

        let html = render(Root);
        assert!(html.contains("cell disabled"));
        assert!(html.contains("opacity: 0.5"));
        assert!(html.contains("background-color: #9ca3af"));
        assert!(html.contains("aria-disabled=\"true\""));
    }

    #[test]
    fn icon_and_length_are_rendered() {
        fn Root() -> Element {
            rsx! {
                Cell {
                    item: widget().with_icon("icons/wid.png").with_length("5-10"),
                    zoom_level: ZoomLevel::Large,
                    active_category: None::<Category>,
                    text_search: "wid".to_string(),
                    compass: compass(),
                    on_activate: move |_| {},
                    on_select: move |_| {},
                }
            }
        }

        let html = render(Root);
        assert!(html.contains("icons/wid.png"));
        assert!(html.contains("icon for Widget"));
        assert!(html.contains("5-10"));
        assert!(html.contains("width: 112px"));
    }

    #[test]
    fn scroll_requested_once_per_activation_on_mobile() {
        set_active(Some("Tools"));
        let mut dom = live_dom();
        // Headless: no mounted handle, the request is still made once
        assert_eq!(events(), vec!["scroll"]);

        rerender(&mut dom);
        assert_eq!(events(), vec!["scroll"]);

        set_active(None);
        rerender(&mut dom);
        assert_eq!(events(), vec!["scroll"]);

        set_active(Some("Tools"));
        rerender(&mut dom);
        assert_eq!(events(), vec!["scroll", "scroll"]);
    }

    #[test]
    fn other_category_never_requests_scroll() {
        set_active(Some("Parts"));
        let mut dom = live_dom();
        set_active(None);
        rerender(&mut dom);
        assert!(events().is_empty());
    }

    #[test]
    fn desktop_viewport_never_requests_scroll() {
        WIDTH.with(|width| width.set(1200.0));
        set_active(Some("Tools"));
        let mut dom = live_dom();
        rerender(&mut dom);
        assert!(events().is_empty());
    }

    #[test]
    fn clicking_disabled_cell_does_nothing() {
        WIDTH.with(|width| width.set(1200.0));
        set_active(Some("Parts"));
        let dom = live_dom();
        click_cell(&dom);
        assert!(events().is_empty());
    }

    #[test]
    fn clicking_enabled_cell_activates_then_selects() {
        WIDTH.with(|width| width.set(1200.0));
        set_active(None);
        let dom = live_dom();
        click_cell(&dom);
        assert_eq!(events(), vec!["activate", "select"]);

        click_cell(&dom);
        assert_eq!(events(), vec!["activate", "select", "activate", "select"]);
    }
}
