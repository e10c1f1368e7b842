use std::sync::Arc;

use catalog_core::{BreakpointClassifier, ViewportClassifier};
use catalog_ui::use_mobile_provider;
use dioxus::prelude::*;

use crate::context::get_startup;
use crate::pages::Browser;
use crate::theme::GLOBAL_STYLES;
use crate::viewport::use_window_viewport;

/// Root application component.
///
/// Provides global styles, the catalog context, and the mobile
/// classification.
#[component]
pub fn App() -> Element {
    let startup = use_hook(get_startup);

    // Catalog is read-only; provide it once
    let catalog = startup.catalog.clone();
    use_context_provider(move || catalog);

    let viewport = use_window_viewport();
    let breakpoint = startup.config.mobile_breakpoint;
    let classifier: Arc<dyn ViewportClassifier> =
        Arc::new(BreakpointClassifier::new(breakpoint));
    use_mobile_provider(viewport, classifier);

    rsx! {
        style { {GLOBAL_STYLES} }
        Browser { initial_zoom: startup.config.zoom_level }
    }
}
