//! Mobile viewport capability.
//!
//! The shell measures the viewport however its platform allows and provides
//! the result with [`use_mobile_provider`]. Cells call [`use_mobile`] and only
//! ever see the boolean.

use std::sync::Arc;

use catalog_core::{ViewportClassifier, ViewportSize};
use dioxus::prelude::*;

/// Context value carrying the current mobile classification
#[derive(Clone, Copy)]
pub struct MobileContext(Memo<bool>);

impl MobileContext {
    pub fn is_mobile(&self) -> bool {
        *self.0.read()
    }
}

/// Classify `viewport` with `classifier` and provide the result to every
/// descendant. Call once, near the root.
pub fn use_mobile_provider(
    viewport: ReadOnlySignal<ViewportSize>,
    classifier: Arc<dyn ViewportClassifier>,
) -> Memo<bool> {
    let is_mobile = use_memo(move || classifier.is_mobile(viewport()));
    use_context_provider(|| MobileContext(is_mobile));
    is_mobile
}

/// Whether the viewport is currently mobile.
///
/// Without a provider above the caller this is always `false`.
pub fn use_mobile() -> bool {
    let context = use_hook(try_consume_context::<MobileContext>);
    context.map(|ctx| ctx.is_mobile()).unwrap_or(false)
}
