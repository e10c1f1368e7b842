//! Startup state shared with the component tree.
//!
//! The catalog is loaded once in `main` and provided to components through
//! context. View state is not stored here; the browser page owns it.

use catalog_core::{BrowserConfig, Catalog};
use dioxus::prelude::*;

/// Everything resolved before the window opens
#[derive(Clone, Debug, Default)]
pub struct Startup {
    pub config: BrowserConfig,
    pub catalog: Catalog,
}

/// Get the startup state set by `main`.
pub fn get_startup() -> Startup {
    crate::get_startup()
}

/// Hook to access the loaded catalog from context.
///
/// # Example
///
/// ```ignore
/// let catalog = use_catalog();
/// let count = catalog.items.len();
/// ```
pub fn use_catalog() -> Catalog {
    use_context::<Catalog>()
}
