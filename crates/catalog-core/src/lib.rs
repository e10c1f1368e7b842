//! Catalog Browser Core Library
//!
//! Item model and view-state logic behind the catalog grid.
//!
//! ## Overview
//!
//! The grid shows every catalog item as a colored cell. Cells that do not
//! match the active category or the text search are grayed out rather than
//! removed, so the layout stays stable while filtering. This crate holds
//! everything about that behavior that does not depend on a UI framework:
//!
//! - **Data model**: [`Item`], [`Category`], [`CompassData`], [`ZoomLevel`]
//! - **Visual state**: [`CellVisual`] computed from an item and the filters
//! - **Scroll trigger**: [`ScrollTrigger`], the edge detector behind
//!   scroll-into-view on mobile
//! - **Viewport**: the [`ViewportClassifier`] capability
//!
//! ## Quick Start
//!
//! ```
//! use catalog_core::{Catalog, CellVisual, ViewState};
//!
//! let catalog = Catalog::sample()?;
//! let view = ViewState::default();
//!
//! for item in &catalog.items {
//!     let visual = CellVisual::for_view(item, &view, &catalog.compass);
//!     assert!(!visual.disabled);
//! }
//! # Ok::<(), catalog_core::CatalogError>(())
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod scroll;
pub mod types;
pub mod viewport;
pub mod visual;

// Re-exports
pub use catalog::Catalog;
pub use config::BrowserConfig;
pub use error::{CatalogError, CatalogResult};
pub use scroll::ScrollTrigger;
pub use types::*;
pub use viewport::{BreakpointClassifier, ViewportClassifier, ViewportSize};
pub use visual::{is_disabled, matches_category, matches_search, visible_count, CellVisual};
