//! Catalog Browser UI Components
//!
//! Dioxus components for the catalog grid and the controls that drive it.
//!
//! ## Data flow
//!
//! All view state (active category, search text, zoom level, selection) is
//! owned by the embedding page and passed down as props. The one exception
//! is the mobile classification, an injected capability read through
//! [`use_mobile`] from context; see [`use_mobile_provider`].

pub mod components;
pub mod viewport;

pub use components::*;
pub use viewport::*;
