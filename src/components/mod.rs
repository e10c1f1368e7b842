//! Shell components for the Catalog Browser.

mod active_element_panel;

pub use active_element_panel::ActiveElementPanel;
