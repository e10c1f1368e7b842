//! Grid components and filter controls.

mod category_pills;
mod cell;
mod grid;
mod search_input;
mod zoom_control;

pub use category_pills::*;
pub use cell::*;
pub use grid::*;
pub use search_input::*;
pub use zoom_control::*;
