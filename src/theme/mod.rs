//! Theme for the Catalog Browser.

mod styles;

pub use styles::GLOBAL_STYLES;
