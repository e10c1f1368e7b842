//! Page components for the Catalog Browser.

mod browser;

pub use browser::Browser;
