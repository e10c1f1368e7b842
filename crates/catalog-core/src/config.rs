//! Runtime configuration for the browser shell.

use std::path::PathBuf;

use crate::error::{CatalogError, CatalogResult};
use crate::types::ZoomLevel;
use crate::viewport::DEFAULT_MOBILE_BREAKPOINT;

/// Wider than [`DEFAULT_MOBILE_BREAKPOINT`] so a default launch gets the
/// desktop layout.
pub const DEFAULT_WINDOW_WIDTH: f64 = 1024.0;
pub const DEFAULT_WINDOW_HEIGHT: f64 = 900.0;

/// Settings resolved from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserConfig {
    /// Catalog file; `None` uses the bundled sample
    pub catalog_path: Option<PathBuf>,
    pub zoom_level: ZoomLevel,
    /// Viewports narrower than this (logical px) are mobile
    pub mobile_breakpoint: f64,
    pub window_width: f64,
    pub window_height: f64,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            zoom_level: ZoomLevel::default(),
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

impl BrowserConfig {
    pub fn validate(&self) -> CatalogResult<()> {
        if !(self.mobile_breakpoint.is_finite() && self.mobile_breakpoint > 0.0) {
            return Err(CatalogError::InvalidConfig(format!(
                "mobile breakpoint must be positive, got {}",
                self.mobile_breakpoint
            )));
        }
        for (name, value) in [("width", self.window_width), ("height", self.window_height)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(CatalogError::InvalidConfig(format!(
                    "window {name} must be positive, got {value}"
                )));
            }
        }
        Ok(())
    }
}
