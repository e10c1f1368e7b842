//! Viewport classification.
//!
//! Cells only need a yes/no answer to "is this a mobile viewport". How that
//! answer is computed sits behind [`ViewportClassifier`] so the desktop shell
//! can swap strategies without touching the grid.

/// Width below which [`BreakpointClassifier::default`] reports mobile
pub const DEFAULT_MOBILE_BREAKPOINT: f64 = 768.0;

/// Logical (DPI-independent) viewport dimensions
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Convert physical pixels using the window's scale factor
    pub fn from_physical(width: u32, height: u32, scale_factor: f64) -> Self {
        let scale = if scale_factor > 0.0 { scale_factor } else { 1.0 };
        Self {
            width: f64::from(width) / scale,
            height: f64::from(height) / scale,
        }
    }
}

/// Decides whether a viewport counts as mobile.
pub trait ViewportClassifier: Send + Sync {
    fn is_mobile(&self, viewport: ViewportSize) -> bool;
}

/// Mobile when the width is strictly below a fixed breakpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakpointClassifier {
    pub breakpoint: f64,
}

impl BreakpointClassifier {
    pub fn new(breakpoint: f64) -> Self {
        Self { breakpoint }
    }
}

impl Default for BreakpointClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_MOBILE_BREAKPOINT)
    }
}

impl ViewportClassifier for BreakpointClassifier {
    fn is_mobile(&self, viewport: ViewportSize) -> bool {
        viewport.width < self.breakpoint
    }
}

impl<F> ViewportClassifier for F
where
    F: Fn(ViewportSize) -> bool + Send + Sync,
{
    fn is_mobile(&self, viewport: ViewportSize) -> bool {
        self(viewport)
    }
}
