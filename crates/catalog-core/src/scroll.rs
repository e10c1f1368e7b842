//! Scroll-into-view trigger for grid cells.
//!
//! A cell scrolls itself into view when its category becomes the active one
//! on a mobile viewport. The trigger remembers the previous evaluation so the
//! scroll is requested once per transition into that state, not on every
//! render.
//!
//! A transition can happen before the cell has a mounted element to scroll.
//! The owner then [`defer`](ScrollTrigger::defer)s it and collects it with
//! [`take_deferred`](ScrollTrigger::take_deferred) once the element exists.

use crate::types::Category;

/// Edge detector over `active_category == category && is_mobile`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollTrigger {
    engaged: bool,
    deferred: bool,
}

impl ScrollTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current inputs. Returns `true` exactly when the condition
    /// went from false to true since the previous call.
    pub fn observe(
        &mut self,
        category: &Category,
        active_category: Option<&Category>,
        is_mobile: bool,
    ) -> bool {
        let engaged = is_mobile && active_category == Some(category);
        let fire = engaged && !self.engaged;
        self.engaged = engaged;
        if !engaged {
            self.deferred = false;
        }
        fire
    }

    /// Hold the current transition until the element is mounted.
    /// No-op when the condition does not hold.
    pub fn defer(&mut self) {
        self.deferred = self.engaged;
    }

    /// Returns `true` once for a deferred transition that still holds.
    pub fn take_deferred(&mut self) -> bool {
        let pending = self.deferred && self.engaged;
        self.deferred = false;
        pending
    }

    /// Whether the last observation matched
    pub fn is_engaged(&self) -> bool {
        self.engaged
    }
}
