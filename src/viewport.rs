//! Desktop viewport observer.
//!
//! Tracks the window's logical size so the UI crate can classify it as
//! mobile or not.

use catalog_core::ViewportSize;
use dioxus::desktop::tao::event::{Event, WindowEvent};
use dioxus::desktop::{use_window, use_wry_event_handler};
use dioxus::prelude::*;

/// Current logical window size, updated on every resize
pub fn use_window_viewport() -> ReadOnlySignal<ViewportSize> {
    let window = use_window();
    let initial = {
        let size = window.inner_size();
        ViewportSize::from_physical(size.width, size.height, window.scale_factor())
    };
    let mut viewport = use_signal(|| initial);

    use_wry_event_handler(move |event, _| {
        if let Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } = event
        {
            let next = ViewportSize::from_physical(size.width, size.height, window.scale_factor());
            if next != *viewport.peek() {
                tracing::debug!("Viewport resized to {}x{}", next.width, next.height);
                viewport.set(next);
            }
        }
    });

    viewport.into()
}
