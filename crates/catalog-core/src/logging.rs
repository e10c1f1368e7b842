//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins when set; otherwise `default_directive` is used, e.g.
//! `"info,catalog_ui=debug"`.

use tracing_subscriber::EnvFilter;

/// Install a global `fmt` subscriber. Returns `false` if one was already
/// installed (tests call this repeatedly).
pub fn init(default_directive: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_refused() {
        init("debug");
        assert!(!init("debug"));
    }
}
