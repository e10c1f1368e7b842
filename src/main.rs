#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;
mod viewport;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::{anyhow, Context, Result};
use catalog_core::config::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use catalog_core::viewport::DEFAULT_MOBILE_BREAKPOINT;
use catalog_core::{BrowserConfig, Catalog, ZoomLevel};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

use crate::context::Startup;

/// Configuration and catalog resolved before the window opens
static STARTUP: OnceLock<Startup> = OnceLock::new();

/// Get the startup state (empty catalog and defaults if never set)
pub fn get_startup() -> Startup {
    STARTUP.get().cloned().unwrap_or_default()
}

/// Catalog Browser - filterable grid of catalog items
#[derive(Parser, Debug)]
#[command(name = "catalog-browser-desktop")]
#[command(about = "Catalog Browser - browse catalog items by category and name")]
struct Args {
    /// Catalog JSON file (uses the bundled sample when omitted)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Initial cell size tier
    #[arg(short, long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=2))]
    zoom: u8,

    /// Viewports narrower than this many logical pixels count as mobile
    #[arg(long, default_value_t = DEFAULT_MOBILE_BREAKPOINT)]
    mobile_breakpoint: f64,

    /// Initial window width
    #[arg(long, default_value_t = DEFAULT_WINDOW_WIDTH)]
    width: f64,

    /// Initial window height
    #[arg(long, default_value_t = DEFAULT_WINDOW_HEIGHT)]
    height: f64,
}

impl Args {
    fn into_config(self) -> Result<BrowserConfig> {
        let config = BrowserConfig {
            catalog_path: self.catalog,
            zoom_level: ZoomLevel::try_from(self.zoom)?,
            mobile_breakpoint: self.mobile_breakpoint,
            window_width: self.width,
            window_height: self.height,
        };
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    catalog_core::logging::init("info");

    let config = Args::parse().into_config()?;

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("Failed to load catalog from {:?}", path))?,
        None => Catalog::sample().context("Bundled sample catalog is invalid")?,
    };

    let title = match config.catalog_path.as_ref().and_then(|p| p.file_stem()) {
        Some(stem) => format!("Catalog Browser - {}", stem.to_string_lossy()),
        None => "Catalog Browser".to_string(),
    };

    tracing::info!(
        "Starting '{}' with {} items (zoom {}, mobile below {}px)",
        title,
        catalog.items.len(),
        config.zoom_level.index(),
        config.mobile_breakpoint
    );

    let window = WindowBuilder::new()
        .with_title(&title)
        .with_inner_size(dioxus::desktop::LogicalSize::new(
            config.window_width,
            config.window_height,
        ))
        .with_resizable(true);

    STARTUP
        .set(Startup { config, catalog })
        .map_err(|_| anyhow!("startup state already initialized"))?;

    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .launch(app::App);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_map_onto_config() {
        let args = Args::parse_from([
            "catalog-browser-desktop",
            "--catalog",
            "parts.json",
            "--zoom",
            "2",
            "--mobile-breakpoint",
            "600",
        ]);
        let config = args.into_config().unwrap();
        assert_eq!(config.catalog_path, Some(PathBuf::from("parts.json")));
        assert_eq!(config.zoom_level, ZoomLevel::Large);
        assert_eq!(config.mobile_breakpoint, 600.0);
        assert_eq!(config.window_width, DEFAULT_WINDOW_WIDTH);
    }

    #[test]
    fn zoom_out_of_range_is_rejected() {
        let result = Args::try_parse_from(["catalog-browser-desktop", "--zoom", "3"]);
        assert!(result.is_err());
    }

    #[test]
    fn negative_window_size_is_rejected() {
        let args = Args::parse_from(["catalog-browser-desktop", "--width=-10"]);
        assert!(args.into_config().is_err());
    }
}
