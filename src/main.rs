mod app;
mod color;
mod data;
mod season;
mod state;
mod ui;

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use app::LinkshelfApp;
use eframe::egui;
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    // Dataset path from the first CLI argument; the catalog is loaded once
    // here and a malformed file aborts before any rendering.
    let path = std::env::args().nth(1).unwrap_or_else(|| "data.json".to_string());
    let catalog = data::loader::load_file(Path::new(&path))
        .with_context(|| format!("loading resource catalog from {path}"))?;
    if catalog.is_empty() {
        log::warn!("resource catalog {path} is empty");
    }
    log::info!(
        "Loaded {} resources with tags {:?}",
        catalog.len(),
        catalog.tags
    );

    let state = AppState::new(catalog);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([500.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Linkshelf – Resource Directory",
        options,
        Box::new(move |_cc| Ok(Box::new(LinkshelfApp::new(state)))),
    )
    .map_err(|e| anyhow!("eframe: {e}"))
}
