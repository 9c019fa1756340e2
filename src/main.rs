mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use anyhow::{Context, Result, anyhow};
use app::LaunchDashApp;
use clap::Parser;
use config::DashboardConfig;
use eframe::egui;
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let config = DashboardConfig::parse();

    // The dataset is read exactly once; without it there is nothing to show.
    let dataset = data::loader::load_file(&config.data).inspect_err(|e| {
        log::error!("Failed to load launch data: {e:#}");
    })?;
    log::info!(
        "Loaded {} launches from {} sites {:?} (payload {}..={} kg)",
        dataset.len(),
        dataset.sites.len(),
        dataset.sites,
        dataset.min_payload,
        dataset.max_payload
    );

    let slider = config.slider_bounds(&dataset);
    let mut state = AppState::new(dataset, slider);
    state.set_site(config.initial_site());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SpaceX Launch Records Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(LaunchDashApp::new(state)))),
    )
    .map_err(|e| anyhow!("{e}"))
    .context("running dashboard window")
}
