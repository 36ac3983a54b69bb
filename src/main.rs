mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use anyhow::Context;
use app::SpacexDashApp;
use config::DashboardConfig;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = DashboardConfig::default();
    let dataset = match data::loader::load_file(&config.dataset_path) {
        Ok(dataset) => dataset,
        Err(e) => {
            log::error!("Failed to load {}: {e}", config.dataset_path.display());
            return Err(e).with_context(|| {
                format!("loading launch records from {}", config.dataset_path.display())
            });
        }
    };
    log::info!(
        "Loaded {} launches from {} sites {:?}, payload {}..={} kg",
        dataset.len(),
        dataset.launch_sites.len(),
        dataset.launch_sites,
        dataset.min_payload,
        dataset.max_payload
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(SpacexDashApp::new(dataset, &config)))),
    )
    .map_err(|e| anyhow::anyhow!("dashboard window failed: {e}"))
}
