mod analysis;
mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use app::SdgExplorerApp;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    // The dataset is loaded once, before the UI starts; a missing or
    // malformed file aborts startup with the path that was checked.
    let dataset = match config::Config::load().and_then(|c| {
        data::loader::load_file(&c.data_path)
            .map_err(|e| e.context(format!("loading dataset from {}", c.data_path.display())))
    }) {
        Ok(dataset) => dataset,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    };

    log::info!(
        "Loaded {} records, {} countries, {} goal columns",
        dataset.len(),
        dataset.countries.len(),
        dataset.goal_columns.len()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SDG Explorer",
        options,
        Box::new(|_cc| Ok(Box::new(SdgExplorerApp::new(AppState::new(dataset))))),
    )
}
