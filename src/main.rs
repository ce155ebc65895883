mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::ExoAtlasApp;
use eframe::egui;

/// Dataset path used when none is given on the command line.
const DEFAULT_DATASET: &str = "data/exoplanets.csv";

fn main() -> eframe::Result {
    env_logger::init();

    let dataset_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Exo Atlas – Exoplanet Charts",
        options,
        Box::new(move |_cc| Ok(Box::new(ExoAtlasApp::new(&dataset_path)))),
    )
}
