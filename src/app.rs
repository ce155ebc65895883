use std::path::Path;

use eframe::egui;

use crate::state::AppState;
use crate::ui::charts::ChartGrid;
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ExoAtlasApp {
    pub state: AppState,
    charts: ChartGrid,
}

impl ExoAtlasApp {
    /// Build the app and load the dataset once. A load failure is logged and
    /// shown in the top bar; no charts render until a dataset is present.
    pub fn new(dataset_path: &Path) -> Self {
        let mut state = AppState::default();
        state.load_path(dataset_path);
        ExoAtlasApp {
            state,
            charts: ChartGrid::default(),
        }
    }
}

impl eframe::App for ExoAtlasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: chart grid ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(dataset) = &self.state.dataset else {
                ui.centered_and_justified(|ui: &mut egui::Ui| {
                    ui.heading("Open an exoplanet CSV to view charts  (File → Open…)");
                });
                return;
            };

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut egui::Ui| {
                    self.charts.show(ui, &dataset.planets);
                });
        });
    }
}
