use eframe::egui::Ui;
use egui_plot::{Plot, Points};

use crate::color::STEEL_BLUE;
use crate::data::model::Planet;

use super::ChartConfig;

// ---------------------------------------------------------------------------
// Orbit vs distance scatterplot
// ---------------------------------------------------------------------------

/// One point per planet with both an orbital semi-major axis and a distance
/// on record; no aggregation, raw records only.
pub struct OrbitDistanceScatterplot {
    pub config: ChartConfig,
}

impl Default for OrbitDistanceScatterplot {
    fn default() -> Self {
        OrbitDistanceScatterplot {
            config: ChartConfig::new("Distance vs Orbital Semi-Major Axis", 400.0, 300.0),
        }
    }
}

impl OrbitDistanceScatterplot {
    pub fn show(&self, ui: &mut Ui, planets: &[Planet]) {
        let points: Vec<[f64; 2]> = planets
            .iter()
            .filter_map(|p| Some([p.orbsmax?, p.distance?]))
            .collect();

        ui.vertical(|ui: &mut Ui| {
            ui.strong(self.config.title);

            Plot::new("orbit_distance_scatter")
                .width(self.config.width)
                .height(self.config.height)
                .allow_drag(false)
                .allow_zoom(false)
                .allow_scroll(false)
                .allow_boxed_zoom(false)
                .x_axis_label("Semi-major axis (AU)")
                .y_axis_label("Distance (pc)")
                .show(ui, |plot_ui| {
                    plot_ui.points(Points::new(points).radius(2.0).color(STEEL_BLUE));
                });
        });
    }
}
