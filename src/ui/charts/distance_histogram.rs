use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Plot};

use crate::color::STEEL_BLUE;
use crate::data::aggregate::{self, DISTANCE_BIN_COUNT};
use crate::data::model::Planet;

use super::ChartConfig;

// ---------------------------------------------------------------------------
// Distance histogram
// ---------------------------------------------------------------------------

/// Equal-width bins over the observed distance range. Continuous binning,
/// not categorical: bar positions and widths come from the bin boundaries.
pub struct DistanceHistogram {
    pub config: ChartConfig,
    pub bin_count: usize,
}

impl Default for DistanceHistogram {
    fn default() -> Self {
        DistanceHistogram {
            config: ChartConfig::new("Exoplanets by Distance from Earth", 400.0, 300.0),
            bin_count: DISTANCE_BIN_COUNT,
        }
    }
}

impl DistanceHistogram {
    pub fn show(&self, ui: &mut Ui, planets: &[Planet]) {
        let bins = aggregate::distance_bins(planets, self.bin_count);

        ui.vertical(|ui: &mut Ui| {
            ui.strong(self.config.title);

            let bars: Vec<Bar> = bins
                .iter()
                .map(|bin| {
                    Bar::new((bin.lo + bin.hi) / 2.0, bin.count as f64)
                        .width(bin.hi - bin.lo)
                        .fill(STEEL_BLUE)
                })
                .collect();

            Plot::new("distance_histogram")
                .width(self.config.width)
                .height(self.config.height)
                .allow_drag(false)
                .allow_zoom(false)
                .allow_scroll(false)
                .allow_boxed_zoom(false)
                .include_y(0.0)
                .x_axis_label("Distance (pc)")
                .y_axis_label("Exoplanets")
                .show(ui, |plot_ui| {
                    plot_ui.bar_chart(BarChart::new(bars));
                });
        });
    }
}
