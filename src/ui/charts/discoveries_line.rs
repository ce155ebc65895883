use eframe::egui::Ui;
use egui_plot::{Line, Plot, PlotPoints};

use crate::color::STEEL_BLUE;
use crate::data::aggregate;
use crate::data::model::Planet;

use super::ChartConfig;

// ---------------------------------------------------------------------------
// Discoveries-by-year line chart
// ---------------------------------------------------------------------------

/// One point per year in the chart span, zero-filled, so gaps render as
/// zero-height rather than missing.
pub struct DiscoveriesLineChart {
    pub config: ChartConfig,
}

impl Default for DiscoveriesLineChart {
    fn default() -> Self {
        DiscoveriesLineChart {
            config: ChartConfig::new("# of Exoplanet Discoveries by Year", 400.0, 300.0),
        }
    }
}

impl DiscoveriesLineChart {
    pub fn show(&self, ui: &mut Ui, planets: &[Planet]) {
        let series = aggregate::yearly_counts(planets);

        ui.vertical(|ui: &mut Ui| {
            ui.strong(self.config.title);

            let points: PlotPoints = series
                .iter()
                .map(|&(year, count)| [year as f64, count as f64])
                .collect();

            Plot::new("discoveries_line")
                .width(self.config.width)
                .height(self.config.height)
                .allow_drag(false)
                .allow_zoom(false)
                .allow_scroll(false)
                .allow_boxed_zoom(false)
                .include_y(0.0)
                .x_axis_label("Year")
                .y_axis_label("Discoveries")
                .x_axis_formatter(|mark, _range| format!("{:.0}", mark.value))
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new(points).color(STEEL_BLUE).width(1.5));
                });
        });
    }
}
