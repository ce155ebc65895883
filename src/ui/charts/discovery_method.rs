use eframe::egui::Ui;

use crate::color::CategoryColors;
use crate::data::aggregate::{self, DISCOVERY_METHODS};
use crate::data::model::Planet;

use super::{category_bar_plot, ChartConfig};

// ---------------------------------------------------------------------------
// Discovery-method bar chart
// ---------------------------------------------------------------------------

/// Bars for the six canonical discovery methods, tallest first. Methods the
/// archive reports outside the known five are merged into "Other" before
/// counting.
pub struct DiscoveryMethodBarchart {
    pub config: ChartConfig,
    colors: CategoryColors,
}

impl Default for DiscoveryMethodBarchart {
    fn default() -> Self {
        DiscoveryMethodBarchart {
            config: ChartConfig::new("Exoplanets by Type of Discovery", 260.0, 300.0),
            colors: CategoryColors::new(&DISCOVERY_METHODS),
        }
    }
}

impl DiscoveryMethodBarchart {
    pub fn show(&self, ui: &mut Ui, planets: &[Planet]) {
        let buckets = aggregate::method_buckets(planets);
        category_bar_plot(
            ui,
            "discovery_method_bars",
            &self.config,
            &buckets,
            |key| self.colors.color_for(key),
            None,
        );
    }
}
