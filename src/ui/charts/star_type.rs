use eframe::egui::Ui;

use crate::color::CategoryColors;
use crate::data::aggregate;
use crate::data::model::Planet;

use super::{category_bar_plot, ChartConfig};

// ---------------------------------------------------------------------------
// Stellar-type bar chart
// ---------------------------------------------------------------------------

/// Bars for the five canonical spectral classes (A/F/G/K/M), tallest first.
/// Planets around stars of any other class are left out of the chart.
pub struct StarTypeBarchart {
    pub config: ChartConfig,
    colors: CategoryColors,
}

impl Default for StarTypeBarchart {
    fn default() -> Self {
        StarTypeBarchart {
            config: ChartConfig::new("Star Types by Exoplanet", 260.0, 300.0),
            colors: CategoryColors::new(&["A", "F", "G", "K", "M"]),
        }
    }
}

impl StarTypeBarchart {
    pub fn show(&self, ui: &mut Ui, planets: &[Planet]) {
        let buckets = aggregate::star_class_buckets(planets);
        category_bar_plot(
            ui,
            "star_type_bars",
            &self.config,
            &buckets,
            |key| self.colors.color_for(key),
            None,
        );
    }
}
