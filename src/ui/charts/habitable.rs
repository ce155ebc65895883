use eframe::egui::Ui;

use crate::color::STEEL_BLUE;
use crate::data::aggregate;
use crate::data::model::Planet;

use super::{category_bar_plot, ChartConfig};

// ---------------------------------------------------------------------------
// Habitability bar chart
// ---------------------------------------------------------------------------

/// Exactly two bars, Uninhabitable then Habitable, counted over planets
/// with a canonical host-star class. The y-axis is pinned to 1800 so the
/// (always small) habitable bar is read against a stable scale.
pub struct HabitableBarchart {
    pub config: ChartConfig,
}

const Y_AXIS_MAX: f64 = 1800.0;

impl Default for HabitableBarchart {
    fn default() -> Self {
        HabitableBarchart {
            config: ChartConfig::new("Uninhabitable vs Habitable Exoplanets", 260.0, 300.0),
        }
    }
}

impl HabitableBarchart {
    pub fn show(&self, ui: &mut Ui, planets: &[Planet]) {
        let buckets = aggregate::habitability_buckets(planets);
        category_bar_plot(
            ui,
            "habitable_bars",
            &self.config,
            &buckets,
            |_| STEEL_BLUE,
            Some(Y_AXIS_MAX),
        );
    }
}
