/// Chart components. Each chart is a plain value holding its display
/// configuration; `show` runs the aggregation for the current dataset and
/// hands the result to `egui_plot`. Charts keep no state between frames.
pub mod discoveries_line;
pub mod discovery_method;
pub mod distance_histogram;
pub mod habitable;
pub mod scatter;
pub mod star_type;

use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Plot};

use crate::data::aggregate::Bucket;
use crate::data::model::Planet;

use discoveries_line::DiscoveriesLineChart;
use discovery_method::DiscoveryMethodBarchart;
use distance_histogram::DistanceHistogram;
use habitable::HabitableBarchart;
use scatter::OrbitDistanceScatterplot;
use star_type::StarTypeBarchart;

// ---------------------------------------------------------------------------
// Shared chart configuration
// ---------------------------------------------------------------------------

/// Per-chart display options: title and container dimensions. Margins are
/// egui's business; the defaults mirror the original chart containers
/// (260 wide for the bar charts, 400 for the wide charts, 300 tall).
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub title: &'static str,
    pub width: f32,
    pub height: f32,
}

impl ChartConfig {
    pub fn new(title: &'static str, width: f32, height: f32) -> Self {
        ChartConfig {
            title,
            width,
            height,
        }
    }
}

// ---------------------------------------------------------------------------
// Shared categorical bar plot
// ---------------------------------------------------------------------------

/// Draw one bucket sequence as a bar chart with the bucket keys as x-axis
/// tick labels. `y_max` pins the y-axis upper bound when a chart wants a
/// fixed domain instead of fitting the data.
pub(crate) fn category_bar_plot(
    ui: &mut Ui,
    id: &str,
    config: &ChartConfig,
    buckets: &[Bucket],
    color_for: impl Fn(&str) -> Color32,
    y_max: Option<f64>,
) {
    ui.vertical(|ui: &mut Ui| {
        ui.strong(config.title);

        let bars: Vec<Bar> = buckets
            .iter()
            .enumerate()
            .map(|(i, b)| {
                Bar::new(i as f64, b.count as f64)
                    .width(0.8)
                    .name(&b.key)
                    .fill(color_for(&b.key))
            })
            .collect();

        let keys: Vec<String> = buckets.iter().map(|b| b.key.clone()).collect();
        let mut plot = Plot::new(id)
            .width(config.width)
            .height(config.height)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .include_y(0.0)
            .x_axis_formatter(move |mark, _range| {
                let i = mark.value.round();
                if (mark.value - i).abs() < 0.3 && i >= 0.0 && (i as usize) < keys.len() {
                    keys[i as usize].clone()
                } else {
                    String::new()
                }
            });
        if let Some(y) = y_max {
            plot = plot.include_y(y);
        }

        plot.show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
    });
}

// ---------------------------------------------------------------------------
// Chart grid
// ---------------------------------------------------------------------------

/// All six charts, drawn as a wrapping grid of framed panels.
pub struct ChartGrid {
    discoveries: DiscoveriesLineChart,
    methods: DiscoveryMethodBarchart,
    star_types: StarTypeBarchart,
    habitable: HabitableBarchart,
    distances: DistanceHistogram,
    scatter: OrbitDistanceScatterplot,
}

impl Default for ChartGrid {
    fn default() -> Self {
        ChartGrid {
            discoveries: DiscoveriesLineChart::default(),
            methods: DiscoveryMethodBarchart::default(),
            star_types: StarTypeBarchart::default(),
            habitable: HabitableBarchart::default(),
            distances: DistanceHistogram::default(),
            scatter: OrbitDistanceScatterplot::default(),
        }
    }
}

impl ChartGrid {
    pub fn show(&self, ui: &mut Ui, planets: &[Planet]) {
        ui.horizontal_wrapped(|ui: &mut Ui| {
            framed(ui, |ui| self.discoveries.show(ui, planets));
            framed(ui, |ui| self.methods.show(ui, planets));
            framed(ui, |ui| self.star_types.show(ui, planets));
            framed(ui, |ui| self.habitable.show(ui, planets));
            framed(ui, |ui| self.distances.show(ui, planets));
            framed(ui, |ui| self.scatter.show(ui, planets));
        });
    }
}

fn framed(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui)) {
    eframe::egui::Frame::group(ui.style()).show(ui, add_contents);
}
