use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Steel blue, the series colour of the original charts.
pub const STEEL_BLUE: Color32 = Color32::from_rgb(70, 130, 180);

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: canonical category → Color32
// ---------------------------------------------------------------------------

/// Maps the canonical keys of a categorical chart to distinct colours.
#[derive(Debug, Clone)]
pub struct CategoryColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl CategoryColors {
    /// Build a colour map over a chart's canonical key list.
    pub fn new(keys: &[&str]) -> Self {
        let palette = generate_palette(keys.len());
        let mapping: BTreeMap<String, Color32> = keys
            .iter()
            .zip(palette)
            .map(|(&k, c)| (k.to_string(), c))
            .collect();

        CategoryColors {
            mapping,
            default_color: STEEL_BLUE,
        }
    }

    /// Look up the colour for a category key.
    pub fn color_for(&self, key: &str) -> Color32 {
        self.mapping
            .get(key)
            .copied()
            .unwrap_or(self.default_color)
    }
}
