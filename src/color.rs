use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.65, 0.45);
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
// Color mapping: tag → Color32
// ---------------------------------------------------------------------------

/// Maps the catalog's tag vocabulary to distinct chip colours.
#[derive(Debug, Clone)]
pub struct TagColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl TagColors {
    /// Build a colour map over the catalog's tag vocabulary.
    pub fn new(tags: &BTreeSet<String>) -> Self {
        let palette = generate_palette(tags.len());
        let mapping: BTreeMap<String, Color32> =
            tags.iter().cloned().zip(palette).collect();

        TagColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a tag.
    pub fn color_for(&self, tag: &str) -> Color32 {
        self.mapping.get(tag).copied().unwrap_or(self.default_color)
    }
}
