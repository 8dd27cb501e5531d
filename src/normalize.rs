//! Builds the canonical [`DetectionResult`] from a theme, a method and
//! optional color samples.

use crate::model::{ColorSamples, DEFAULT_THEME, DetectionMethod, DetectionResult, GridColor};

/// Separator between colors in a palette string.
pub const PALETTE_SEPARATOR: &str = ", ";

/// Build a result.
///
/// Grid and palette fields are filled only when `samples` (light, dark) is
/// given. A palette whose colors are all absent is an empty string.
pub fn build(
    theme: &str,
    method: DetectionMethod,
    samples: Option<(&ColorSamples, &ColorSamples)>,
) -> DetectionResult {
    let (light, dark) = samples.unzip();

    DetectionResult {
        holiday_detected: theme != DEFAULT_THEME,
        theme_name: theme.to_string(),
        detection_method: method,
        light_grid_colors: light.map(grid),
        dark_grid_colors: dark.map(grid),
        light_color_palette: light.map(palette),
        dark_color_palette: dark.map(palette),
    }
}

fn grid(samples: &ColorSamples) -> Vec<GridColor> {
    samples
        .iter()
        .map(|sample| GridColor {
            level: sample.level,
            color: sample.color.clone(),
        })
        .collect()
}

fn palette(samples: &ColorSamples) -> String {
    samples
        .iter()
        .filter_map(|sample| sample.color.as_deref())
        .collect::<Vec<_>>()
        .join(PALETTE_SEPARATOR)
}
