//! Value types shared by the fetcher, the normalizer and the detector.
//!
//! Everything here is built once per invocation and never mutated.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Theme label used when no holiday theme is active.
pub const DEFAULT_THEME: &str = "default";

/// Number of intensity levels sampled per display mode.
pub const LEVEL_COUNT: usize = 5;

/// Rendering appearance whose colors are sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    Light,
    Dark,
}

impl DisplayMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Audit tag recording which path produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DetectionMethod {
    /// Live source answered; theme and colors come from the page.
    CssVariable,
    /// Calendar guess requested directly, without a live attempt.
    Date,
    /// Calendar guess after the live source failed.
    DateFallback,
    /// Calendar requested directly and nothing matched.
    None,
    /// Live source failed and the calendar had no match.
    Error,
}

impl DetectionMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CssVariable => "css-variable",
            Self::Date => "date",
            Self::DateFallback => "date-fallback",
            Self::None => "none",
            Self::Error => "error",
        }
    }

    /// True for results that are a calendar guess rather than an observation.
    pub const fn is_guess(self) -> bool {
        matches!(self, Self::Date | Self::DateFallback)
    }
}

impl fmt::Display for DetectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One sampled color for one intensity level of a display mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSample {
    pub level: u8,
    /// Name of the sampled CSS variable. Kept for tracing only.
    pub variable: String,
    pub color: Option<String>,
}

/// The five samples of one display mode, in level order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSamples([ColorSample; LEVEL_COUNT]);

impl ColorSamples {
    /// Build samples from the level variables of `theme` and one color per level.
    ///
    /// Empty or whitespace-only colors are recorded as absent.
    pub fn from_colors(theme: Option<&str>, colors: [Option<String>; LEVEL_COUNT]) -> Self {
        let variables = Self::level_variables(theme);
        let mut colors = colors.into_iter();
        Self(variables.map(|(level, variable)| ColorSample {
            level,
            variable,
            color: colors
                .next()
                .flatten()
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty()),
        }))
    }

    /// Samples with every color absent.
    pub fn empty(theme: Option<&str>) -> Self {
        Self::from_colors(theme, Default::default())
    }

    /// The CSS variables sampled for each level.
    ///
    /// Level 0 is always the unthemed baseline; levels 1-4 use the theme's
    /// variables, or the default ones when no theme is present.
    pub fn level_variables(theme: Option<&str>) -> [(u8, String); LEVEL_COUNT] {
        let theme = theme.filter(|t| !t.is_empty()).unwrap_or(DEFAULT_THEME);
        std::array::from_fn(|index| {
            let level = index as u8;
            let name = if level == 0 { DEFAULT_THEME } else { theme };
            (level, format!("--contribution-{name}-bgColor-{level}"))
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColorSample> {
        self.0.iter()
    }

    pub const fn as_slice(&self) -> &[ColorSample] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a ColorSamples {
    type Item = &'a ColorSample;
    type IntoIter = std::slice::Iter<'a, ColorSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Output of one successful live extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSignal {
    /// `None` when the page carries no theme attribute.
    pub theme_name: Option<String>,
    pub light_samples: ColorSamples,
    pub dark_samples: ColorSamples,
}

impl ThemeSignal {
    /// The theme label, treating an empty attribute as absent.
    pub fn theme(&self) -> Option<&str> {
        self.theme_name.as_deref().filter(|name| !name.is_empty())
    }

    pub const fn samples(&self, mode: DisplayMode) -> &ColorSamples {
        match mode {
            DisplayMode::Light => &self.light_samples,
            DisplayMode::Dark => &self.dark_samples,
        }
    }
}

/// A sample projected for output: the variable name is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridColor {
    pub level: u8,
    pub color: Option<String>,
}

/// Canonical detection result, the only value callers observe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub holiday_detected: bool,
    pub theme_name: String,
    pub detection_method: DetectionMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light_grid_colors: Option<Vec<GridColor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_grid_colors: Option<Vec<GridColor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light_color_palette: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_color_palette: Option<String>,
}

impl DetectionResult {
    /// True when grid and palette fields were populated from a live signal.
    pub const fn has_colors(&self) -> bool {
        self.light_grid_colors.is_some() && self.dark_grid_colors.is_some()
    }

    pub fn grid(&self, mode: DisplayMode) -> Option<&[GridColor]> {
        match mode {
            DisplayMode::Light => self.light_grid_colors.as_deref(),
            DisplayMode::Dark => self.dark_grid_colors.as_deref(),
        }
    }

    pub fn palette(&self, mode: DisplayMode) -> Option<&str> {
        match mode {
            DisplayMode::Light => self.light_color_palette.as_deref(),
            DisplayMode::Dark => self.dark_color_palette.as_deref(),
        }
    }
}
