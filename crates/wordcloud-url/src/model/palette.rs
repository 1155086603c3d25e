//! Resolution of settings into the concrete values a renderer consumes.
//!
//! The hand-off is deterministic: the same settings always resolve to the
//! same background color and text color list.

use crate::codec::primitives::format_number;
use crate::model::{Settings, WordEntry};

/// Hue used for the background when no hue key supplies one.
pub const DEFAULT_BACKGROUND_HUE: f64 = 88.0;

/// Offsets applied to a base hue when the settings carry none.
pub const DEFAULT_SCHEME_OFFSETS: [f64; 4] = [0.0, -20.0, 20.0, 180.0];

pub const DEFAULT_FONT_FAMILY: &str = "Futura, sans-serif";
pub const DEFAULT_WEIGHT_FACTOR: f64 = 8.0;
pub const DEFAULT_ROTATE_RATIO: f64 = 0.4;
pub const DEFAULT_MIN_WIDTH: &str = "500px";

const DEFAULT_BACKGROUND_SATURATION: f64 = 30.0;
const DEFAULT_FOREGROUND_SATURATION: f64 = 70.0;

/// Named hue schemes offered by the builder UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    Monochromatic,
    Complementary,
    Analogous,
    Triadic,
    Tetradic,
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 5] = [
        ColorScheme::Monochromatic,
        ColorScheme::Complementary,
        ColorScheme::Analogous,
        ColorScheme::Triadic,
        ColorScheme::Tetradic,
    ];

    /// Offsets in degrees from the base hue.
    pub fn offsets(self) -> &'static [f64] {
        match self {
            ColorScheme::Monochromatic => &[0.0],
            ColorScheme::Complementary => &[0.0, 180.0],
            ColorScheme::Analogous => &[-30.0, 0.0, 30.0],
            ColorScheme::Triadic => &[0.0, 120.0, 240.0],
            ColorScheme::Tetradic => &[0.0, 90.0, 180.0, 270.0],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorScheme::Monochromatic => "Monochromatic",
            ColorScheme::Complementary => "Complementary",
            ColorScheme::Analogous => "Analogous",
            ColorScheme::Triadic => "Triadic",
            ColorScheme::Tetradic => "Tetradic",
        }
    }

    /// Finds the scheme whose offsets match exactly.
    pub fn from_offsets(offsets: &[f64]) -> Option<ColorScheme> {
        ColorScheme::ALL.into_iter().find(|s| s.offsets() == offsets)
    }
}

/// Resolved colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    /// CSS background color.
    pub background: String,
    /// Text hues in [0, 360).
    pub text_hues: Vec<f64>,
    /// CSS text colors the renderer picks from.
    pub colors: Vec<String>,
    /// Set when an explicit foreground color overrides the hues.
    pub foreground: Option<String>,
}

/// Everything the renderer needs besides the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub words: Vec<WordEntry>,
    pub palette: Palette,
    pub font_family: String,
    pub weight_factor: f64,
    pub rotate_ratio: f64,
    pub min_width: String,
}

impl RenderConfig {
    /// Fills renderer defaults for every absent key.
    pub fn from_settings(settings: &Settings, words: Vec<WordEntry>) -> Self {
        Self {
            words,
            palette: resolve_palette(settings),
            font_family: settings
                .font_family
                .clone()
                .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string()),
            weight_factor: settings.weight_factor.unwrap_or(DEFAULT_WEIGHT_FACTOR),
            rotate_ratio: settings.rotate_ratio.unwrap_or(DEFAULT_ROTATE_RATIO),
            min_width: settings
                .min_width
                .clone()
                .unwrap_or_else(|| DEFAULT_MIN_WIDTH.to_string()),
        }
    }
}

/// Normalizes a hue into [0, 360).
pub fn normalize_hue(hue: f64) -> f64 {
    hue.rem_euclid(360.0)
}

/// Formats an `hsl()` CSS color.
pub fn hsl(hue: f64, saturation: f64, lightness: f64) -> String {
    format!(
        "hsl({}, {}%, {}%)",
        format_number(hue),
        format_number(saturation),
        format_number(lightness)
    )
}

/// Resolves the background and text colors for the given settings.
pub fn resolve_palette(settings: &Settings) -> Palette {
    let dark = settings.dark_mode.unwrap_or(false);

    let background = match &settings.background_color {
        Some(color) => color.clone(),
        None => {
            let hue = settings
                .monochrome_hue
                .or(settings.background_hue)
                .unwrap_or(DEFAULT_BACKGROUND_HUE);
            let saturation = settings
                .background_saturation
                .unwrap_or(DEFAULT_BACKGROUND_SATURATION);
            hsl(normalize_hue(hue), saturation, if dark { 15.0 } else { 85.0 })
        }
    };

    let offsets = settings
        .scheme_offsets
        .as_deref()
        .unwrap_or(&DEFAULT_SCHEME_OFFSETS);
    let text_hues: Vec<f64> = match settings.monochrome_hue.or(settings.foreground_hue) {
        Some(base) => offsets.iter().map(|o| normalize_hue(base + o)).collect(),
        None => settings
            .hues
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .map(|h| normalize_hue(*h))
            .collect(),
    };

    let colors = match &settings.foreground_color {
        Some(color) => vec![color.clone()],
        None => {
            let saturation = settings
                .foreground_saturation
                .unwrap_or(DEFAULT_FOREGROUND_SATURATION);
            let lightness = if dark { 80.0 } else { 30.0 };
            text_hues
                .iter()
                .map(|h| hsl(*h, saturation, lightness))
                .collect()
        }
    };

    Palette {
        background,
        text_hues,
        colors,
        foreground: settings.foreground_color.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let palette = resolve_palette(&Settings::default());
        assert_eq!(palette.background, "hsl(88, 30%, 85%)");
        assert!(palette.text_hues.is_empty());
        assert!(palette.colors.is_empty());
    }

    #[test]
    fn test_monochrome_palette() {
        let settings = Settings {
            monochrome_hue: Some(10.0),
            scheme_offsets: Some(vec![0.0, -20.0]),
            dark_mode: Some(true),
            ..Settings::default()
        };
        let palette = resolve_palette(&settings);
        assert_eq!(palette.background, "hsl(10, 30%, 15%)");
        assert_eq!(palette.text_hues, vec![10.0, 350.0]);
        assert_eq!(palette.colors, vec!["hsl(10, 70%, 80%)", "hsl(350, 70%, 80%)"]);
    }

    #[test]
    fn test_foreground_hue_uses_default_offsets() {
        let settings = Settings {
            foreground_hue: Some(200.0),
            background_hue: Some(40.0),
            ..Settings::default()
        };
        let palette = resolve_palette(&settings);
        assert_eq!(palette.text_hues, vec![200.0, 180.0, 220.0, 20.0]);
        assert_eq!(palette.background, "hsl(40, 30%, 85%)");
    }

    #[test]
    fn test_explicit_colors_win() {
        let settings = Settings {
            foreground_color: Some("#123".into()),
            background_color: Some("rgb(34, 34, 34)".into()),
            hues: Some(vec![0.0, 120.0]),
            ..Settings::default()
        };
        let palette = resolve_palette(&settings);
        assert_eq!(palette.background, "rgb(34, 34, 34)");
        assert_eq!(palette.colors, vec!["#123"]);
        assert_eq!(palette.foreground.as_deref(), Some("#123"));
    }

    #[test]
    fn test_render_config_defaults() {
        let config = RenderConfig::from_settings(&Settings::default(), vec![WordEntry::new("a", 1.0)]);
        assert_eq!(config.font_family, DEFAULT_FONT_FAMILY);
        assert_eq!(config.weight_factor, 8.0);
        assert_eq!(config.rotate_ratio, 0.4);
        assert_eq!(config.min_width, "500px");
        assert_eq!(config.words.len(), 1);
    }

    #[test]
    fn test_scheme_lookup() {
        assert_eq!(ColorScheme::from_offsets(&[0.0, 120.0, 240.0]), Some(ColorScheme::Triadic));
        assert_eq!(ColorScheme::from_offsets(&[1.0]), None);
        assert_eq!(normalize_hue(-30.0), 330.0);
    }
}
