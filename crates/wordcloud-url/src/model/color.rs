//! Tagged view of the color settings.
//!
//! The wire format keeps color keys flat, so nothing stops a link from
//! carrying several competing color sources. After validation, at most one
//! foreground source is meaningful; [`ColorMode`] names it explicitly.

use crate::model::{SettingKey, Settings};

/// How foreground (and background) colors are chosen.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorMode {
    /// Literal CSS colors.
    Explicit {
        foreground: String,
        background: Option<String>,
    },
    /// One hue drives both text and background.
    Monochrome { hue: f64, offsets: Option<Vec<f64>> },
    /// A base text hue with scheme offsets and an optional background hue.
    ForegroundHue {
        hue: f64,
        offsets: Option<Vec<f64>>,
        background_hue: Option<f64>,
    },
    /// A raw list of text hues.
    CustomHues {
        hues: Vec<f64>,
        background_hue: Option<f64>,
    },
    /// No color keys; renderer defaults apply.
    Default,
}

/// Keys owned by the color mode.
const COLOR_KEYS: [SettingKey; 7] = [
    SettingKey::ForegroundColor,
    SettingKey::BackgroundColor,
    SettingKey::Hues,
    SettingKey::MonochromeHue,
    SettingKey::ForegroundHue,
    SettingKey::SchemeOffsets,
    SettingKey::BackgroundHue,
];

impl ColorMode {
    /// Writes this mode back into flat settings, replacing all color keys.
    ///
    /// Non-color keys (font, weights, dark mode, saturations) are untouched.
    pub fn apply(self, settings: &mut Settings) {
        for key in COLOR_KEYS {
            settings.remove(key);
        }
        match self {
            ColorMode::Explicit { foreground, background } => {
                settings.foreground_color = Some(foreground);
                settings.background_color = background;
            }
            ColorMode::Monochrome { hue, offsets } => {
                settings.monochrome_hue = Some(hue);
                settings.scheme_offsets = offsets;
            }
            ColorMode::ForegroundHue { hue, offsets, background_hue } => {
                settings.foreground_hue = Some(hue);
                settings.scheme_offsets = offsets;
                settings.background_hue = background_hue;
            }
            ColorMode::CustomHues { hues, background_hue } => {
                settings.hues = Some(hues);
                settings.background_hue = background_hue;
            }
            ColorMode::Default => {}
        }
    }
}

impl Settings {
    /// Classifies the color keys into a single mode.
    ///
    /// Precedence: foregroundColor, monochromeHue, foregroundHue, hues.
    /// Keys that lose are ignored here; [`crate::validate::validate_settings`]
    /// is what removes them from the flat form.
    pub fn color_mode(&self) -> ColorMode {
        if let Some(fg) = &self.foreground_color {
            return ColorMode::Explicit {
                foreground: fg.clone(),
                background: self.background_color.clone(),
            };
        }
        if let Some(hue) = self.monochrome_hue {
            return ColorMode::Monochrome {
                hue,
                offsets: self.scheme_offsets.clone(),
            };
        }
        if let Some(hue) = self.foreground_hue {
            return ColorMode::ForegroundHue {
                hue,
                offsets: self.scheme_offsets.clone(),
                background_hue: self.background_hue,
            };
        }
        if let Some(hues) = &self.hues {
            return ColorMode::CustomHues {
                hues: hues.clone(),
                background_hue: self.background_hue,
            };
        }
        ColorMode::Default
    }

    /// Replaces the color keys with the given mode.
    pub fn with_color_mode(mut self, mode: ColorMode) -> Self {
        mode.apply(&mut self);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_precedence() {
        let settings = Settings {
            foreground_color: Some("#000".into()),
            monochrome_hue: Some(55.0),
            ..Settings::default()
        };
        assert!(matches!(settings.color_mode(), ColorMode::Explicit { .. }));

        let settings = Settings {
            monochrome_hue: Some(55.0),
            foreground_hue: Some(10.0),
            scheme_offsets: Some(vec![0.0, -5.0, 5.0]),
            ..Settings::default()
        };
        assert_eq!(
            settings.color_mode(),
            ColorMode::Monochrome { hue: 55.0, offsets: Some(vec![0.0, -5.0, 5.0]) }
        );

        assert_eq!(Settings::default().color_mode(), ColorMode::Default);
    }

    #[test]
    fn test_apply_replaces_color_keys_only() {
        let settings = Settings {
            hues: Some(vec![1.0, 2.0]),
            background_color: Some("#fff".into()),
            font_family: Some("Inter".into()),
            dark_mode: Some(true),
            ..Settings::default()
        };
        let settings = settings.with_color_mode(ColorMode::ForegroundHue {
            hue: 200.0,
            offsets: None,
            background_hue: Some(20.0),
        });

        assert_eq!(settings.hues, None);
        assert_eq!(settings.background_color, None);
        assert_eq!(settings.foreground_hue, Some(200.0));
        assert_eq!(settings.background_hue, Some(20.0));
        assert_eq!(settings.font_family.as_deref(), Some("Inter"));
        assert_eq!(settings.dark_mode, Some(true));
    }

    #[test]
    fn test_mode_roundtrips_through_flat_form() {
        let mode = ColorMode::CustomHues {
            hues: vec![0.0, 120.0, 240.0],
            background_hue: Some(50.0),
        };
        let settings = Settings::default().with_color_mode(mode.clone());
        assert_eq!(settings.color_mode(), mode);
    }
}
