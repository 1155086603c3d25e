//! Conflict resolution for settings.
//!
//! The flat key space lets a settings object name several color sources at
//! once. Validation resolves those conflicts by deleting the losing keys, in
//! a fixed rule order where each rule sees the output of the previous one:
//!
//! 1. `foregroundColor` beats `hues`, `foregroundHue` and `schemeOffsets`.
//! 2. `backgroundHue` beats `backgroundColor`.
//! 3. `monochromeHue` beats `hues` and `foregroundHue`.
//! 4. `foregroundColor` beats `monochromeHue`; the hue is kept as
//!    `backgroundHue` when no background key is left, so the rendered
//!    background does not change.
//!
//! Each resolved conflict is logged at `warn` level and also returned in
//! [`Validated::warnings`]. Validation never fails.

use std::fmt;

use tracing::warn;

use crate::model::{SettingKey, Settings};

/// A resolved settings conflict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictWarning {
    /// `foregroundColor` removed the hue-family keys listed.
    ForegroundColorOverridesHues { dropped: Vec<SettingKey> },
    /// `backgroundHue` removed `backgroundColor`.
    BackgroundHueOverridesBackgroundColor,
    /// `monochromeHue` removed the keys listed.
    MonochromeHueOverridesHues { dropped: Vec<SettingKey> },
    /// `foregroundColor` removed `monochromeHue`.
    ForegroundColorOverridesMonochromeHue { kept_as_background_hue: bool },
}

impl fmt::Display for ConflictWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = |keys: &[SettingKey]| {
            keys.iter()
                .map(|k| format!("`{}`", k.name()))
                .collect::<Vec<_>>()
                .join(", ")
        };
        match self {
            ConflictWarning::ForegroundColorOverridesHues { dropped } => write!(
                f,
                "conflicting parameters: `foregroundColor` overrides {}; ignoring them",
                names(dropped)
            ),
            ConflictWarning::BackgroundHueOverridesBackgroundColor => write!(
                f,
                "conflicting parameters: `backgroundHue` overrides `backgroundColor`; using `backgroundHue`"
            ),
            ConflictWarning::MonochromeHueOverridesHues { dropped } => write!(
                f,
                "conflicting parameters: `monochromeHue` overrides {}; using `monochromeHue`",
                names(dropped)
            ),
            ConflictWarning::ForegroundColorOverridesMonochromeHue { kept_as_background_hue } => {
                write!(f, "conflicting parameters: `foregroundColor` overrides `monochromeHue`")?;
                if *kept_as_background_hue {
                    write!(f, "; keeping its hue as `backgroundHue`")?;
                }
                Ok(())
            }
        }
    }
}

/// Settings after conflict resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Validated {
    pub settings: Settings,
    pub warnings: Vec<ConflictWarning>,
}

impl Validated {
    /// Returns true if no conflict was found.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Resolves conflicts between color keys. The input is not modified.
pub fn validate_settings(settings: &Settings) -> Validated {
    let mut resolved = settings.clone();
    let mut warnings = Vec::new();

    // Rule 1
    if resolved.contains(SettingKey::ForegroundColor) {
        let dropped = remove_present(
            &mut resolved,
            &[SettingKey::Hues, SettingKey::ForegroundHue, SettingKey::SchemeOffsets],
        );
        if !dropped.is_empty() {
            warnings.push(ConflictWarning::ForegroundColorOverridesHues { dropped });
        }
    }

    // Rule 2
    if resolved.contains(SettingKey::BackgroundHue) && resolved.remove(SettingKey::BackgroundColor) {
        warnings.push(ConflictWarning::BackgroundHueOverridesBackgroundColor);
    }

    // Rule 3
    if resolved.contains(SettingKey::MonochromeHue) {
        let dropped = remove_present(&mut resolved, &[SettingKey::Hues, SettingKey::ForegroundHue]);
        if !dropped.is_empty() {
            warnings.push(ConflictWarning::MonochromeHueOverridesHues { dropped });
        }
    }

    // Rule 4
    if resolved.contains(SettingKey::ForegroundColor) {
        if let Some(hue) = resolved.monochrome_hue.take() {
            let kept = resolved.background_hue.is_none() && resolved.background_color.is_none();
            if kept {
                resolved.background_hue = Some(hue);
            }
            warnings.push(ConflictWarning::ForegroundColorOverridesMonochromeHue {
                kept_as_background_hue: kept,
            });
        }
    }

    for warning in &warnings {
        warn!(conflict = ?warning, "{}", warning);
    }

    Validated {
        settings: resolved,
        warnings,
    }
}

/// Removes the listed keys, returning the ones that were present.
fn remove_present(settings: &mut Settings, keys: &[SettingKey]) -> Vec<SettingKey> {
    keys.iter().copied().filter(|k| settings.remove(*k)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ColorMode;

    #[test]
    fn test_foreground_color_drops_hues() {
        let settings = Settings {
            foreground_color: Some("#000".into()),
            hues: Some(vec![1.0, 2.0, 3.0]),
            ..Settings::default()
        };
        let validated = validate_settings(&settings);

        assert_eq!(validated.settings.foreground_color.as_deref(), Some("#000"));
        assert_eq!(validated.settings.hues, None);
        assert_eq!(
            validated.warnings,
            vec![ConflictWarning::ForegroundColorOverridesHues { dropped: vec![SettingKey::Hues] }]
        );
        // input untouched
        assert!(settings.hues.is_some());
    }

    #[test]
    fn test_background_hue_drops_background_color() {
        let settings = Settings {
            background_color: Some("#fff".into()),
            background_hue: Some(0.0),
            ..Settings::default()
        };
        let validated = validate_settings(&settings);
        assert_eq!(validated.settings.background_color, None);
        assert_eq!(validated.settings.background_hue, Some(0.0));
        assert_eq!(validated.warnings, vec![ConflictWarning::BackgroundHueOverridesBackgroundColor]);
    }

    #[test]
    fn test_monochrome_drops_hues_and_foreground_hue() {
        let settings = Settings {
            monochrome_hue: Some(55.0),
            foreground_hue: Some(0.0),
            hues: Some(vec![10.0]),
            scheme_offsets: Some(vec![0.0, -5.0, 5.0]),
            ..Settings::default()
        };
        let validated = validate_settings(&settings);
        assert_eq!(validated.settings.monochrome_hue, Some(55.0));
        assert_eq!(validated.settings.scheme_offsets, Some(vec![0.0, -5.0, 5.0]));
        assert_eq!(validated.settings.hues, None);
        assert_eq!(validated.settings.foreground_hue, None);
        assert_eq!(
            validated.warnings,
            vec![ConflictWarning::MonochromeHueOverridesHues {
                dropped: vec![SettingKey::Hues, SettingKey::ForegroundHue],
            }]
        );
    }

    #[test]
    fn test_foreground_color_with_monochrome_and_hues() {
        let settings = Settings {
            foreground_color: Some("#000".into()),
            monochrome_hue: Some(200.0),
            hues: Some(vec![1.0]),
            ..Settings::default()
        };
        let validated = validate_settings(&settings);

        assert_eq!(validated.settings.foreground_color.as_deref(), Some("#000"));
        assert_eq!(validated.settings.monochrome_hue, None);
        assert_eq!(validated.settings.hues, None);
        assert_eq!(validated.settings.background_hue, Some(200.0));
        assert_eq!(validated.warnings.len(), 2);
        assert!(matches!(
            validated.settings.color_mode(),
            ColorMode::Explicit { .. }
        ));
    }

    #[test]
    fn test_foreground_color_with_monochrome_and_background_color() {
        let settings = Settings {
            foreground_color: Some("#000".into()),
            background_color: Some("#eee".into()),
            monochrome_hue: Some(200.0),
            ..Settings::default()
        };
        let validated = validate_settings(&settings);
        assert_eq!(validated.settings.background_color.as_deref(), Some("#eee"));
        assert_eq!(validated.settings.background_hue, None);
        assert_eq!(
            validated.warnings,
            vec![ConflictWarning::ForegroundColorOverridesMonochromeHue {
                kept_as_background_hue: false
            }]
        );
    }

    #[test]
    fn test_zero_values_are_present() {
        // presence, not truthiness, triggers a rule
        let settings = Settings {
            foreground_color: Some("#000".into()),
            foreground_hue: Some(0.0),
            ..Settings::default()
        };
        let validated = validate_settings(&settings);
        assert_eq!(validated.settings.foreground_hue, None);
        assert!(!validated.is_clean());
    }

    #[test]
    fn test_clean_settings_unchanged() {
        let settings = Settings {
            foreground_hue: Some(120.0),
            scheme_offsets: Some(vec![0.0, 180.0]),
            background_hue: Some(40.0),
            dark_mode: Some(false),
            ..Settings::default()
        };
        let validated = validate_settings(&settings);
        assert!(validated.is_clean());
        assert_eq!(validated.settings, settings);
    }

    #[test]
    fn test_warning_text() {
        let warning = ConflictWarning::ForegroundColorOverridesHues {
            dropped: vec![SettingKey::Hues, SettingKey::SchemeOffsets],
        };
        assert_eq!(
            warning.to_string(),
            "conflicting parameters: `foregroundColor` overrides `hues`, `schemeOffsets`; ignoring them"
        );
    }
}
