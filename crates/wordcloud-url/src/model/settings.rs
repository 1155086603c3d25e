//! Visual settings for a word cloud.
//!
//! Settings are a flat bag of optional keys. `None` always means "use the
//! renderer default"; it is the only value that is left out of a URL.

use serde::{Deserialize, Serialize};

/// The enumerated set of recognized settings keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SettingKey {
    ForegroundColor,
    BackgroundColor,
    Hues,
    MonochromeHue,
    ForegroundHue,
    SchemeOffsets,
    BackgroundHue,
    DarkMode,
    FontFamily,
    WeightFactor,
    RotateRatio,
    MinWidth,
    ForegroundSaturation,
    BackgroundSaturation,
}

impl SettingKey {
    /// All keys, in wire serialization order.
    pub const ALL: [SettingKey; 14] = [
        SettingKey::ForegroundColor,
        SettingKey::BackgroundColor,
        SettingKey::Hues,
        SettingKey::MonochromeHue,
        SettingKey::ForegroundHue,
        SettingKey::SchemeOffsets,
        SettingKey::BackgroundHue,
        SettingKey::DarkMode,
        SettingKey::FontFamily,
        SettingKey::WeightFactor,
        SettingKey::RotateRatio,
        SettingKey::MinWidth,
        SettingKey::ForegroundSaturation,
        SettingKey::BackgroundSaturation,
    ];

    /// Returns the camelCase settings name (e.g., "monochromeHue").
    pub fn name(self) -> &'static str {
        match self {
            SettingKey::ForegroundColor => "foregroundColor",
            SettingKey::BackgroundColor => "backgroundColor",
            SettingKey::Hues => "hues",
            SettingKey::MonochromeHue => "monochromeHue",
            SettingKey::ForegroundHue => "foregroundHue",
            SettingKey::SchemeOffsets => "schemeOffsets",
            SettingKey::BackgroundHue => "backgroundHue",
            SettingKey::DarkMode => "darkMode",
            SettingKey::FontFamily => "fontFamily",
            SettingKey::WeightFactor => "weightFactor",
            SettingKey::RotateRatio => "rotateRatio",
            SettingKey::MinWidth => "minWidth",
            SettingKey::ForegroundSaturation => "foregroundSaturation",
            SettingKey::BackgroundSaturation => "backgroundSaturation",
        }
    }

    /// Looks up a key by its settings name, accepting the legacy `singleHue`.
    pub fn from_name(name: &str) -> Option<SettingKey> {
        if name == "singleHue" {
            return Some(SettingKey::ForegroundHue);
        }
        SettingKey::ALL.into_iter().find(|k| k.name() == name)
    }

    /// Returns the value shape this key holds.
    pub fn kind(self) -> ValueKind {
        match self {
            SettingKey::ForegroundColor
            | SettingKey::BackgroundColor
            | SettingKey::FontFamily
            | SettingKey::MinWidth => ValueKind::Text,
            SettingKey::MonochromeHue | SettingKey::ForegroundHue | SettingKey::BackgroundHue => {
                ValueKind::Degrees
            }
            SettingKey::WeightFactor
            | SettingKey::RotateRatio
            | SettingKey::ForegroundSaturation
            | SettingKey::BackgroundSaturation => ValueKind::Number,
            SettingKey::Hues | SettingKey::SchemeOffsets => ValueKind::NumberList,
            SettingKey::DarkMode => ValueKind::Flag,
        }
    }
}

/// Shape of a settings value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Free text (CSS literal, font family).
    Text,
    /// Integer degrees, parsed leniently like `parseInt`.
    Degrees,
    /// Floating point, parsed leniently like `parseFloat`.
    Number,
    /// Comma-separated numbers.
    NumberList,
    /// `1` for true, anything else false.
    Flag,
}

/// A single typed settings value.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    Text(String),
    Number(f64),
    NumberList(Vec<f64>),
    Flag(bool),
}

/// The flat settings object.
///
/// Hue fields hold whole degrees in practice but are stored as `f64` so
/// that a malformed link can decode to `NaN` instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hues: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monochrome_hue: Option<f64>,
    #[serde(default, alias = "singleHue", skip_serializing_if = "Option::is_none")]
    pub foreground_hue: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme_offsets: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_hue: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_factor: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate_ratio: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground_saturation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_saturation: Option<f64>,
}

impl Settings {
    /// Creates empty settings (all renderer defaults).
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no key is set.
    pub fn is_empty(&self) -> bool {
        SettingKey::ALL.iter().all(|k| !self.contains(*k))
    }

    /// Returns true if the key is present.
    pub fn contains(&self, key: SettingKey) -> bool {
        match key {
            SettingKey::ForegroundColor => self.foreground_color.is_some(),
            SettingKey::BackgroundColor => self.background_color.is_some(),
            SettingKey::Hues => self.hues.is_some(),
            SettingKey::MonochromeHue => self.monochrome_hue.is_some(),
            SettingKey::ForegroundHue => self.foreground_hue.is_some(),
            SettingKey::SchemeOffsets => self.scheme_offsets.is_some(),
            SettingKey::BackgroundHue => self.background_hue.is_some(),
            SettingKey::DarkMode => self.dark_mode.is_some(),
            SettingKey::FontFamily => self.font_family.is_some(),
            SettingKey::WeightFactor => self.weight_factor.is_some(),
            SettingKey::RotateRatio => self.rotate_ratio.is_some(),
            SettingKey::MinWidth => self.min_width.is_some(),
            SettingKey::ForegroundSaturation => self.foreground_saturation.is_some(),
            SettingKey::BackgroundSaturation => self.background_saturation.is_some(),
        }
    }

    /// Returns the value stored under a key.
    pub fn get(&self, key: SettingKey) -> Option<SettingValue> {
        let text = |v: &Option<String>| v.clone().map(SettingValue::Text);
        let number = |v: Option<f64>| v.map(SettingValue::Number);
        let list = |v: &Option<Vec<f64>>| v.clone().map(SettingValue::NumberList);
        match key {
            SettingKey::ForegroundColor => text(&self.foreground_color),
            SettingKey::BackgroundColor => text(&self.background_color),
            SettingKey::Hues => list(&self.hues),
            SettingKey::MonochromeHue => number(self.monochrome_hue),
            SettingKey::ForegroundHue => number(self.foreground_hue),
            SettingKey::SchemeOffsets => list(&self.scheme_offsets),
            SettingKey::BackgroundHue => number(self.background_hue),
            SettingKey::DarkMode => self.dark_mode.map(SettingValue::Flag),
            SettingKey::FontFamily => text(&self.font_family),
            SettingKey::WeightFactor => number(self.weight_factor),
            SettingKey::RotateRatio => number(self.rotate_ratio),
            SettingKey::MinWidth => text(&self.min_width),
            SettingKey::ForegroundSaturation => number(self.foreground_saturation),
            SettingKey::BackgroundSaturation => number(self.background_saturation),
        }
    }

    /// Stores a value under a key.
    ///
    /// Returns false (and leaves the settings untouched) if the value shape
    /// does not match the key.
    pub fn set(&mut self, key: SettingKey, value: SettingValue) -> bool {
        match (key, value) {
            (SettingKey::ForegroundColor, SettingValue::Text(v)) => self.foreground_color = Some(v),
            (SettingKey::BackgroundColor, SettingValue::Text(v)) => self.background_color = Some(v),
            (SettingKey::FontFamily, SettingValue::Text(v)) => self.font_family = Some(v),
            (SettingKey::MinWidth, SettingValue::Text(v)) => self.min_width = Some(v),
            (SettingKey::Hues, SettingValue::NumberList(v)) => self.hues = Some(v),
            (SettingKey::SchemeOffsets, SettingValue::NumberList(v)) => self.scheme_offsets = Some(v),
            (SettingKey::MonochromeHue, SettingValue::Number(v)) => self.monochrome_hue = Some(v),
            (SettingKey::ForegroundHue, SettingValue::Number(v)) => self.foreground_hue = Some(v),
            (SettingKey::BackgroundHue, SettingValue::Number(v)) => self.background_hue = Some(v),
            (SettingKey::WeightFactor, SettingValue::Number(v)) => self.weight_factor = Some(v),
            (SettingKey::RotateRatio, SettingValue::Number(v)) => self.rotate_ratio = Some(v),
            (SettingKey::ForegroundSaturation, SettingValue::Number(v)) => {
                self.foreground_saturation = Some(v)
            }
            (SettingKey::BackgroundSaturation, SettingValue::Number(v)) => {
                self.background_saturation = Some(v)
            }
            (SettingKey::DarkMode, SettingValue::Flag(v)) => self.dark_mode = Some(v),
            _ => return false,
        }
        true
    }

    /// Removes a key, returning true if it was present.
    pub fn remove(&mut self, key: SettingKey) -> bool {
        let present = self.contains(key);
        match key {
            SettingKey::ForegroundColor => self.foreground_color = None,
            SettingKey::BackgroundColor => self.background_color = None,
            SettingKey::Hues => self.hues = None,
            SettingKey::MonochromeHue => self.monochrome_hue = None,
            SettingKey::ForegroundHue => self.foreground_hue = None,
            SettingKey::SchemeOffsets => self.scheme_offsets = None,
            SettingKey::BackgroundHue => self.background_hue = None,
            SettingKey::DarkMode => self.dark_mode = None,
            SettingKey::FontFamily => self.font_family = None,
            SettingKey::WeightFactor => self.weight_factor = None,
            SettingKey::RotateRatio => self.rotate_ratio = None,
            SettingKey::MinWidth => self.min_width = None,
            SettingKey::ForegroundSaturation => self.foreground_saturation = None,
            SettingKey::BackgroundSaturation => self.background_saturation = None,
        }
        present
    }

    /// Iterates over present keys and their values, in wire order.
    pub fn entries(&self) -> impl Iterator<Item = (SettingKey, SettingValue)> + '_ {
        SettingKey::ALL
            .into_iter()
            .filter_map(move |k| self.get(k).map(|v| (k, v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_remove() {
        let mut settings = Settings::new();
        assert!(settings.is_empty());

        assert!(settings.set(SettingKey::MonochromeHue, SettingValue::Number(55.0)));
        assert_eq!(settings.monochrome_hue, Some(55.0));
        assert_eq!(settings.get(SettingKey::MonochromeHue), Some(SettingValue::Number(55.0)));

        assert!(settings.remove(SettingKey::MonochromeHue));
        assert!(!settings.remove(SettingKey::MonochromeHue));
        assert!(settings.is_empty());
    }

    #[test]
    fn test_set_rejects_wrong_shape() {
        let mut settings = Settings::new();
        assert!(!settings.set(SettingKey::DarkMode, SettingValue::Text("yes".into())));
        assert!(settings.dark_mode.is_none());
    }

    #[test]
    fn test_kind_matches_set() {
        let sample = |kind: ValueKind| match kind {
            ValueKind::Text => SettingValue::Text("x".into()),
            ValueKind::Degrees | ValueKind::Number => SettingValue::Number(1.0),
            ValueKind::NumberList => SettingValue::NumberList(vec![1.0]),
            ValueKind::Flag => SettingValue::Flag(true),
        };
        let mut settings = Settings::new();
        for key in SettingKey::ALL {
            assert!(settings.set(key, sample(key.kind())), "{:?}", key);
        }
        assert_eq!(settings.entries().count(), SettingKey::ALL.len());
    }

    #[test]
    fn test_names_roundtrip_and_legacy_alias() {
        for key in SettingKey::ALL {
            assert_eq!(SettingKey::from_name(key.name()), Some(key));
        }
        assert_eq!(SettingKey::from_name("singleHue"), Some(SettingKey::ForegroundHue));
        assert_eq!(SettingKey::from_name("nope"), None);
    }

    #[test]
    fn test_json_accepts_single_hue() {
        let settings: Settings = serde_json::from_str(r#"{"singleHue": 120, "darkMode": true}"#).unwrap();
        assert_eq!(settings.foreground_hue, Some(120.0));
        assert_eq!(settings.dark_mode, Some(true));

        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(json, r#"{"foregroundHue":120.0,"darkMode":true}"#);
    }
}
