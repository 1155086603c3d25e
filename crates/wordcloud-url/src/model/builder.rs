//! Builder API for ergonomic Settings construction.
//!
//! # Example
//!
//! ```rust
//! use wordcloud_url::model::builder::SettingsBuilder;
//!
//! let settings = SettingsBuilder::new()
//!     .monochrome_hue(55.0)
//!     .scheme_offsets([0.0, -5.0, 5.0])
//!     .dark_mode(true)
//!     .build();
//! assert_eq!(settings.monochrome_hue, Some(55.0));
//! ```

use crate::model::{ColorScheme, Settings};

/// Builder for constructing [`Settings`].
#[derive(Debug, Clone, Default)]
pub struct SettingsBuilder {
    settings: Settings,
}

impl SettingsBuilder {
    /// Creates a builder with every key absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from existing settings.
    pub fn from_settings(settings: Settings) -> Self {
        Self { settings }
    }

    // =========================================================================
    // Colors
    // =========================================================================

    pub fn foreground_color(mut self, color: impl Into<String>) -> Self {
        self.settings.foreground_color = Some(color.into());
        self
    }

    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.settings.background_color = Some(color.into());
        self
    }

    pub fn hues(mut self, hues: impl IntoIterator<Item = f64>) -> Self {
        self.settings.hues = Some(hues.into_iter().collect());
        self
    }

    pub fn monochrome_hue(mut self, hue: f64) -> Self {
        self.settings.monochrome_hue = Some(hue);
        self
    }

    pub fn foreground_hue(mut self, hue: f64) -> Self {
        self.settings.foreground_hue = Some(hue);
        self
    }

    pub fn scheme_offsets(mut self, offsets: impl IntoIterator<Item = f64>) -> Self {
        self.settings.scheme_offsets = Some(offsets.into_iter().collect());
        self
    }

    /// Sets the offsets of a named scheme.
    pub fn scheme(self, scheme: ColorScheme) -> Self {
        self.scheme_offsets(scheme.offsets().iter().copied())
    }

    pub fn background_hue(mut self, hue: f64) -> Self {
        self.settings.background_hue = Some(hue);
        self
    }

    pub fn dark_mode(mut self, dark: bool) -> Self {
        self.settings.dark_mode = Some(dark);
        self
    }

    pub fn foreground_saturation(mut self, saturation: f64) -> Self {
        self.settings.foreground_saturation = Some(saturation);
        self
    }

    pub fn background_saturation(mut self, saturation: f64) -> Self {
        self.settings.background_saturation = Some(saturation);
        self
    }

    // =========================================================================
    // Layout
    // =========================================================================

    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.settings.font_family = Some(family.into());
        self
    }

    pub fn weight_factor(mut self, factor: f64) -> Self {
        self.settings.weight_factor = Some(factor);
        self
    }

    pub fn rotate_ratio(mut self, ratio: f64) -> Self {
        self.settings.rotate_ratio = Some(ratio);
        self
    }

    pub fn min_width(mut self, width: impl Into<String>) -> Self {
        self.settings.min_width = Some(width.into());
        self
    }

    // =========================================================================
    // Build
    // =========================================================================

    /// Builds the settings as given; conflicts are resolved later, at URL build time.
    pub fn build(self) -> Settings {
        self.settings
    }
}
