//! Data model types for word cloud links.
//!
//! This module contains the types carried by a link:
//! - Word entries (ordered text/weight pairs)
//! - Settings (flat optional keys) and their tagged color view
//! - Builders (ergonomic construction)
//! - Palette resolution for the renderer hand-off

pub mod builder;
pub mod color;
pub mod palette;
pub mod settings;
pub mod word;

pub use builder::SettingsBuilder;
pub use color::ColorMode;
pub use palette::{ColorScheme, Palette, RenderConfig, normalize_hue, resolve_palette};
pub use settings::{SettingKey, SettingValue, Settings, ValueKind};
pub use word::WordEntry;
