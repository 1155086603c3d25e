//! Stateless word cloud links.
//!
//! This crate maps a word list and a set of visual settings to and from URL
//! query parameters, so a word cloud can be reproduced from a link alone.
//!
//! # Overview
//!
//! Two URL forms exist:
//! - **Verbose**: one short query parameter per present setting, then `w`
//!   with the word list (`?mh=55&so=0%2C-5%2C5&w=turkey%2C38%3Bgravy%2C7`)
//! - **Condensed**: a single `c` parameter holding the verbose query string,
//!   raw-deflated and encoded over a 64-symbol URL-safe alphabet
//!
//! Building validates the settings first, resolving conflicting color keys
//! by deletion and logging a warning for each one.
//!
//! # Quick Start
//!
//! ```rust
//! use wordcloud_url::{BuildOptions, SettingsBuilder, UrlBuilder, WordEntry, parse_url};
//!
//! let words = vec![WordEntry::new("turkey", 38.0), WordEntry::new("gravy", 7.0)];
//! let settings = SettingsBuilder::new()
//!     .monochrome_hue(55.0)
//!     .scheme_offsets([0.0, -5.0, 5.0])
//!     .build();
//!
//! let builder = UrlBuilder::new(BuildOptions::default());
//! let url = builder.verbose_url(&words, &settings);
//! assert_eq!(
//!     url,
//!     "http://localhost:3000/r?mh=55&so=0%2C-5%2C5&w=turkey%2C38%3Bgravy%2C7"
//! );
//!
//! let params = parse_url(&url);
//! assert_eq!(params.settings, settings);
//! assert_eq!(params.words, Some(words));
//! ```
//!
//! # Modules
//!
//! - [`model`]: Words, settings, color modes, palette resolution
//! - [`codec`]: Token codec, compression, wire schema, parser and builder
//! - [`validate`]: Conflict resolution between color keys
//! - [`util`]: Text to word list helpers
//! - [`error`]: Error types
//! - [`limits`]: Security limits for decoding
//!
//! # Security
//!
//! Links are untrusted input. [`parse_params`] never fails or panics:
//! malformed condensed tokens decode to empty parameters, malformed numbers
//! to `NaN`, and decompression output and token nesting are bounded.

pub mod codec;
pub mod error;
pub mod limits;
pub mod model;
pub mod util;
pub mod validate;

// Re-export commonly used types at crate root
pub use codec::{
    BuildOptions, BuiltUrl, UrlBuilder, UrlParams, decode_condensed, encode_condensed_query,
    encode_verbose_query, parse_params, parse_url,
};
pub use error::{DecodeError, EncodeError, ErrorCode};
pub use model::{
    ColorMode, ColorScheme, Palette, RenderConfig, SettingKey, SettingValue, Settings,
    SettingsBuilder, WordEntry, resolve_palette,
};
pub use util::TextOptions;
pub use validate::{ConflictWarning, Validated, validate_settings};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
