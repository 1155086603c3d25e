//! URL building (settings and words to string).
//!
//! A verbose URL carries one parameter per present settings key, in schema
//! order, followed by the word list. A condensed URL carries a single `c`
//! parameter: the verbose query string, raw-deflated and token-encoded. The
//! condensed form is only used when it is strictly shorter.

use tracing::debug;

use crate::codec::compress::compress;
use crate::codec::params::{self, CONDENSED_KEY, WORDS_KEY};
use crate::codec::primitives::escape_component;
use crate::codec::token::encode_token;
use crate::error::EncodeError;
use crate::limits::DEFAULT_COMPRESSION_LEVEL;
use crate::model::{Settings, WordEntry};
use crate::util::text::{TextOptions, frequencies_from_text, normalize_weights};
use crate::validate::validate_settings;

/// Environment variable read by [`BuildOptions::from_env`].
pub const BASE_URL_ENV: &str = "WORDCLOUD_BASE_URL";

/// Default origin links point at.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Default path of the render page.
pub const DEFAULT_RENDER_PATH: &str = "/r";

/// Options for building URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Origin (scheme, host, port), without a trailing slash.
    pub base_url: String,
    /// Path of the render page, starting with `/`.
    pub render_path: String,
    /// Raw deflate level for condensed URLs (0-9).
    pub compression_level: u32,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            render_path: DEFAULT_RENDER_PATH.to_string(),
            compression_level: DEFAULT_COMPRESSION_LEVEL,
        }
    }
}

impl BuildOptions {
    /// Creates default build options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the base URL from `WORDCLOUD_BASE_URL`, falling back to the default.
    pub fn from_env() -> Self {
        let mut options = Self::default();
        if let Some(base) = std::env::var(BASE_URL_ENV).ok().filter(|v| !v.is_empty()) {
            options.base_url = base;
        }
        options
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_render_path(mut self, render_path: impl Into<String>) -> Self {
        self.render_path = render_path.into();
        self
    }

    pub fn with_compression_level(mut self, level: u32) -> Self {
        self.compression_level = level.min(9);
        self
    }

    /// Returns `base_url + render_path`, joined with exactly one slash.
    pub fn endpoint(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = self.render_path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }
}

/// A built URL and which form it uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltUrl {
    pub url: String,
    pub condensed: bool,
}

/// Builds shareable URLs from settings and words.
#[derive(Debug, Clone, Default)]
pub struct UrlBuilder {
    options: BuildOptions,
}

impl UrlBuilder {
    /// Creates a builder with the given options.
    pub fn new(options: BuildOptions) -> Self {
        Self { options }
    }

    /// Returns the options.
    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Builds the verbose URL.
    pub fn verbose_url(&self, words: &[WordEntry], settings: &Settings) -> String {
        self.with_endpoint(&encode_verbose_query(words, settings))
    }

    /// Builds the condensed URL, or the verbose URL when condensing would not
    /// make it shorter.
    pub fn condensed_url(&self, words: &[WordEntry], settings: &Settings) -> Result<String, EncodeError> {
        Ok(self.shortest_url(words, settings)?.url)
    }

    /// Like [`UrlBuilder::condensed_url`], also reporting which form was chosen.
    pub fn shortest_url(&self, words: &[WordEntry], settings: &Settings) -> Result<BuiltUrl, EncodeError> {
        let verbose = encode_verbose_query(words, settings);
        let condensed = encode_condensed_query(&verbose, self.options.compression_level)?;

        if condensed.len() < verbose.len() {
            debug!(
                saved = verbose.len() - condensed.len(),
                "using condensed url"
            );
            Ok(BuiltUrl {
                url: self.with_endpoint(&condensed),
                condensed: true,
            })
        } else {
            debug!(
                verbose = verbose.len(),
                condensed = condensed.len(),
                "condensed url is not shorter, keeping verbose"
            );
            Ok(BuiltUrl {
                url: self.with_endpoint(&verbose),
                condensed: false,
            })
        }
    }

    /// Builds a verbose URL straight from source text.
    ///
    /// Words are counted, filtered per `options`, and their weights
    /// normalized into 1..=10 before encoding.
    pub fn url_from_text(&self, text: &str, settings: &Settings, options: &TextOptions) -> String {
        let words = normalize_weights(&frequencies_from_text(text, options), 1.0, 10.0);
        self.verbose_url(&words, settings)
    }

    fn with_endpoint(&self, query: &str) -> String {
        format!("{}?{}", self.options.endpoint(), query)
    }
}

/// Validates settings and serializes them with the words as a verbose
/// query string (no leading `?`).
///
/// Every present key is written, including `false` and `0`; only absent
/// keys are left out. `w` is always last.
pub fn encode_verbose_query(words: &[WordEntry], settings: &Settings) -> String {
    let validated = validate_settings(settings);

    let mut parts: Vec<String> = validated
        .settings
        .entries()
        .map(|(key, value)| {
            format!(
                "{}={}",
                params::wire_key(key),
                escape_component(&params::encode_value(key.kind(), &value))
            )
        })
        .collect();
    parts.push(format!(
        "{}={}",
        WORDS_KEY,
        escape_component(&params::encode_words(words))
    ));

    parts.join("&")
}

/// Wraps a verbose query string as a `c=<token>` query string.
pub fn encode_condensed_query(verbose_query: &str, level: u32) -> Result<String, EncodeError> {
    let compressed = compress(verbose_query, level)?;
    Ok(format!("{}={}", CONDENSED_KEY, encode_token(&compressed)))
}
