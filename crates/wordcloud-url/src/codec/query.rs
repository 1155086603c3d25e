//! Query string parsing (string to settings and words).
//!
//! A query either carries a non-empty `c` token, which is expanded and
//! parsed in its place, or verbose key/value pairs read through the
//! parameter schema. Unrecognized keys are ignored.
//!
//! Shared links are untrusted, so [`parse_params`] never fails: a token
//! that cannot be decoded yields empty parameters.

use rustc_hash::FxHashMap;
use tracing::{debug, trace, warn};
use url::form_urlencoded;

use crate::codec::compress::decompress;
use crate::codec::params::{self, CONDENSED_KEY, WORDS_KEY};
use crate::codec::token::decode_token;
use crate::error::DecodeError;
use crate::limits::{MAX_CONDENSED_DEPTH, MAX_TOKEN_LEN};
use crate::model::{Settings, WordEntry};

/// Settings and words recovered from a query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UrlParams {
    pub settings: Settings,
    /// `None` when the query has no `w` key.
    pub words: Option<Vec<WordEntry>>,
}

impl UrlParams {
    /// Returns true if nothing was recovered.
    pub fn is_empty(&self) -> bool {
        self.settings.is_empty() && self.words.is_none()
    }
}

/// Parses a query string, with or without the leading `?`.
pub fn parse_params(query: &str) -> UrlParams {
    parse_at_depth(query, 0)
}

/// Parses the query part of a full URL. The fragment is ignored.
pub fn parse_url(url: &str) -> UrlParams {
    let without_fragment = url.split_once('#').map_or(url, |(head, _)| head);
    match without_fragment.split_once('?') {
        Some((_, query)) => parse_params(query),
        None => UrlParams::default(),
    }
}

/// Expands a condensed token into the verbose query string it carries.
pub fn decode_condensed(token: &str) -> Result<String, DecodeError> {
    if token.len() > MAX_TOKEN_LEN {
        return Err(DecodeError::LengthExceedsLimit {
            field: "condensed token",
            len: token.len(),
            max: MAX_TOKEN_LEN,
        });
    }
    let compressed = decode_token(token)?;
    decompress(&compressed)
}

fn parse_at_depth(query: &str, depth: usize) -> UrlParams {
    let query = query.strip_prefix('?').unwrap_or(query);

    // first occurrence of a key wins
    let mut pairs: FxHashMap<String, String> = FxHashMap::default();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        if !params::is_recognized(&key) {
            trace!(key = %key, "ignoring unrecognized parameter");
            continue;
        }
        pairs.entry(key.into_owned()).or_insert_with(|| value.into_owned());
    }

    if let Some(token) = pairs.get(CONDENSED_KEY).filter(|t| !t.is_empty()) {
        return match expand_at_depth(token, depth) {
            Ok(inner) => {
                debug!(depth, len = inner.len(), "expanded condensed token");
                parse_at_depth(&inner, depth + 1)
            }
            Err(err) => {
                warn!(error = %err, "ignoring undecodable condensed token");
                UrlParams::default()
            }
        };
    }

    parse_verbose(&pairs)
}

fn expand_at_depth(token: &str, depth: usize) -> Result<String, DecodeError> {
    if depth >= MAX_CONDENSED_DEPTH {
        return Err(DecodeError::NestingTooDeep {
            depth: depth + 1,
            max: MAX_CONDENSED_DEPTH,
        });
    }
    decode_condensed(token)
}

fn parse_verbose(pairs: &FxHashMap<String, String>) -> UrlParams {
    let mut settings = Settings::default();

    for (wire, raw) in pairs {
        if let Some(key) = params::lookup(wire) {
            settings.set(key, params::decode_value(key.kind(), raw));
        }
    }

    // a legacy alias only fills in when its canonical key is absent
    for (wire, raw) in pairs {
        let Some(canonical) = params::resolve_alias(wire) else {
            continue;
        };
        if pairs.contains_key(canonical) {
            continue;
        }
        if let Some(key) = params::lookup(canonical) {
            settings.set(key, params::decode_value(key.kind(), raw));
        }
    }

    let words = pairs.get(WORDS_KEY).map(|raw| params::decode_words(raw));

    UrlParams { settings, words }
}
