//! Query string encoding/decoding for word cloud links.
//!
//! Leaf first: `token` (bytes to URL-safe text), `compress` (raw DEFLATE),
//! `primitives` (numbers and escaping), `params` (the wire schema), then the
//! two directions: `query` parses, `url` builds.

pub mod compress;
pub mod params;
pub mod primitives;
pub mod query;
pub mod token;
pub mod url;

pub use compress::{compress, decompress};
pub use query::{UrlParams, decode_condensed, parse_params, parse_url};
pub use token::{decode_token, encode_token};
pub use url::{
    BuildOptions, BuiltUrl, UrlBuilder, encode_condensed_query, encode_verbose_query,
};
