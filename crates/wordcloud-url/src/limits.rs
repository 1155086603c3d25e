//! Security limits for decoding untrusted URLs.
//!
//! Shared links are external input; these bounds keep a hostile `c` token
//! from expanding into unbounded memory or recursion.

/// Maximum number of condensed hops followed while parsing.
///
/// Builders only ever produce one hop; anything deeper is rejected.
pub const MAX_CONDENSED_DEPTH: usize = 4;

/// Maximum length of a condensed token in characters.
pub const MAX_TOKEN_LEN: usize = 64 * 1024;

/// Maximum size of a decompressed query string in bytes.
pub const MAX_DECOMPRESSED_SIZE: usize = 1024 * 1024;

/// Default raw deflate compression level (0-9).
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 9;
