//! Raw (headerless) DEFLATE adapter for query strings.

use std::io::{Read, Write};

use flate2::Compression;
use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;

use crate::error::{DecodeError, EncodeError};
use crate::limits::MAX_DECOMPRESSED_SIZE;

/// Compresses the UTF-8 bytes of a query string with raw DEFLATE.
pub fn compress(text: &str, level: u32) -> Result<Vec<u8>, EncodeError> {
    let mut encoder = DeflateEncoder::new(
        Vec::with_capacity(text.len() / 2 + 16),
        Compression::new(level.min(9)),
    );
    encoder
        .write_all(text.as_bytes())
        .map_err(|e| EncodeError::CompressionFailed(e.to_string()))?;
    encoder
        .finish()
        .map_err(|e| EncodeError::CompressionFailed(e.to_string()))
}

/// Decompresses raw DEFLATE data back into a query string.
///
/// Output is capped at [`MAX_DECOMPRESSED_SIZE`] bytes.
pub fn decompress(compressed: &[u8]) -> Result<String, DecodeError> {
    let limit = MAX_DECOMPRESSED_SIZE as u64;
    let mut decoder = DeflateDecoder::new(compressed).take(limit + 1);

    let mut decompressed = Vec::with_capacity(compressed.len() * 4);
    decoder
        .read_to_end(&mut decompressed)
        .map_err(|e| DecodeError::DecompressionFailed(e.to_string()))?;

    if decompressed.len() > MAX_DECOMPRESSED_SIZE {
        return Err(DecodeError::LengthExceedsLimit {
            field: "decompressed query",
            len: decompressed.len(),
            max: MAX_DECOMPRESSED_SIZE,
        });
    }

    String::from_utf8(decompressed).map_err(|_| DecodeError::InvalidUtf8)
}
