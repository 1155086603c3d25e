//! Error types for word cloud URL encoding and decoding.

use thiserror::Error;

/// Stable error codes for decode failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// E001: Token contains a symbol outside the URL-safe alphabet
    InvalidCharacter,
    /// E002: Compressed payload is malformed
    Decompression,
    /// E003: Decompressed payload is not UTF-8
    InvalidUtf8,
    /// E004: Input exceeds a decoding limit
    LimitExceeded,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::InvalidCharacter => "E001",
            ErrorCode::Decompression => "E002",
            ErrorCode::InvalidUtf8 => "E003",
            ErrorCode::LimitExceeded => "E004",
        }
    }
}

/// Error while decoding a condensed token.
///
/// None of these ever escape [`crate::codec::parse_params`]; the parser
/// logs them and returns empty parameters instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("[E001] invalid character {character:?} at position {position} in condensed token")]
    InvalidCharacter { character: char, position: usize },

    #[error("[E002] raw deflate decompression failed: {0}")]
    DecompressionFailed(String),

    #[error("[E003] decompressed query string is not valid UTF-8")]
    InvalidUtf8,

    #[error("[E004] {field} length {len} exceeds maximum {max}")]
    LengthExceedsLimit {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("[E004] condensed tokens nested {depth} levels deep (maximum {max})")]
    NestingTooDeep { depth: usize, max: usize },
}

impl DecodeError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DecodeError::InvalidCharacter { .. } => ErrorCode::InvalidCharacter,
            DecodeError::DecompressionFailed(_) => ErrorCode::Decompression,
            DecodeError::InvalidUtf8 => ErrorCode::InvalidUtf8,
            DecodeError::LengthExceedsLimit { .. } | DecodeError::NestingTooDeep { .. } => {
                ErrorCode::LimitExceeded
            }
        }
    }
}

/// Error while building a URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("raw deflate compression failed: {0}")]
    CompressionFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DecodeError::InvalidCharacter { character: '!', position: 0 };
        assert_eq!(err.code().code(), "E001");
        assert_eq!(DecodeError::DecompressionFailed("x".into()).code().code(), "E002");
        assert_eq!(DecodeError::InvalidUtf8.code().code(), "E003");
        assert_eq!(DecodeError::NestingTooDeep { depth: 5, max: 4 }.code(), ErrorCode::LimitExceeded);
    }

    #[test]
    fn test_display_carries_code_prefix() {
        let err = DecodeError::InvalidCharacter { character: '!', position: 3 };
        let msg = err.to_string();
        assert!(msg.starts_with("[E001]"));
        assert!(msg.contains("position 3"));
    }
}
