//! Byte to text codec over a 64-symbol URL-safe alphabet.
//!
//! Bytes are read as one MSB-first bit string and cut into 6-bit symbols.
//! The last symbol is right-padded with zero bits. There is no `=` padding
//! and no character that needs escaping in a query string.
//!
//! Decoding drops any trailing group of fewer than 8 bits, since those are
//! the pad bits added on encode.

use crate::error::DecodeError;

/// The alphabet, indexed by 6-bit value.
pub const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

const INVALID: u8 = 0xFF;

/// Reverse lookup from ASCII byte to 6-bit value.
const LOOKUP: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 64 {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Encodes bytes into a URL-safe token.
pub fn encode_token(bytes: &[u8]) -> String {
    let mut out = String::with_capacity((bytes.len() * 8).div_ceil(6));
    let mut acc: u32 = 0;
    let mut bits = 0u32;

    for &byte in bytes {
        acc = (acc << 8) | u32::from(byte);
        bits += 8;
        while bits >= 6 {
            bits -= 6;
            out.push(ALPHABET[((acc >> bits) & 0x3F) as usize] as char);
        }
        acc &= (1 << bits) - 1;
    }
    if bits > 0 {
        out.push(ALPHABET[((acc << (6 - bits)) & 0x3F) as usize] as char);
    }

    out
}

/// Decodes a URL-safe token back into bytes.
///
/// Fails with [`DecodeError::InvalidCharacter`] on the first symbol outside
/// the alphabet.
pub fn decode_token(token: &str) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::with_capacity(token.len() * 6 / 8);
    let mut acc: u32 = 0;
    let mut bits = 0u32;

    for (position, character) in token.chars().enumerate() {
        let value = if character.is_ascii() {
            LOOKUP[character as usize]
        } else {
            INVALID
        };
        if value == INVALID {
            return Err(DecodeError::InvalidCharacter { character, position });
        }
        acc = (acc << 6) | u32::from(value);
        bits += 6;
        if bits >= 8 {
            bits -= 8;
            out.push((acc >> bits) as u8);
        }
        acc &= (1 << bits) - 1;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_roundtrip() {
        let inputs: [&[u8]; 6] = [b"", b"a", b"ab", b"abc", b"hello world", &[0, 255, 128, 1, 254]];
        for input in inputs {
            let encoded = encode_token(input);
            assert_eq!(decode_token(&encoded).unwrap(), input, "failed for {:?}", input);
        }
    }

    #[test]
    fn test_known_values() {
        // 0x00 -> 000000 00(0000)
        assert_eq!(encode_token(&[0x00]), "AA");
        // 0xFF -> 111111 11(0000)
        assert_eq!(encode_token(&[0xFF]), "_w");
        // three bytes fill exactly four symbols
        assert_eq!(encode_token(&[0xFF, 0xFF, 0xFF]), "____");
        assert_eq!(encode_token(b"Man"), "TWFu");
    }

    #[test]
    fn test_length() {
        for n in 0..20 {
            let bytes = vec![0xA5u8; n];
            assert_eq!(encode_token(&bytes).len(), (n * 8).div_ceil(6));
        }
    }

    #[test]
    fn test_trailing_pad_bits_dropped() {
        // one symbol is only 6 bits: not enough for a byte
        assert!(decode_token("A").unwrap().is_empty());
        // "AB" is 12 bits: one byte, 4 pad bits dropped
        assert_eq!(decode_token("AB").unwrap(), vec![0x00]);
    }

    #[test]
    fn test_invalid_character() {
        let result = decode_token("AB!C");
        assert_eq!(
            result,
            Err(DecodeError::InvalidCharacter { character: '!', position: 2 })
        );

        let result = decode_token("AAé");
        assert!(matches!(result, Err(DecodeError::InvalidCharacter { character: 'é', .. })));

        // standard base64 symbols are not in the alphabet
        assert!(decode_token("ab+/").is_err());
        assert!(decode_token("ab==").is_err());
    }
}
