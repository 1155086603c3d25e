//! Primitive text encodings for the query string wire format.
//!
//! Numbers are written and read the way browsers do it, so links built here
//! and links built by a browser page decode identically.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Characters escaped by `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

// =============================================================================
// PERCENT ESCAPING
// =============================================================================

/// Percent-escapes a query component.
pub fn escape_component(s: &str) -> String {
    utf8_percent_encode(s, COMPONENT).to_string()
}

/// Reverses [`escape_component`]. Invalid escapes are kept verbatim and
/// invalid UTF-8 is replaced.
pub fn unescape_component(s: &str) -> String {
    percent_decode_str(s).decode_utf8_lossy().into_owned()
}

// =============================================================================
// NUMBERS
// =============================================================================

/// Formats a number like `Number#toString`: no trailing `.0`, `NaN`, `Infinity`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if value == 0.0 {
        // JS prints negative zero as "0"
        "0".to_string()
    } else {
        format!("{}", value)
    }
}

/// Formats a list of numbers joined with commas.
pub fn format_number_list(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format_number(*v))
        .collect::<Vec<_>>()
        .join(",")
}

/// Parses the longest numeric prefix, like `parseFloat`. Returns `NaN` if
/// there is none.
pub fn parse_float(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

/// Parses a leading base-10 integer, like `parseInt(s, 10)`. Returns `NaN`
/// if there is none.
pub fn parse_int(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let sign_len = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = count_digits(&bytes[sign_len..]);
    if digits == 0 {
        return f64::NAN;
    }
    s[..sign_len + digits].parse().unwrap_or(f64::NAN)
}

/// Parses a whole string as a number, like `Number(s)`: surrounding
/// whitespace is ignored, an empty string is 0, anything else that is not
/// a decimal literal is `NaN`.
pub fn parse_number(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }
    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    // Rust accepts "inf"/"nan" spellings that JS does not
    if !s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return f64::NAN;
    }
    s.parse().unwrap_or(f64::NAN)
}

/// Parses a comma-separated list with [`parse_number`]. An empty string is
/// an empty list.
pub fn parse_number_list(s: &str) -> Vec<f64> {
    if s.is_empty() {
        return Vec::new();
    }
    s.split(',').map(parse_number).collect()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
