//! The parameter schema: wire keys and per-key value encodings.
//!
//! Every settings key has one short wire key. The table order is the order
//! keys appear in a verbose URL; the word list (`w`) is always written last.
//!
//! Value encodings, before query-string escaping:
//! - text (`fg`, `bg`, `ff`, `mw`): the string itself
//! - degrees (`mh`, `fh`, `bh`): integer text, read with `parseInt` rules
//! - numbers (`wf`, `r`, `fs`, `bs`): decimal text, read with `parseFloat` rules
//! - number lists (`h`, `so`): comma-joined decimals
//! - flag (`dm`): `1` is true, any other value is false
//! - words (`w`): `;`-joined `text,weight` pairs, with `text` escaped on its own

use crate::codec::primitives::{
    escape_component, format_number, format_number_list, parse_float, parse_int,
    parse_number_list, unescape_component,
};
use crate::model::{SettingKey, SettingValue, ValueKind, WordEntry};

/// Wire key of the word list.
pub const WORDS_KEY: &str = "w";

/// Wire key of a condensed token.
pub const CONDENSED_KEY: &str = "c";

/// One row of the schema table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub wire: &'static str,
    pub key: SettingKey,
}

/// Schema table, in serialization order.
pub const SCHEMA: [ParamSpec; 14] = [
    ParamSpec { wire: "fg", key: SettingKey::ForegroundColor },
    ParamSpec { wire: "bg", key: SettingKey::BackgroundColor },
    ParamSpec { wire: "h", key: SettingKey::Hues },
    ParamSpec { wire: "mh", key: SettingKey::MonochromeHue },
    ParamSpec { wire: "fh", key: SettingKey::ForegroundHue },
    ParamSpec { wire: "so", key: SettingKey::SchemeOffsets },
    ParamSpec { wire: "bh", key: SettingKey::BackgroundHue },
    ParamSpec { wire: "dm", key: SettingKey::DarkMode },
    ParamSpec { wire: "ff", key: SettingKey::FontFamily },
    ParamSpec { wire: "wf", key: SettingKey::WeightFactor },
    ParamSpec { wire: "r", key: SettingKey::RotateRatio },
    ParamSpec { wire: "mw", key: SettingKey::MinWidth },
    ParamSpec { wire: "fs", key: SettingKey::ForegroundSaturation },
    ParamSpec { wire: "bs", key: SettingKey::BackgroundSaturation },
];

/// Legacy wire keys still accepted on decode, mapped to their current key.
///
/// Previously issued links use these; new links never do. A canonical key
/// on the same query string wins over its alias.
pub const ALIASES: [(&str, &str); 1] = [("sh", "fh")];

/// Returns the wire key for a settings key.
pub fn wire_key(key: SettingKey) -> &'static str {
    SCHEMA
        .iter()
        .find(|spec| spec.key == key)
        .map(|spec| spec.wire)
        .unwrap_or_default()
}

/// Resolves a canonical wire key (aliases are not accepted here).
pub fn lookup(wire: &str) -> Option<SettingKey> {
    SCHEMA.iter().find(|spec| spec.wire == wire).map(|spec| spec.key)
}

/// Resolves a legacy alias to its canonical wire key.
pub fn resolve_alias(wire: &str) -> Option<&'static str> {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == wire)
        .map(|(_, canonical)| *canonical)
}

/// Returns true if the key is recognized (canonical, alias, `w` or `c`).
pub fn is_recognized(wire: &str) -> bool {
    wire == WORDS_KEY || wire == CONDENSED_KEY || lookup(wire).is_some() || resolve_alias(wire).is_some()
}

// =============================================================================
// ENCODING
// =============================================================================

/// Encodes a settings value of the given kind to its unescaped wire text.
///
/// Degrees are written as whole numbers so that [`decode_value`] reads back
/// exactly what was written.
pub fn encode_value(kind: ValueKind, value: &SettingValue) -> String {
    match value {
        SettingValue::Text(s) => s.clone(),
        SettingValue::Number(n) if kind == ValueKind::Degrees => format_number(n.trunc()),
        SettingValue::Number(n) => format_number(*n),
        SettingValue::NumberList(list) => format_number_list(list),
        SettingValue::Flag(b) => if *b { "1" } else { "0" }.to_string(),
    }
}

/// Encodes a word list to its unescaped wire text.
pub fn encode_words(words: &[WordEntry]) -> String {
    words
        .iter()
        .map(|w| format!("{},{}", escape_component(&w.text), format_number(w.weight)))
        .collect::<Vec<_>>()
        .join(";")
}

// =============================================================================
// DECODING
// =============================================================================

/// Decodes unescaped wire text into a value of the given kind.
///
/// Never fails: malformed numbers become `NaN`.
pub fn decode_value(kind: ValueKind, raw: &str) -> SettingValue {
    match kind {
        ValueKind::Text => SettingValue::Text(raw.to_string()),
        ValueKind::Degrees => SettingValue::Number(parse_int(raw)),
        ValueKind::Number => SettingValue::Number(parse_float(raw)),
        ValueKind::NumberList => SettingValue::NumberList(parse_number_list(raw)),
        ValueKind::Flag => SettingValue::Flag(raw == "1"),
    }
}

/// Decodes unescaped wire text into an ordered word list.
///
/// Order and duplicates are preserved. Empty segments (e.g. a trailing `;`)
/// are skipped; a pair without a parsable weight keeps a `NaN` weight.
///
/// Word text is unescaped once more here, so a link whose text was escaped
/// only once and literally contains `%XX` reads back with that sequence
/// decoded.
pub fn decode_words(raw: &str) -> Vec<WordEntry> {
    raw.split(';')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (text, weight) = match pair.split_once(',') {
                Some((text, weight)) => (text, parse_float(weight)),
                None => (pair, f64::NAN),
            };
            WordEntry::new(unescape_component(text), weight)
        })
        .collect()
}
