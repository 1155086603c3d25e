//! Utility modules for word cloud links.

pub mod text;

pub use text::{
    TextOptions, format_manual_entry, frequencies_from_text, is_stopword, normalize_weights,
    parse_manual_entry, word_frequencies,
};
