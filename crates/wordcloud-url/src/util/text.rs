//! Turning raw text into word lists.
//!
//! These helpers sit outside the wire codec: the codec never merges or
//! filters words, it only carries what it is given.

use std::collections::HashSet;

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::codec::primitives::{format_number, parse_float};
use crate::model::WordEntry;

lazy_static! {
    static ref ENGLISH_STOPWORDS: HashSet<&'static str> = [
        "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any",
        "are", "as", "at", "be", "because", "been", "before", "being", "below", "between",
        "both", "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during",
        "each", "few", "for", "from", "further", "had", "has", "have", "having", "he", "her",
        "here", "hers", "herself", "him", "himself", "his", "how", "i", "if", "in", "into",
        "is", "it", "its", "itself", "just", "me", "more", "most", "my", "myself", "no", "nor",
        "not", "now", "of", "off", "on", "once", "only", "or", "other", "our", "ours",
        "ourselves", "out", "over", "own", "same", "she", "should", "so", "some", "such",
        "than", "that", "the", "their", "theirs", "them", "themselves", "then", "there",
        "these", "they", "this", "those", "through", "to", "too", "under", "until", "up",
        "very", "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom",
        "why", "will", "with", "would", "you", "your", "yours", "yourself", "yourselves",
    ]
    .into_iter()
    .collect();
}

/// Options for [`frequencies_from_text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextOptions {
    /// Stopword language code (`en`, `en-GB`, ...). Only English has a
    /// built-in list; for any other language no stopwords are removed.
    pub language: String,
    pub remove_stopwords: bool,
    /// Extra words to drop (compared lowercase).
    pub blocked_words: Vec<String>,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            remove_stopwords: true,
            blocked_words: Vec::new(),
        }
    }
}

/// Returns the stopword list for a language code, if one is built in.
fn stopwords(language: &str) -> Option<&'static HashSet<&'static str>> {
    let primary = language.split(['-', '_']).next().unwrap_or_default();
    if primary.eq_ignore_ascii_case("en") {
        Some(&*ENGLISH_STOPWORDS)
    } else {
        None
    }
}

/// Returns true if the word is on the stopword list for `language`.
pub fn is_stopword(word: &str, language: &str) -> bool {
    stopwords(language).is_some_and(|list| list.contains(word))
}

/// Counts lowercase occurrences, in order of first appearance.
pub fn word_frequencies<S: AsRef<str>>(words: &[S]) -> Vec<WordEntry> {
    let mut index: FxHashMap<String, usize> = FxHashMap::default();
    let mut entries: Vec<WordEntry> = Vec::new();

    for word in words {
        let word = word.as_ref().to_lowercase();
        match index.get(&word) {
            Some(&i) => entries[i].weight += 1.0,
            None => {
                index.insert(word.clone(), entries.len());
                entries.push(WordEntry::new(word, 1.0));
            }
        }
    }

    entries
}

/// Splits text on non-word characters, filters it, and counts the words.
pub fn frequencies_from_text(text: &str, options: &TextOptions) -> Vec<WordEntry> {
    let lowered = text.to_lowercase();
    if options.remove_stopwords && stopwords(&options.language).is_none() {
        debug!(language = %options.language, "no stopword list for language, keeping all words");
    }
    let blocked: HashSet<String> = options
        .blocked_words
        .iter()
        .map(|w| w.to_lowercase())
        .collect();

    let tokens: Vec<&str> = lowered
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| !t.is_empty())
        .filter(|t| !(options.remove_stopwords && is_stopword(t, &options.language)))
        .filter(|t| !blocked.contains(*t))
        .collect();

    word_frequencies(&tokens)
}

/// Rescales weights linearly into `[min, max]`.
///
/// When every weight is equal they all become `min`.
pub fn normalize_weights(words: &[WordEntry], min: f64, max: f64) -> Vec<WordEntry> {
    let lowest = words.iter().map(|w| w.weight).fold(f64::INFINITY, f64::min);
    let highest = words.iter().map(|w| w.weight).fold(f64::NEG_INFINITY, f64::max);

    words
        .iter()
        .map(|w| {
            let weight = if highest == lowest {
                min
            } else {
                (w.weight - lowest) / (highest - lowest) * (max - min) + min
            };
            WordEntry::new(w.text.clone(), weight)
        })
        .collect()
}

/// Parses the manual entry layout: `word weight word weight ...`.
///
/// A token followed by a numeric token takes it as its weight; otherwise
/// the weight is 1. Repeated words stay separate entries.
pub fn parse_manual_entry(input: &str) -> Vec<WordEntry> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let mut words = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        let weight = tokens.get(i + 1).map(|t| parse_float(t)).filter(|w| !w.is_nan());
        match weight {
            Some(weight) => {
                words.push(WordEntry::new(tokens[i], weight));
                i += 2;
            }
            None => {
                words.push(WordEntry::new(tokens[i], 1.0));
                i += 1;
            }
        }
    }

    words
}

/// Formats words in the manual entry layout.
pub fn format_manual_entry(words: &[WordEntry]) -> String {
    words
        .iter()
        .map(|w| format!("{} {}", w.text, format_number(w.weight)))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_frequencies() {
        let words = word_frequencies(&["Cat", "dog", "cat", "CAT"]);
        assert_eq!(words, vec![WordEntry::new("cat", 3.0), WordEntry::new("dog", 1.0)]);
    }

    #[test]
    fn test_frequencies_from_text() {
        let text = "The quick fox, the lazy dog -- and the QUICK fox!";
        let words = frequencies_from_text(text, &TextOptions::default());
        assert_eq!(
            words,
            vec![
                WordEntry::new("quick", 2.0),
                WordEntry::new("fox", 2.0),
                WordEntry::new("lazy", 1.0),
                WordEntry::new("dog", 1.0),
            ]
        );
    }

    #[test]
    fn test_frequencies_keep_stopwords_when_asked() {
        let options = TextOptions {
            remove_stopwords: false,
            ..TextOptions::default()
        };
        let words = frequencies_from_text("the cat", &options);
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn test_stopwords_follow_language() {
        assert!(is_stopword("the", "en"));
        assert!(is_stopword("the", "en-US"));
        assert!(!is_stopword("the", "de"));
        assert!(!is_stopword("cat", "en"));

        let options = TextOptions {
            language: "fr".to_string(),
            ..TextOptions::default()
        };
        let words = frequencies_from_text("the cat", &options);
        assert_eq!(words, vec![WordEntry::new("the", 1.0), WordEntry::new("cat", 1.0)]);
    }

    #[test]
    fn test_blocked_words() {
        let options = TextOptions {
            blocked_words: vec!["Darn".to_string()],
            ..TextOptions::default()
        };
        let words = frequencies_from_text("darn cat", &options);
        assert_eq!(words, vec![WordEntry::new("cat", 1.0)]);
    }

    #[test]
    fn test_normalize_weights() {
        let words = vec![WordEntry::new("a", 2.0), WordEntry::new("b", 4.0), WordEntry::new("c", 3.0)];
        let normalized = normalize_weights(&words, 1.0, 10.0);
        let weights: Vec<f64> = normalized.iter().map(|w| w.weight).collect();
        assert_eq!(weights, vec![1.0, 10.0, 5.5]);

        let flat = normalize_weights(&[WordEntry::new("a", 7.0), WordEntry::new("b", 7.0)], 1.0, 10.0);
        assert!(flat.iter().all(|w| w.weight == 1.0));

        assert!(normalize_weights(&[], 1.0, 10.0).is_empty());
    }

    #[test]
    fn test_manual_entry_keeps_duplicates() {
        let words = parse_manual_entry("cat 1 cat 2");
        assert_eq!(words, vec![WordEntry::new("cat", 1.0), WordEntry::new("cat", 2.0)]);
    }

    #[test]
    fn test_manual_entry_default_weight() {
        let words = parse_manual_entry("apple 3 banana orange 5\n");
        assert_eq!(
            words,
            vec![
                WordEntry::new("apple", 3.0),
                WordEntry::new("banana", 1.0),
                WordEntry::new("orange", 5.0),
            ]
        );
        assert!(parse_manual_entry("   ").is_empty());
    }

    #[test]
    fn test_manual_entry_roundtrip() {
        let words = vec![WordEntry::new("apple", 3.0), WordEntry::new("pie", 0.5)];
        let text = format_manual_entry(&words);
        assert_eq!(text, "apple 3 pie 0.5");
        assert_eq!(parse_manual_entry(&text), words);
    }
}
