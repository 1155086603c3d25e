//! Word entries carried alongside the settings.

use serde::{Deserialize, Serialize};

/// One word and its display weight.
///
/// List order is significant: the renderer breaks ties between equal
/// weights by position, so every codec path preserves it exactly.
/// Weights are not checked here; a `NaN` weight decoded from a malformed
/// link is passed through for the renderer to reject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordEntry {
    pub text: String,
    pub weight: f64,
}

impl WordEntry {
    /// Creates a new word entry.
    pub fn new(text: impl Into<String>, weight: f64) -> Self {
        Self {
            text: text.into(),
            weight,
        }
    }

    /// Returns true if the text is non-empty after trimming and the weight is finite.
    pub fn is_renderable(&self) -> bool {
        !self.text.trim().is_empty() && self.weight.is_finite()
    }
}

impl<S: Into<String>> From<(S, f64)> for WordEntry {
    fn from((text, weight): (S, f64)) -> Self {
        Self::new(text, weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renderable() {
        assert!(WordEntry::new("turkey", 38.0).is_renderable());
        assert!(!WordEntry::new("  ", 1.0).is_renderable());
        assert!(!WordEntry::new("gravy", f64::NAN).is_renderable());
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_string(&WordEntry::new("cat", 2.0)).unwrap();
        assert_eq!(json, r#"{"text":"cat","weight":2.0}"#);
    }
}
