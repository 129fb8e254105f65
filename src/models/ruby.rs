//! Ruby (furigana) annotation model
//!
//! A ruby annotation attaches a phonetic reading to a span of base text,
//! addressed by character offset into the original newline-delimited text.
//! Annotations are produced by the content-loading stage and consumed
//! read-only by the typesetter; they are never retained across calls.

use serde::{Deserialize, Serialize};

/// A phonetic reading attached to a span of base text.
///
/// `start` is a character offset (not a byte offset) into the original,
/// unescaped text, pointing at the first character of `base`. Offsets are
/// computed against the newline-delimited text, one newline per paragraph
/// boundary.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RubyAnnotation {
    /// Character offset of the first base character
    pub start: usize,

    /// The text receiving the reading (one or more characters)
    pub base: String,

    /// The phonetic reading rendered alongside `base`
    pub ruby: String,
}

impl RubyAnnotation {
    /// Create a new annotation
    pub fn new(start: usize, base: impl Into<String>, ruby: impl Into<String>) -> Self {
        Self {
            start,
            base: base.into(),
            ruby: ruby.into(),
        }
    }

    /// Number of characters the base text spans in the source
    pub fn base_len(&self) -> usize {
        self.base.chars().count()
    }

    /// First character offset past the annotated span
    pub fn end(&self) -> usize {
        self.start + self.base_len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_len_counts_characters_not_bytes() {
        let ann = RubyAnnotation::new(4, "漢字", "かんじ");
        assert_eq!(ann.base_len(), 2);
        assert_eq!(ann.end(), 6);
    }

    #[test]
    fn test_serde_round_trip() {
        let ann = RubyAnnotation::new(0, "親", "おや");
        let json = serde_json::to_string(&ann).unwrap();
        let back: RubyAnnotation = serde_json::from_str(&json).unwrap();
        assert_eq!(ann, back);
    }
}
