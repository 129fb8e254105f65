//! Loaded literary work
//!
//! The unit the JavaScript shell hands to the typesetter: plain text plus
//! the ruby annotations extracted when the work was loaded. Reading
//! progress and persistence live on the JavaScript side.

use super::ruby::RubyAnnotation;
use crate::parse::aozora::ParsedText;
use serde::{Deserialize, Serialize};

/// A literary work ready for typesetting
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Work {
    /// Work title
    pub title: String,

    /// Author name (empty when unknown)
    #[serde(default)]
    pub author: String,

    /// Plain text with ruby markers removed; paragraphs delimited by '\n'
    pub text: String,

    /// Ruby annotations, offsets relative to `text`
    #[serde(default)]
    pub annotations: Vec<RubyAnnotation>,
}

impl Work {
    /// Create a work from already-separated text and annotations
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: String::new(),
            text: text.into(),
            annotations: Vec::new(),
        }
    }

    /// Build a work from parsed ruby source
    pub fn from_parsed(title: impl Into<String>, parsed: ParsedText) -> Self {
        Self {
            title: title.into(),
            author: String::new(),
            text: parsed.text,
            annotations: parsed.annotations,
        }
    }

    /// Number of non-blank paragraphs in the text
    pub fn paragraph_count(&self) -> usize {
        self.text
            .split('\n')
            .filter(|p| !p.trim().is_empty())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_count_skips_blank_lines() {
        let work = Work::new("test", "one\n\n  \ntwo\nthree");
        assert_eq!(work.paragraph_count(), 3);
    }
}
