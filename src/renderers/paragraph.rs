//! Paragraph typesetting
//!
//! This module contains the main entry point for typesetting: it takes the
//! plain text of a work plus its ruby annotations and produces one escaped,
//! wrap-safe HTML fragment per paragraph. Ruby spans render atomically,
//! prohibited character pairs are fused into non-breaking units, and all
//! literal text is escaped on the way out.
//!
//! The typesetter decides which adjacent characters must never be separated
//! by a line break; the actual wrapping is done by the host layout engine.

use super::errors::TypesetError;
use super::escape::{escape_char, escape_html};
use super::kinsoku::{is_line_end_prohibited, is_line_start_prohibited};
use crate::models::ruby::RubyAnnotation;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Class on each paragraph container element
const PARAGRAPH_CLASS: &str = "paragraph";

/// Class on each non-breaking character pair
const NO_BREAK_CLASS: &str = "no-break";

/// Configuration for typesetting
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct TypesetOptions {
    /// Whether dropped blank paragraphs still advance the annotation offset
    /// accumulator by their own length plus the stripped newline.
    ///
    /// Defaults to `false`: blank paragraphs are filtered out before the
    /// accumulator runs, so their characters are never reflected in the
    /// offsets matched against annotation `start` values. Callers whose
    /// annotation offsets were computed against the unfiltered source text
    /// should set this to `true`.
    #[serde(default)]
    pub count_blank_paragraphs: bool,
}

/// Lookup from character offset to the annotation starting there.
///
/// Built once per typesetting call; building doubles as the validation pass
/// that keeps the scan total (a zero-length base would stall the cursor).
struct AnnotationIndex<'a> {
    by_start: HashMap<usize, &'a RubyAnnotation>,
}

impl<'a> AnnotationIndex<'a> {
    /// Validate annotations and index them by start offset
    fn build(annotations: &'a [RubyAnnotation]) -> Result<Self, TypesetError> {
        let mut by_start = HashMap::with_capacity(annotations.len());

        for ann in annotations {
            if ann.base.is_empty() {
                return Err(TypesetError::EmptyBase { start: ann.start });
            }
            if ann.ruby.is_empty() {
                return Err(TypesetError::EmptyReading { start: ann.start });
            }
            if by_start.insert(ann.start, ann).is_some() {
                return Err(TypesetError::DuplicateStart { start: ann.start });
            }
        }

        Ok(Self { by_start })
    }

    /// Annotation whose base text begins at `offset`, if any
    fn at(&self, offset: usize) -> Option<&'a RubyAnnotation> {
        self.by_start.get(&offset).copied()
    }
}

/// Main typesetting engine
///
/// Pure and stateless between calls: the same `(text, annotations)` input
/// always produces byte-identical output.
pub struct Typesetter {
    options: TypesetOptions,
}

impl Typesetter {
    /// Create a typesetter with default options
    pub fn new() -> Self {
        Self {
            options: TypesetOptions::default(),
        }
    }

    /// Create a typesetter with explicit options
    pub fn with_options(options: TypesetOptions) -> Self {
        Self { options }
    }

    /// Typeset a whole work into one markup string.
    ///
    /// Paragraphs are delimited by single newline characters; paragraphs
    /// that are whitespace-only after trimming are dropped and contribute
    /// no fragment. Annotation offsets are character offsets into the
    /// original newline-delimited text.
    pub fn process_paragraphs(
        &self,
        text: &str,
        annotations: &[RubyAnnotation],
    ) -> Result<String, TypesetError> {
        Ok(self.typeset_fragments(text, annotations)?.concat())
    }

    /// Typeset a work into one fragment per kept paragraph, in input order
    pub fn typeset_fragments(
        &self,
        text: &str,
        annotations: &[RubyAnnotation],
    ) -> Result<Vec<String>, TypesetError> {
        let index = AnnotationIndex::build(annotations)?;

        let mut fragments = Vec::new();
        let mut offset = 0;

        for paragraph in text.split('\n') {
            if paragraph.trim().is_empty() {
                if self.options.count_blank_paragraphs {
                    offset += paragraph.chars().count() + 1;
                }
                continue;
            }

            let (fragment, next_offset) = typeset_with_index(paragraph, &index, offset);
            fragments.push(fragment);
            offset = next_offset;
        }

        Ok(fragments)
    }

    /// Typeset a single paragraph starting at an explicit character offset.
    ///
    /// Exposed so one paragraph can be checked in isolation; `start_offset`
    /// is the cumulative character count of all prior paragraphs plus one
    /// per stripped newline.
    pub fn typeset_paragraph(
        &self,
        paragraph: &str,
        annotations: &[RubyAnnotation],
        start_offset: usize,
    ) -> Result<String, TypesetError> {
        let index = AnnotationIndex::build(annotations)?;
        let (fragment, _) = typeset_with_index(paragraph, &index, start_offset);
        Ok(fragment)
    }
}

impl Default for Typesetter {
    fn default() -> Self {
        Self::new()
    }
}

/// Typeset one paragraph, returning its fragment and the next paragraph's
/// starting offset (paragraph length plus one for the stripped newline)
fn typeset_with_index(
    paragraph: &str,
    index: &AnnotationIndex,
    start_offset: usize,
) -> (String, usize) {
    let chars: Vec<char> = paragraph.chars().collect();

    let mut out = String::with_capacity(paragraph.len() * 2);
    out.push_str(&format!("<p class=\"{}\">", PARAGRAPH_CLASS));

    let mut local = 0;
    while local < chars.len() {
        let (markup, advance) = emit_at(&chars, local, start_offset + local, index);
        out.push_str(&markup);

        // Validation rejected empty bases, so every step advances.
        debug_assert!(advance > 0, "scan cursor must advance");
        local += advance.max(1);
    }

    out.push_str("</p>");
    (out, start_offset + chars.len() + 1)
}

/// Decide what to emit at one scan position.
///
/// Returns the markup for the position and the number of characters
/// consumed. Precedence is fixed: a ruby annotation beats both prohibition
/// rules, and the end-prohibition check on the current character beats the
/// start-prohibition check on the next one, so an eligible pair is grouped
/// once, not twice.
fn emit_at(
    chars: &[char],
    local: usize,
    global: usize,
    index: &AnnotationIndex,
) -> (String, usize) {
    if let Some(ann) = index.at(global) {
        return (ruby_markup(ann), ann.base_len());
    }

    let cur = chars[local];
    match chars.get(local + 1).copied() {
        Some(next) if is_line_end_prohibited(cur) => (no_break_markup(cur, next), 2),
        Some(next) if is_line_start_prohibited(next) => (no_break_markup(cur, next), 2),
        // A trailing prohibited character has nothing to fuse with.
        _ => (escape_char(cur), 1),
    }
}

/// Markup for a ruby span: escaped base with the escaped reading attached
fn ruby_markup(ann: &RubyAnnotation) -> String {
    format!(
        "<ruby>{}<rt>{}</rt></ruby>",
        escape_html(&ann.base),
        escape_html(&ann.ruby)
    )
}

/// Markup for a non-breaking character pair
fn no_break_markup(a: char, b: char) -> String {
    format!(
        "<span class=\"{}\">{}{}</span>",
        NO_BREAK_CLASS,
        escape_char(a),
        escape_char(b)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_threading_across_paragraphs() {
        // Annotation targets the first character of the second paragraph:
        // offset 3 = "親は" (2 chars) + 1 stripped newline.
        let annotations = vec![RubyAnnotation::new(3, "二", "ふた")];
        let out = Typesetter::new()
            .process_paragraphs("親は\n二人", &annotations)
            .unwrap();

        assert!(out.contains("<ruby>二<rt>ふた</rt></ruby>"));
    }

    #[test]
    fn test_single_paragraph_with_explicit_offset() {
        let annotations = vec![RubyAnnotation::new(10, "山", "やま")];
        let out = Typesetter::new()
            .typeset_paragraph("山に登る", &annotations, 10)
            .unwrap();

        assert!(out.starts_with("<p class=\"paragraph\">"));
        assert!(out.contains("<ruby>山<rt>やま</rt></ruby>"));
    }

    #[test]
    fn test_duplicate_start_rejected() {
        let annotations = vec![
            RubyAnnotation::new(0, "山", "やま"),
            RubyAnnotation::new(0, "川", "かわ"),
        ];
        let err = Typesetter::new()
            .process_paragraphs("山川", &annotations)
            .unwrap_err();
        assert_eq!(err, TypesetError::DuplicateStart { start: 0 });
    }

    #[test]
    fn test_empty_base_rejected() {
        let annotations = vec![RubyAnnotation::new(0, "", "よみ")];
        let err = Typesetter::new()
            .process_paragraphs("text", &annotations)
            .unwrap_err();
        assert_eq!(err, TypesetError::EmptyBase { start: 0 });
    }

    #[test]
    fn test_blank_paragraph_offset_policy() {
        // Default: blank paragraphs advance nothing, so the annotation for
        // the second kept paragraph sits at 2 ("A" + newline).
        let annotations = vec![RubyAnnotation::new(2, "B", "ビー")];
        let out = Typesetter::new()
            .process_paragraphs("A\n\nB", &annotations)
            .unwrap();
        assert!(out.contains("<ruby>B<rt>ビー</rt></ruby>"));

        // Opt-in counting: the blank line contributes its own length + 1,
        // so the same annotation must move to offset 3.
        let annotations = vec![RubyAnnotation::new(3, "B", "ビー")];
        let typesetter = Typesetter::with_options(TypesetOptions {
            count_blank_paragraphs: true,
        });
        let out = typesetter.process_paragraphs("A\n\nB", &annotations).unwrap();
        assert!(out.contains("<ruby>B<rt>ビー</rt></ruby>"));
    }
}
