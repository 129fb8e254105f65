//! Aozora-bunko style ruby markup parsing
//!
//! Literary source texts carry ruby inline in the Aozora-bunko convention:
//!
//! - `漢字《かんじ》` — the reading applies to the maximal run of kanji
//!   immediately before `《`;
//! - `｜青空《あおぞら》` — `｜` marks the start of the base explicitly, so
//!   the base may be any text.
//!
//! Parsing strips the markers and produces plain text plus a list of
//! [`RubyAnnotation`]s whose `start` offsets are character offsets into
//! that plain text — the convention the typesetter consumes.

use crate::models::ruby::RubyAnnotation;
use crate::utils::charclass::is_kanji;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Opens a ruby reading
const READING_OPEN: char = '《';

/// Closes a ruby reading
const READING_CLOSE: char = '》';

/// Marks the start of an explicit ruby base
const BASE_MARKER: char = '｜';

/// Ruby markup errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// `《` with no matching `》` before the end of the line
    #[error("ruby reading opened at character {offset} is never closed")]
    UnclosedReading { offset: usize },

    /// `《》` carries no reading text
    #[error("ruby reading at character {offset} is empty")]
    EmptyReading { offset: usize },

    /// `《…》` with no kanji run or base marker in front of it
    #[error("ruby reading at character {offset} has no base text")]
    MissingBase { offset: usize },

    /// `｜` with no `《…》` following it on the same line
    #[error("base marker at character {offset} has no reading")]
    DanglingBaseMarker { offset: usize },
}

/// Plain text with its extracted ruby annotations
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ParsedText {
    /// Source text with all ruby markers removed
    pub text: String,

    /// Annotations in source order, offsets relative to `text`
    pub annotations: Vec<RubyAnnotation>,
}

/// Parse Aozora-style ruby markup out of a source text.
///
/// Offsets in the returned annotations count characters, not bytes, and are
/// measured against the cleaned text including its newlines.
pub fn parse_ruby_text(source: &str) -> Result<ParsedText, ParseError> {
    let mut text = String::with_capacity(source.len());
    // Character length of `text`; cheaper than recounting per annotation
    let mut text_len = 0usize;
    let mut annotations = Vec::new();

    // Explicit base opened by `｜`: (start offset in `text`, base so far)
    let mut pending_base: Option<(usize, String)> = None;

    let mut chars = source.chars();
    // Offset into the source, for error reporting
    let mut src_pos = 0usize;

    while let Some(ch) = chars.next() {
        match ch {
            BASE_MARKER => {
                if let Some((start, _)) = pending_base {
                    return Err(ParseError::DanglingBaseMarker { offset: start });
                }
                pending_base = Some((text_len, String::new()));
            }
            READING_OPEN => {
                let open_pos = src_pos;
                let reading = collect_reading(&mut chars, open_pos, &mut src_pos)?;

                let (start, base) = match pending_base.take() {
                    Some(pending) => pending,
                    None => trailing_kanji_run(&text, text_len),
                };
                if base.is_empty() {
                    return Err(ParseError::MissingBase { offset: open_pos });
                }

                annotations.push(RubyAnnotation::new(start, base, reading));
            }
            '\n' => {
                if let Some((start, _)) = pending_base {
                    return Err(ParseError::DanglingBaseMarker { offset: start });
                }
                text.push('\n');
                text_len += 1;
            }
            other => {
                text.push(other);
                text_len += 1;
                if let Some((_, base)) = pending_base.as_mut() {
                    base.push(other);
                }
            }
        }
        src_pos += 1;
    }

    if let Some((start, _)) = pending_base {
        return Err(ParseError::DanglingBaseMarker { offset: start });
    }

    Ok(ParsedText { text, annotations })
}

/// Consume characters up to the closing `》` and return the reading
fn collect_reading(
    chars: &mut std::str::Chars,
    open_pos: usize,
    src_pos: &mut usize,
) -> Result<String, ParseError> {
    let mut reading = String::new();

    for ch in chars.by_ref() {
        *src_pos += 1;
        match ch {
            READING_CLOSE => {
                if reading.is_empty() {
                    return Err(ParseError::EmptyReading { offset: open_pos });
                }
                return Ok(reading);
            }
            '\n' => return Err(ParseError::UnclosedReading { offset: open_pos }),
            other => reading.push(other),
        }
    }

    Err(ParseError::UnclosedReading { offset: open_pos })
}

/// Maximal kanji run at the end of the cleaned text so far.
///
/// Returns the run's start offset and the run itself; an empty run means
/// the reading has nothing to attach to.
fn trailing_kanji_run(text: &str, text_len: usize) -> (usize, String) {
    let run: Vec<char> = text
        .chars()
        .rev()
        .take_while(|ch| is_kanji(*ch))
        .collect();
    let base: String = run.into_iter().rev().collect();
    let base_len = base.chars().count();

    (text_len - base_len, base)
}
