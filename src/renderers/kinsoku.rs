//! Kinsoku shori (禁則処理) prohibition tables
//!
//! Japanese typography forbids certain characters from starting or ending a
//! visual line. The typesetter does not wrap lines itself; it marks the
//! affected character pairs as non-breaking units and leaves the actual
//! wrapping to the host layout engine.
//!
//! Two disjoint sets drive the pairing rules:
//!
//! - a line-END-prohibited character is fused with the character that
//!   follows it;
//! - a line-START-prohibited character is fused with the character that
//!   precedes it.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Characters that must not end a visual line.
///
/// Closing punctuation, closing brackets and quotes, iteration and
/// prolongation marks, and small kana.
const LINE_END_PROHIBITED: &[char] = &[
    // Punctuation
    '、', '。', '，', '．', '・', '：', '；', '？', '！',
    // Closing brackets and quotes
    '」', '』', '）', '〕', '］', '｝', '〉', '》', '】', '〙', '〗',
    // Iteration and prolongation marks
    'ゝ', 'ゞ', 'ヽ', 'ヾ', '々', 'ー',
    // Small hiragana
    'ぁ', 'ぃ', 'ぅ', 'ぇ', 'ぉ', 'っ', 'ゃ', 'ゅ', 'ょ', 'ゎ',
    // Small katakana
    'ァ', 'ィ', 'ゥ', 'ェ', 'ォ', 'ッ', 'ャ', 'ュ', 'ョ', 'ヮ', 'ヵ', 'ヶ',
    // Sound marks and ellipses
    '゛', '゜', '…', '‥',
];

/// Characters that must not start a visual line.
///
/// Opening brackets and quotes.
const LINE_START_PROHIBITED: &[char] = &[
    '「', '『', '（', '〔', '［', '｛', '〈', '《', '【', '〘', '〖',
];

static LINE_END_SET: Lazy<HashSet<char>> =
    Lazy::new(|| LINE_END_PROHIBITED.iter().copied().collect());

static LINE_START_SET: Lazy<HashSet<char>> =
    Lazy::new(|| LINE_START_PROHIBITED.iter().copied().collect());

/// Check if a character is forbidden from ending a visual line
pub fn is_line_end_prohibited(ch: char) -> bool {
    LINE_END_SET.contains(&ch)
}

/// Check if a character is forbidden from starting a visual line
pub fn is_line_start_prohibited(ch: char) -> bool {
    LINE_START_SET.contains(&ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_line_end_prohibited() {
        assert!(is_line_end_prohibited('。'));
        assert!(is_line_end_prohibited('、'));
        assert!(is_line_end_prohibited('」'));
        assert!(is_line_end_prohibited('ー'));
        assert!(is_line_end_prohibited('っ'));

        assert!(!is_line_end_prohibited('中'));
        assert!(!is_line_end_prohibited('（'));
        assert!(!is_line_end_prohibited('A'));
    }

    #[test]
    fn test_is_line_start_prohibited() {
        assert!(is_line_start_prohibited('「'));
        assert!(is_line_start_prohibited('（'));
        assert!(is_line_start_prohibited('《'));

        assert!(!is_line_start_prohibited('。'));
        assert!(!is_line_start_prohibited('中'));
        assert!(!is_line_start_prohibited('('));
    }

    #[test]
    fn test_sets_are_disjoint() {
        for ch in LINE_END_PROHIBITED {
            assert!(
                !is_line_start_prohibited(*ch),
                "{} appears in both prohibition sets",
                ch
            );
        }
    }
}
