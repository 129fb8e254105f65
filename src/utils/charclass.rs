//! Japanese character classification
//!
//! Range predicates used by the ruby-source parser to find the kanji run
//! that an implicit ruby marker annotates.

/// Check if a character is a kanji (CJK unified ideograph)
pub fn is_kanji(ch: char) -> bool {
    let cp = ch as u32;
    // Basic block, extension A, extensions B-F, compatibility ideographs
    (0x4E00..=0x9FFF).contains(&cp)
        || (0x3400..=0x4DBF).contains(&cp)
        || (0x20000..=0x2A6DF).contains(&cp)
        || (0xF900..=0xFAFF).contains(&cp)
        // Iteration mark and kanji repetition marks used inside words
        || matches!(ch, '々' | '〆' | '〇' | 'ヶ')
}

/// Check if a character is hiragana
pub fn is_hiragana(ch: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&ch)
}

/// Check if a character is katakana (including the prolongation mark)
pub fn is_katakana(ch: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&ch)
}

/// Check if a character belongs to any CJK block this reader cares about
pub fn is_cjk(ch: char) -> bool {
    let cp = ch as u32;
    is_kanji(ch)
        || is_hiragana(ch)
        || is_katakana(ch)
        // Hangul syllables and jamo
        || (0xAC00..=0xD7AF).contains(&cp)
        || (0x1100..=0x11FF).contains(&cp)
        // Fullwidth forms and CJK punctuation
        || (0xFF00..=0xFFEF).contains(&cp)
        || (0x3000..=0x303F).contains(&cp)
}
