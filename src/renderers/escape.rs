//! HTML escaping
//!
//! Every piece of literal text placed into output markup goes through
//! [`escape_html`] first, including ruby base and reading text, so that
//! content-supplied text can never be interpreted as markup.

/// Escape the five HTML-significant characters as named entities.
///
/// All other characters pass through unchanged. Total function: never fails.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escape a single character
pub fn escape_char(ch: char) -> String {
    match ch {
        '&' => "&amp;".to_string(),
        '<' => "&lt;".to_string(),
        '>' => "&gt;".to_string(),
        '"' => "&quot;".to_string(),
        '\'' => "&#39;".to_string(),
        other => other.to_string(),
    }
}

/// Escape possibly-absent text; `None` yields the empty string
pub fn escape_html_opt(text: Option<&str>) -> String {
    match text {
        Some(s) => escape_html(s),
        None => String::new(),
    }
}
