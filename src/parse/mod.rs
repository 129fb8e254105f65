//! Parsing module for the vertical-text reader
//!
//! This module contains the content-loading logic that converts source
//! texts with inline ruby markup into plain text plus annotations.

pub mod aozora;

// Re-export commonly used types
pub use aozora::{parse_ruby_text, ParseError, ParsedText};
