//! Renderers module for the vertical-text reader
//!
//! This module contains the typesetting logic that converts plain text plus
//! ruby annotations into wrap-safe, escaped HTML fragments.

pub mod errors;
pub mod escape;
pub mod kinsoku;
pub mod paragraph;

// Re-export commonly used types
pub use errors::TypesetError;
pub use escape::{escape_char, escape_html, escape_html_opt};
pub use kinsoku::{is_line_end_prohibited, is_line_start_prohibited};
pub use paragraph::{Typesetter, TypesetOptions};
