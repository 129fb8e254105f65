//! Vertical-Text Reader WASM API
//!
//! This module provides the JavaScript-facing API for the reader's
//! typesetting core. It includes shared utilities for serialization,
//! error handling, and logging, and the typesetting operations themselves.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, error handling, and logging
//! - `render`: Typesetting, escaping, and parsing operations

pub mod helpers;
pub mod render;

// Re-export all public functions to maintain a flat public API
pub use render::{
    escape_html, parse_ruby_text_js, process_paragraphs, process_paragraphs_with_options,
    render_work, typeset_fragments, work_to_json,
};
