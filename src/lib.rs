//! Japanese Vertical-Text Reader WASM Module
//!
//! This is the typesetting core for the vertical-text reader. It turns plain
//! literary text plus ruby (furigana) annotations into wrap-safe, escaped
//! HTML fragments that the JavaScript view layer renders in vertical
//! writing mode.

pub mod models;
pub mod parse;
pub mod renderers;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use models::ruby::RubyAnnotation;
pub use models::work::Work;
pub use parse::aozora::{parse_ruby_text, ParseError, ParsedText};
pub use renderers::errors::TypesetError;
pub use renderers::escape::escape_html;
pub use renderers::paragraph::{Typesetter, TypesetOptions};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Vertical-text reader WASM module initialized");
}
