//! Models module for the vertical-text reader
//!
//! This module contains the data structures shared between the parser,
//! the typesetter, and the WASM API boundary.

pub mod ruby;
pub mod work;

// Re-export commonly used types
pub use ruby::RubyAnnotation;
pub use work::Work;
