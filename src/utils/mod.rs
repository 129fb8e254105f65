//! Utility modules for the vertical-text reader
//!
//! This module contains helper functions shared by the parser and the
//! typesetter.

pub mod charclass;

// Re-export commonly used types
pub use charclass::*;
