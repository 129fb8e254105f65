//! Error types for typesetting
//!
//! The typesetter validates annotations up front and fails fast; the scan
//! itself cannot fail once validation passes.

use thiserror::Error;

/// Annotation validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TypesetError {
    /// A zero-length base would stall the scan cursor
    #[error("ruby annotation at offset {start}: base text is empty")]
    EmptyBase { start: usize },

    /// A reading must be a non-empty string when an annotation is present
    #[error("ruby annotation at offset {start}: reading is empty")]
    EmptyReading { start: usize },

    /// `start` offsets must be unique within one typesetting call
    #[error("two ruby annotations share start offset {start}")]
    DuplicateStart { start: usize },
}
