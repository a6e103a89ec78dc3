//! Error types for builder operations.

use thiserror::Error;

use crate::element::ElementId;

/// Result type for builder operations.
pub type BuilderResult<T> = Result<T, BuilderError>;

/// Errors that can occur while editing a document.
///
/// add, remove, select, drag, and clear are total and never produce one of
/// these; only canvas resizing, property edits, and stale-handle lookups can
/// fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuilderError {
    /// Canvas dimensions must be positive integers. The document keeps its
    /// prior dimensions when this is returned.
    #[error("invalid canvas dimensions {width} x {height}")]
    InvalidDimension {
        /// The requested width, as entered.
        width: String,
        /// The requested height, as entered.
        height: String,
    },

    /// A property edit carried a value the property cannot accept. The
    /// element keeps its previous value.
    #[error("invalid value {value:?} for property {property}")]
    InvalidPropertyValue {
        /// Name of the rejected property.
        property: String,
        /// The offending input.
        value: String,
    },

    /// No element with the given handle exists in the document.
    #[error("element not found: {0}")]
    ElementNotFound(ElementId),
}
