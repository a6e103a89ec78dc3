//! Export error types.

use thiserror::Error;

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors that can occur while exporting a document.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Export was requested for a document with no elements. Nothing is
    /// written; the UI should tell the user to add elements first.
    #[error("document has no elements to export")]
    EmptyDocument,

    /// Writing an output file failed.
    #[error("failed to write export file: {0}")]
    Io(#[from] std::io::Error),
}
