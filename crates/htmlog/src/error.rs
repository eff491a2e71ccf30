//! Error types for the HTML document logger.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while producing a log document.
#[derive(Debug, Error)]
pub enum LogError {
    /// The output file could not be created or initialized.
    #[error("failed to open log document at {}: {source}", path.display())]
    Open {
        /// Path the document was to be created at.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// An I/O error occurred while appending to an open document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for document operations.
pub type Result<T> = std::result::Result<T, LogError>;
