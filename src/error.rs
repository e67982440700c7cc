//! Error types for respoint library.

use std::io;
use thiserror::Error;

/// Result type alias for respoint operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while enriching a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error serializing or deserializing JSON.
    #[error("JSON error: {0}")]
    Json(String),

    /// No project-like structure could be detected in the document.
    #[error("No projects found in document")]
    NoProjectsFound,

    /// Paragraph index is out of range.
    #[error("Paragraph {0} is out of range (document has {1} paragraphs)")]
    ParagraphOutOfRange(usize, usize),

    /// A project span whose start lies after its end.
    #[error("Invalid project span: {start}..={end}")]
    InvalidSpan {
        /// First paragraph of the span
        start: usize,
        /// Last paragraph of the span
        end: usize,
    },

    /// The points payload could not be interpreted.
    #[error("Invalid points payload: {0}")]
    InvalidPayload(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}
