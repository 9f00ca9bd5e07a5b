//! Error types for docshift library.

use std::io;
use thiserror::Error;

/// Result type alias for docshift operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during extraction and conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// Extracted text is blank after trimming.
    #[error("Extracted content is empty")]
    EmptyContent,

    /// A heuristic extractor found nothing to recover.
    #[error("{0}")]
    UnreadableSource(String),

    /// The target format tag is not one of the supported formats.
    #[error("Unsupported target format: {0}")]
    UnsupportedFormat(String),

    /// A conversion is already running in this session.
    #[error("A conversion is already in progress")]
    ConversionInProgress,

    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error during rendering of a target format.
    #[error("Rendering error: {0}")]
    Render(String),
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyContent,
    UnreadableSource,
    UnsupportedFormat,
    ConversionInProgress,
    Io,
    Render,
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyContent => ErrorKind::EmptyContent,
            Error::UnreadableSource(_) => ErrorKind::UnreadableSource,
            Error::UnsupportedFormat(_) => ErrorKind::UnsupportedFormat,
            Error::ConversionInProgress => ErrorKind::ConversionInProgress,
            Error::Io(_) => ErrorKind::Io,
            Error::Render(_) => ErrorKind::Render,
        }
    }

    /// Whether this error came out of the extraction stage.
    pub fn is_extraction_failure(&self) -> bool {
        matches!(self, Error::EmptyContent | Error::UnreadableSource(_))
    }

    /// Single sentence suitable for showing to the person who uploaded the file.
    pub fn user_message(&self) -> String {
        match self {
            Error::EmptyContent => {
                "The document does not contain any readable text.".to_string()
            }
            Error::UnreadableSource(reason) => format!(
                "{}. Please upload a text-based file or a simpler document.",
                reason
            ),
            Error::UnsupportedFormat(tag) => {
                format!("Conversion to '{}' is not supported.", tag)
            }
            Error::ConversionInProgress => {
                "Please wait for the current conversion to finish.".to_string()
            }
            Error::Io(e) => format!("The file could not be read: {}.", e),
            Error::Render(_) => "Conversion failed.".to_string(),
        }
    }
}
