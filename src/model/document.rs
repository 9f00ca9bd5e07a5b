//! Request and response document types.

use crate::detect::file_extension;

/// A document handed to the core by the upload collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    /// Raw file content
    pub bytes: Vec<u8>,

    /// Declared media type (may be empty or unreliable)
    pub media_type: String,

    /// Original filename
    pub filename: String,
}

impl SourceDocument {
    /// Create a new source document.
    pub fn new(
        bytes: impl Into<Vec<u8>>,
        media_type: impl Into<String>,
        filename: impl Into<String>,
    ) -> Self {
        Self {
            bytes: bytes.into(),
            media_type: media_type.into(),
            filename: filename.into(),
        }
    }

    /// Hints the extractor uses to pick a recovery route.
    pub fn hint(&self) -> SourceHint<'_> {
        SourceHint::new(&self.media_type, file_extension(&self.filename))
    }

    /// Size of the source in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the source has no bytes at all.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Declared media type plus filename extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceHint<'a> {
    /// Declared media type, possibly empty
    pub media_type: &'a str,

    /// Extension without the dot, possibly empty
    pub extension: &'a str,
}

impl<'a> SourceHint<'a> {
    /// Create a hint from its parts.
    pub fn new(media_type: &'a str, extension: &'a str) -> Self {
        Self {
            media_type,
            extension,
        }
    }

    /// Hint carrying only a filename extension.
    pub fn from_extension(extension: &'a str) -> Self {
        Self::new("", extension)
    }

    /// Hint carrying only a media type.
    pub fn from_media_type(media_type: &'a str) -> Self {
        Self::new(media_type, "")
    }
}

/// Result of a conversion, handed to the download collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedDocument {
    /// Encoded output
    pub bytes: Vec<u8>,

    /// Media type of the output
    pub media_type: &'static str,

    /// `<original-base-name>.<target-extension>`
    pub suggested_filename: String,
}

impl ConvertedDocument {
    /// Size of the output in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the output is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Consume the document, returning the owned bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
