//! # docshift
//!
//! Document conversion through a canonical plain-text representation.
//!
//! An uploaded document is first reduced to plain text by a best-effort
//! extractor, then encoded into one of eight target formats: PDF, DOCX,
//! plain text, HTML, RTF, CSV, JSON or Markdown.
//!
//! ## Quick Start
//!
//! ```
//! use docshift::{convert_bytes, TargetFormat};
//!
//! fn main() -> docshift::Result<()> {
//!     let converted = convert_bytes(b"Hello\nWorld", "text/plain", "hello.txt", TargetFormat::Html)?;
//!     assert_eq!(converted.suggested_filename, "hello.html");
//!     assert_eq!(converted.media_type, "text/html");
//!     Ok(())
//! }
//! ```
//!
//! ## Extraction is best-effort
//!
//! Text sources are decoded verbatim. PDF and DOCX sources are scanned for
//! the patterns that usually hold visible text (literal strings shown by
//! `Tj`, and `<w:t>` run-text elements). Compressed or zipped containers
//! fail with [`Error::UnreadableSource`] rather than yielding placeholder
//! text. Swap in a real parser through [`extract::TextExtractor`].

pub mod convert;
pub mod detect;
pub mod encode;
pub mod error;
pub mod extract;
pub mod model;

// Re-export commonly used types
pub use convert::{ConversionSession, ConvertOptions, Converter, InFlight};
pub use detect::{base_name, detect_source_kind, file_extension, is_pdf_bytes, SourceKind};
pub use encode::{EncodeOptions, Encoded, EncoderRegistry};
pub use error::{Error, ErrorKind, Result};
pub use extract::{ExtractOptions, ExtractionResult, HeuristicExtractor, TextExtractor};
pub use model::{ConvertedDocument, FormatInfo, SourceDocument, SourceHint, TargetFormat, FORMAT_TABLE};

use chrono::{DateTime, Utc};
use std::path::Path;
use std::sync::Arc;

/// Extract plain text from bytes.
///
/// # Example
///
/// ```
/// use docshift::extract_text;
///
/// let text = extract_text(b"(Hello) Tj (World) Tj", "application/pdf", "scan.pdf").unwrap();
/// assert_eq!(text, "Hello World");
/// ```
pub fn extract_text(bytes: &[u8], media_type: &str, filename: &str) -> Result<String> {
    let hint = SourceHint::new(media_type, file_extension(filename));
    HeuristicExtractor::new().extract(bytes, &hint)
}

/// Convert bytes to a target format with default options.
pub fn convert_bytes(
    bytes: &[u8],
    media_type: &str,
    filename: &str,
    target: TargetFormat,
) -> Result<ConvertedDocument> {
    let source = SourceDocument::new(bytes, media_type, filename);
    Converter::new().convert(&source, target)
}

/// Read a file and convert it to a target format.
///
/// The declared media type is left empty, so routing follows the file
/// extension.
///
/// # Example
///
/// ```no_run
/// use docshift::{convert_file, TargetFormat};
///
/// let converted = convert_file("notes.txt", TargetFormat::Pdf).unwrap();
/// std::fs::write(&converted.suggested_filename, &converted.bytes).unwrap();
/// ```
pub fn convert_file<P: AsRef<Path>>(path: P, target: TargetFormat) -> Result<ConvertedDocument> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    convert_bytes(&bytes, "", &filename, target)
}

/// Builder for a configured converter or session.
///
/// # Example
///
/// ```
/// use docshift::{Docshift, SourceDocument, TargetFormat};
///
/// let converter = Docshift::new()
///     .sniff_content()
///     .with_attribution("Exported from the archive")
///     .converter();
///
/// let source = SourceDocument::new(b"%PDF-1.4\n(Hi) Tj".to_vec(), "", "upload");
/// let converted = converter.convert(&source, TargetFormat::Txt)?;
/// assert_eq!(converted.bytes, b"Hi");
/// # Ok::<(), docshift::Error>(())
/// ```
#[derive(Default)]
pub struct Docshift {
    options: ConvertOptions,
    extractor: Option<Arc<dyn TextExtractor>>,
}

impl Docshift {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Route unrecognised `%PDF-` sources to the PDF heuristic.
    pub fn sniff_content(mut self) -> Self {
        self.options.extract = self.options.extract.with_sniffing(true);
        self
    }

    /// Pin the conversion timestamp.
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.options.encode = self.options.encode.with_timestamp(timestamp);
        self
    }

    /// Set the Markdown attribution footer.
    pub fn with_attribution(mut self, attribution: impl Into<String>) -> Self {
        self.options.encode = self.options.encode.with_attribution(attribution);
        self
    }

    /// Use a custom extractor instead of the heuristic one.
    pub fn with_extractor(mut self, extractor: Arc<dyn TextExtractor>) -> Self {
        self.extractor = Some(extractor);
        self
    }

    /// Build a converter.
    pub fn converter(self) -> Converter {
        let converter = Converter::with_options(self.options);
        match self.extractor {
            Some(extractor) => converter.with_extractor(extractor),
            None => converter,
        }
    }

    /// Build a single-flight session.
    pub fn session(self) -> ConversionSession {
        ConversionSession::new(self.converter())
    }
}
