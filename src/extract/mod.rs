//! Best-effort plain-text recovery from uploaded documents.
//!
//! Extraction never parses binary containers. Text sources are decoded
//! verbatim; PDF and DOCX sources go through pattern heuristics that pick
//! out the syntactically simple islands holding text (PDF text-show operands
//! and WordprocessingML run-text elements). A real parser can be plugged in
//! later by implementing [`TextExtractor`].
//!
//! # Example
//!
//! ```
//! use docshift::extract::{HeuristicExtractor, TextExtractor};
//! use docshift::SourceHint;
//!
//! let extractor = HeuristicExtractor::new();
//! let text = extractor
//!     .extract(b"BT (Hello) Tj (World) Tj ET", &SourceHint::from_extension("pdf"))
//!     .unwrap();
//! assert_eq!(text, "Hello World");
//! ```

mod docx;
mod pdf;
mod text;

pub use docx::extract_docx_runs;
pub use pdf::extract_pdf_runs;
pub use text::decode_text;

use crate::detect::{detect_source_kind, is_pdf_bytes, SourceKind};
use crate::error::{Error, Result};
use crate::model::SourceHint;

/// Outcome of extraction: recovered text, or the reason it failed.
///
/// Successful text is trimmed and never empty. Failures are either
/// [`Error::EmptyContent`] or [`Error::UnreadableSource`].
pub type ExtractionResult = Result<String>;

/// Capability interface for text extraction.
pub trait TextExtractor: Send + Sync {
    /// Name of this extractor, used in logs.
    fn name(&self) -> &str;

    /// Recover plain text from `bytes`, guided by `hint`.
    fn extract(&self, bytes: &[u8], hint: &SourceHint<'_>) -> ExtractionResult;
}

/// Options for the heuristic extractor.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Route unrecognised sources that start with `%PDF-` to the PDF heuristic
    pub sniff_content: bool,
}

impl ExtractOptions {
    /// Create new extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable content sniffing for unrecognised sources.
    pub fn with_sniffing(mut self, sniff: bool) -> Self {
        self.sniff_content = sniff;
        self
    }
}

/// Default extractor: verbatim decoding plus PDF/DOCX heuristics.
#[derive(Debug, Clone, Default)]
pub struct HeuristicExtractor {
    options: ExtractOptions,
}

impl HeuristicExtractor {
    /// Create a heuristic extractor with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a heuristic extractor with custom options.
    pub fn with_options(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Options this extractor was built with.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Route a source would take, after optional content sniffing.
    pub fn route(&self, bytes: &[u8], hint: &SourceHint<'_>) -> SourceKind {
        match detect_source_kind(hint) {
            SourceKind::Unknown if self.options.sniff_content && is_pdf_bytes(bytes) => {
                SourceKind::Pdf
            }
            kind => kind,
        }
    }
}

impl TextExtractor for HeuristicExtractor {
    fn name(&self) -> &str {
        "heuristic"
    }

    fn extract(&self, bytes: &[u8], hint: &SourceHint<'_>) -> ExtractionResult {
        let route = self.route(bytes, hint);
        log::debug!(
            "extracting {} bytes via {:?} (media type {:?}, extension {:?})",
            bytes.len(),
            route,
            hint.media_type,
            hint.extension
        );

        let decoded = decode_text(bytes);
        let text = match route {
            SourceKind::Text | SourceKind::Unknown => decoded.into_owned(),
            SourceKind::Pdf => extract_pdf_runs(&decoded).ok_or_else(|| {
                log::warn!("no text-show operands found in PDF source");
                Error::UnreadableSource("PDF text extraction failed".into())
            })?,
            SourceKind::Docx => extract_docx_runs(&decoded).ok_or_else(|| {
                log::warn!("no run-text elements found in DOCX source");
                Error::UnreadableSource("DOCX text extraction failed".into())
            })?,
        };

        non_empty(text)
    }
}

/// Trim recovered text and reject it if nothing remains.
fn non_empty(text: String) -> ExtractionResult {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyContent);
    }
    if trimmed.len() == text.len() {
        Ok(text)
    } else {
        Ok(trimmed.to_string())
    }
}
