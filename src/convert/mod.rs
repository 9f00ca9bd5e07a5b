//! Conversion orchestration: extract, then encode.
//!
//! [`Converter`] runs the two stages for one request and names the output.
//! [`ConversionSession`] adds the single-flight policy a UI session needs.
//!
//! # Example
//!
//! ```
//! use docshift::convert::Converter;
//! use docshift::{SourceDocument, TargetFormat};
//!
//! let converter = Converter::new();
//! let source = SourceDocument::new(b"line1\nline2".to_vec(), "text/plain", "notes.txt");
//! let converted = converter.convert(&source, TargetFormat::Csv)?;
//!
//! assert_eq!(converted.suggested_filename, "notes.csv");
//! assert_eq!(converted.media_type, "text/csv");
//! # Ok::<(), docshift::Error>(())
//! ```

mod session;

pub use session::{ConversionSession, InFlight};

use crate::detect::base_name;
use crate::encode::{EncodeOptions, EncoderRegistry};
use crate::error::Result;
use crate::extract::{ExtractOptions, HeuristicExtractor, TextExtractor};
use crate::model::{ConvertedDocument, SourceDocument, TargetFormat};
use std::fmt;
use std::sync::Arc;

/// Options for document conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Extraction options for the default extractor
    pub extract: ExtractOptions,

    /// Encoding options
    pub encode: EncodeOptions,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set extraction options.
    pub fn with_extract_options(mut self, options: ExtractOptions) -> Self {
        self.extract = options;
        self
    }

    /// Set encoding options.
    pub fn with_encode_options(mut self, options: EncodeOptions) -> Self {
        self.encode = options;
        self
    }
}

/// Runs extraction then encoding for one source document.
///
/// The converter holds no per-request state and can be shared freely.
#[derive(Clone)]
pub struct Converter {
    extractor: Arc<dyn TextExtractor>,
    encoders: EncoderRegistry,
}

impl Converter {
    /// Create a converter with the heuristic extractor and default options.
    pub fn new() -> Self {
        Self::with_options(ConvertOptions::default())
    }

    /// Create a converter with the heuristic extractor and custom options.
    pub fn with_options(options: ConvertOptions) -> Self {
        Self {
            extractor: Arc::new(HeuristicExtractor::with_options(options.extract)),
            encoders: EncoderRegistry::new(options.encode),
        }
    }

    /// Replace the extractor.
    pub fn with_extractor(mut self, extractor: Arc<dyn TextExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    /// The extractor in use.
    pub fn extractor(&self) -> &dyn TextExtractor {
        self.extractor.as_ref()
    }

    /// The encoder registry in use.
    pub fn encoders(&self) -> &EncoderRegistry {
        &self.encoders
    }

    /// Recover plain text from a source document.
    pub fn extract(&self, source: &SourceDocument) -> Result<String> {
        self.extractor.extract(&source.bytes, &source.hint())
    }

    /// Convert a source document to `target`.
    ///
    /// Extraction failures are returned as-is and the encoder is not run.
    pub fn convert(&self, source: &SourceDocument, target: TargetFormat) -> Result<ConvertedDocument> {
        log::info!(
            "converting {} ({} bytes) to {} with {} extractor",
            source.filename,
            source.len(),
            target,
            self.extractor.name()
        );

        let text = self.extract(source).map_err(|e| {
            log::warn!("extraction failed for {}: {}", source.filename, e);
            e
        })?;

        let base = base_name(&source.filename);
        let encoded = self.encoders.encode(&text, target, base)?;
        let converted = ConvertedDocument {
            bytes: encoded.bytes,
            media_type: encoded.media_type,
            suggested_filename: suggested_filename(&source.filename, target),
        };

        log::info!(
            "converted {} -> {} ({} bytes)",
            source.filename,
            converted.suggested_filename,
            converted.len()
        );
        Ok(converted)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter")
            .field("extractor", &self.extractor.name())
            .field("encoders", &self.encoders)
            .finish()
    }
}

/// Output filename: the original with its extension replaced by the target's.
pub fn suggested_filename(original: &str, target: TargetFormat) -> String {
    format!("{}.{}", base_name(original), target.extension())
}
