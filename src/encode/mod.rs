//! Encoders turning recovered plain text into target-format bytes.
//!
//! Every encoder is total over well-formed text: any Unicode input produces
//! valid output, with format-specific escaping applied where the container
//! syntax demands it. Dispatch is an exhaustive match over
//! [`TargetFormat`], so adding a format is a compile-time-checked change.
//!
//! # Example
//!
//! ```
//! use docshift::encode::EncoderRegistry;
//! use docshift::TargetFormat;
//!
//! let registry = EncoderRegistry::default();
//! let encoded = registry.encode("line1\nline2", TargetFormat::Csv, "notes").unwrap();
//! assert_eq!(
//!     encoded.bytes,
//!     b"\"Line Number\",\"Content\"\n\"1\",\"line1\"\n\"2\",\"line2\""
//! );
//! assert_eq!(encoded.media_type, "text/csv");
//! ```

mod csv;
mod docx;
mod html;
mod json;
mod markdown;
mod options;
mod pdf;
mod rtf;
mod text;

pub use self::csv::to_csv;
pub use docx::to_docx;
pub use html::{escape_html, to_html};
pub use json::{to_json, JsonDocument, JsonMetadata};
pub use markdown::to_markdown;
pub use options::{EncodeContext, EncodeOptions, DEFAULT_ATTRIBUTION};
pub use pdf::to_pdf;
pub use rtf::to_rtf;
pub use text::to_text;

use crate::error::Result;
use crate::model::TargetFormat;

/// Encoded output bytes with their media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    /// Output bytes
    pub bytes: Vec<u8>,

    /// Media type of `bytes`
    pub media_type: &'static str,
}

impl Encoded {
    fn new(bytes: impl Into<Vec<u8>>, format: TargetFormat) -> Self {
        Self {
            bytes: bytes.into(),
            media_type: format.media_type(),
        }
    }
}

/// Registry mapping target formats to their encoders.
#[derive(Debug, Clone, Default)]
pub struct EncoderRegistry {
    options: EncodeOptions,
}

impl EncoderRegistry {
    /// Create a registry with the given options.
    pub fn new(options: EncodeOptions) -> Self {
        Self { options }
    }

    /// Options used for every encode call.
    pub fn options(&self) -> &EncodeOptions {
        &self.options
    }

    /// Encode `text` as `format`, titling the output with `base_name`.
    pub fn encode(&self, text: &str, format: TargetFormat, base_name: &str) -> Result<Encoded> {
        let ctx = self.options.context(base_name);
        log::debug!("encoding {} chars as {}", text.len(), format);

        let encoded = match format {
            TargetFormat::Txt => Encoded::new(to_text(text), format),
            TargetFormat::Html => Encoded::new(to_html(text, &ctx), format),
            TargetFormat::Rtf => Encoded::new(to_rtf(text), format),
            TargetFormat::Csv => Encoded::new(to_csv(text), format),
            TargetFormat::Json => Encoded::new(to_json(text, &ctx)?, format),
            TargetFormat::Md => Encoded::new(to_markdown(text, &ctx), format),
            TargetFormat::Pdf => Encoded::new(to_pdf(text), format),
            TargetFormat::Docx => Encoded::new(to_docx(text), format),
        };

        Ok(encoded)
    }

    /// Encode using a free-form format tag.
    ///
    /// Fails with [`Error::UnsupportedFormat`](crate::Error::UnsupportedFormat)
    /// for tags outside the format table.
    pub fn encode_tag(&self, text: &str, tag: &str, base_name: &str) -> Result<Encoded> {
        let format: TargetFormat = tag.parse()?;
        self.encode(text, format, base_name)
    }
}

/// Split text into lines on `\n`, dropping one trailing `\r` per line.
///
/// The number of lines always equals the number of `\n`-separated
/// segments, so a trailing newline yields a final empty line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}
