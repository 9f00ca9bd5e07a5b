//! Document model types shared by the extraction and encoding stages.
//!
//! Sources and outputs are plain byte buffers tagged with a media type and
//! filename. The encoder never sees a [`SourceDocument`]; it only receives
//! the text recovered from one.

mod document;
mod format;

pub use document::{ConvertedDocument, SourceDocument, SourceHint};
pub use format::{FormatInfo, TargetFormat, FORMAT_TABLE};
