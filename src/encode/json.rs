//! JSON encoding.

use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use super::EncodeContext;
use crate::error::{Error, Result};

/// JSON document emitted for the `json` target.
///
/// Field order here is the key order in the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonDocument {
    /// Original filename without extension
    pub filename: String,

    /// Full text, unmodified
    pub content: String,

    /// `content` split on `\n`; any `\r` stays with its line
    pub lines: Vec<String>,

    /// Conversion statistics
    pub metadata: JsonMetadata,
}

/// Conversion statistics embedded in [`JsonDocument`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonMetadata {
    /// ISO-8601 conversion timestamp
    pub converted_at: String,

    /// Number of lines
    pub line_count: usize,

    /// Number of Unicode scalar values
    pub character_count: usize,

    /// Number of whitespace-delimited tokens
    pub word_count: usize,
}

impl JsonDocument {
    /// Build the document for `text`.
    pub fn new(text: &str, ctx: &EncodeContext<'_>) -> Self {
        let lines: Vec<String> = text.split('\n').map(str::to_string).collect();
        let metadata = JsonMetadata {
            converted_at: ctx.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            line_count: lines.len(),
            character_count: text.chars().count(),
            word_count: text.split_whitespace().count(),
        };

        Self {
            filename: ctx.base_name.to_string(),
            content: text.to_string(),
            lines,
            metadata,
        }
    }
}

/// Encode text as a pretty-printed JSON document.
pub fn to_json(text: &str, ctx: &EncodeContext<'_>) -> Result<String> {
    let doc = JsonDocument::new(text, ctx);
    serde_json::to_string_pretty(&doc)
        .map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
