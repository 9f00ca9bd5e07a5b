//! Target format enumeration and the fixed format table.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output encodings supported by the encoder registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetFormat {
    Pdf,
    Docx,
    Txt,
    Html,
    Rtf,
    Csv,
    Json,
    Md,
}

/// One row of the format table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatInfo {
    /// Variant this row describes
    pub format: TargetFormat,
    /// Canonical extension, also used as the format tag
    pub extension: &'static str,
    /// Output media type
    pub media_type: &'static str,
    /// Human-readable label
    pub label: &'static str,
}

/// Fixed table of supported formats, in display order.
pub static FORMAT_TABLE: [FormatInfo; 8] = [
    FormatInfo {
        format: TargetFormat::Pdf,
        extension: "pdf",
        media_type: "application/pdf",
        label: "PDF",
    },
    FormatInfo {
        format: TargetFormat::Docx,
        extension: "docx",
        media_type: "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        label: "Word Document",
    },
    FormatInfo {
        format: TargetFormat::Txt,
        extension: "txt",
        media_type: "text/plain",
        label: "Text File",
    },
    FormatInfo {
        format: TargetFormat::Html,
        extension: "html",
        media_type: "text/html",
        label: "HTML",
    },
    FormatInfo {
        format: TargetFormat::Rtf,
        extension: "rtf",
        media_type: "application/rtf",
        label: "Rich Text Format",
    },
    FormatInfo {
        format: TargetFormat::Csv,
        extension: "csv",
        media_type: "text/csv",
        label: "CSV",
    },
    FormatInfo {
        format: TargetFormat::Json,
        extension: "json",
        media_type: "application/json",
        label: "JSON",
    },
    FormatInfo {
        format: TargetFormat::Md,
        extension: "md",
        media_type: "text/markdown",
        label: "Markdown",
    },
];

impl TargetFormat {
    /// All formats, in table order.
    pub const ALL: [TargetFormat; 8] = [
        TargetFormat::Pdf,
        TargetFormat::Docx,
        TargetFormat::Txt,
        TargetFormat::Html,
        TargetFormat::Rtf,
        TargetFormat::Csv,
        TargetFormat::Json,
        TargetFormat::Md,
    ];

    /// Table row for this format.
    pub fn info(self) -> &'static FormatInfo {
        // Table rows are declared in variant order.
        &FORMAT_TABLE[self as usize]
    }

    /// Canonical file extension (without the dot).
    pub fn extension(self) -> &'static str {
        self.info().extension
    }

    /// Media type of encoded output.
    pub fn media_type(self) -> &'static str {
        self.info().media_type
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        self.info().label
    }

    /// Look up a format by file extension (case-insensitive, no aliases).
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.trim_start_matches('.');
        FORMAT_TABLE
            .iter()
            .find(|row| row.extension.eq_ignore_ascii_case(ext))
            .map(|row| row.format)
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for TargetFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if let Some(format) = Self::from_extension(s) {
            return Ok(format);
        }
        match s.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "markdown" => Ok(TargetFormat::Md),
            "text" => Ok(TargetFormat::Txt),
            "htm" => Ok(TargetFormat::Html),
            "word" => Ok(TargetFormat::Docx),
            _ => Err(Error::UnsupportedFormat(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_variants() {
        for (i, format) in TargetFormat::ALL.iter().enumerate() {
            assert_eq!(FORMAT_TABLE[i].format, *format);
        }
    }

    #[test]
    fn test_tags_round_trip() {
        for format in TargetFormat::ALL {
            let parsed: TargetFormat = format.to_string().parse().unwrap();
            assert_eq!(parsed, format);
        }
    }

    #[test]
    fn test_parse_case_insensitive_and_aliases() {
        assert_eq!("PDF".parse::<TargetFormat>().unwrap(), TargetFormat::Pdf);
        assert_eq!(".docx".parse::<TargetFormat>().unwrap(), TargetFormat::Docx);
        assert_eq!("markdown".parse::<TargetFormat>().unwrap(), TargetFormat::Md);
        assert_eq!("text".parse::<TargetFormat>().unwrap(), TargetFormat::Txt);
    }

    #[test]
    fn test_parse_unknown() {
        let result = "odt".parse::<TargetFormat>();
        assert!(matches!(result, Err(Error::UnsupportedFormat(ref tag)) if tag == "odt"));
    }

    #[test]
    fn test_media_types() {
        assert_eq!(TargetFormat::Pdf.media_type(), "application/pdf");
        assert_eq!(TargetFormat::Rtf.media_type(), "application/rtf");
        assert_eq!(TargetFormat::Md.media_type(), "text/markdown");
        assert!(TargetFormat::Docx.media_type().contains("wordprocessingml"));
    }

    #[test]
    fn test_from_extension_rejects_aliases() {
        assert_eq!(TargetFormat::from_extension("md"), Some(TargetFormat::Md));
        assert_eq!(TargetFormat::from_extension("markdown"), None);
    }
}
