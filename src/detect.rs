//! Source format detection from declared hints and magic bytes.

use crate::model::SourceHint;

/// Extensions whose bytes are returned verbatim as text.
pub const TEXT_EXTENSIONS: &[&str] = &["txt", "csv", "json", "html", "rtf", "md"];

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const PDF_MAGIC_LEN: usize = 5;
const VERSION_LEN: usize = 3; // e.g., "1.7"

/// Recovery route chosen for a source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// Declared as text; decoded verbatim
    Text,
    /// PDF content stream; parenthesis-run heuristic
    Pdf,
    /// WordprocessingML; run-text element heuristic
    Docx,
    /// Nothing recognised; decoded verbatim as a fallback
    Unknown,
}

/// Classify a source from its declared media type and extension.
///
/// Text hints win over PDF, which wins over DOCX. This mirrors the order in
/// which an upload's declared type is usually trustworthy.
pub fn detect_source_kind(hint: &SourceHint<'_>) -> SourceKind {
    let media_type = media_type_essence(hint.media_type);
    let extension = hint.extension.to_ascii_lowercase();

    if media_type.starts_with("text/") || TEXT_EXTENSIONS.contains(&extension.as_str()) {
        SourceKind::Text
    } else if matches!(media_type.as_str(), "application/pdf" | "application/x-pdf")
        || extension == "pdf"
    {
        SourceKind::Pdf
    } else if media_type.contains("word") || extension == "docx" {
        SourceKind::Docx
    } else {
        SourceKind::Unknown
    }
}

/// Lowercased media type without parameters (`; charset=...`).
fn media_type_essence(media_type: &str) -> String {
    media_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Extension of the last path segment, without the dot.
///
/// Returns an empty string when the name has no extension. A leading dot
/// alone (`.profile`) does not count as one.
pub fn file_extension(filename: &str) -> &str {
    let name = last_segment(filename);
    match name.rfind('.') {
        Some(0) | None => "",
        Some(idx) => &name[idx + 1..],
    }
}

/// Filename with its final extension removed.
///
/// `report.final.txt` becomes `report.final`; a name without an extension
/// is returned unchanged.
pub fn base_name(filename: &str) -> &str {
    let ext = file_extension(filename);
    if ext.is_empty() {
        filename
    } else {
        &filename[..filename.len() - ext.len() - 1]
    }
}

fn last_segment(filename: &str) -> &str {
    filename.rsplit(['/', '\\']).next().unwrap_or(filename)
}

/// Check if bytes start with a valid PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    pdf_version(data).is_some()
}

/// PDF version from the file header (e.g. "1.7"), if the data is a PDF.
pub fn pdf_version(data: &[u8]) -> Option<&str> {
    if data.len() < PDF_MAGIC_LEN + VERSION_LEN || !data.starts_with(PDF_MAGIC) {
        return None;
    }

    let version = std::str::from_utf8(&data[PDF_MAGIC_LEN..PDF_MAGIC_LEN + VERSION_LEN]).ok()?;
    is_valid_version(version).then_some(version)
}

/// Check if a version string is valid.
fn is_valid_version(version: &str) -> bool {
    let bytes = version.as_bytes();
    bytes.len() == 3 && bytes[0].is_ascii_digit() && bytes[1] == b'.' && bytes[2].is_ascii_digit()
}
