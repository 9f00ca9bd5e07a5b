//! CSV encoding: one row per input line.

use super::split_lines;

const HEADER: &str = r#""Line Number","Content""#;

/// Encode text as a two-column CSV table.
///
/// Every field is quoted and internal quotes are doubled. Rows are joined
/// with `\n` and there is no trailing newline.
pub fn to_csv(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2 + HEADER.len());
    out.push_str(HEADER);

    for (idx, line) in split_lines(text).enumerate() {
        out.push('\n');
        out.push('"');
        out.push_str(&(idx + 1).to_string());
        out.push_str("\",\"");
        out.push_str(&line.replace('"', "\"\""));
        out.push('"');
    }

    out
}
