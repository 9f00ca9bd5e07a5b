//! RTF encoding.

use super::split_lines;

const PROLOGUE: &str = "{\\rtf1\\ansi\\deff0 {\\fonttbl {\\f0 Times New Roman;}}\n\\f0\\fs24 ";

/// Encode text as a minimal RTF document.
///
/// `\`, `{` and `}` are backslash-escaped and each line break becomes
/// `\par`. Characters outside 7-bit ASCII are written as `\uN?` so the
/// container stays ASCII regardless of the reader's code page.
pub fn to_rtf(text: &str) -> String {
    let mut out = String::with_capacity(PROLOGUE.len() + text.len() + 16);
    out.push_str(PROLOGUE);

    for (idx, line) in split_lines(text).enumerate() {
        if idx > 0 {
            out.push_str("\\par ");
        }
        escape_rtf_into(line, &mut out);
    }

    out.push('}');
    out
}

fn escape_rtf_into(line: &str, out: &mut String) {
    let mut units = [0u16; 2];
    for c in line.chars() {
        match c {
            '\\' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            '\t' => out.push_str("\\tab "),
            c if c.is_ascii() => out.push(c),
            c => {
                // \uN takes a signed 16-bit value; '?' is the fallback glyph.
                for unit in c.encode_utf16(&mut units).iter() {
                    out.push_str(&format!("\\u{}?", *unit as i16));
                }
            }
        }
    }
}
