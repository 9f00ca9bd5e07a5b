//! Minimal single-page PDF encoding.
//!
//! The document has five objects: catalog, page tree, one US Letter page,
//! its content stream, and a standard Helvetica font. The content stream
//! shows one line of text per `Tj`, stepping down a fixed leading between
//! lines. Text that runs past the bottom margin is clipped by the viewer;
//! there is no pagination.

use super::split_lines;

const FONT_SIZE: u32 = 12;
const LINE_HEIGHT: u32 = 14;
const ORIGIN_X: u32 = 50;
const ORIGIN_Y: u32 = 750;

/// Encode text as a single-page PDF.
pub fn to_pdf(text: &str) -> Vec<u8> {
    let stream = content_stream(text);

    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
         /Resources << /Font << /F1 5 0 R >> >> /Contents 4 0 R >>"
            .to_string(),
        format!(
            "<< /Length {} >>\nstream\n{}\nendstream",
            stream.len(),
            stream
        ),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
    ];

    let mut out: Vec<u8> = Vec::with_capacity(stream.len() + 1024);
    out.extend_from_slice(b"%PDF-1.4\n");
    // Binary comment marks the file as binary for transfer tools.
    out.extend_from_slice(b"%\xE2\xE3\xCF\xD3\n");

    let mut offsets = Vec::with_capacity(objects.len());
    for (idx, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", idx + 1, body).as_bytes());
    }

    let xref_offset = out.len();
    let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in &offsets {
        xref.push_str(&format!("{:010} 00000 n \n", offset));
    }
    out.extend_from_slice(xref.as_bytes());
    out.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_offset
        )
        .as_bytes(),
    );

    out
}

/// Build the page content stream. The result is pure ASCII.
fn content_stream(text: &str) -> String {
    let mut stream = format!(
        "BT\n/F1 {} Tf\n{} {} Td\n",
        FONT_SIZE, ORIGIN_X, ORIGIN_Y
    );
    for (idx, line) in split_lines(text).enumerate() {
        if idx > 0 {
            stream.push_str(&format!("0 -{} Td\n", LINE_HEIGHT));
        }
        stream.push('(');
        escape_pdf_into(line, &mut stream);
        stream.push_str(") Tj\n");
    }
    stream.push_str("ET");
    stream
}

/// Escape a line for use inside a PDF literal string.
///
/// `(`, `)` and `\` get a backslash. Anything outside printable ASCII is
/// written as a `\ddd` octal escape of its WinAnsi code, or `?` when the
/// character has none.
fn escape_pdf_into(line: &str, out: &mut String) {
    for c in line.chars() {
        match c {
            '(' | ')' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            ' '..='~' => out.push(c),
            c => match win_ansi_code(c) {
                Some(code) => out.push_str(&format!("\\{:03o}", code)),
                None => out.push('?'),
            },
        }
    }
}

/// WinAnsiEncoding byte for a character outside printable ASCII.
fn win_ansi_code(c: char) -> Option<u8> {
    let code = match c {
        '\t' => 0x20,
        '\u{A0}'..='\u{FF}' => c as u32 as u8,
        '€' => 0x80,
        '‚' => 0x82,
        '„' => 0x84,
        '…' => 0x85,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '™' => 0x99,
        _ => return None,
    };
    Some(code)
}
