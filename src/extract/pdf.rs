//! Parenthesis-run heuristic for PDF sources.
//!
//! Text in an uncompressed PDF content stream is shown by operators such as
//! `(Hello) Tj`. The literal string operand is delimited by parentheses
//! which may nest when balanced, so scanning for balanced `(...)` runs
//! recovers most visible text without parsing the object graph. Compressed
//! streams, hex strings and CID fonts are not handled.

/// Find the raw contents of every literal string in `content`.
///
/// Unescaped parentheses nest, so `(f(x) = 1)` is one run. A backslash
/// protects the byte after it. An opening parenthesis that is never closed
/// is skipped and scanning resumes right after it.
fn literal_runs(content: &str) -> Vec<&str> {
    let bytes = content.as_bytes();
    let mut runs = Vec::new();
    let mut pos = 0;

    while let Some(offset) = bytes[pos..].iter().position(|&b| b == b'(') {
        let open = pos + offset;
        match closing_paren(bytes, open + 1) {
            Some(close) => {
                runs.push(&content[open + 1..close]);
                pos = close + 1;
            }
            None => pos = open + 1,
        }
    }

    runs
}

/// Index of the `)` that balances a `(` just before `start`.
fn closing_paren(bytes: &[u8], start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut i = start;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 1,
            b'(' => depth += 1,
            b')' if depth == 0 => return Some(i),
            b')' => depth -= 1,
            _ => {}
        }
        i += 1;
    }

    None
}

/// Collect the contents of every literal-string run, joined by single spaces.
///
/// Returns `None` when the content holds no run at all. Empty runs such as
/// `()` are matches but contribute nothing to the joined text, so content
/// holding only empty runs yields `Some("")`.
pub fn extract_pdf_runs(content: &str) -> Option<String> {
    let runs = literal_runs(content);
    if runs.is_empty() {
        return None;
    }

    let text: Vec<String> = runs
        .into_iter()
        .map(unescape_literal)
        .filter(|run| !run.is_empty())
        .collect();
    Some(text.join(" "))
}

/// Undo PDF literal-string escapes.
///
/// Octal escapes are read as Latin-1 code points, which matches the
/// `WinAnsiEncoding` printable range closely enough for text recovery.
fn unescape_literal(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            // Backslash-newline is a line continuation.
            Some('\n') => {}
            Some('\r') => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            Some(d @ '0'..='7') => {
                let mut code = d.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    match chars.peek().and_then(|c| c.to_digit(8)) {
                        Some(v) => {
                            code = code * 8 + v;
                            chars.next();
                        }
                        None => break,
                    }
                }
                out.push(char::from((code & 0xFF) as u8));
            }
            Some(other) => out.push(other),
            None => {}
        }
    }

    out
}
