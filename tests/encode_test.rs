//! Integration tests: each encoder's output decodes back to the source lines.

use chrono::{TimeZone, Utc};
use docshift::encode::{EncodeOptions, EncoderRegistry, JsonDocument};
use docshift::extract::{extract_docx_runs, extract_pdf_runs};
use docshift::TargetFormat;

const SAMPLE: &str = "Quarterly report\n  indented {braces} and \\backslash\\\nquote \"here\" & <tags>\n\nlast (line)";

fn registry() -> EncoderRegistry {
    let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
    EncoderRegistry::new(EncodeOptions::new().with_timestamp(ts))
}

fn encode(text: &str, format: TargetFormat) -> String {
    let encoded = registry().encode(text, format, "report").unwrap();
    String::from_utf8_lossy(&encoded.bytes).into_owned()
}

fn sample_lines() -> Vec<&'static str> {
    SAMPLE.split('\n').collect()
}

fn between<'a>(haystack: &'a str, start: &str, end: &str) -> &'a str {
    let from = haystack.find(start).unwrap() + start.len();
    let to = from + haystack[from..].find(end).unwrap();
    &haystack[from..to]
}

fn unescape_html(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// Undo the encoder's RTF escaping for ASCII text.
fn decode_rtf_body(body: &str) -> String {
    let mut out = String::new();
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('\\') | Some('{') | Some('}') => out.push(chars.next().unwrap()),
            _ => {
                let word: String = std::iter::from_fn(|| chars.next_if(|c| c.is_ascii_alphabetic())).collect();
                if chars.peek() == Some(&' ') {
                    chars.next();
                }
                if word == "par" {
                    out.push('\n');
                }
            }
        }
    }
    out
}

fn parse_csv_content_column(csv: &str) -> Vec<String> {
    csv.split('\n')
        .skip(1)
        .map(|row| {
            let content = row.splitn(2, "\",\"").nth(1).unwrap();
            content.strip_suffix('"').unwrap().replace("\"\"", "\"")
        })
        .collect()
}

#[test]
fn test_txt_round_trip() {
    assert_eq!(encode(SAMPLE, TargetFormat::Txt), SAMPLE);
}

#[test]
fn test_html_round_trip() {
    let html = encode(SAMPLE, TargetFormat::Html);
    let pre = between(&html, "<pre>", "</pre>");
    assert_eq!(unescape_html(pre), SAMPLE);
}

#[test]
fn test_rtf_round_trip() {
    let rtf = encode(SAMPLE, TargetFormat::Rtf);
    let marker = "\\f0\\fs24 ";
    let start = rtf.find(marker).unwrap() + marker.len();
    let body = rtf[start..].strip_suffix('}').unwrap();
    assert_eq!(decode_rtf_body(body), SAMPLE);
}

#[test]
fn test_markdown_round_trip() {
    let md = encode(SAMPLE, TargetFormat::Md);
    let block = between(&md, "```\n", "\n```\n");
    assert_eq!(block, SAMPLE);
    assert!(md.starts_with("# report\n"));
    assert!(md.contains("## Content"));
}

#[test]
fn test_csv_round_trip() {
    let csv = encode(SAMPLE, TargetFormat::Csv);
    let column = parse_csv_content_column(&csv);
    assert_eq!(column, sample_lines());
    assert_eq!(csv.split('\n').count(), sample_lines().len() + 1);
    assert!(csv.contains("quote \"\"here\"\" & <tags>"));
}

#[test]
fn test_json_round_trip() {
    let json = encode(SAMPLE, TargetFormat::Json);
    let doc: JsonDocument = serde_json::from_str(&json).unwrap();
    assert_eq!(doc.content, SAMPLE);
    assert_eq!(doc.filename, "report");
    assert_eq!(doc.lines, sample_lines());
    assert_eq!(doc.metadata.line_count, 5);
    assert_eq!(doc.metadata.character_count, SAMPLE.chars().count());
    assert_eq!(doc.metadata.word_count, SAMPLE.split_whitespace().count());
}

#[test]
fn test_json_counts_untyped() {
    let text = "one two\nthree\n";
    let json = encode(text, TargetFormat::Json);
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["lines"].as_array().unwrap().len(), 3);
    assert_eq!(value["metadata"]["characterCount"], 14);
    assert_eq!(value["metadata"]["wordCount"], 3);
    assert_eq!(value["metadata"]["convertedAt"], "2024-05-01T12:30:00.000Z");
}

#[test]
fn test_json_lines_match_content_for_crlf() {
    let json = encode("a\r\nb\r\n", TargetFormat::Json);
    let doc: JsonDocument = serde_json::from_str(&json).unwrap();
    assert_eq!(doc.lines, vec!["a\r", "b\r", ""]);
    assert_eq!(doc.lines.join("\n"), doc.content);
    assert_eq!(doc.metadata.line_count, 3);
}

#[test]
fn test_pdf_starts_with_marker_and_recovers_text() {
    let encoded = registry().encode(SAMPLE, TargetFormat::Pdf, "report").unwrap();
    assert!(encoded.bytes.starts_with(b"%PDF-"));

    let decoded = String::from_utf8_lossy(&encoded.bytes);
    let recovered = extract_pdf_runs(&decoded).unwrap();
    let expected: Vec<&str> = sample_lines().into_iter().filter(|l| !l.is_empty()).collect();
    assert_eq!(recovered, expected.join(" "));
}

#[test]
fn test_docx_starts_with_declaration_and_recovers_text() {
    let xml = encode(SAMPLE, TargetFormat::Docx);
    assert!(xml.starts_with("<?xml version=\"1.0\""));
    assert_eq!(xml.matches("<w:p>").count(), 5);

    let recovered = extract_docx_runs(&xml).unwrap();
    let expected: Vec<&str> = sample_lines().into_iter().filter(|l| !l.is_empty()).collect();
    assert_eq!(recovered, expected.join(" "));
}

#[test]
fn test_arbitrary_unicode_never_fails() {
    let text = "emoji 😀\u{0}\u{7}\u{FFFF} rtl \u{202E}עברית\r\nzwj 👩‍👩‍👧 中文";
    for format in TargetFormat::ALL {
        let encoded = registry().encode(text, format, "ünïcode").unwrap();
        assert!(!encoded.bytes.is_empty(), "{} produced no output", format);
    }
}
