//! Minimal WordprocessingML encoding.
//!
//! Output is the flat `document.xml` part, not a zipped package: one
//! paragraph per line, each holding a single run with a single text element.

use quick_xml::escape::escape;

use super::split_lines;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;
const WORDML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Encode text as a WordprocessingML document.
pub fn to_docx(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2 + 256);
    out.push_str(XML_DECLARATION);
    out.push('\n');
    out.push_str(&format!("<w:document xmlns:w=\"{}\">\n", WORDML_NS));
    out.push_str("  <w:body>\n");

    for line in split_lines(text) {
        out.push_str("    <w:p><w:r><w:t xml:space=\"preserve\">");
        escape_xml_into(line, &mut out);
        out.push_str("</w:t></w:r></w:p>\n");
    }

    out.push_str("  </w:body>\n");
    out.push_str("</w:document>\n");
    out
}

/// Escape markup characters and drop characters XML 1.0 forbids.
fn escape_xml_into(line: &str, out: &mut String) {
    if line.chars().all(is_xml_char) {
        out.push_str(&escape(line));
    } else {
        let legal: String = line.chars().filter(|&c| is_xml_char(c)).collect();
        out.push_str(&escape(&legal));
    }
}

fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\t' | '\n' | '\r'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        let xml = to_docx("first\nsecond");
        assert!(xml.starts_with(XML_DECLARATION));
        assert!(xml.contains(
            "<w:p><w:r><w:t xml:space=\"preserve\">first</w:t></w:r></w:p>\n    <w:p><w:r><w:t xml:space=\"preserve\">second</w:t></w:r></w:p>"
        ));
        assert!(xml.trim_end().ends_with("</w:document>"));
        assert_eq!(xml.matches("<w:p>").count(), 2);
    }

    #[test]
    fn test_markup_escaped() {
        let xml = to_docx("a < b && c > \"d\" 'e'");
        assert!(xml.contains(">a &lt; b &amp;&amp; c &gt; &quot;d&quot; &apos;e&apos;</w:t>"));
    }

    #[test]
    fn test_escaped_run_reads_back() {
        let line = "Fish & chips <\"fresh\">";
        let xml = to_docx(line);
        assert_eq!(
            crate::extract::extract_docx_runs(&xml).as_deref(),
            Some(line)
        );
    }

    #[test]
    fn test_illegal_characters_dropped() {
        let xml = to_docx("bell\u{7}here\u{FFFF}");
        assert!(xml.contains(">bellhere</w:t>"));
    }
}
