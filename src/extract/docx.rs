//! Run-text element heuristic for WordprocessingML sources.
//!
//! Word stores visible text in `<w:t>` elements inside runs. Matching those
//! elements directly recovers the text of flat (already unzipped) document
//! XML. Zipped `.docx` packages yield no matches and therefore fail.

use quick_xml::escape::unescape;
use regex::Regex;
use std::sync::OnceLock;

fn run_text_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"<w:t(?:\s[^>]*)?>([^<]*)</w:t>").expect("valid run-text regex")
    })
}

/// Collect the content of every `<w:t>` element, joined by single spaces.
///
/// Returns `None` when no element is present. Empty elements are matches
/// but contribute nothing to the joined text.
pub fn extract_docx_runs(xml: &str) -> Option<String> {
    let mut matched = false;
    let runs: Vec<String> = run_text_regex()
        .captures_iter(xml)
        .filter_map(|caps| caps.get(1))
        .inspect(|_| matched = true)
        .map(|m| unescape_run(m.as_str()))
        .filter(|run| !run.is_empty())
        .collect();

    matched.then(|| runs.join(" "))
}

/// Resolve the predefined XML entities and numeric character references.
///
/// A run holding a malformed or unknown reference is kept as written.
fn unescape_run(raw: &str) -> String {
    match unescape(raw) {
        Ok(text) => text.into_owned(),
        Err(err) => {
            log::debug!("keeping raw run text: {}", err);
            raw.to_string()
        }
    }
}
