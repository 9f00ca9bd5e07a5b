//! HTML encoding.

use chrono::SecondsFormat;
use quick_xml::escape::escape;

use super::EncodeContext;

/// Encode text as a standalone HTML page.
///
/// The base name becomes the title and heading; the text sits in a `<pre>`
/// block so whitespace survives. Both are HTML-escaped.
pub fn to_html(text: &str, ctx: &EncodeContext<'_>) -> String {
    let title = escape_html(ctx.base_name);
    let generated = ctx.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        body {{ font-family: Arial, sans-serif; margin: 40px; line-height: 1.6; }}
        pre {{ white-space: pre-wrap; }}
        footer {{ margin-top: 2em; color: #666; font-size: 0.9em; }}
    </style>
</head>
<body>
    <h1>{title}</h1>
    <pre>{body}</pre>
    <footer>Generated on {generated}</footer>
</body>
</html>
"#,
        title = title,
        body = escape_html(text),
        generated = generated,
    )
}

/// Escape the characters HTML treats specially in text and attributes.
pub fn escape_html(s: &str) -> String {
    escape(s).into_owned()
}
