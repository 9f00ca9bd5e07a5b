//! Markdown encoding.

use super::EncodeContext;

/// Encode text as a Markdown document.
///
/// The text is placed verbatim inside a fenced code block. The fence grows
/// past the longest backtick run in the text so the block cannot close early.
pub fn to_markdown(text: &str, ctx: &EncodeContext<'_>) -> String {
    let fence = "`".repeat(fence_len(text));
    let date = ctx.timestamp.format("%Y-%m-%d %H:%M:%S UTC");

    let mut out = String::with_capacity(text.len() + 128);
    out.push_str(&format!("# {}\n\n", ctx.base_name));
    out.push_str(&format!("> Converted on {}\n\n", date));
    out.push_str("## Content\n\n");
    out.push_str(&fence);
    out.push('\n');
    out.push_str(text);
    if !text.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(&fence);
    out.push_str("\n\n---\n");
    out.push_str(&format!("*{}*\n", ctx.attribution));
    out
}

fn fence_len(text: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for c in text.chars() {
        if c == '`' {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    (longest + 1).max(3)
}
