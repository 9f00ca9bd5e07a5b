//! Plain text encoding.

/// Encode text as plain text: the bytes are the text, unmodified.
pub fn to_text(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_text_is_identity() {
        let text = "  keep \t whitespace\n\n";
        assert_eq!(to_text(text), text.as_bytes());
    }
}
