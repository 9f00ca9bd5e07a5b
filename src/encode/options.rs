//! Encoding options and per-call context.

use chrono::{DateTime, Utc};

/// Footer line appended to Markdown output by default.
pub const DEFAULT_ATTRIBUTION: &str = "Converted with docshift";

/// Options for encoding text into target formats.
#[derive(Debug, Clone)]
pub struct EncodeOptions {
    /// Fixed conversion timestamp; `None` reads the clock per encode call
    pub timestamp: Option<DateTime<Utc>>,

    /// Attribution footer text for Markdown output
    pub attribution: String,
}

impl EncodeOptions {
    /// Create new encode options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the timestamp embedded in HTML, JSON and Markdown output.
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Set the Markdown attribution footer.
    pub fn with_attribution(mut self, attribution: impl Into<String>) -> Self {
        self.attribution = attribution.into();
        self
    }

    /// Resolve the context for one encode call.
    pub fn context<'a>(&'a self, base_name: &'a str) -> EncodeContext<'a> {
        EncodeContext {
            base_name,
            timestamp: self.timestamp.unwrap_or_else(Utc::now),
            attribution: &self.attribution,
        }
    }
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            timestamp: None,
            attribution: DEFAULT_ATTRIBUTION.to_string(),
        }
    }
}

/// Metadata an encoder may embed alongside the text.
#[derive(Debug, Clone, Copy)]
pub struct EncodeContext<'a> {
    /// Original filename without its extension
    pub base_name: &'a str,

    /// Conversion time
    pub timestamp: DateTime<Utc>,

    /// Attribution footer text
    pub attribution: &'a str,
}

impl<'a> EncodeContext<'a> {
    /// Context with a fixed timestamp and the default attribution.
    pub fn new(base_name: &'a str, timestamp: DateTime<Utc>) -> Self {
        Self {
            base_name,
            timestamp,
            attribution: DEFAULT_ATTRIBUTION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_defaults() {
        let options = EncodeOptions::default();
        assert!(options.timestamp.is_none());
        assert_eq!(options.attribution, DEFAULT_ATTRIBUTION);
    }

    #[test]
    fn test_context_uses_pinned_timestamp() {
        let ts = Utc.with_ymd_and_hms(2023, 1, 2, 3, 4, 5).unwrap();
        let options = EncodeOptions::new()
            .with_timestamp(ts)
            .with_attribution("Made by hand");
        let ctx = options.context("report");
        assert_eq!(ctx.timestamp, ts);
        assert_eq!(ctx.base_name, "report");
        assert_eq!(ctx.attribution, "Made by hand");
    }
}
