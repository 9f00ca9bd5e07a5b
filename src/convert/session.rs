//! Single-flight conversion session.

use std::sync::atomic::{AtomicBool, Ordering};

use super::Converter;
use crate::error::{Error, Result};
use crate::model::{ConvertedDocument, SourceDocument, TargetFormat};

/// A caller session allowing at most one conversion in flight.
///
/// A request made while another is unresolved is rejected with
/// [`Error::ConversionInProgress`]. The slot frees as soon as the running
/// request resolves, whether it succeeded or failed.
///
/// # Example
///
/// ```
/// use docshift::convert::ConversionSession;
/// use docshift::{Error, SourceDocument, TargetFormat};
///
/// let session = ConversionSession::default();
/// let guard = session.try_begin()?;
/// assert!(matches!(session.try_begin(), Err(Error::ConversionInProgress)));
/// drop(guard);
/// assert!(session.try_begin().is_ok());
/// # Ok::<(), docshift::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct ConversionSession {
    converter: Converter,
    in_flight: AtomicBool,
}

impl ConversionSession {
    /// Create a session around a converter.
    pub fn new(converter: Converter) -> Self {
        Self {
            converter,
            in_flight: AtomicBool::new(false),
        }
    }

    /// The converter this session drives.
    pub fn converter(&self) -> &Converter {
        &self.converter
    }

    /// Whether a conversion is currently running.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Claim the session's single slot.
    ///
    /// The slot is released when the returned guard is dropped.
    pub fn try_begin(&self) -> Result<InFlight<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| {
                log::debug!("rejecting conversion: another is in flight");
                Error::ConversionInProgress
            })?;
        Ok(InFlight {
            flag: &self.in_flight,
        })
    }

    /// Convert `source` to `target` under the single-flight policy.
    ///
    /// Both stages are synchronous; the future resolves on first poll. The
    /// async signature lets UI hosts await it like any other request.
    pub async fn convert(
        &self,
        source: &SourceDocument,
        target: TargetFormat,
    ) -> Result<ConvertedDocument> {
        let _guard = self.try_begin()?;
        self.converter.convert(source, target)
    }

    /// Read a file and convert it under the single-flight policy.
    ///
    /// The declared media type is left empty; routing relies on the
    /// file extension.
    #[cfg(feature = "async")]
    pub async fn convert_path(
        &self,
        path: impl AsRef<std::path::Path>,
        target: TargetFormat,
    ) -> Result<ConvertedDocument> {
        let _guard = self.try_begin()?;
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let source = SourceDocument::new(bytes, "", filename);
        self.converter.convert(&source, target)
    }
}

/// Guard holding a session's in-flight slot.
#[derive(Debug)]
#[must_use = "the session slot is released when the guard is dropped"]
pub struct InFlight<'a> {
    flag: &'a AtomicBool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
