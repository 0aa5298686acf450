//! Input Decoder Port
//!
//! Abstract interface for turning raw inputs into text.

use std::path::Path;

use async_trait::async_trait;

use crate::domain::entities::{DocumentData, ImageData};
use crate::domain::errors::RefineError;
use crate::domain::value_objects::SourceType;

/// Decoding collaborator
///
/// Every call is call-and-wait: the decoded text must be complete when the
/// call returns. Failures are reported as `RefineError::Decoding` tagged
/// with the offending input's kind.
///
/// # Example
///
/// ```rust,ignore
/// use promptsmith::ports::InputDecoder;
///
/// struct TesseractDecoder { /* ... */ }
///
/// #[async_trait]
/// impl InputDecoder for TesseractDecoder {
///     async fn decode_image(&self, path: &Path) -> Result<ImageData, RefineError> {
///         // Run OCR and collect channel statistics
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait InputDecoder: Send + Sync {
    /// Decode typed text. Returns the trimmed text unchanged.
    async fn decode_text(&self, content: &str) -> Result<String, RefineError> {
        Ok(content.trim().to_string())
    }

    /// OCR an image and summarize its colors
    async fn decode_image(&self, path: &Path) -> Result<ImageData, RefineError>;

    /// Extract plain text from a PDF or Word document
    async fn decode_document(
        &self,
        source_type: SourceType,
        path: &Path,
    ) -> Result<DocumentData, RefineError>;
}
