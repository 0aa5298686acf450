//! Filesystem decoder
//!
//! Reads already-extracted text from disk. OCR and document text extraction
//! happen upstream; this adapter only loads their output.

use std::path::Path;

use async_trait::async_trait;
use promptsmith::{DocumentData, ImageData, InputDecoder, RefineError, SourceType};

/// `InputDecoder` over local files
///
/// - images: a JSON sidecar (`{"ocrText": ..., "dominantColors": [...]}`)
///   or a plain UTF-8 file holding the OCR text; a JSON object that does
///   not fit the sidecar schema is a decoding error
/// - documents: a UTF-8 file holding the extracted text
#[derive(Debug, Clone, Default)]
pub struct FsDecoder;

impl FsDecoder {
    pub fn new() -> Self {
        Self
    }

    async fn read_text(source_type: SourceType, path: &Path) -> Result<String, RefineError> {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| RefineError::decoding(source_type, format!("{}: {}", path.display(), e)))
    }
}

#[async_trait]
impl InputDecoder for FsDecoder {
    async fn decode_image(&self, path: &Path) -> Result<ImageData, RefineError> {
        let raw = Self::read_text(SourceType::Image, path).await?;

        // Any JSON object is a sidecar and must fit its schema
        let mut image = match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(value @ serde_json::Value::Object(_)) => {
                serde_json::from_value::<ImageData>(value).map_err(|e| {
                    RefineError::decoding(
                        SourceType::Image,
                        format!("{}: invalid sidecar: {}", path.display(), e),
                    )
                })?
            }
            _ => ImageData::from_ocr(raw.trim()),
        };
        if image.path.is_none() {
            image.path = Some(path.display().to_string());
        }

        tracing::debug!(
            "Decoded image {:?}: {} chars of OCR text, {} channel(s)",
            path,
            image.ocr_text.chars().count(),
            image.dominant_colors.len()
        );

        Ok(image)
    }

    async fn decode_document(
        &self,
        source_type: SourceType,
        path: &Path,
    ) -> Result<DocumentData, RefineError> {
        let content = Self::read_text(source_type, path).await?;

        tracing::debug!("Decoded {} document {:?}", source_type, path);

        Ok(DocumentData {
            path: Some(path.display().to_string()),
            content: content.trim().to_string(),
        })
    }
}
