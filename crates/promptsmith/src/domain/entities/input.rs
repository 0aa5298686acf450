//! Input - Raw and decoded request fragments
//!
//! Pure domain types. Decoding itself happens behind the `InputDecoder` port.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::SourceType;

/// An input as submitted by the caller, before decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    Text(String),
    Image(PathBuf),
    Pdf(PathBuf),
    Word(PathBuf),
}

impl RawInput {
    /// Classify a document by its file extension.
    ///
    /// `.pdf` becomes a PDF input, `.doc`/`.docx` a Word input. Anything
    /// else is not a supported document and yields `None`.
    pub fn from_document_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())?;

        match ext.as_str() {
            "pdf" => Some(RawInput::Pdf(path)),
            "doc" | "docx" => Some(RawInput::Word(path)),
            _ => None,
        }
    }

    pub fn source_type(&self) -> SourceType {
        match self {
            RawInput::Text(_) => SourceType::Text,
            RawInput::Image(_) => SourceType::Image,
            RawInput::Pdf(_) => SourceType::Pdf,
            RawInput::Word(_) => SourceType::Word,
        }
    }
}

/// Mean value of one color channel, as reported by the image collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelMean {
    pub channel: String,
    pub mean: u8,
}

impl ChannelMean {
    pub fn new(channel: impl Into<String>, mean: u8) -> Self {
        Self {
            channel: channel.into(),
            mean,
        }
    }
}

/// Decoded image: OCR text plus optional color statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default)]
    pub ocr_text: String,
    #[serde(default)]
    pub dominant_colors: Vec<ChannelMean>,
}

impl ImageData {
    pub fn from_ocr(ocr_text: impl Into<String>) -> Self {
        Self {
            path: None,
            ocr_text: ocr_text.into(),
            dominant_colors: Vec::new(),
        }
    }
}

/// Decoded PDF or Word document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub content: String,
}

impl DocumentData {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            path: None,
            content: content.into(),
        }
    }
}

/// A fully decoded input, ready for the combiner
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedInput {
    Text(String),
    Image(ImageData),
    Pdf(DocumentData),
    Word(DocumentData),
}

impl DecodedInput {
    pub fn source_type(&self) -> SourceType {
        match self {
            DecodedInput::Text(_) => SourceType::Text,
            DecodedInput::Image(_) => SourceType::Image,
            DecodedInput::Pdf(_) => SourceType::Pdf,
            DecodedInput::Word(_) => SourceType::Word,
        }
    }
}

/// Output of the input combiner
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombinedInput {
    /// Image and document text in arrival order, followed by the typed text
    pub combined_text: String,
    /// Typed text only
    pub text_content: String,
    pub images: Vec<ImageData>,
    pub documents: Vec<DocumentData>,
    /// Distinct source kinds, in arrival order
    pub source_types: Vec<SourceType>,
}

impl CombinedInput {
    /// Wrap plain text as if it came from a single text input
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            combined_text: text.clone(),
            text_content: text,
            images: Vec::new(),
            documents: Vec::new(),
            source_types: vec![SourceType::Text],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_classification_by_extension() {
        assert_eq!(
            RawInput::from_document_path("brief.PDF"),
            Some(RawInput::Pdf(PathBuf::from("brief.PDF")))
        );
        assert_eq!(
            RawInput::from_document_path("notes.docx"),
            Some(RawInput::Word(PathBuf::from("notes.docx")))
        );
        assert_eq!(
            RawInput::from_document_path("legacy.doc").map(|i| i.source_type()),
            Some(SourceType::Word)
        );
        assert_eq!(RawInput::from_document_path("sheet.xlsx"), None);
        assert_eq!(RawInput::from_document_path("no_extension"), None);
    }

    #[test]
    fn test_image_sidecar_json_shape() {
        let json = r#"{"ocrText":"Modern grid","dominantColors":[{"channel":"red","mean":10}]}"#;
        let image: ImageData = serde_json::from_str(json).unwrap();
        assert_eq!(image.ocr_text, "Modern grid");
        assert_eq!(image.dominant_colors, vec![ChannelMean::new("red", 10)]);
        assert!(image.path.is_none());
    }
}
