//! Input Combiner
//!
//! Merges decoded fragments into one text blob. Image and document text is
//! emitted in arrival order, each behind a source marker; typed text always
//! comes last. Extractors are first-match-wins, so this order matters.

use crate::domain::entities::{CombinedInput, DecodedInput};

pub const IMAGE_MARKER: &str = "[Image OCR]: ";
pub const PDF_MARKER: &str = "[PDF Content]: ";
pub const WORD_MARKER: &str = "[Word Content]: ";

const SEPARATOR: &str = "\n\n";

/// Combine decoded inputs in arrival order
pub fn combine(inputs: Vec<DecodedInput>) -> CombinedInput {
    let mut combined = CombinedInput::default();

    for input in inputs {
        let source_type = input.source_type();
        if !combined.source_types.contains(&source_type) {
            combined.source_types.push(source_type);
        }

        match input {
            DecodedInput::Text(content) => {
                combined.text_content.push_str(&content);
                combined.text_content.push_str(SEPARATOR);
            }
            DecodedInput::Image(image) => {
                push_section(&mut combined.combined_text, IMAGE_MARKER, &image.ocr_text);
                combined.images.push(image);
            }
            DecodedInput::Pdf(document) => {
                push_section(&mut combined.combined_text, PDF_MARKER, &document.content);
                combined.documents.push(document);
            }
            DecodedInput::Word(document) => {
                push_section(&mut combined.combined_text, WORD_MARKER, &document.content);
                combined.documents.push(document);
            }
        }
    }

    combined.combined_text.push_str(&combined.text_content);

    tracing::debug!(
        "Combined {} image(s), {} document(s), {} chars of typed text",
        combined.images.len(),
        combined.documents.len(),
        combined.text_content.len()
    );

    combined
}

fn push_section(buffer: &mut String, marker: &str, body: &str) {
    buffer.push_str(marker);
    buffer.push_str(body);
    buffer.push_str(SEPARATOR);
}
