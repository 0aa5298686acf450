//! Refine Application Service (Use Case)
//!
//! Decodes raw inputs through the decoder port, then runs the engine.

use std::sync::Arc;

use crate::domain::entities::{DecodedInput, RawInput, RefinedPrompt, StoredPrompt};
use crate::domain::errors::RefineError;
use crate::engine::Refiner;
use crate::ports::{InputDecoder, RefinedPromptRepository};

const NO_INPUT: &str = "At least one input (text, image, or document) is required";

/// Application service for refinement requests
pub struct RefineService<D: InputDecoder> {
    decoder: Arc<D>,
    refiner: Arc<Refiner>,
}

impl<D: InputDecoder> RefineService<D> {
    pub fn new(decoder: Arc<D>, refiner: Arc<Refiner>) -> Self {
        Self { decoder, refiner }
    }

    /// Decode every input in arrival order; the first failure aborts
    pub async fn decode(&self, inputs: &[RawInput]) -> Result<Vec<DecodedInput>, RefineError> {
        let mut decoded = Vec::with_capacity(inputs.len());

        for input in inputs {
            let result = match input {
                RawInput::Text(content) => {
                    self.decoder.decode_text(content).await.map(DecodedInput::Text)
                }
                RawInput::Image(path) => {
                    self.decoder.decode_image(path).await.map(DecodedInput::Image)
                }
                RawInput::Pdf(path) => self
                    .decoder
                    .decode_document(input.source_type(), path)
                    .await
                    .map(DecodedInput::Pdf),
                RawInput::Word(path) => self
                    .decoder
                    .decode_document(input.source_type(), path)
                    .await
                    .map(DecodedInput::Word),
            };

            match result {
                Ok(d) => decoded.push(d),
                Err(e) => {
                    tracing::warn!("Decoding failed for {} input: {}", input.source_type(), e);
                    return Err(e);
                }
            }
        }

        Ok(decoded)
    }

    /// Decode, combine and refine one request
    pub async fn refine(&self, inputs: &[RawInput]) -> Result<RefinedPrompt, RefineError> {
        let inputs: Vec<RawInput> = inputs
            .iter()
            .filter(|i| !matches!(i, RawInput::Text(t) if t.trim().is_empty()))
            .cloned()
            .collect();

        if inputs.is_empty() {
            return Err(RefineError::InvalidInput(NO_INPUT.to_string()));
        }

        let decoded = self.decode(&inputs).await?;
        let combined = self.refiner.combine(decoded);
        self.refiner.refine(&combined, &combined.source_types)
    }

    /// Refine one request and hand the document to the repository
    pub async fn refine_and_save<R>(
        &self,
        inputs: &[RawInput],
        repo: &R,
    ) -> Result<StoredPrompt, RefineError>
    where
        R: RefinedPromptRepository + ?Sized,
    {
        let prompt = self.refine(inputs).await?;
        let stored = repo.save(prompt).await?;

        tracing::info!("Saved refined prompt {}", stored.id);

        Ok(stored)
    }
}
