//! Relevance Gate
//!
//! Rejects blobs that are too short or look like placeholder content.
//! Runs once per request, before any extractor.

use regex::Regex;

use crate::domain::errors::RefineError;
use crate::engine::config::GateConfig;
use crate::engine::patterns;
use crate::engine::text::char_len;

const TOO_SHORT: &str =
    "Input is too short or irrelevant. Please provide more detailed information.";
const PLACEHOLDER: &str =
    "Input appears to be irrelevant or test content. Please provide meaningful project requirements.";

/// Compiled relevance gate
#[derive(Debug, Clone)]
pub struct RelevanceGate {
    min_length: usize,
    placeholder: Option<Regex>,
    greeting: Option<Regex>,
}

impl RelevanceGate {
    pub fn new(config: &GateConfig) -> Result<Self, RefineError> {
        Ok(Self {
            min_length: config.min_length,
            placeholder: patterns::leading_word(&config.placeholder_tokens)?,
            greeting: patterns::leading_word(&config.greeting_tokens)?,
        })
    }

    /// Accept or reject the combined text
    ///
    /// Checks, in order: leading placeholder token (irrelevant), trimmed
    /// length below the minimum (invalid), leading greeting or no alphabetic
    /// character at all (irrelevant).
    pub fn check(&self, text: &str) -> Result<(), RefineError> {
        let trimmed = text.trim();

        if starts_with(&self.placeholder, trimmed) {
            return Err(RefineError::IrrelevantInput(PLACEHOLDER.to_string()));
        }

        if char_len(trimmed) < self.min_length {
            return Err(RefineError::InvalidInput(TOO_SHORT.to_string()));
        }

        let has_letters = trimmed.chars().any(|c| c.is_ascii_alphabetic());
        if starts_with(&self.greeting, trimmed) || !has_letters {
            return Err(RefineError::IrrelevantInput(PLACEHOLDER.to_string()));
        }

        Ok(())
    }
}

fn starts_with(pattern: &Option<Regex>, text: &str) -> bool {
    pattern.as_ref().is_some_and(|re| re.is_match(text))
}
