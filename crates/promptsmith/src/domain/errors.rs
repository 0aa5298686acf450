//! Domain Errors
//!
//! Every error is terminal for the current refinement request.

use thiserror::Error;

use crate::domain::value_objects::SourceType;

/// Refinement errors
#[derive(Debug, Error)]
pub enum RefineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Irrelevant input: {0}")]
    IrrelevantInput(String),

    #[error("Failed to decode {source_type} input: {message}")]
    Decoding {
        source_type: SourceType,
        message: String,
    },

    #[error("Invalid pattern '{name}': {source}")]
    InvalidPattern {
        name: String,
        #[source]
        source: regex::Error,
    },

    #[error("Repository error: {0}")]
    Repository(String),
}

impl RefineError {
    pub fn decoding<E: std::fmt::Display>(source_type: SourceType, err: E) -> Self {
        Self::Decoding {
            source_type,
            message: err.to_string(),
        }
    }

    /// True for rejections raised by the relevance gate
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::IrrelevantInput(_))
    }
}
