//! Refined Prompt Repository Port
//!
//! Abstract interface for persisting finished documents.

use async_trait::async_trait;

use crate::domain::entities::{RefinedPrompt, StoredPrompt};
use crate::domain::errors::RefineError;

/// Persistence collaborator
#[async_trait]
pub trait RefinedPromptRepository: Send + Sync {
    /// Store a document, assigning an identifier and timestamps
    async fn save(&self, prompt: RefinedPrompt) -> Result<StoredPrompt, RefineError>;
}
