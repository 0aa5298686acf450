//! StoredPrompt - A refined document accepted by the persistence collaborator

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::RefinedPrompt;

/// RefinedPrompt with an assigned identifier and timestamps
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredPrompt {
    pub id: Uuid,
    #[serde(flatten)]
    pub prompt: RefinedPrompt,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StoredPrompt {
    /// Assign a fresh ID and timestamps
    pub fn new(prompt: RefinedPrompt) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            prompt,
            created_at: now,
            updated_at: now,
        }
    }
}
