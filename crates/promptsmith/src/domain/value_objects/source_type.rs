//! SourceType - Kind of input a fragment of text came from

use serde::{Deserialize, Serialize};

/// Input source kind
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Text,
    Image,
    Pdf,
    Word,
    Combined,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Text => "text",
            SourceType::Image => "image",
            SourceType::Pdf => "pdf",
            SourceType::Word => "word",
            SourceType::Combined => "combined",
        }
    }
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
