//! OutputType - Kind of expected deliverable

use serde::{Deserialize, Serialize};

/// Deliverable output type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputType {
    Code,
    Design,
    Documentation,
    Prototype,
    #[default]
    Other,
}

impl std::fmt::Display for OutputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputType::Code => write!(f, "code"),
            OutputType::Design => write!(f, "design"),
            OutputType::Documentation => write!(f, "documentation"),
            OutputType::Prototype => write!(f, "prototype"),
            OutputType::Other => write!(f, "other"),
        }
    }
}
