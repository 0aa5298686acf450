//! RefinedPrompt - The structured requirements document
//!
//! Produced exactly once per refinement request. Field names serialize in
//! camelCase so the JSON document matches what downstream consumers expect.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    Complexity, DesignStyle, Layout, OutputType, Platform, Priority, SourceType,
};

/// Extraction method recorded in every document's metadata
pub const EXTRACTION_METHOD: &str = "pattern-matching-and-keyword-extraction";

/// Placeholder purpose used when nothing usable was found
pub const UNSPECIFIED_PURPOSE: &str = "Unspecified purpose";

/// What the requester is trying to achieve
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreIntent {
    pub purpose: String,
    pub description: String,
    pub target_audience: Option<String>,
}

/// A single requested capability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub feature: String,
    pub description: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionalRequirements {
    pub primary_features: Vec<Feature>,
    pub user_interactions: Vec<String>,
    pub expected_behaviors: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalConstraints {
    pub platform: Option<Platform>,
    pub technologies: Vec<String>,
    pub performance: Option<String>,
    pub compatibility: Vec<String>,
    pub limitations: Vec<String>,
}

/// One expected deliverable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Output {
    #[serde(rename = "type")]
    pub kind: OutputType,
    pub description: String,
    pub format: String,
}

impl Output {
    /// Standard output entry for a detected deliverable type
    pub fn standard(kind: OutputType) -> Self {
        Self {
            kind,
            description: format!("Deliver {}", kind),
            format: "standard".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub name: String,
    pub description: String,
    pub estimated_complexity: Complexity,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deliverables {
    pub outputs: Vec<Output>,
    pub milestones: Vec<Milestone>,
}

/// Visual hints read from the first image input
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualElements {
    pub colors: Vec<String>,
    pub design_style: Option<DesignStyle>,
    pub layout: Option<Layout>,
    pub components: Vec<String>,
}

/// Quality scores and provenance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// How trustworthy the extraction is (0.0 - 1.0)
    pub confidence_score: f64,
    /// How fully populated the document is (0.0 - 1.0)
    pub completeness_score: f64,
    pub source_types: Vec<SourceType>,
    pub extraction_method: String,
    pub missing_information: Vec<String>,
}

impl Metadata {
    /// Metadata with baseline scores, before scoring runs
    pub fn new(source_types: Vec<SourceType>) -> Self {
        Self {
            confidence_score: 0.5,
            completeness_score: 0.5,
            source_types,
            extraction_method: EXTRACTION_METHOD.to_string(),
            missing_information: Vec::new(),
        }
    }
}

/// References to the original inputs, kept for traceability only
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceInputs {
    pub text_content: String,
    pub image_paths: Vec<String>,
    pub document_paths: Vec<String>,
    pub original_format: String,
}

/// RefinedPrompt - Root of the structured requirements document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefinedPrompt {
    pub core_intent: CoreIntent,
    pub functional_requirements: FunctionalRequirements,
    pub technical_constraints: TechnicalConstraints,
    pub deliverables: Deliverables,
    pub visual_elements: VisualElements,
    pub metadata: Metadata,
    pub source_inputs: SourceInputs,
    #[serde(default)]
    pub custom_fields: serde_json::Map<String, serde_json::Value>,
}
