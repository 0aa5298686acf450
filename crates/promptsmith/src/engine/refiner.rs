//! Refiner - Orchestrates one refinement request
//!
//! combine -> gate -> extractors -> assemble -> score. A compiled `Refiner`
//! is immutable and can serve any number of requests concurrently.

use crate::domain::entities::{
    CombinedInput, DecodedInput, Metadata, RefinedPrompt, SourceInputs,
};
use crate::domain::errors::RefineError;
use crate::domain::value_objects::SourceType;
use crate::engine::config::RefinerConfig;
use crate::engine::deliverables::DeliverablePatterns;
use crate::engine::functional::FunctionalPatterns;
use crate::engine::gate::RelevanceGate;
use crate::engine::intent::IntentPatterns;
use crate::engine::technical::TechnicalPatterns;
use crate::engine::text::truncate_chars;
use crate::engine::{combiner, deliverables, functional, intent, scoring, technical, visual};

const SOURCE_TEXT_MAX_CHARS: usize = 1000;

/// Compiled refinement engine
#[derive(Debug, Clone)]
pub struct Refiner {
    config: RefinerConfig,
    gate: RelevanceGate,
    intent: IntentPatterns,
    functional: FunctionalPatterns,
    technical: TechnicalPatterns,
    deliverables: DeliverablePatterns,
}

impl Refiner {
    /// Compile every configured pattern
    pub fn new(config: RefinerConfig) -> Result<Self, RefineError> {
        Ok(Self {
            gate: RelevanceGate::new(&config.gate)?,
            intent: IntentPatterns::new(&config.intent)?,
            functional: FunctionalPatterns::new(&config.functional)?,
            technical: TechnicalPatterns::new(&config.technical)?,
            deliverables: DeliverablePatterns::new(&config.deliverables)?,
            config,
        })
    }

    /// Merge decoded inputs into one text blob
    pub fn combine(&self, inputs: Vec<DecodedInput>) -> CombinedInput {
        combiner::combine(inputs)
    }

    /// Refine a combined input into a structured document
    ///
    /// Fails only when the relevance gate rejects the combined text.
    /// An empty `source_types` slice is recorded as `["text"]`.
    pub fn refine(
        &self,
        input: &CombinedInput,
        source_types: &[SourceType],
    ) -> Result<RefinedPrompt, RefineError> {
        let text = input.combined_text.as_str();

        if let Err(e) = self.gate.check(text) {
            tracing::warn!("Refinement rejected: {}", e);
            return Err(e);
        }

        let core_intent = intent::extract(text, &self.intent);
        let functional_requirements =
            functional::extract(text, &self.functional, &self.config.priority);
        let technical_constraints = technical::extract(text, &self.technical);
        let deliverables = deliverables::extract(text, &self.deliverables);
        let visual_elements = input
            .images
            .first()
            .map(|image| visual::extract(image, &self.config.visual))
            .unwrap_or_default();

        tracing::debug!(
            "Extracted {} feature(s), {} interaction(s), {} behavior(s), {} output(s), {} milestone(s)",
            functional_requirements.primary_features.len(),
            functional_requirements.user_interactions.len(),
            functional_requirements.expected_behaviors.len(),
            deliverables.outputs.len(),
            deliverables.milestones.len()
        );

        let source_types = effective_source_types(source_types);
        let original_format = source_types
            .iter()
            .map(SourceType::as_str)
            .collect::<Vec<_>>()
            .join("+");

        let mut prompt = RefinedPrompt {
            core_intent,
            functional_requirements,
            technical_constraints,
            deliverables,
            visual_elements,
            metadata: Metadata::new(source_types),
            source_inputs: SourceInputs {
                text_content: truncate_chars(text, SOURCE_TEXT_MAX_CHARS).to_string(),
                image_paths: input
                    .images
                    .iter()
                    .map(|i| i.path.clone().unwrap_or_default())
                    .collect(),
                document_paths: input
                    .documents
                    .iter()
                    .map(|d| d.path.clone().unwrap_or_default())
                    .collect(),
                original_format,
            },
            custom_fields: serde_json::Map::new(),
        };

        let scores = scoring::score(&prompt);
        prompt.metadata.confidence_score = scores.confidence;
        prompt.metadata.completeness_score = scores.completeness;
        prompt.metadata.missing_information = scores.missing_information;

        tracing::info!(
            "Refined prompt: confidence {:.2}, completeness {:.2}, {} missing",
            prompt.metadata.confidence_score,
            prompt.metadata.completeness_score,
            prompt.metadata.missing_information.len()
        );

        Ok(prompt)
    }

    /// Refine a single typed text
    pub fn refine_text(&self, text: &str) -> Result<RefinedPrompt, RefineError> {
        let input = CombinedInput::from_text(text);
        self.refine(&input, &input.source_types)
    }
}

fn effective_source_types(source_types: &[SourceType]) -> Vec<SourceType> {
    let mut distinct = Vec::with_capacity(source_types.len());
    for source_type in source_types {
        if !distinct.contains(source_type) {
            distinct.push(*source_type);
        }
    }
    if distinct.is_empty() {
        distinct.push(SourceType::Text);
    }
    distinct
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::domain::entities::{ChannelMean, DocumentData, ImageData};
    use crate::domain::value_objects::{OutputType, Platform};

    const DELIVERY: &str = "I want to build a mobile app for delivery tracking. \
                            Drivers can update their location. \
                            The app should work on iOS and Android.";

    fn refiner() -> Refiner {
        Refiner::new(RefinerConfig::default()).unwrap()
    }

    #[test]
    fn test_delivery_tracking_example() {
        let prompt = refiner().refine_text(DELIVERY).unwrap();

        assert!(prompt
            .core_intent
            .purpose
            .starts_with("build a mobile app"));
        assert!(matches!(
            prompt.technical_constraints.platform,
            Some(Platform::Ios | Platform::Android | Platform::Mobile)
        ));
        assert!(prompt
            .functional_requirements
            .user_interactions
            .iter()
            .any(|i| i.contains("update their location")));
        assert_eq!(
            prompt.functional_requirements.expected_behaviors,
            vec!["app should work on iOS and Android"]
        );
    }

    #[test]
    fn test_short_input_is_invalid() {
        let err = refiner().refine_text("hi").unwrap_err();
        assert!(matches!(err, RefineError::InvalidInput(_)));
    }

    #[test]
    fn test_placeholder_input_is_irrelevant() {
        for text in ["test", "lorem ipsum dolor"] {
            let err = refiner().refine_text(text).unwrap_err();
            assert!(matches!(err, RefineError::IrrelevantInput(_)), "{text}");
        }
    }

    #[test]
    fn test_images_come_before_text_in_combined_blob() {
        let refiner = refiner();
        let combined = refiner.combine(vec![
            DecodedInput::Image(ImageData::from_ocr("Dashboard wireframe")),
            DecodedInput::Image(ImageData::from_ocr("Settings screen")),
            DecodedInput::Text(DELIVERY.to_string()),
        ]);

        let text = &combined.combined_text;
        let markers: Vec<usize> = text.match_indices("[Image OCR]:").map(|(i, _)| i).collect();
        assert_eq!(markers.len(), 2);
        let typed = text.find(DELIVERY).unwrap();
        assert!(markers.iter().all(|m| *m < typed));

        let prompt = refiner.refine(&combined, &combined.source_types).unwrap();
        assert_eq!(
            prompt.metadata.source_types,
            vec![SourceType::Image, SourceType::Text]
        );
        assert_eq!(prompt.source_inputs.original_format, "image+text");
    }

    #[test]
    fn test_prototype_keyword_produces_prototype_output() {
        let prompt = refiner()
            .refine_text("Please put together a prototype of the booking flow.")
            .unwrap();
        assert!(prompt
            .deliverables
            .outputs
            .iter()
            .any(|o| o.kind == OutputType::Prototype));
    }

    #[test]
    fn test_invariants_hold_across_varied_inputs() {
        let samples = [
            DELIVERY,
            "Feature: login. Feature: LOGIN. The app must support SSO. It supports sso.",
            "Users can export. USERS CAN EXPORT. users can Export.",
            "Nothing much to see here, just words without any signal words",
            "Objective: !!!",
            "Build a React and Node dashboard on AWS. Phase 1: auth. Deliver docs and a demo.",
            "????? ...... !!!!! a",
        ];

        for text in samples {
            let Ok(prompt) = refiner().refine_text(text) else {
                continue;
            };

            assert!(!prompt.core_intent.purpose.is_empty(), "{text}");
            assert!(prompt.core_intent.description.chars().count() <= 500);

            let meta = &prompt.metadata;
            assert!((0.0..=1.0).contains(&meta.confidence_score), "{text}");
            assert!((0.0..=1.0).contains(&meta.completeness_score), "{text}");

            let mut features = HashSet::new();
            for f in &prompt.functional_requirements.primary_features {
                assert!(features.insert(f.feature.trim().to_lowercase()), "{text}");
            }

            let mut interactions = HashSet::new();
            for i in &prompt.functional_requirements.user_interactions {
                assert!(interactions.insert(i.to_lowercase()), "{text}");
            }
        }
    }

    #[test]
    fn test_long_captures_stay_unique_after_truncation() {
        let text = format!(
            "Build a tracker. It supports {a}x. It supports {a}y. Users can {b}x. Users can {b}y.",
            a = "a".repeat(210),
            b = "b".repeat(160),
        );
        let prompt = refiner().refine_text(&text).unwrap();
        let functional = &prompt.functional_requirements;

        let features: HashSet<String> = functional
            .primary_features
            .iter()
            .map(|f| f.feature.trim().to_lowercase())
            .collect();
        assert_eq!(features.len(), functional.primary_features.len());

        let interactions: HashSet<String> = functional
            .user_interactions
            .iter()
            .map(|i| i.to_lowercase())
            .collect();
        assert_eq!(interactions.len(), functional.user_interactions.len());
    }

    #[test]
    fn test_rich_request_scores_high() {
        let prompt = refiner()
            .refine_text(
                "Build a React and Node dashboard on AWS for warehouse managers. \
                 It must include barcode scanning for incoming pallets. \
                 Deliver source code and documentation.",
            )
            .unwrap();

        assert_eq!(prompt.metadata.completeness_score, 1.0);
        assert!(prompt.metadata.missing_information.is_empty());
        assert_eq!(
            prompt.technical_constraints.technologies,
            vec!["react", "node", "aws"]
        );
    }

    #[test]
    fn test_visual_elements_come_from_first_image_only() {
        let refiner = refiner();
        let combined = refiner.combine(vec![
            DecodedInput::Image(ImageData {
                path: Some("uploads/a.png".to_string()),
                ocr_text: "Classic layout with sidebar".to_string(),
                dominant_colors: vec![
                    ChannelMean::new("red", 1),
                    ChannelMean::new("green", 2),
                    ChannelMean::new("blue", 3),
                ],
            }),
            DecodedInput::Image(ImageData {
                path: Some("uploads/b.png".to_string()),
                ocr_text: "Modern grid".to_string(),
                dominant_colors: Vec::new(),
            }),
            DecodedInput::Pdf(DocumentData {
                path: Some("uploads/brief.pdf".to_string()),
                content: "Create a portfolio site for a photographer.".to_string(),
            }),
        ]);

        let prompt = refiner.refine(&combined, &combined.source_types).unwrap();
        let visual = &prompt.visual_elements;
        assert_eq!(visual.colors, vec!["rgb(1, 2, 3)"]);
        assert_eq!(visual.design_style.map(|s| s.to_string()).as_deref(), Some("classic"));
        assert_eq!(visual.layout.map(|l| l.to_string()).as_deref(), Some("sidebar"));
        assert_eq!(
            prompt.source_inputs.image_paths,
            vec!["uploads/a.png", "uploads/b.png"]
        );
        assert_eq!(prompt.source_inputs.document_paths, vec!["uploads/brief.pdf"]);
    }

    #[test]
    fn test_source_text_is_capped_and_metadata_defaults() {
        let long = format!("Build a ledger app. {}", "filler words ".repeat(200));
        let refiner = refiner();
        let input = CombinedInput::from_text(long);
        let prompt = refiner.refine(&input, &[]).unwrap();

        assert_eq!(prompt.source_inputs.text_content.chars().count(), 1000);
        assert_eq!(prompt.metadata.source_types, vec![SourceType::Text]);
        assert_eq!(prompt.source_inputs.original_format, "text");
        assert!(prompt.custom_fields.is_empty());
        assert_eq!(
            prompt.metadata.extraction_method,
            "pattern-matching-and-keyword-extraction"
        );
    }

    #[test]
    fn test_bad_configured_pattern_fails_construction() {
        let mut config = RefinerConfig::default();
        config.intent.purpose_patterns.push("([".to_string());
        let err = Refiner::new(config).unwrap_err();
        assert!(matches!(err, RefineError::InvalidPattern { .. }));
    }

    #[test]
    fn test_json_document_uses_camel_case() {
        let prompt = refiner().refine_text(DELIVERY).unwrap();
        let value = serde_json::to_value(&prompt).unwrap();
        assert!(value["coreIntent"]["purpose"].is_string());
        assert!(value["functionalRequirements"]["userInteractions"].is_array());
        assert_eq!(value["metadata"]["sourceTypes"][0], "text");
    }
}
