//! Scoring Engine
//!
//! Additive heuristic scores starting from 0.5, each capped at 1.0.
//! Every unmet signal is recorded as missing information.

use serde::Serialize;

use crate::domain::entities::{RefinedPrompt, UNSPECIFIED_PURPOSE};
use crate::engine::text::char_len;

const BASELINE: f64 = 0.5;
const DETAILED_DESCRIPTION_CHARS: usize = 50;

pub const MISSING_PURPOSE: &str = "Core purpose";
pub const MISSING_DESCRIPTION: &str = "Detailed description";
pub const MISSING_FEATURES: &str = "Primary features";
pub const MISSING_TECHNICAL: &str = "Technical specifications";
pub const MISSING_DELIVERABLES: &str = "Expected deliverables";

/// Scores derived from an assembled document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scores {
    pub confidence: f64,
    pub completeness: f64,
    pub missing_information: Vec<String>,
}

impl Default for Scores {
    fn default() -> Self {
        Self {
            confidence: BASELINE,
            completeness: BASELINE,
            missing_information: Vec::new(),
        }
    }
}

impl Scores {
    /// Credit a present signal, or record it as missing
    fn signal(&mut self, present: bool, completeness: f64, confidence: f64, missing: &str) {
        if present {
            self.completeness += completeness;
            self.confidence += confidence;
        } else {
            self.missing_information.push(missing.to_string());
        }
    }
}

pub fn score(prompt: &RefinedPrompt) -> Scores {
    let intent = &prompt.core_intent;
    let technical = &prompt.technical_constraints;
    let mut scores = Scores::default();

    scores.signal(
        !intent.purpose.is_empty() && intent.purpose != UNSPECIFIED_PURPOSE,
        0.2,
        0.1,
        MISSING_PURPOSE,
    );
    scores.signal(
        char_len(&intent.description) > DETAILED_DESCRIPTION_CHARS,
        0.1,
        0.0,
        MISSING_DESCRIPTION,
    );
    scores.signal(
        !prompt.functional_requirements.primary_features.is_empty(),
        0.15,
        0.1,
        MISSING_FEATURES,
    );
    scores.signal(
        technical.platform.is_some() || !technical.technologies.is_empty(),
        0.1,
        0.05,
        MISSING_TECHNICAL,
    );
    scores.signal(
        !prompt.deliverables.outputs.is_empty(),
        0.1,
        0.0,
        MISSING_DELIVERABLES,
    );

    scores.confidence = scores.confidence.min(1.0);
    scores.completeness = scores.completeness.min(1.0);
    scores
}
