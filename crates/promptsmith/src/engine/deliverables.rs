//! Deliverables Extractor
//!
//! One Output is appended per (type, keyword) pair whose keyword occurs as a
//! whole word, so a type matched by several synonyms appears several times.

use regex::Regex;

use crate::domain::entities::{Deliverables, Milestone, Output};
use crate::domain::errors::RefineError;
use crate::domain::value_objects::{Complexity, OutputType};
use crate::engine::config::DeliverablesConfig;
use crate::engine::patterns::{self, capture};
use crate::engine::text::truncate_chars;

const MILESTONE_NAME_MAX_CHARS: usize = 100;
const MILESTONE_DESCRIPTION_MAX_CHARS: usize = 200;

/// Compiled deliverable matchers
#[derive(Debug, Clone)]
pub struct DeliverablePatterns {
    outputs: Vec<(OutputType, Regex)>,
    milestones: Vec<Regex>,
}

impl DeliverablePatterns {
    pub fn new(config: &DeliverablesConfig) -> Result<Self, RefineError> {
        let mut outputs = Vec::new();
        for group in &config.outputs {
            for keyword in &group.keywords {
                outputs.push((group.value, patterns::whole_word(keyword)?));
            }
        }

        Ok(Self {
            outputs,
            milestones: patterns::compile_all(
                "deliverables.milestones",
                &config.milestone_patterns,
            )?,
        })
    }
}

pub fn extract(text: &str, patterns: &DeliverablePatterns) -> Deliverables {
    let outputs = patterns
        .outputs
        .iter()
        .filter(|(_, re)| re.is_match(text))
        .map(|(kind, _)| Output::standard(*kind))
        .collect();

    let milestones = patterns
        .milestones
        .iter()
        .flat_map(|re| re.captures_iter(text))
        .map(|caps| Milestone {
            name: caps
                .get(0)
                .map(|m| truncate_chars(m.as_str(), MILESTONE_NAME_MAX_CHARS).to_string())
                .unwrap_or_default(),
            description: truncate_chars(capture(&caps, 1), MILESTONE_DESCRIPTION_MAX_CHARS)
                .to_string(),
            estimated_complexity: Complexity::Medium,
        })
        .collect();

    Deliverables {
        outputs,
        milestones,
    }
}
