//! Core Intent Extractor
//!
//! Purpose and target audience use first-match-wins over an ordered
//! pattern list: the first pattern matching anywhere in the text decides.

use regex::Regex;

use crate::domain::entities::{CoreIntent, UNSPECIFIED_PURPOSE};
use crate::domain::errors::RefineError;
use crate::engine::config::IntentConfig;
use crate::engine::patterns::{self, capture};
use crate::engine::text::{char_len, sentences, truncate_chars};

const PURPOSE_FALLBACK_CHARS: usize = 100;
const DESCRIPTION_SENTENCES: usize = 3;
const DESCRIPTION_MAX_CHARS: usize = 500;
const DESCRIPTION_FALLBACK_CHARS: usize = 300;
const SUBSTANTIAL_SENTENCE_CHARS: usize = 10;

/// Compiled core intent patterns
#[derive(Debug, Clone)]
pub struct IntentPatterns {
    purpose: Vec<Regex>,
    audience: Vec<Regex>,
}

impl IntentPatterns {
    pub fn new(config: &IntentConfig) -> Result<Self, RefineError> {
        Ok(Self {
            purpose: patterns::compile_all("intent.purpose", &config.purpose_patterns)?,
            audience: patterns::compile_all("intent.audience", &config.audience_patterns)?,
        })
    }
}

pub fn extract(text: &str, patterns: &IntentPatterns) -> CoreIntent {
    CoreIntent {
        purpose: purpose(text, &patterns.purpose),
        description: description(text),
        target_audience: first_capture(text, &patterns.audience).filter(|a| !a.is_empty()),
    }
}

fn purpose(text: &str, patterns: &[Regex]) -> String {
    if let Some(found) = first_capture(text, patterns).filter(|p| !p.is_empty()) {
        return found;
    }

    let first_sentence = sentences(text).next().unwrap_or("");
    let fallback = truncate_chars(first_sentence, PURPOSE_FALLBACK_CHARS).trim();
    if fallback.is_empty() {
        UNSPECIFIED_PURPOSE.to_string()
    } else {
        fallback.to_string()
    }
}

/// Up to three substantial sentences. Each is trimmed before the `". "`
/// join, so sentences are separated by a single space.
fn description(text: &str) -> String {
    let joined = sentences(text)
        .map(str::trim)
        .filter(|s| char_len(s) > SUBSTANTIAL_SENTENCE_CHARS)
        .take(DESCRIPTION_SENTENCES)
        .collect::<Vec<_>>()
        .join(". ");

    let description = truncate_chars(&joined, DESCRIPTION_MAX_CHARS).trim();
    if description.is_empty() {
        truncate_chars(text, DESCRIPTION_FALLBACK_CHARS).to_string()
    } else {
        description.to_string()
    }
}

/// Capture group 1 of the first pattern that matches anywhere
fn first_capture(text: &str, patterns: &[Regex]) -> Option<String> {
    patterns
        .iter()
        .find_map(|re| re.captures(text))
        .map(|caps| capture(&caps, 1).to_string())
}
