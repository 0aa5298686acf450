//! Functional Requirements Extractor
//!
//! Three independent passes, each collecting every match of every pattern:
//! features (deduplicated, priority-classified), user interactions
//! (deduplicated) and expected behaviors (kept as matched).

use std::collections::HashSet;

use regex::Regex;

use crate::domain::entities::{Feature, FunctionalRequirements};
use crate::domain::errors::RefineError;
use crate::domain::value_objects::Priority;
use crate::engine::config::{FunctionalConfig, PriorityConfig};
use crate::engine::patterns::{self, capture};
use crate::engine::text::{char_len, truncate_chars};

const FEATURE_MIN_CHARS: usize = 5;
const FEATURE_MAX_CHARS: usize = 200;
const INTERACTION_MIN_CHARS: usize = 3;
const INTERACTION_MAX_CHARS: usize = 150;
const BEHAVIOR_MIN_CHARS: usize = 10;
const BEHAVIOR_MAX_CHARS: usize = 200;

/// Compiled functional requirement patterns
#[derive(Debug, Clone)]
pub struct FunctionalPatterns {
    features: Vec<Regex>,
    interactions: Vec<Regex>,
    behaviors: Vec<Regex>,
}

impl FunctionalPatterns {
    pub fn new(config: &FunctionalConfig) -> Result<Self, RefineError> {
        Ok(Self {
            features: patterns::compile_all("functional.features", &config.feature_patterns)?,
            interactions: patterns::compile_all(
                "functional.interactions",
                &config.interaction_patterns,
            )?,
            behaviors: patterns::compile_all("functional.behaviors", &config.behavior_patterns)?,
        })
    }
}

pub fn extract(
    text: &str,
    patterns: &FunctionalPatterns,
    priority: &PriorityConfig,
) -> FunctionalRequirements {
    let primary_features = dedup_captures(
        text,
        &patterns.features,
        FEATURE_MIN_CHARS,
        FEATURE_MAX_CHARS,
    )
    .into_iter()
    .map(|(full, feature)| Feature {
        priority: determine_priority(full, priority),
        feature: feature.to_string(),
        description: String::new(),
    })
    .collect();

    let user_interactions = dedup_captures(
        text,
        &patterns.interactions,
        INTERACTION_MIN_CHARS,
        INTERACTION_MAX_CHARS,
    )
    .into_iter()
    .map(|(_, interaction)| interaction.to_string())
    .collect();

    let expected_behaviors = patterns
        .behaviors
        .iter()
        .flat_map(|re| re.find_iter(text))
        .map(|m| m.as_str().trim())
        .filter(|b| char_len(b) > BEHAVIOR_MIN_CHARS)
        .map(|b| truncate_chars(b, BEHAVIOR_MAX_CHARS).to_string())
        .collect();

    FunctionalRequirements {
        primary_features,
        user_interactions,
        expected_behaviors,
    }
}

/// Classify a feature by keyword; high-priority keywords take precedence
pub fn determine_priority(text: &str, config: &PriorityConfig) -> Priority {
    let lower = text.to_lowercase();

    if config.high.iter().any(|k| lower.contains(k.as_str())) {
        Priority::High
    } else if config.low.iter().any(|k| lower.contains(k.as_str())) {
        Priority::Low
    } else {
        Priority::Medium
    }
}

/// Capture group 1 of every match of every pattern, longer than `min_chars`,
/// pattern order then text order.
///
/// Yields `(capture, stored)` pairs where `stored` is the capture cut to
/// `max_chars` and trimmed. Dedup is keyed on the lowercase stored text, so
/// no two stored entries compare equal case-insensitively.
fn dedup_captures<'t>(
    text: &'t str,
    patterns: &[Regex],
    min_chars: usize,
    max_chars: usize,
) -> Vec<(&'t str, &'t str)> {
    let mut seen = HashSet::new();
    let mut found = Vec::new();

    for re in patterns {
        for caps in re.captures_iter(text) {
            let candidate = capture(&caps, 1);
            if char_len(candidate) <= min_chars {
                continue;
            }
            let stored = truncate_chars(candidate, max_chars).trim();
            if seen.insert(stored.to_lowercase()) {
                found.push((candidate, stored));
            }
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> FunctionalRequirements {
        let patterns = FunctionalPatterns::new(&FunctionalConfig::default()).unwrap();
        extract(text, &patterns, &PriorityConfig::default())
    }

    fn features(reqs: &FunctionalRequirements) -> Vec<&str> {
        reqs.primary_features.iter().map(|f| f.feature.as_str()).collect()
    }

    #[test]
    fn test_features_from_all_families() {
        let reqs = run(
            "Feature: offline mode. The app must include push notifications. \
             It supports dark theme switching.",
        );
        assert_eq!(
            features(&reqs),
            vec!["offline mode", "push notifications", "dark theme switching"]
        );
        assert!(reqs.primary_features.iter().all(|f| f.description.is_empty()));
    }

    #[test]
    fn test_features_dedup_case_insensitively() {
        let reqs = run("It supports CSV export. It also supports csv export.");
        assert_eq!(features(&reqs), vec!["CSV export"]);
    }

    #[test]
    fn test_short_features_are_dropped() {
        let reqs = run("Feature: maps. It supports sharing.");
        assert_eq!(features(&reqs), vec!["sharing"]);
    }

    #[test]
    fn test_feature_is_truncated_to_200_chars() {
        let text = format!("It supports {}.", "a".repeat(300));
        let reqs = run(&text);
        assert_eq!(reqs.primary_features[0].feature.chars().count(), 200);
    }

    #[test]
    fn test_features_sharing_a_200_char_prefix_collapse() {
        let prefix = "a".repeat(210);
        let text = format!("It supports {prefix}x. It supports {prefix}y.");
        let reqs = run(&text);
        assert_eq!(reqs.primary_features.len(), 1);
        assert_eq!(reqs.primary_features[0].feature, "a".repeat(200));
    }

    #[test]
    fn test_priority_classification() {
        let config = PriorityConfig::default();
        assert_eq!(determine_priority("a critical audit log", &config), Priority::High);
        assert_eq!(determine_priority("optional dark mode", &config), Priority::Low);
        assert_eq!(determine_priority("nice to have: emoji", &config), Priority::Low);
        assert_eq!(determine_priority("csv export", &config), Priority::Medium);
        // high wins when both apply
        assert_eq!(
            determine_priority("required now, optional styling later", &config),
            Priority::High
        );
    }

    #[test]
    fn test_feature_priority_is_attached() {
        let reqs = run("Feature: essential login with SSO.");
        assert_eq!(reqs.primary_features[0].priority, Priority::High);
    }

    #[test]
    fn test_user_interactions() {
        let reqs = run(
            "Users can upload receipts. Drivers can update their location. \
             Click the submit button to confirm.",
        );
        assert_eq!(
            reqs.user_interactions,
            vec![
                "upload receipts",
                "update their location",
                "the submit button to confirm",
            ]
        );
    }

    #[test]
    fn test_user_interactions_dedup() {
        let reqs = run("Users can log in. users can LOG IN. Users can export data.");
        assert_eq!(reqs.user_interactions, vec!["log in", "export data"]);
    }

    #[test]
    fn test_interactions_sharing_a_150_char_prefix_collapse() {
        let prefix = "b".repeat(160);
        let text = format!("Users can {prefix}x. USERS CAN {}y.", prefix.to_uppercase());
        let reqs = run(&text);
        assert_eq!(reqs.user_interactions, vec!["b".repeat(150)]);
    }

    #[test]
    fn test_expected_behaviors_keep_full_match() {
        let reqs = run("When the payment fails the app should retry twice. Nothing more.");
        assert_eq!(
            reqs.expected_behaviors,
            vec![
                "When the payment fails the app should retry twice",
                "app should retry twice",
            ]
        );
    }

    #[test]
    fn test_expected_behaviors_are_not_deduplicated() {
        let reqs = run("The system must log errors. The system must log errors.");
        assert_eq!(reqs.expected_behaviors.len(), 2);
    }

    #[test]
    fn test_nothing_found_is_empty_not_error() {
        let reqs = run("A quiet paragraph about weather and tea.");
        assert!(reqs.primary_features.is_empty());
        assert!(reqs.user_interactions.is_empty());
        assert!(reqs.expected_behaviors.is_empty());
    }
}
