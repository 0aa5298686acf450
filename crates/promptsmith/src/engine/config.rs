//! Engine Configuration
//!
//! Every pattern list and vocabulary the engine consults, grouped per
//! component. Defaults describe the stock behavior; a partial TOML or JSON
//! document only overrides the groups and fields it names.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{DesignStyle, Layout, OutputType, Platform};

/// A value paired with the keywords that select it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordGroup<T> {
    pub value: T,
    pub keywords: Vec<String>,
}

impl<T> KeywordGroup<T> {
    pub fn new(value: T, keywords: &[&str]) -> Self {
        Self {
            value,
            keywords: strings(keywords),
        }
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefinerConfig {
    pub gate: GateConfig,
    pub intent: IntentConfig,
    pub functional: FunctionalConfig,
    pub technical: TechnicalConfig,
    pub deliverables: DeliverablesConfig,
    pub visual: VisualConfig,
    pub priority: PriorityConfig,
}

/// Relevance gate thresholds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Minimum trimmed length, in characters
    pub min_length: usize,
    /// Leading tokens rejected before the length check
    pub placeholder_tokens: Vec<String>,
    /// Leading greetings rejected after the length check
    pub greeting_tokens: Vec<String>,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            min_length: 10,
            placeholder_tokens: strings(&["test", "hello", "lorem ipsum"]),
            greeting_tokens: strings(&["hi"]),
        }
    }
}

/// Core intent patterns, tried in order (first match wins)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntentConfig {
    pub purpose_patterns: Vec<String>,
    pub audience_patterns: Vec<String>,
}

impl Default for IntentConfig {
    fn default() -> Self {
        Self {
            purpose_patterns: strings(&[
                r"(?i)\b(?:I want|I need|build|create|develop|design|make)\s+(?:a|an|to)\s+([^.!?]+)",
                r"(?i)\b(?:goal|objective|aim|purpose)\s*:?\s*([^.!?]+)",
                r"(?i)\b(?:should|must|will)\s+([^.!?]+)",
            ]),
            audience_patterns: strings(&[
                r"(?i)\b(?:for|target|audience|users?)\s+(?:are|is|will be|should be)\s+([^.!?]+)",
                r"(?i)\b(?:end\s+)?users?\s+(?:are|will|should)\s+([^.!?]+)",
            ]),
        }
    }
}

/// Functional requirement patterns; every match of every pattern is collected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionalConfig {
    pub feature_patterns: Vec<String>,
    pub interaction_patterns: Vec<String>,
    /// Capture group 0 (the whole match) is kept for behaviors
    pub behavior_patterns: Vec<String>,
}

impl Default for FunctionalConfig {
    fn default() -> Self {
        Self {
            feature_patterns: strings(&[
                r"(?i)\b(?:features?|functionality|functions?|capabilit(?:y|ies))\b\s*:?\s*([^.!?]+)",
                r"(?i)\b(?:should|must|needs? to|has to)\s+(?:have|include|support|provide)\s+([^.!?]+)",
                r"(?i)\b(?:supports?|includes?|provides?)\s+([^.!?]+)",
            ]),
            interaction_patterns: strings(&[
                r"(?i)\b(?:users?|customers?|drivers?|admins?|administrators?|visitors?|members?|clients?|players?|students?|people)\s+(?:can|should|will|must)\s+([^.!?]+)",
                r"(?i)\b(?:click|tap|press|select|choose|input|enter|submit)\s+([^.!?]+)",
            ]),
            behavior_patterns: strings(&[
                r"(?i)\b(?:when|if|upon)\s+([^.!?]+?)\s+(?:then|should|will|must)\s+([^.!?]+)",
                r"(?i)\b(?:system|application|app)\s+(?:should|will|must)\s+([^.!?]+)",
            ]),
        }
    }
}

/// Technical constraint vocabularies and patterns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TechnicalConfig {
    /// Tested in order; the last one present in the text wins
    pub platforms: Vec<Platform>,
    pub technologies: Vec<String>,
    /// Tested in order; the last one that matches wins
    pub performance_patterns: Vec<String>,
    pub compatibility_patterns: Vec<String>,
    pub limitation_patterns: Vec<String>,
}

impl Default for TechnicalConfig {
    fn default() -> Self {
        Self {
            platforms: Platform::ALL.to_vec(),
            technologies: strings(&[
                "react",
                "vue",
                "angular",
                "node",
                "python",
                "java",
                "javascript",
                "typescript",
                "mongodb",
                "mysql",
                "postgresql",
                "redis",
                "docker",
                "kubernetes",
                "aws",
                "azure",
                "rust",
                "graphql",
            ]),
            performance_patterns: strings(&[
                r"(?i)\b(?:performance|speed|fast|quick|responsive|load time)\s*:?\s*([^.!?]+)",
                r"(?i)\b(?:should|must)\s+(?:be|run|load)\s+(?:fast|quick|within|under)\s+([^.!?]+)",
            ]),
            compatibility_patterns: strings(&[
                r"(?i)\b(?:compatible with|compatibility with|integrates? with|works? with)\s+([^.!?]+)",
            ]),
            limitation_patterns: strings(&[
                r"(?i)\b(?:cannot|can't|must not|should not|limitations?|constraints?|restrictions?)\s+([^.!?]+)",
                r"(?i)\b(?:not\s+)?(?:supports?|allows?)\s+([^.!?]+)",
            ]),
        }
    }
}

/// Deliverable keywords and milestone patterns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliverablesConfig {
    /// One Output per (type, keyword) present in the text
    pub outputs: Vec<KeywordGroup<OutputType>>,
    pub milestone_patterns: Vec<String>,
}

impl Default for DeliverablesConfig {
    fn default() -> Self {
        Self {
            outputs: vec![
                KeywordGroup::new(
                    OutputType::Code,
                    &["code", "source code", "implementation", "program"],
                ),
                KeywordGroup::new(
                    OutputType::Design,
                    &["design", "ui", "ux", "mockup", "wireframe", "prototype"],
                ),
                KeywordGroup::new(
                    OutputType::Documentation,
                    &["documentation", "docs", "readme", "guide", "manual"],
                ),
                KeywordGroup::new(
                    OutputType::Prototype,
                    &["prototype", "demo", "mvp", "proof of concept"],
                ),
            ],
            milestone_patterns: strings(&[
                r"(?i)\b(?:milestone|phase|stage|step)\s+(?:1|2|3|one|two|three|first|second|third)\b\s*:?\s*([^.!?]+)",
                r"(?i)\b(?:first|second|third|next)\s+(?:step|phase|milestone)\s*:?\s*([^.!?]+)",
            ]),
        }
    }
}

/// Substring vocabularies applied to the first image's lowercased OCR text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualConfig {
    /// First group with a present keyword wins
    pub styles: Vec<KeywordGroup<DesignStyle>>,
    /// First group with a present keyword wins
    pub layouts: Vec<KeywordGroup<Layout>>,
    pub components: Vec<String>,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            styles: vec![
                KeywordGroup::new(DesignStyle::Minimalist, &["minimal", "simple"]),
                KeywordGroup::new(DesignStyle::Modern, &["modern", "contemporary"]),
                KeywordGroup::new(DesignStyle::Classic, &["classic", "traditional"]),
            ],
            layouts: vec![
                KeywordGroup::new(Layout::Grid, &["grid", "column"]),
                KeywordGroup::new(Layout::Sidebar, &["sidebar", "navigation"]),
            ],
            components: strings(&[
                "button",
                "form",
                "header",
                "footer",
                "navbar",
                "menu",
                "card",
                "modal",
                "table",
                "chart",
                "dropdown",
                "search bar",
            ]),
        }
    }
}

/// Feature priority keywords (substring match on the lowercased feature)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityConfig {
    pub high: Vec<String>,
    pub low: Vec<String>,
}

impl Default for PriorityConfig {
    fn default() -> Self {
        Self {
            high: strings(&["must", "critical", "essential", "required", "important"]),
            low: strings(&["nice to have", "optional", "future", "later"]),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let config: RefinerConfig =
            serde_json::from_str(r#"{"gate": {"min_length": 20}}"#).unwrap();
        assert_eq!(config.gate.min_length, 20);
        assert_eq!(config.gate.placeholder_tokens, GateConfig::default().placeholder_tokens);
        assert_eq!(config.technical, TechnicalConfig::default());
    }

    #[test]
    fn test_default_vocabularies() {
        let config = RefinerConfig::default();
        assert_eq!(config.technical.platforms.len(), 9);
        assert_eq!(config.technical.platforms.last(), Some(&Platform::Cloud));
        assert_eq!(config.technical.technologies.len(), 18);
        assert_eq!(config.deliverables.outputs.len(), 4);
        assert!(config
            .deliverables
            .outputs
            .iter()
            .all(|g| (3..=6).contains(&g.keywords.len())));
    }
}
