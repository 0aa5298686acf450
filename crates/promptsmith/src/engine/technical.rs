//! Technical Constraints Extractor
//!
//! Match rules differ per field:
//! - platform: every vocabulary entry is tested, the last one present wins
//! - technologies: every vocabulary entry present, in vocabulary order
//! - performance: every pattern is tried, the last one that matches wins
//! - compatibility, limitations: every match of every pattern, no dedup

use regex::Regex;

use crate::domain::entities::TechnicalConstraints;
use crate::domain::errors::RefineError;
use crate::domain::value_objects::Platform;
use crate::engine::config::TechnicalConfig;
use crate::engine::patterns::{self, capture};
use crate::engine::text::truncate_chars;

const CLAUSE_MAX_CHARS: usize = 150;

/// Compiled technical constraint matchers
#[derive(Debug, Clone)]
pub struct TechnicalPatterns {
    platforms: Vec<(Platform, Regex)>,
    technologies: Vec<(String, Regex)>,
    performance: Vec<Regex>,
    compatibility: Vec<Regex>,
    limitations: Vec<Regex>,
}

impl TechnicalPatterns {
    pub fn new(config: &TechnicalConfig) -> Result<Self, RefineError> {
        let platforms = config
            .platforms
            .iter()
            .map(|p| Ok((*p, patterns::whole_word(p.as_str())?)))
            .collect::<Result<Vec<_>, RefineError>>()?;

        let technologies = config
            .technologies
            .iter()
            .map(|t| Ok((t.clone(), patterns::whole_word(t)?)))
            .collect::<Result<Vec<_>, RefineError>>()?;

        Ok(Self {
            platforms,
            technologies,
            performance: patterns::compile_all(
                "technical.performance",
                &config.performance_patterns,
            )?,
            compatibility: patterns::compile_all(
                "technical.compatibility",
                &config.compatibility_patterns,
            )?,
            limitations: patterns::compile_all(
                "technical.limitations",
                &config.limitation_patterns,
            )?,
        })
    }
}

pub fn extract(text: &str, patterns: &TechnicalPatterns) -> TechnicalConstraints {
    let platform = patterns
        .platforms
        .iter()
        .filter(|(_, re)| re.is_match(text))
        .map(|(p, _)| *p)
        .last();

    let technologies = patterns
        .technologies
        .iter()
        .filter(|(_, re)| re.is_match(text))
        .map(|(name, _)| name.clone())
        .collect();

    let performance = patterns
        .performance
        .iter()
        .filter_map(|re| re.captures(text))
        .map(|caps| capture(&caps, 1).to_string())
        .last();

    TechnicalConstraints {
        platform,
        technologies,
        performance,
        compatibility: all_clauses(text, &patterns.compatibility),
        limitations: all_clauses(text, &patterns.limitations),
    }
}

fn all_clauses(text: &str, patterns: &[Regex]) -> Vec<String> {
    patterns
        .iter()
        .flat_map(|re| re.captures_iter(text))
        .map(|caps| truncate_chars(capture(&caps, 1), CLAUSE_MAX_CHARS).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> TechnicalConstraints {
        let patterns = TechnicalPatterns::new(&TechnicalConfig::default()).unwrap();
        extract(text, &patterns)
    }

    #[test]
    fn test_platform_last_vocabulary_entry_wins() {
        // android appears first in the text but linux comes later in the vocabulary
        let constraints = run("Ship to Android phones and Linux kiosks.");
        assert_eq!(constraints.platform, Some(Platform::Linux));

        let constraints = run("A mobile app that works on iOS and Android.");
        assert_eq!(constraints.platform, Some(Platform::Android));
    }

    #[test]
    fn test_platform_requires_whole_word() {
        let constraints = run("A webhook relay for cloudless setups.");
        assert_eq!(constraints.platform, None);
    }

    #[test]
    fn test_technologies_in_vocabulary_order() {
        let constraints = run("Backend in Python with Redis; frontend in React. Python again.");
        assert_eq!(constraints.technologies, vec!["react", "python", "redis"]);
    }

    #[test]
    fn test_java_does_not_match_javascript() {
        let constraints = run("Written in JavaScript only.");
        assert_eq!(constraints.technologies, vec!["javascript"]);
    }

    #[test]
    fn test_performance_last_pattern_wins() {
        let constraints =
            run("Performance: good enough for demos. Pages must load within 2 seconds.");
        assert_eq!(constraints.performance.as_deref(), Some("2 seconds"));

        let constraints = run("Speed: under a second per search.");
        assert_eq!(constraints.performance.as_deref(), Some("under a second per search"));

        assert_eq!(run("Nothing about timing here.").performance, None);
    }

    #[test]
    fn test_limitations_collect_every_match() {
        let constraints = run(
            "Guests cannot edit posts. It does not allow anonymous uploads. \
             Guests cannot edit posts.",
        );
        assert_eq!(
            constraints.limitations,
            vec!["edit posts", "edit posts", "anonymous uploads"]
        );
    }

    #[test]
    fn test_compatibility() {
        let constraints = run("Must be compatible with Safari 15. It integrates with Stripe.");
        assert_eq!(constraints.compatibility, vec!["Safari 15", "Stripe"]);
    }

    #[test]
    fn test_limitation_clause_truncated() {
        let text = format!("Users cannot {}.", "b".repeat(400));
        let constraints = run(&text);
        assert_eq!(constraints.limitations[0].chars().count(), 150);
    }
}
