//! Pattern compilation helpers shared by the extractors

use regex::{Regex, RegexBuilder};

use crate::domain::errors::RefineError;

/// Compile one configured pattern
pub fn compile(name: &str, pattern: &str) -> Result<Regex, RefineError> {
    Regex::new(pattern).map_err(|source| RefineError::InvalidPattern {
        name: name.to_string(),
        source,
    })
}

/// Compile an ordered pattern list, naming each entry `<group>[<index>]`
pub fn compile_all(group: &str, patterns: &[String]) -> Result<Vec<Regex>, RefineError> {
    patterns
        .iter()
        .enumerate()
        .map(|(i, p)| compile(&format!("{}[{}]", group, i), p))
        .collect()
}

/// Case-insensitive whole-word matcher for a literal term
pub fn whole_word(term: &str) -> Result<Regex, RefineError> {
    RegexBuilder::new(&format!(r"\b{}\b", regex::escape(term)))
        .case_insensitive(true)
        .build()
        .map_err(|source| RefineError::InvalidPattern {
            name: term.to_string(),
            source,
        })
}

/// Case-insensitive matcher for a literal term at the very start of the text
pub fn leading_word(terms: &[String]) -> Result<Option<Regex>, RefineError> {
    if terms.is_empty() {
        return Ok(None);
    }
    let alternation = terms
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");
    RegexBuilder::new(&format!(r"^(?:{})\b", alternation))
        .case_insensitive(true)
        .build()
        .map(Some)
        .map_err(|source| RefineError::InvalidPattern {
            name: terms.join("|"),
            source,
        })
}

/// Trimmed text of capture group `group`, or an empty string if it did not participate
pub fn capture<'t>(caps: &regex::Captures<'t>, group: usize) -> &'t str {
    caps.get(group).map(|m| m.as_str().trim()).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_word_respects_boundaries() {
        let re = whole_word("ui").unwrap();
        assert!(re.is_match("A clean UI for admins"));
        assert!(!re.is_match("a fruitful build"));
    }

    #[test]
    fn test_whole_word_escapes_metacharacters() {
        let re = whole_word("node.js").unwrap();
        assert!(re.is_match("built on Node.js today"));
        assert!(!re.is_match("built on nodexjs today"));
    }

    #[test]
    fn test_leading_word_only_matches_prefix() {
        let re = leading_word(&["lorem ipsum".to_string(), "test".to_string()])
            .unwrap()
            .unwrap();
        assert!(re.is_match("Lorem ipsum dolor"));
        assert!(re.is_match("TEST"));
        assert!(!re.is_match("testing the parser"));
        assert!(!re.is_match("a test"));
        assert!(leading_word(&[]).unwrap().is_none());
    }

    #[test]
    fn test_invalid_pattern_is_reported_with_name() {
        let err = compile_all("features", &["(unclosed".to_string()]).unwrap_err();
        assert!(err.to_string().contains("features[0]"));
    }
}
