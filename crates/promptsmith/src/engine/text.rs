//! Text helpers: character-safe truncation and sentence splitting

/// Longest prefix of `text` holding at most `max` characters
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Segments between sentence terminators (`.`, `!`, `?`)
pub fn sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| matches!(c, '.' | '!' | '?'))
}

/// Length in characters
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
