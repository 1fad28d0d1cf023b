//! Turns an operation summary such as "Get the user by ID" into a camelCase
//! OpenAPI `operationId` ("getUserID"). Independent of schema inference.

/// Filler words dropped after the first word.
const IGNORED_WORDS: &[&str] = &["the", "a", "an", "of", "to", "in", "for", "with", "on", "at", "from", "by", "and"];

pub fn summary_to_operation_id(summary: &str) -> String {
    let mut out = String::with_capacity(summary.len());
    for (i, word) in summary.split(' ').filter(|w| !w.is_empty()).enumerate() {
        if i == 0 {
            out.push_str(&map_first_char(word, char::to_lowercase));
        } else if !is_ignored(word) {
            out.push_str(&map_first_char(word, char::to_uppercase));
        }
    }
    out
}

fn is_ignored(word: &str) -> bool {
    IGNORED_WORDS.iter().any(|w| w.eq_ignore_ascii_case(word))
}

fn map_first_char<I>(word: &str, f: impl Fn(char) -> I) -> String
where
    I: Iterator<Item = char>,
{
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => f(first).chain(chars).collect(),
        None => String::new(),
    }
}
