//! Keyword extraction and overused-verb detection over plain résumé / JD text.

use std::collections::HashMap;

/// Maximum number of keywords kept per text.
pub const MAX_KEYWORDS: usize = 20;

/// Overused-word detection only reports words seen more often than this.
pub const OVERUSE_THRESHOLD: usize = 3;

const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for", "with", "is", "are",
    "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did", "will",
    "would", "shall", "should", "can", "could", "of", "by", "from", "as", "if", "then", "than",
    "so", "that", "this", "these", "those", "it", "its", "we", "us", "our", "they", "them",
    "their",
];

/// Action verbs the overuse detector watches. Closed list.
const WATCHED_VERBS: &[&str] = &["developed", "implemented", "managed", "responsible"];

/// Extracts up to [`MAX_KEYWORDS`] lowercase keywords, most frequent first.
///
/// Tokens of two characters or fewer and stop words are dropped.
/// Ties keep the order in which the tokens first appeared.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let mut ranked = count_tokens(text, |token| token.len() > 2 && !is_stop_word(token));
    // sort_by is stable, so equal counts stay in first-seen order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .take(MAX_KEYWORDS)
        .map(|(token, _)| token)
        .collect()
}

/// Returns watched action verbs that appear more than [`OVERUSE_THRESHOLD`] times.
///
/// Only tokens of four characters or more are counted and no stop-word filter applies.
/// Result order follows first appearance in the text.
pub fn find_overused_words(text: &str) -> Vec<String> {
    count_tokens(text, |token| token.len() > 3)
        .into_iter()
        .filter(|(token, count)| {
            *count > OVERUSE_THRESHOLD && WATCHED_VERBS.contains(&token.as_str())
        })
        .map(|(token, _)| token)
        .collect()
}

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

/// Lowercases and splits `text` into word tokens.
///
/// Lowercasing runs first, so characters like the Kelvin sign still become `k`.
/// After that anything other than an ASCII letter, digit or underscore is a separator.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|raw| !raw.is_empty())
        .map(String::from)
        .collect()
}

/// Counts tokens accepted by `keep`, preserving first-seen order.
fn count_tokens<F>(text: &str, keep: F) -> Vec<(String, usize)>
where
    F: Fn(&str) -> bool,
{
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for token in tokenize(text).into_iter().filter(|t| keep(t)) {
        match positions.get(&token) {
            Some(&idx) => counts[idx].1 += 1,
            None => {
                positions.insert(token.clone(), counts.len());
                counts.push((token, 1));
            }
        }
    }

    counts
}
