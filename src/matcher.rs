// src/matcher.rs
//! Exact phrase matching: case-insensitive, punctuation-insensitive,
//! contiguous word sequences only.

/// Returns true if `phrase` occurs in `text` as a contiguous run of words.
///
/// `text` is normalized by replacing every ASCII punctuation character with a
/// space, lowercasing, and splitting on whitespace; the phrase is lowercased
/// and split the same way. The match is anchored at the first occurrence of
/// the leading phrase word: if the words following that occurrence do not
/// complete the phrase, the search does not retry at a later occurrence.
/// That limitation is deliberate and pinned by tests
/// (see `first_occurrence_only_no_retry`).
///
/// An empty phrase never matches, and neither does text that normalizes to
/// nothing.
pub fn contains_phrase(text: &str, phrase: &str) -> bool {
    let pattern: Vec<String> = phrase
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();
    if pattern.is_empty() {
        return false;
    }

    let cleaned: String = text
        .chars()
        .map(|c| if c.is_ascii_punctuation() { ' ' } else { c })
        .collect::<String>()
        .to_lowercase();
    let haystack: Vec<&str> = cleaned.split_whitespace().collect();

    let Some(start) = haystack.iter().position(|w| *w == pattern[0]) else {
        return false;
    };
    if haystack.len() < start + pattern.len() {
        return false;
    }
    pattern[1..]
        .iter()
        .enumerate()
        .all(|(i, word)| haystack[start + 1 + i] == word.as_str())
}
