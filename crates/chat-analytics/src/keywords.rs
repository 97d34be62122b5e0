//! Frequency-based keyword extraction.
//!
//! Tokens are maximal runs of ASCII letters, lowercased, at least
//! [`MIN_WORD_LEN`] long, and not in [`STOP_WORDS`]. Ranking is by count
//! descending; equal counts keep the order in which each word first
//! appeared in the token stream.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Shortest token considered a keyword.
pub const MIN_WORD_LEN: usize = 3;

/// Common English function words excluded from ranking. Sorted for
/// binary search.
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "did", "do", "does", "doing", "don", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself",
    "just", "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on",
    "once", "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "s",
    "same", "she", "should", "so", "some", "such", "t", "than", "that", "the", "their",
    "theirs", "them", "themselves", "then", "there", "these", "they", "this", "those",
    "through", "to", "too", "under", "until", "up", "very", "was", "we", "were", "what", "when",
    "where", "which", "while", "who", "whom", "why", "will", "with", "you", "your", "yours",
    "yourself", "yourselves",
];

/// A ranked content word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    pub word: String,
    pub count: usize,
}

impl Keyword {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.binary_search(&word).is_ok()
}

fn word_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[a-z]{3,}").expect("keyword pattern is valid"))
}

/// Lowercased content words of `text`, in order of appearance.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_ascii_lowercase();
    word_pattern()
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|word| !is_stop_word(word))
        .map(str::to_string)
        .collect()
}

/// Return the `top_n` most frequent keywords across `messages`.
pub fn extract_keywords<S: AsRef<str>>(messages: &[S], top_n: usize) -> Vec<Keyword> {
    if top_n == 0 || messages.is_empty() {
        return Vec::new();
    }

    let all_text = messages
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(" ");

    // Counts stored in first-seen order so the stable sort below breaks ties
    // by first appearance.
    let mut counts: Vec<Keyword> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for word in tokenize(&all_text) {
        match index.get(&word) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(word.clone(), counts.len());
                counts.push(Keyword::new(word, 1));
            }
        }
    }

    tracing::debug!("Counted {} distinct keyword(s)", counts.len());

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(top_n);
    counts
}
