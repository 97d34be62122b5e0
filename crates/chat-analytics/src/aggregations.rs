//! Conversation statistics.
//!
//! Counts messages per speaker, derives the exchange count, and ranks
//! keywords across the whole conversation.

use crate::keywords::{extract_keywords, Keyword};
use chat_core::types::Transcript;
use serde::{Deserialize, Serialize};

/// Keywords ranked when no count is configured.
pub const DEFAULT_TOP_KEYWORDS: usize = 5;

const UNKNOWN_NATURE: &str = "Unable to determine the nature of the conversation.";

/// Statistics computed for a single transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationStats {
    pub total_messages: usize,
    pub user_message_count: usize,
    pub ai_message_count: usize,
    /// See [`exchange_count`].
    pub exchanges: usize,
    /// Top keywords, most frequent first.
    pub keywords: Vec<Keyword>,
    /// One-sentence description derived from the keywords.
    pub nature: String,
}

impl ConversationStats {
    pub fn from_transcript(transcript: &Transcript, top_n: usize) -> Self {
        Self::from_texts(&transcript.user_texts(), &transcript.ai_texts(), top_n)
    }

    /// Compute stats from raw per-speaker texts. Keywords are ranked over
    /// user messages followed by AI messages.
    pub fn from_texts<S: AsRef<str>>(user_messages: &[S], ai_messages: &[S], top_n: usize) -> Self {
        let all_messages: Vec<&str> = user_messages
            .iter()
            .chain(ai_messages.iter())
            .map(AsRef::as_ref)
            .collect();
        let keywords = extract_keywords(&all_messages, top_n);
        let nature = describe_nature(&keywords);

        Self {
            total_messages: user_messages.len() + ai_messages.len(),
            user_message_count: user_messages.len(),
            ai_message_count: ai_messages.len(),
            exchanges: exchange_count(user_messages.len(), ai_messages.len()),
            keywords,
            nature,
        }
    }

    /// Keyword words joined with `", "`.
    pub fn keyword_list(&self) -> String {
        self.keywords
            .iter()
            .map(|k| k.word.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Complete user/AI pairs, plus one for a trailing unanswered user turn.
/// Surplus AI turns never add exchanges.
pub fn exchange_count(user_count: usize, ai_count: usize) -> usize {
    let mut exchanges = user_count.min(ai_count);
    if user_count > ai_count {
        exchanges += 1;
    }
    exchanges
}

/// Describe what the conversation was about from its ranked keywords.
pub fn describe_nature(keywords: &[Keyword]) -> String {
    if keywords.is_empty() {
        return UNKNOWN_NATURE.to_string();
    }
    let topics: Vec<&str> = keywords.iter().map(|k| k.word.as_str()).collect();
    format!("The conversation was mainly about {}.", topics.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chat_core::types::Message;

    #[test]
    fn test_exchange_count_balanced() {
        assert_eq!(exchange_count(3, 3), 3);
    }

    #[test]
    fn test_exchange_count_trailing_user() {
        assert_eq!(exchange_count(4, 3), 4);
    }

    #[test]
    fn test_exchange_count_surplus_ai() {
        assert_eq!(exchange_count(2, 5), 2);
    }

    #[test]
    fn test_exchange_count_edges() {
        assert_eq!(exchange_count(0, 0), 0);
        assert_eq!(exchange_count(1, 0), 1);
        assert_eq!(exchange_count(0, 4), 0);
        // Only one extra exchange however many user turns are unanswered.
        assert_eq!(exchange_count(5, 1), 2);
    }

    #[test]
    fn test_describe_nature_empty() {
        assert_eq!(
            describe_nature(&[]),
            "Unable to determine the nature of the conversation."
        );
    }

    #[test]
    fn test_describe_nature_keeps_order() {
        let keywords = vec![Keyword::new("rust", 3), Keyword::new("programming", 2)];
        assert_eq!(
            describe_nature(&keywords),
            "The conversation was mainly about rust, programming."
        );
    }

    #[test]
    fn test_stats_from_transcript() {
        let mut transcript = Transcript::new();
        transcript.push(Message::user("hello there"));
        transcript.push(Message::ai("hi, how can I help?"));
        transcript.push(Message::user("tell me about rust programming"));
        transcript.push(Message::ai("rust is a systems programming language"));

        let stats = ConversationStats::from_transcript(&transcript, DEFAULT_TOP_KEYWORDS);
        assert_eq!(stats.total_messages, 4);
        assert_eq!(stats.user_message_count, 2);
        assert_eq!(stats.ai_message_count, 2);
        assert_eq!(stats.exchanges, 2);
        assert_eq!(stats.keyword_list(), "rust, programming, hello, tell, help");
        assert_eq!(stats.keywords[0], Keyword::new("rust", 2));
    }

    #[test]
    fn test_total_is_sum_of_speakers() {
        let user = ["a", "b", "c"];
        let ai = ["d"];
        let stats = ConversationStats::from_texts(&user, &ai, DEFAULT_TOP_KEYWORDS);
        assert_eq!(
            stats.total_messages,
            stats.user_message_count + stats.ai_message_count
        );
        assert!(stats.keywords.is_empty());
        assert_eq!(stats.nature, UNKNOWN_NATURE);
    }

    #[test]
    fn test_user_keywords_ranked_before_ai_on_ties() {
        let user = ["kettle"];
        let ai = ["teapot"];
        let stats = ConversationStats::from_texts(&user, &ai, DEFAULT_TOP_KEYWORDS);
        assert_eq!(stats.keyword_list(), "kettle, teapot");
    }
}
