use serde::{Deserialize, Serialize};

/// Who produced a message in a two-party transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Ai,
}

impl Speaker {
    /// Literal tag that opens a turn at the start of a line.
    pub const fn tag(self) -> &'static str {
        match self {
            Speaker::User => "User:",
            Speaker::Ai => "AI:",
        }
    }
}

/// A single finalized turn. Content is trimmed and continuation lines are
/// joined with spaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub speaker: Speaker,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            content: content.into(),
        }
    }

    pub fn ai(content: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Ai,
            content: content.into(),
        }
    }
}

/// Parsed conversation, split by speaker. Each list keeps source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    pub user_messages: Vec<Message>,
    pub ai_messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finalized message to the list matching its speaker.
    pub fn push(&mut self, message: Message) {
        match message.speaker {
            Speaker::User => self.user_messages.push(message),
            Speaker::Ai => self.ai_messages.push(message),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.user_messages.is_empty() && self.ai_messages.is_empty()
    }

    pub fn total(&self) -> usize {
        self.user_messages.len() + self.ai_messages.len()
    }

    pub fn user_texts(&self) -> Vec<&str> {
        self.user_messages.iter().map(|m| m.content.as_str()).collect()
    }

    pub fn ai_texts(&self) -> Vec<&str> {
        self.ai_messages.iter().map(|m| m.content.as_str()).collect()
    }

    /// All message texts, user turns first, then AI turns.
    pub fn all_texts(&self) -> Vec<&str> {
        self.user_messages
            .iter()
            .chain(self.ai_messages.iter())
            .map(|m| m.content.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_routes_by_speaker() {
        let mut transcript = Transcript::new();
        transcript.push(Message::user("hello"));
        transcript.push(Message::ai("hi"));
        transcript.push(Message::user("bye"));

        assert_eq!(transcript.user_texts(), vec!["hello", "bye"]);
        assert_eq!(transcript.ai_texts(), vec!["hi"]);
        assert_eq!(transcript.total(), 3);
    }

    #[test]
    fn test_all_texts_user_first() {
        let mut transcript = Transcript::new();
        transcript.push(Message::ai("answer"));
        transcript.push(Message::user("question"));
        assert_eq!(transcript.all_texts(), vec!["question", "answer"]);
    }

    #[test]
    fn test_empty_transcript() {
        let transcript = Transcript::default();
        assert!(transcript.is_empty());
        assert_eq!(transcript.total(), 0);
    }

    #[test]
    fn test_speaker_tags() {
        assert_eq!(Speaker::User.tag(), "User:");
        assert_eq!(Speaker::Ai.tag(), "AI:");
    }
}
