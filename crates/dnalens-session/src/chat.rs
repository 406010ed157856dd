use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const GREETING: &str = "Hello! I'm your AlphaGenome assistant. Speak or type your observations about the analyzed sequence.";

/// Text substituted for a recording; there is no speech recognition
pub const VOICE_TRANSCRIPT: &str =
    "The sequence appears to be active in liver tissue based on my preliminary data.";

const REPLIES: [&str; 3] = [
    "Based on your observation about liver tissue activity, I've updated the predictions. Consider ChIP-seq for HNF4α to validate.",
    "Interesting! Liver-specific enhancers often contain HNF1α, HNF4α, and C/EBP binding sites. Should I search for these motifs?",
    "Thank you for this context. I've generated a new hypothesis focused on testing enhancer activity in HepG2 cells.",
];

/// Stand-in for speech recognition of a finished recording
pub fn transcribe_placeholder() -> &'static str {
    VOICE_TRANSCRIPT
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    #[default]
    Text,
    Voice,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub kind: MessageKind,
}

impl ChatMessage {
    fn new(role: Role, content: impl Into<String>, kind: MessageKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
            kind,
        }
    }
}

/// Simulated assistant conversation. Replies are canned and cycle in order.
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    next_reply: usize,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::new(Role::Assistant, GREETING, MessageKind::Text)],
            next_reply: 0,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Record a user message and the assistant's reply. Blank input is ignored.
    pub fn send(&mut self, content: &str, kind: MessageKind) -> Option<&ChatMessage> {
        let content = content.trim();
        if content.is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::new(Role::User, content, kind));

        let reply = REPLIES[self.next_reply % REPLIES.len()];
        self.next_reply += 1;
        self.messages
            .push(ChatMessage::new(Role::Assistant, reply, MessageKind::Text));
        self.messages.last()
    }

    /// Send the placeholder transcript as a voice message.
    pub fn send_voice(&mut self) -> Option<&ChatMessage> {
        self.send(transcribe_placeholder(), MessageKind::Voice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_starts_with_greeting() {
        let chat = ChatSession::new();
        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].role, Role::Assistant);
        assert_eq!(chat.messages()[0].content, GREETING);
    }

    #[test]
    fn test_replies_cycle() {
        let mut chat = ChatSession::new();
        let replies: Vec<String> = (0..4)
            .map(|i| chat.send(&format!("note {i}"), MessageKind::Text).unwrap().content.clone())
            .collect();
        assert_eq!(replies[0], REPLIES[0]);
        assert_eq!(replies[1], REPLIES[1]);
        assert_eq!(replies[2], REPLIES[2]);
        assert_eq!(replies[3], REPLIES[0]);
        assert_eq!(chat.messages().len(), 9);
    }

    #[test]
    fn test_blank_message_ignored() {
        let mut chat = ChatSession::new();
        assert!(chat.send("  \n", MessageKind::Text).is_none());
        assert_eq!(chat.messages().len(), 1);
    }

    #[test]
    fn test_voice_message() {
        let mut chat = ChatSession::new();
        chat.send_voice().unwrap();
        let user = &chat.messages()[1];
        assert_eq!(user.kind, MessageKind::Voice);
        assert_eq!(user.content, VOICE_TRANSCRIPT);
    }
}
