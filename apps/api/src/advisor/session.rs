//! In-memory conversation history for the interactive console.
//!
//! Turns accumulate per process and are never persisted; the only
//! operations are append and clear.

use chrono::{DateTime, Utc};

use crate::llm_client::{ChatMessage, Role};

/// One exchange half: who said it, what was said, and when.
#[derive(Debug, Clone)]
pub struct Turn {
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, role: Role, content: impl Into<String>) {
        self.turns.push(Turn {
            role,
            content: content.into(),
            timestamp: Utc::now(),
        });
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// Renders the accumulated turns as provider messages, oldest first.
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.turns
            .iter()
            .map(|t| ChatMessage {
                role: t.role,
                content: t.content.clone(),
            })
            .collect()
    }

    /// Assembles the outbound sequence for one exchange: system prompt,
    /// prior turns, then the new user message. Callers that record the
    /// exchange afterwards must push the same `user` string, so history
    /// stays identical to what was sent.
    pub fn outbound(&self, system: &str, user: &str) -> Vec<ChatMessage> {
        let mut messages = vec![ChatMessage::system(system)];
        messages.extend(self.messages());
        messages.push(ChatMessage::user(user));
        messages
    }
}
