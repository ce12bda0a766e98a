//! Per-agent transcript

use super::entities::{Message, Role};
use crate::core::error::DomainError;
use crate::core::question::Question;
use serde::{Deserialize, Serialize};

/// The ordered transcript of one debating agent (Entity)
///
/// Always starts with the question as a single user message and only ever
/// grows by [`push_prompt`](Self::push_prompt) and
/// [`push_response`](Self::push_response). Nothing is edited or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawAgentContext")]
pub struct AgentContext {
    messages: Vec<Message>,
}

/// Unchecked wire shape; deserialization goes through [`TryFrom`].
#[derive(Deserialize)]
struct RawAgentContext {
    messages: Vec<Message>,
}

impl TryFrom<RawAgentContext> for AgentContext {
    type Error = DomainError;

    fn try_from(raw: RawAgentContext) -> Result<Self, Self::Error> {
        match raw.messages.first() {
            Some(first) if first.role() == Role::User => Ok(Self {
                messages: raw.messages,
            }),
            Some(_) => Err(DomainError::InvalidTranscript(
                "first message must be the user question".to_string(),
            )),
            None => Err(DomainError::InvalidTranscript(
                "transcript cannot be empty".to_string(),
            )),
        }
    }
}

impl AgentContext {
    /// Start a transcript seeded with the question
    pub fn new(question: &Question) -> Self {
        Self {
            messages: vec![Message::user(question.content())],
        }
    }

    /// Append a user prompt (a round message)
    pub fn push_prompt(&mut self, message: Message) {
        debug_assert_eq!(message.role(), Role::User);
        self.messages.push(message);
    }

    /// Append the agent's reply
    pub fn push_response(&mut self, message: Message) {
        debug_assert_eq!(message.role(), Role::Assistant);
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The most recent message. A context is never empty.
    pub fn latest(&self) -> &Message {
        // Seeded with the question in `new`, and append-only afterwards.
        &self.messages[self.messages.len() - 1]
    }

    /// Content of the most recent assistant reply, if the agent has answered
    pub fn latest_response(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.is_assistant())
            .map(Message::content)
    }

    /// Number of assistant replies so far
    pub fn response_count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_assistant()).count()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
