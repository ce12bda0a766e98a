//! Wire types for the chat-completions API.
//!
//! Only the fields this adapter reads or writes are modelled; unknown
//! response fields are ignored.

use debate_domain::{Message, Role};
use serde::{Deserialize, Serialize};

/// Number of choices requested per call
pub const CHOICES_PER_REQUEST: u32 = 1;

/// Chat message as sent over the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireMessage {
    pub role: Role,
    pub content: String,
}

impl From<&Message> for WireMessage {
    fn from(message: &Message) -> Self {
        Self {
            role: message.role(),
            content: message.content().to_string(),
        }
    }
}

impl From<WireMessage> for Message {
    fn from(message: WireMessage) -> Self {
        Message::new(message.role, message.content)
    }
}

/// `POST /v1/chat/completions` request body
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<WireMessage>,
    pub n: u32,
}

impl<'a> ChatCompletionRequest<'a> {
    pub fn new(model: &'a str, messages: &[Message]) -> Self {
        Self {
            model,
            messages: messages.iter().map(WireMessage::from).collect(),
            n: CHOICES_PER_REQUEST,
        }
    }
}

/// Successful response body
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

/// Assistant message in a response; `content` may be null
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    #[serde(default = "default_role")]
    pub role: Role,
    #[serde(default)]
    pub content: Option<String>,
}

fn default_role() -> Role {
    Role::Assistant
}

/// Error body returned with non-2xx statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}
