//! OpenAI-compatible completion gateway implementation

use super::error::{OpenAiError, Result};
use super::protocol::{ApiErrorResponse, ChatCompletionRequest, ChatCompletionResponse};
use async_trait::async_trait;
use debate_application::{CompletionGateway, GatewayError};
use debate_domain::Message;
use std::time::Duration;
use tracing::{debug, info};

/// Everything needed to talk to a chat-completions endpoint.
///
/// Built once at startup from validated configuration; the API key is never
/// re-read per call.
#[derive(Clone)]
pub struct OpenAiGatewayConfig {
    pub api_key: String,
    /// Scheme and host, e.g. `https://api.openai.com`
    pub base_url: String,
    pub model: String,
    pub request_timeout: Option<Duration>,
}

impl std::fmt::Debug for OpenAiGatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiGatewayConfig")
            .field("api_key", &mask_key(&self.api_key))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

/// Completion gateway for OpenAI's chat-completions API (and compatible servers)
pub struct OpenAiCompletionGateway {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl OpenAiCompletionGateway {
    pub fn new(config: OpenAiGatewayConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| OpenAiError::ClientBuild(e.to_string()))?;

        let endpoint = format!(
            "{}/v1/chat/completions",
            config.base_url.trim_end_matches('/')
        );
        info!(
            "OpenAiCompletionGateway initialized (model: {}, endpoint: {}, key: {})",
            config.model,
            endpoint,
            mask_key(&config.api_key)
        );

        Ok(Self {
            client,
            endpoint,
            api_key: config.api_key,
            model: config.model,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn request(&self, messages: &[Message]) -> Result<Message> {
        let body = ChatCompletionRequest::new(&self.model, messages);
        debug!("Sending {} messages to {}", messages.len(), self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let raw = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorResponse>(&raw)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| raw.clone());
            return Err(OpenAiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatCompletionResponse =
            serde_json::from_str(&raw).map_err(|e| OpenAiError::ParseError {
                error: e.to_string(),
                raw: raw.clone(),
            })?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or(OpenAiError::EmptyChoices)?;

        Ok(Message::assistant(choice.message.content.unwrap_or_default()))
    }
}

#[async_trait]
impl CompletionGateway for OpenAiCompletionGateway {
    fn model_name(&self) -> &str {
        &self.model
    }

    async fn complete(&self, messages: &[Message]) -> std::result::Result<Message, GatewayError> {
        self.request(messages).await.map_err(GatewayError::from)
    }
}

/// Show only the first and last four characters of a key
fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}
