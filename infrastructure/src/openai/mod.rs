//! OpenAI-compatible chat-completions adapter
//!
//! Implements the [`CompletionGateway`](debate_application::CompletionGateway)
//! port over HTTP. Any server that speaks the `/v1/chat/completions` protocol
//! (OpenAI, Azure-style proxies, local inference servers) can be used by
//! pointing `base_url` at it.

pub mod error;
pub mod gateway;
pub mod protocol;
