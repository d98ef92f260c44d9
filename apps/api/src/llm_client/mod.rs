//! Completion client — the single point of entry for all hosted-model calls.
//!
//! ARCHITECTURAL RULE: No other module may call a provider API directly.
//! All model interactions MUST go through a `CompletionClient`.
//!
//! Each adapter performs exactly one round trip per call: no retry, no
//! backoff, no circuit breaking. Failures carry the provider's own message.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod anthropic;
pub mod groq;

pub use anthropic::AnthropicClient;
pub use groq::GroqClient;

use crate::config::{Config, Provider};

/// Sampling parameters shared by every adapter.
pub const TEMPERATURE: f32 = 0.7;
pub const MAX_TOKENS: u32 = 2048;

const HTTP_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("model returned empty content")]
    EmptyContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One role-tagged message in the order it is sent to the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// The single capability every backend implements: role-tagged messages in,
/// the top completion's text out. Carried in `AppState` as
/// `Arc<dyn CompletionClient>`, swapped at startup via `FREDRICK_PROVIDER`.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, LlmError>;

    /// Model identifier echoed in response envelopes.
    fn model(&self) -> &str;
}

/// Builds the adapter selected by configuration.
pub fn from_config(config: &Config) -> Arc<dyn CompletionClient> {
    match config.provider {
        Provider::Groq => Arc::new(GroqClient::new(
            config.provider_api_key.clone(),
            config.model.clone(),
        )),
        Provider::Anthropic => Arc::new(AnthropicClient::new(
            config.provider_api_key.clone(),
            config.model.clone(),
        )),
    }
}

fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .expect("Failed to build HTTP client")
}
