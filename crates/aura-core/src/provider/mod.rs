//! Completion providers.
//!
//! The analysis pipeline only needs "prompt in, text out"; everything about a
//! particular vendor lives behind [`CompletionProvider`].

pub mod openai;

use async_trait::async_trait;
use thiserror::Error;

use crate::analysis::prompt::Prompt;

pub use openai::{OpenAiClient, OpenAiConfig};

/// Failures reported by a completion provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("provider rate limit reached: {0}")]
    RateLimited(String),

    #[error("provider API error (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    #[error("failed to reach provider: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}

/// Chat-completion contract.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &'static str;

    /// Send the prompt and return the text of the first completion.
    async fn complete(&self, prompt: &Prompt) -> Result<String, ProviderError>;
}
