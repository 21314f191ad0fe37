//! Centralized error types for Aura.

use thiserror::Error;

use crate::provider::ProviderError;

/// Main error type for the analysis pipeline.
#[derive(Error, Debug)]
pub enum AuraError {
    #[error("Text is too short to comprehend (minimum {min} characters)")]
    ShortInput { min: usize },

    #[error("Invalid model output: {0}")]
    Format(#[from] FormatError),

    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    #[error(transparent)]
    Provider(ProviderError),
}

/// Ways a model reply can fail to match the expected analysis shape.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("reply is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("missing fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("sentiment is not a number: {0}")]
    InvalidSentiment(String),
}

/// Result type for Aura operations.
pub type AuraResult<T> = Result<T, AuraError>;

impl From<ProviderError> for AuraError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::RateLimited(body) => Self::RateLimited(body),
            other => Self::Provider(other),
        }
    }
}

impl AuraError {
    /// Whether the caller can fix this by changing the request.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ShortInput { .. })
    }

    /// Message shown to the front-end in the fallback payload.
    pub fn fallback_message(&self) -> String {
        match self {
            Self::ShortInput { .. } => "Text is too short to comprehend".to_string(),
            Self::Format(_) => "AI did not return valid format".to_string(),
            Self::RateLimited(_) => "Exceeded Rate Limit".to_string(),
            Self::Provider(e) => format!("Failed to process: {}", e),
        }
    }
}
