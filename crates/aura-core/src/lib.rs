//! Aura Core Library
//!
//! Text analysis pipeline: input guard, prompt construction, completion
//! provider and normalization of the model's reply.

pub mod analysis;
pub mod error;
pub mod provider;

pub use analysis::model::{AnalysisRequest, AnalysisResult, Emotion};
pub use analysis::{analyze_text, validate_input};
pub use error::{AuraError, AuraResult, FormatError};
pub use provider::{CompletionProvider, OpenAiClient, OpenAiConfig, ProviderError};
