//! Sentiment, keyword and emotion analysis of free text.
//!
//! The pipeline is linear: guard the input, build the prompt, ask the
//! provider, normalize the reply.

pub mod model;
pub mod normalize;
pub mod prompt;

use tracing::debug;

use crate::error::{AuraError, AuraResult};
use crate::provider::CompletionProvider;
use model::AnalysisResult;

/// Shortest text worth sending to the provider, in characters.
pub const MIN_TEXT_LEN: usize = 3;

/// Reject text too short to analyze.
pub fn validate_input(text: &str) -> AuraResult<()> {
    if text.chars().count() < MIN_TEXT_LEN {
        return Err(AuraError::ShortInput { min: MIN_TEXT_LEN });
    }
    Ok(())
}

/// Run one analysis of `text` through `provider`.
pub async fn analyze_text(provider: &dyn CompletionProvider, text: &str) -> AuraResult<AnalysisResult> {
    validate_input(text)?;

    let prompt = prompt::build_prompt(text);
    debug!(provider = provider.name(), chars = text.chars().count(), "Requesting analysis");

    let raw = provider.complete(&prompt).await?;
    debug!(reply_len = raw.len(), "Provider replied");

    let result = normalize::normalize_response(&raw)?;
    Ok(result)
}
