//! Analysis request and result models.

use serde::{Deserialize, Serialize};

use crate::error::AuraError;

/// Sentiment reported when no analysis could be produced.
pub const NEUTRAL_SENTIMENT: f64 = 0.5;

/// Body of a `POST /process_text` request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub text: String,
}

/// Coarse emotional label attached to a piece of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Emotion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Positive => "positive",
            Emotion::Negative => "negative",
            Emotion::Neutral => "neutral",
        }
    }

    /// Parse an exact label, returning None for anything else.
    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "positive" => Some(Emotion::Positive),
            "negative" => Some(Emotion::Negative),
            "neutral" => Some(Emotion::Neutral),
            _ => None,
        }
    }
}

/// Normalized analysis returned to the front-end.
///
/// Failures use the same shape with `success: false`, neutral defaults and an
/// `error` message, so clients can always read the body the same way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub sentiment: f64,
    pub keywords: Vec<String>,
    pub emotion: Emotion,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl AnalysisResult {
    /// A successful analysis.
    pub fn new(sentiment: f64, keywords: Vec<String>, emotion: Emotion) -> Self {
        Self {
            sentiment,
            keywords,
            emotion,
            success: true,
            error: None,
        }
    }

    /// Fallback payload carrying an error message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            sentiment: NEUTRAL_SENTIMENT,
            keywords: Vec::new(),
            emotion: Emotion::Neutral,
            success: false,
            error: Some(message.into()),
        }
    }

    /// Map a pipeline error to its fallback payload.
    pub fn from_error(err: &AuraError) -> Self {
        Self::failure(err.fallback_message())
    }
}
