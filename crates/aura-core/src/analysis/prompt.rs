//! Prompt construction for sentiment analysis.

use serde::Serialize;

/// Sampling temperature; kept low so the model sticks to the JSON format.
pub const TEMPERATURE: f32 = 0.3;

/// Cap on the reply length in tokens.
pub const MAX_TOKENS: u32 = 150;

/// System instruction describing the exact reply format.
const SYSTEM_PROMPT: &str = r#"Analyze sentiment and extract keywords.
Return ONLY valid JSON with NO markdown:

{"sentiment": 0.75, "keywords": ["word1", "word2"], "emotion": "positive"}
sentiment: float 0-1 (0 = negative, 1 = positive)
emotion: must be "positive", "negative", or "neutral"
keywords: array of 3-7 important words"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// A chat prompt plus its sampling parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Build the two-message analysis prompt for `text`.
///
/// The user text is passed through verbatim; escaping is left to the JSON
/// encoder of the transport.
pub fn build_prompt(text: &str) -> Prompt {
    Prompt {
        messages: vec![
            ChatMessage {
                role: Role::System,
                content: SYSTEM_PROMPT.to_string(),
            },
            ChatMessage {
                role: Role::User,
                content: text.to_string(),
            },
        ],
        temperature: TEMPERATURE,
        max_tokens: MAX_TOKENS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_has_system_then_user() {
        let prompt = build_prompt("I love this product!");
        assert_eq!(prompt.messages.len(), 2);
        assert_eq!(prompt.messages[0].role, Role::System);
        assert_eq!(prompt.messages[1].role, Role::User);
        assert_eq!(prompt.messages[1].content, "I love this product!");
    }

    #[test]
    fn test_user_text_is_verbatim() {
        let text = "  quotes \" and\nnewlines {\"x\": 1} ```";
        let prompt = build_prompt(text);
        assert_eq!(prompt.messages[1].content, text);
    }

    #[test]
    fn test_system_prompt_describes_format() {
        let prompt = build_prompt("whatever");
        let system = &prompt.messages[0].content;
        assert!(system.contains("ONLY valid JSON"));
        assert!(system.contains("\"sentiment\""));
        assert!(system.contains("\"positive\", \"negative\", or \"neutral\""));
    }

    #[test]
    fn test_sampling_is_fixed() {
        let prompt = build_prompt("whatever");
        assert_eq!(prompt.temperature, 0.3);
        assert_eq!(prompt.max_tokens, 150);
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&Role::System).unwrap();
        assert_eq!(json, "\"system\"");
    }
}
