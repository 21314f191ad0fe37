//! Normalization of raw model replies into an [`AnalysisResult`].
//!
//! Models do not always honour "JSON only": replies may arrive wrapped in a
//! markdown fence, tagged with a language, with values out of range or with
//! unexpected types. Everything here is pure so it can be tested without a
//! provider.

use serde_json::Value;

use super::model::{AnalysisResult, Emotion};
use crate::error::FormatError;

/// Fields the model must always return.
pub const REQUIRED_FIELDS: [&str; 3] = ["sentiment", "keywords", "emotion"];

/// Maximum number of keywords kept from a reply.
pub const MAX_KEYWORDS: usize = 10;

const FENCE: &str = "```";
const JSON_TAG: &str = "json";

/// Parse and validate a raw model reply.
pub fn normalize_response(raw: &str) -> Result<AnalysisResult, FormatError> {
    let cleaned = strip_wrapping(raw);
    let parsed: Value = serde_json::from_str(cleaned)?;

    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|field| parsed.get(**field).is_none())
        .map(|field| field.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(FormatError::MissingFields(missing));
    }

    let sentiment = coerce_sentiment(&parsed["sentiment"])?;
    let keywords = coerce_keywords(&parsed["keywords"]);
    let emotion = coerce_emotion(&parsed["emotion"]);

    Ok(AnalysisResult::new(sentiment, keywords, emotion))
}

/// Remove surrounding whitespace, a markdown fence and a leading `json` tag.
///
/// A fenced reply keeps only the segment between the first two fence markers;
/// an unterminated fence keeps everything after the opening marker.
fn strip_wrapping(raw: &str) -> &str {
    let mut cleaned = raw.trim();

    if cleaned.starts_with(FENCE) {
        cleaned = cleaned.split(FENCE).nth(1).unwrap_or_default().trim();
    }

    if let Some(rest) = cleaned.strip_prefix(JSON_TAG) {
        cleaned = rest.trim_start();
    }

    cleaned
}

/// Read the sentiment as a float and clamp it into `[0, 1]`.
fn coerce_sentiment(value: &Value) -> Result<f64, FormatError> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };

    match number {
        Some(n) if !n.is_nan() => Ok(n.clamp(0.0, 1.0)),
        _ => Err(FormatError::InvalidSentiment(value.to_string())),
    }
}

/// Keep at most [`MAX_KEYWORDS`] entries, stringifying each one.
/// Anything other than an array yields an empty list.
fn coerce_keywords(value: &Value) -> Vec<String> {
    let Some(items) = value.as_array() else {
        return Vec::new();
    };

    items
        .iter()
        .take(MAX_KEYWORDS)
        .map(|item| match item {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect()
}

fn coerce_emotion(value: &Value) -> Emotion {
    value
        .as_str()
        .and_then(Emotion::from_label)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: &str = r#"{"sentiment":0.9,"keywords":["love","product"],"emotion":"positive"}"#;

    #[test]
    fn test_plain_json() {
        let result = normalize_response(PLAIN).unwrap();
        assert!(result.success);
        assert_eq!(result.sentiment, 0.9);
        assert_eq!(result.keywords, vec!["love", "product"]);
        assert_eq!(result.emotion, Emotion::Positive);
        assert!(result.error.is_none());
    }

    #[test]
    fn test_fenced_with_tag_matches_plain() {
        let fenced = format!("```json\n{}\n```", PLAIN);
        assert_eq!(normalize_response(&fenced).unwrap(), normalize_response(PLAIN).unwrap());
    }

    #[test]
    fn test_fenced_without_tag_matches_plain() {
        let fenced = format!("  ```\n{}\n```  \n", PLAIN);
        assert_eq!(normalize_response(&fenced).unwrap(), normalize_response(PLAIN).unwrap());
    }

    #[test]
    fn test_unterminated_fence() {
        let fenced = format!("```json\n{}", PLAIN);
        assert_eq!(normalize_response(&fenced).unwrap(), normalize_response(PLAIN).unwrap());
    }

    #[test]
    fn test_bare_json_tag() {
        let tagged = format!("json {}", PLAIN);
        assert_eq!(normalize_response(&tagged).unwrap(), normalize_response(PLAIN).unwrap());
    }

    #[test]
    fn test_sentiment_clamped() {
        let high = r#"{"sentiment": 1.7, "keywords": [], "emotion": "positive"}"#;
        let low = r#"{"sentiment": -3, "keywords": [], "emotion": "negative"}"#;
        assert_eq!(normalize_response(high).unwrap().sentiment, 1.0);
        assert_eq!(normalize_response(low).unwrap().sentiment, 0.0);
    }

    #[test]
    fn test_sentiment_from_string_and_bool() {
        let text = r#"{"sentiment": " 0.25 ", "keywords": [], "emotion": "neutral"}"#;
        let flag = r#"{"sentiment": true, "keywords": [], "emotion": "neutral"}"#;
        assert_eq!(normalize_response(text).unwrap().sentiment, 0.25);
        assert_eq!(normalize_response(flag).unwrap().sentiment, 1.0);
    }

    #[test]
    fn test_sentiment_not_numeric() {
        let raw = r#"{"sentiment": "very high", "keywords": [], "emotion": "positive"}"#;
        assert!(matches!(
            normalize_response(raw),
            Err(FormatError::InvalidSentiment(_))
        ));

        let null = r#"{"sentiment": null, "keywords": [], "emotion": "positive"}"#;
        assert!(matches!(
            normalize_response(null),
            Err(FormatError::InvalidSentiment(_))
        ));
    }

    #[test]
    fn test_nan_sentiment_rejected() {
        let raw = r#"{"sentiment": "NaN", "keywords": [], "emotion": "positive"}"#;
        assert!(matches!(
            normalize_response(raw),
            Err(FormatError::InvalidSentiment(_))
        ));
    }

    #[test]
    fn test_infinite_sentiment_clamped() {
        let raw = r#"{"sentiment": "-inf", "keywords": [], "emotion": "negative"}"#;
        assert_eq!(normalize_response(raw).unwrap().sentiment, 0.0);
    }

    #[test]
    fn test_unknown_emotion_defaults_to_neutral() {
        for emotion in [r#""joyful""#, r#""Positive""#, "1", "null"] {
            let raw = format!(r#"{{"sentiment": 0.8, "keywords": [], "emotion": {}}}"#, emotion);
            assert_eq!(normalize_response(&raw).unwrap().emotion, Emotion::Neutral);
        }
    }

    #[test]
    fn test_keywords_truncated_and_stringified() {
        let raw = r#"{"sentiment": 0.5, "keywords": ["a", 2, true, "d", "e", "f", "g", "h", "i", "j", "k", "l"], "emotion": "neutral"}"#;
        let result = normalize_response(raw).unwrap();
        assert_eq!(result.keywords.len(), MAX_KEYWORDS);
        assert_eq!(result.keywords[0], "a");
        assert_eq!(result.keywords[1], "2");
        assert_eq!(result.keywords[2], "true");
        assert_eq!(result.keywords[9], "j");
    }

    #[test]
    fn test_keywords_not_a_list() {
        let raw = r#"{"sentiment": 0.5, "keywords": "love, product", "emotion": "neutral"}"#;
        assert!(normalize_response(raw).unwrap().keywords.is_empty());
    }

    #[test]
    fn test_missing_fields() {
        let raw = r#"{"sentiment": 0.5}"#;
        match normalize_response(raw) {
            Err(FormatError::MissingFields(fields)) => {
                assert_eq!(fields, vec!["keywords", "emotion"]);
            }
            other => panic!("expected missing fields, got {:?}", other),
        }
    }

    #[test]
    fn test_non_object_json() {
        assert!(matches!(
            normalize_response("[0.5, [], \"neutral\"]"),
            Err(FormatError::MissingFields(_))
        ));
    }

    #[test]
    fn test_plain_text_reply() {
        assert!(matches!(
            normalize_response("I think this is positive."),
            Err(FormatError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_empty_fence() {
        assert!(matches!(
            normalize_response("``````"),
            Err(FormatError::InvalidJson(_))
        ));
    }
}
