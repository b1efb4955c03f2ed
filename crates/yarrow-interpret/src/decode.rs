//! Strict decoding of model replies.
//!
//! A reply either yields a fully populated [`DivinationInterpretation`] or a
//! [`DecodeError`]; nothing is partially trusted.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::interpretation::{Confidence, DivinationInterpretation};

/// Maximum reasoning bullets kept.
pub const MAX_BULLETS: usize = 5;
/// Minimum reasoning bullets required.
pub const MIN_BULLETS: usize = 3;
/// Maximum follow-up questions kept.
pub const MAX_FOLLOW_UPS: usize = 3;
/// Minimum follow-up questions required.
pub const MIN_FOLLOW_UPS: usize = 2;

/// Why a reply was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// No JSON object could be found.
    #[error("reply contains no JSON object")]
    NoJson,

    /// A required field is absent.
    #[error("missing field '{0}'")]
    MissingField(&'static str),

    /// A field has the wrong JSON type.
    #[error("field '{0}' has the wrong type")]
    WrongType(&'static str),

    /// A text field is blank.
    #[error("field '{0}' is empty")]
    EmptyField(&'static str),

    /// A list field has too few usable entries.
    #[error("field '{field}' needs at least {min} entries, got {actual}")]
    TooFew {
        /// The list field.
        field: &'static str,
        /// Required minimum.
        min: usize,
        /// Usable entries found.
        actual: usize,
    },
}

/// Find the JSON object in a reply: the whole text, else the first JSON
/// value starting at the first `{`.
fn extract_object(text: &str) -> Option<Map<String, Value>> {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(text.trim()) {
        return Some(map);
    }
    let start = text.find('{')?;
    let mut values = serde_json::Deserializer::from_str(&text[start..]).into_iter::<Value>();
    match values.next() {
        Some(Ok(Value::Object(map))) => Some(map),
        _ => None,
    }
}

fn text_field(map: &Map<String, Value>, field: &'static str) -> Result<String, DecodeError> {
    let value = map.get(field).ok_or(DecodeError::MissingField(field))?;
    let text = value.as_str().ok_or(DecodeError::WrongType(field))?.trim();
    if text.is_empty() {
        return Err(DecodeError::EmptyField(field));
    }
    Ok(text.to_string())
}

fn list_field(
    map: &Map<String, Value>,
    field: &'static str,
    min: usize,
    max: usize,
) -> Result<Vec<String>, DecodeError> {
    let items = map
        .get(field)
        .ok_or(DecodeError::MissingField(field))?
        .as_array()
        .ok_or(DecodeError::WrongType(field))?;

    let mut kept = Vec::with_capacity(max);
    for item in items {
        let text = item.as_str().ok_or(DecodeError::WrongType(field))?.trim();
        if !text.is_empty() {
            kept.push(text.to_string());
        }
    }
    kept.truncate(max);

    if kept.len() < min {
        return Err(DecodeError::TooFew {
            field,
            min,
            actual: kept.len(),
        });
    }
    Ok(kept)
}

/// Decode a model reply into an interpretation.
///
/// Unrecognized confidence labels become [`Confidence::Medium`].
pub fn decode_interpretation(text: &str) -> Result<DivinationInterpretation, DecodeError> {
    let map = extract_object(text).ok_or(DecodeError::NoJson)?;

    let confidence = map
        .get("confidence")
        .ok_or(DecodeError::MissingField("confidence"))?
        .as_str()
        .ok_or(DecodeError::WrongType("confidence"))?;

    Ok(DivinationInterpretation {
        summary: text_field(&map, "summary")?,
        advice: text_field(&map, "advice")?,
        timing: text_field(&map, "timing")?,
        confidence: Confidence::parse(confidence).unwrap_or_default(),
        reasoning_bullets: list_field(&map, "reasoning_bullets", MIN_BULLETS, MAX_BULLETS)?,
        follow_up_questions: list_field(
            &map,
            "follow_up_questions",
            MIN_FOLLOW_UPS,
            MAX_FOLLOW_UPS,
        )?,
        ritual_ending: text_field(&map, "ritual_ending")?,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn valid() -> Value {
        json!({
            "summary": " 时机未到，宜静待 ",
            "advice": "先整理手头的事务，再做决定。",
            "timing": "一周之内",
            "confidence": "high",
            "reasoning_bullets": ["本卦为坤", "四爻动", "变卦为豫"],
            "follow_up_questions": ["你在等待什么？", "谁能帮你？"],
            "ritual_ending": "愿你心安。"
        })
    }

    #[test]
    fn decodes_plain_json() {
        let interp = decode_interpretation(&valid().to_string()).unwrap();
        assert_eq!(interp.summary, "时机未到，宜静待");
        assert_eq!(interp.confidence, Confidence::High);
        assert_eq!(interp.reasoning_bullets.len(), 3);
    }

    #[test]
    fn decodes_json_wrapped_in_prose() {
        let text = format!("当然，以下是解读：\n```json\n{}\n```\n希望有帮助 {{}}", valid());
        let interp = decode_interpretation(&text).unwrap();
        assert_eq!(interp.follow_up_questions.len(), 2);
    }

    #[test]
    fn unknown_confidence_becomes_medium() {
        let mut value = valid();
        value["confidence"] = json!("Certain");
        let interp = decode_interpretation(&value.to_string()).unwrap();
        assert_eq!(interp.confidence, Confidence::Medium);
    }

    #[test]
    fn lists_are_truncated() {
        let mut value = valid();
        value["reasoning_bullets"] = json!(["a", "b", "c", "d", "e", "f", "g"]);
        value["follow_up_questions"] = json!(["x", "y", "z", "w"]);
        let interp = decode_interpretation(&value.to_string()).unwrap();
        assert_eq!(interp.reasoning_bullets, vec!["a", "b", "c", "d", "e"]);
        assert_eq!(interp.follow_up_questions, vec!["x", "y", "z"]);
    }

    #[test]
    fn missing_field_is_rejected() {
        let mut value = valid();
        value.as_object_mut().unwrap().remove("ritual_ending");
        assert_eq!(
            decode_interpretation(&value.to_string()),
            Err(DecodeError::MissingField("ritual_ending"))
        );
    }

    #[test]
    fn blank_and_short_fields_are_rejected() {
        let mut value = valid();
        value["advice"] = json!("   ");
        assert_eq!(
            decode_interpretation(&value.to_string()),
            Err(DecodeError::EmptyField("advice"))
        );

        let mut value = valid();
        value["reasoning_bullets"] = json!(["only", " ", "two"]);
        assert_eq!(
            decode_interpretation(&value.to_string()),
            Err(DecodeError::TooFew {
                field: "reasoning_bullets",
                min: 3,
                actual: 2,
            })
        );
    }

    #[test]
    fn wrong_types_are_rejected() {
        let mut value = valid();
        value["follow_up_questions"] = json!("just one");
        assert_eq!(
            decode_interpretation(&value.to_string()),
            Err(DecodeError::WrongType("follow_up_questions"))
        );
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(decode_interpretation("no json here"), Err(DecodeError::NoJson));
        assert_eq!(decode_interpretation("{ broken"), Err(DecodeError::NoJson));
        assert_eq!(decode_interpretation("[1, 2, 3]"), Err(DecodeError::NoJson));
    }
}
