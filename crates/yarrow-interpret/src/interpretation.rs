//! The interpretation payload and how it was obtained.

use serde::{Deserialize, Serialize};

/// How sure the reading is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Low; also marks every fallback reading.
    Low,
    /// Medium; used when a model answers with something unrecognized.
    #[default]
    Medium,
    /// High.
    High,
}

impl Confidence {
    /// Parse a confidence label, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    /// Wire label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A finished reading. Produced once per session, then immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivinationInterpretation {
    /// One-sentence conclusion.
    pub summary: String,
    /// Concrete advice.
    pub advice: String,
    /// Timing hint.
    pub timing: String,
    /// Confidence label.
    pub confidence: Confidence,
    /// Three to five short reasoning points.
    pub reasoning_bullets: Vec<String>,
    /// Two or three questions to reflect on.
    pub follow_up_questions: Vec<String>,
    /// Closing remark.
    pub ritual_ending: String,
}

/// Where an interpretation came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InterpretationSource {
    /// The model answered with a valid payload.
    Model,
    /// The model was unreachable or its answer was unusable.
    Fallback {
        /// What went wrong.
        reason: String,
    },
}

impl InterpretationSource {
    /// Whether the reading is a templated fallback.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// Result of running the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpretationOutcome {
    /// The reading.
    pub interpretation: DivinationInterpretation,
    /// Whether it came from the model.
    pub source: InterpretationSource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_parse() {
        assert_eq!(Confidence::parse("HIGH"), Some(Confidence::High));
        assert_eq!(Confidence::parse(" low "), Some(Confidence::Low));
        assert_eq!(Confidence::parse("certain"), None);
    }

    #[test]
    fn source_wire_shape() {
        let source = InterpretationSource::Fallback {
            reason: "timeout".to_string(),
        };
        let value = serde_json::to_value(&source).unwrap();
        assert_eq!(value["kind"], "fallback");
        assert_eq!(value["reason"], "timeout");
        assert!(source.is_fallback());

        let model = serde_json::to_value(InterpretationSource::Model).unwrap();
        assert_eq!(model["kind"], "model");
    }
}
