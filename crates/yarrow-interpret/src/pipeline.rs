//! Prompt, call, decode, and fall back.

use std::sync::Arc;

use tracing::{debug, info, warn};
use yarrow_core::{DivinationResult, Language, Mode};

use crate::backend::{CompletionRequest, LlmBackend, OpenAiBackend};
use crate::config::{DEFAULT_TEMPERATURE, LlmConfig};
use crate::decode::decode_interpretation;
use crate::error::LlmError;
use crate::fallback::fallback_interpretation;
use crate::interpretation::{InterpretationOutcome, InterpretationSource};
use crate::prompt::{system_prompt, user_prompt};

/// Stateless interpretation pipeline over an LLM backend.
#[derive(Clone)]
pub struct Interpreter {
    backend: Arc<dyn LlmBackend>,
    temperature: f32,
}

impl Interpreter {
    /// Create a pipeline over any backend.
    pub fn new(backend: Arc<dyn LlmBackend>) -> Self {
        Self {
            backend,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Create a pipeline over an OpenAI-compatible endpoint.
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        let backend = OpenAiBackend::new(config)?;
        Ok(Self::new(Arc::new(backend)).with_temperature(config.temperature))
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Interpret a cast. Never fails: any upstream problem yields the
    /// templated reading, marked as a fallback.
    pub async fn interpret(
        &self,
        question: &str,
        mode: Mode,
        result: &DivinationResult,
        lang: Language,
    ) -> InterpretationOutcome {
        let request = CompletionRequest::new(
            system_prompt(lang),
            user_prompt(question, mode, result, lang),
            self.temperature,
        );
        debug!(
            backend = self.backend.id(),
            method = %result.method(),
            prompt_chars = request.user_prompt.chars().count(),
            "requesting interpretation"
        );

        let reason = match self.backend.complete(request).await {
            Ok(reply) => match decode_interpretation(&reply) {
                Ok(interpretation) => {
                    info!(backend = self.backend.id(), "interpretation decoded");
                    return InterpretationOutcome {
                        interpretation,
                        source: InterpretationSource::Model,
                    };
                }
                Err(e) => format!("unusable reply: {e}"),
            },
            Err(e) => e.to_string(),
        };

        warn!(backend = self.backend.id(), %reason, "falling back to templated interpretation");
        InterpretationOutcome {
            interpretation: fallback_interpretation(result, lang),
            source: InterpretationSource::Fallback { reason },
        }
    }
}

impl std::fmt::Debug for Interpreter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interpreter")
            .field("backend", &self.backend.id())
            .field("temperature", &self.temperature)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use yarrow_core::{Method, generate_from_seed};

    use super::*;
    use crate::backend::MockBackend;
    use crate::interpretation::Confidence;

    fn reply() -> String {
        json!({
            "summary": "静观其变",
            "advice": "暂缓决定，先收集更多信息。",
            "timing": "下个月初",
            "confidence": "medium",
            "reasoning_bullets": ["坤卦主顺", "四爻动", "豫卦主乐"],
            "follow_up_questions": ["你在担心什么？", "有谁可以商量？"],
            "ritual_ending": "愿你安然。"
        })
        .to_string()
    }

    fn liuyao() -> DivinationResult {
        generate_from_seed(Method::Liuyao, "abc", Language::Zh).unwrap()
    }

    #[tokio::test]
    async fn model_reply_is_used() {
        let backend = Arc::new(MockBackend::new(reply()));
        let interpreter = Interpreter::new(backend.clone()).with_temperature(0.3);
        let outcome = interpreter
            .interpret("换工作？", Mode::Ai, &liuyao(), Language::Zh)
            .await;

        assert_eq!(outcome.source, InterpretationSource::Model);
        assert_eq!(outcome.interpretation.summary, "静观其变");
        assert_eq!(backend.call_count(), 1);

        let request = backend.last_request().unwrap();
        assert_eq!(request.temperature, 0.3);
        assert!(request.user_prompt.contains("换工作？"));
    }

    #[tokio::test]
    async fn timeout_falls_back_with_low_confidence() {
        let backend = Arc::new(MockBackend::failing(LlmError::Timeout(Duration::from_secs(60))));
        let outcome = Interpreter::new(backend.clone())
            .interpret("换工作？", Mode::Ai, &liuyao(), Language::Zh)
            .await;

        assert!(outcome.source.is_fallback());
        assert_eq!(outcome.interpretation.confidence, Confidence::Low);
        assert_eq!(backend.call_count(), 1);
    }

    #[tokio::test]
    async fn unusable_reply_falls_back_with_reason() {
        let backend = Arc::new(MockBackend::new("I cannot answer that."));
        let outcome = Interpreter::new(backend)
            .interpret("?", Mode::Manual, &liuyao(), Language::En)
            .await;

        match outcome.source {
            InterpretationSource::Fallback { reason } => {
                assert!(reason.contains("no JSON object"));
            }
            InterpretationSource::Model => panic!("expected fallback"),
        }
        assert_eq!(
            outcome.interpretation.follow_up_questions[0],
            "What made you want to ask this question?"
        );
    }

    #[tokio::test]
    async fn missing_key_falls_back() {
        let interpreter = Interpreter::from_config(&LlmConfig::default()).unwrap();
        let outcome = interpreter
            .interpret("?", Mode::Ai, &liuyao(), Language::Zh)
            .await;
        assert_eq!(
            outcome.source,
            InterpretationSource::Fallback {
                reason: "LLM API key not configured".to_string(),
            }
        );
    }
}
