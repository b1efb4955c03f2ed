//! Core trait for LLM backends.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::LlmError;

/// A single system + user prompt exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Fixed instruction describing tone and response shape.
    pub system_prompt: String,
    /// Narrated cast and question.
    pub user_prompt: String,
    /// Sampling temperature.
    pub temperature: f32,
}

impl CompletionRequest {
    /// Create a request.
    pub fn new(
        system_prompt: impl Into<String>,
        user_prompt: impl Into<String>,
        temperature: f32,
    ) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            user_prompt: user_prompt.into(),
            temperature,
        }
    }
}

/// An LLM that turns a prompt into text.
///
/// A call either returns the full reply or fails; there are no partial
/// results and no retries.
#[async_trait]
pub trait LlmBackend: Send + Sync {
    /// Backend identifier, usually the model name.
    fn id(&self) -> &str;

    /// Run one completion.
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError>;
}
