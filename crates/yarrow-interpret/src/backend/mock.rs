//! Mock LLM backend for testing.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;

use super::traits::{CompletionRequest, LlmBackend};
use crate::error::LlmError;

/// Backend that returns a canned reply or a canned error.
pub struct MockBackend {
    model_id: String,
    reply: Result<String, LlmError>,
    call_count: AtomicU32,
    last_request: Mutex<Option<CompletionRequest>>,
}

impl MockBackend {
    /// Create a mock that answers every call with `reply`.
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            model_id: "mock-model".to_string(),
            reply: Ok(reply.into()),
            call_count: AtomicU32::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Create a mock whose every call fails with `error`.
    pub fn failing(error: LlmError) -> Self {
        Self {
            reply: Err(error),
            ..Self::new("")
        }
    }

    /// Number of times `complete` was called.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::SeqCst)
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.last_request.lock().ok().and_then(|slot| slot.clone())
    }
}

#[async_trait]
impl LlmBackend for MockBackend {
    fn id(&self) -> &str {
        &self.model_id
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut slot) = self.last_request.lock() {
            *slot = Some(request);
        }
        self.reply.clone()
    }
}
