//! The LLM collaborator seam.
//!
//! - [`OpenAiBackend`] talks to any OpenAI-compatible chat endpoint.
//! - [`MockBackend`] returns canned replies or errors for tests.

pub mod mock;
pub mod openai;
pub mod traits;

pub use mock::MockBackend;
pub use openai::OpenAiBackend;
pub use traits::{CompletionRequest, LlmBackend};
