//! Interpretation pipeline for yarrow readings.
//!
//! Narrates a cast into a prompt, sends it to an OpenAI-compatible chat
//! endpoint, and strictly decodes the reply. Any failure along the way is
//! absorbed into a templated interpretation built from the cast alone, so
//! [`Interpreter::interpret`] never returns an error.

pub mod backend;
pub mod config;
pub mod decode;
pub mod error;
pub mod fallback;
pub mod interpretation;
pub mod pipeline;
pub mod prompt;

pub use backend::{CompletionRequest, LlmBackend, MockBackend, OpenAiBackend};
pub use config::LlmConfig;
pub use decode::{DecodeError, decode_interpretation};
pub use error::LlmError;
pub use fallback::fallback_interpretation;
pub use interpretation::{
    Confidence, DivinationInterpretation, InterpretationOutcome, InterpretationSource,
};
pub use pipeline::Interpreter;
