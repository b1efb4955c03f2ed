//! Error types for the session engine.

use thiserror::Error;
use yarrow_core::CastError;

use crate::store::StoreError;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors surfaced by session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// No session with this id.
    #[error("session not found: {0}")]
    NotFound(String),

    /// The session's mode or status forbids the operation.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// A session needs a non-blank question.
    #[error("question must not be empty")]
    EmptyQuestion,

    /// A step skipped ahead of the next expected one.
    #[error("expected step {expected}, got {got}")]
    OutOfOrderStep {
        /// Next step number the session accepts.
        expected: usize,
        /// Step number the caller sent.
        got: usize,
    },

    /// A step number beyond what the method needs.
    #[error("step {step} is beyond the {total} steps this method needs")]
    StepOutOfRange {
        /// Step number the caller sent.
        step: usize,
        /// Steps the method needs.
        total: usize,
    },

    /// Interpretation was requested before all manual steps arrived.
    #[error("manual steps not complete: {current}/{required}")]
    StepsIncomplete {
        /// Steps recorded so far.
        current: usize,
        /// Steps the method needs.
        required: usize,
    },

    /// A step whose action or numbering does not fit the session.
    #[error("invalid step: {0}")]
    InvalidStep(String),

    /// Generator rejected the input.
    #[error(transparent)]
    Cast(#[from] CastError),

    /// Record store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}
