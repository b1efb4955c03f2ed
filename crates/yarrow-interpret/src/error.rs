//! Errors from the LLM collaborator.

use std::time::Duration;

use thiserror::Error;

/// Failure of a single completion call. Calls are all-or-nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LlmError {
    /// No API key is configured.
    #[error("LLM API key not configured")]
    MissingCredential,

    /// The call did not finish within the configured timeout.
    #[error("LLM request timed out after {0:?}")]
    Timeout(Duration),

    /// The endpoint answered with a non-success status.
    #[error("LLM API error: {status} - {body}")]
    RequestFailed {
        /// HTTP status code.
        status: u16,
        /// Response body, as far as it could be read.
        body: String,
    },

    /// Transport-level failure.
    #[error("network error: {0}")]
    Network(String),

    /// The response envelope could not be read.
    #[error("parse error: {0}")]
    Parse(String),

    /// The backend cannot serve requests at all.
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}
