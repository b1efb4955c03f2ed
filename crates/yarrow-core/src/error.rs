//! Error types for table lookups and cast generation.

use thiserror::Error;

use crate::method::Method;

/// Result type for cast operations.
pub type CastResult<T> = Result<T, CastError>;

/// Errors raised while looking up tables or generating a result.
///
/// Every variant describes malformed caller input; none of them leave any
/// state behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CastError {
    /// Method name other than `liuyao` or `tarot`.
    #[error("invalid method: {0}")]
    InvalidMethod(String),

    /// Wrong number of tosses or draws for the method.
    #[error("{method} needs exactly {expected} inputs, got {actual}")]
    InvalidInputCount {
        /// The method being generated.
        method: Method,
        /// How many inputs the method needs.
        expected: usize,
        /// How many were supplied.
        actual: usize,
    },

    /// Six-character binary string that is not a valid hexagram pattern.
    #[error("hexagram not found for pattern '{0}'")]
    HexagramNotFound(String),

    /// Card id outside 0-21.
    #[error("card not found: {0}")]
    CardNotFound(u8),

    /// Coin value other than 2 (tails) or 3 (heads).
    #[error("invalid coin value {0}, expected 2 or 3")]
    InvalidCoin(u8),

    /// The same card appears twice in one spread.
    #[error("card {0} drawn more than once")]
    DuplicateCard(u8),

    /// A draw was reported for the wrong spread position.
    #[error("draw {index} must be for position '{expected}', got '{actual}'")]
    PositionMismatch {
        /// Zero-based draw index.
        index: usize,
        /// Position that slot belongs to.
        expected: String,
        /// Position the caller reported.
        actual: String,
    },

    /// Raw input kind does not match the method.
    #[error("{method} cannot be generated from {input}")]
    InputMismatch {
        /// The method being generated.
        method: Method,
        /// The kind of raw input supplied.
        input: &'static str,
    },
}
