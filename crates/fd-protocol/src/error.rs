//! Error types for fair draws.

use thiserror::Error;

/// Result type for protocol operations.
pub type FairResult<T> = Result<T, FairError>;

/// Errors that can occur while committing to, or revealing, a fair draw.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FairError {
    /// A draw needs at least two possible outcomes.
    #[error("range must be at least 2, got {0}")]
    InvalidRange(u32),

    /// The user's contribution is outside `[0, range)`.
    #[error("value {value} is outside 0..{}", .range.saturating_sub(1))]
    ValueOutOfRange {
        /// The rejected value.
        value: u32,
        /// Exclusive upper bound of the draw.
        range: u32,
    },

    /// The revealed key and value do not reproduce the published commitment.
    #[error("revealed value does not match the published commitment")]
    CommitmentMismatch,

    /// The entropy source failed to produce bytes.
    #[error("entropy source failed: {0}")]
    Entropy(String),

    /// A key or digest could not be decoded from hex.
    #[error("malformed hex: {0}")]
    MalformedHex(String),
}

impl FairError {
    /// Returns true if the caller may ask the user again.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::ValueOutOfRange { .. })
    }
}
