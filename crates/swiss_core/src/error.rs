//! Error types for standings and pairing operations.

use thiserror::Error;

/// Result type for swiss_core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when a caller violates a precondition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input does not satisfy the operation's precondition.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
