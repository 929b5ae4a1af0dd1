//! Error types for tournament operations

use thiserror::Error;

/// Result type for tournament operations.
pub type Result<T> = std::result::Result<T, TournamentError>;

/// Errors that can occur while tracking a tournament
#[derive(Debug, Error)]
pub enum TournamentError {
    /// The store could not be reached or rejected a query
    #[error("store error: {0}")]
    Store(#[from] rusqlite::Error),
    /// A caller violated an operation's precondition
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The configuration file could not be parsed
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<swiss_core::Error> for TournamentError {
    fn from(err: swiss_core::Error) -> Self {
        match err {
            swiss_core::Error::InvalidInput(msg) => TournamentError::InvalidInput(msg),
        }
    }
}
