//! # Ticker Error Types

use thiserror::Error;

/// Errors raised by tickers and their callbacks.
#[derive(Error, Debug)]
pub enum TickError {
    /// The callback reported a failure; the ticker stops after logging it.
    #[error("tick callback failed: {0}")]
    Callback(String),

    /// `start` was called on a ticker that was already started or stopped.
    #[error("ticker already started or stopped")]
    AlreadyStarted,

    /// A ticker cannot fire on a zero interval.
    #[error("tick interval must be non-zero")]
    ZeroInterval,

    /// The worker thread could not be spawned.
    #[error("failed to spawn ticker thread: {0}")]
    Spawn(#[from] std::io::Error),
}

impl TickError {
    /// Convenience constructor for callback failures.
    #[must_use]
    pub fn callback(message: impl Into<String>) -> Self {
        Self::Callback(message.into())
    }
}

/// Result type for ticker operations and callbacks.
pub type TickResult<T> = Result<T, TickError>;
