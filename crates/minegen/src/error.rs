//! # Streaming Error Types

use std::path::PathBuf;

use minegen_tickers::TickError;
use thiserror::Error;

/// Errors raised while loading or validating a [`crate::StreamConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not valid TOML or has unexpected keys.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The values parse but make no sense together.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Anything that can stop a stream from starting.
#[derive(Error, Debug)]
pub enum StreamError {
    /// Bad configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The ticker could not be started.
    #[error(transparent)]
    Tick(#[from] TickError),
}

/// Result type for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for stream operations.
pub type StreamResult<T> = Result<T, StreamError>;
