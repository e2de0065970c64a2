//! # Stream Configuration
//!
//! Loaded once at startup from TOML. Every key is optional:
//!
//! ```toml
//! seed = 42
//! interval_ms = 50
//! columns_per_tick = 16
//! min_y = 0
//! max_y = 64
//! origin = [0, 0]
//! max_ticks = 100   # omit to run until stopped
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{ConfigError, ConfigResult};

/// Settings for a [`crate::ColumnStreamer`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StreamConfig {
    /// World seed.
    pub seed: i64,
    /// Milliseconds between ticks. Must be non-zero.
    pub interval_ms: u64,
    /// Columns generated per tick. Must be non-zero.
    pub columns_per_tick: u32,
    /// Lowest Y generated in each column (inclusive).
    pub min_y: i32,
    /// Highest Y generated in each column (exclusive).
    pub max_y: i32,
    /// (X, Z) of the first column; the spiral grows out from here.
    pub origin: [i32; 2],
    /// Stop after this many ticks. `None` runs until stopped.
    pub max_ticks: Option<u64>,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            interval_ms: 50,
            columns_per_tick: 16,
            min_y: 0,
            max_y: 64,
            origin: [0, 0],
            max_ticks: None,
        }
    }
}

impl StreamConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] for malformed TOML or unknown keys,
    /// [`ConfigError::Invalid`] if validation fails.
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file can't be read, otherwise as
    /// [`StreamConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!("loading stream config from {}", path.display());
        Self::from_toml_str(&source)
    }

    /// Checks the values against each other.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] naming the first offending key.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.interval_ms == 0 {
            return Err(ConfigError::Invalid("interval_ms must be greater than 0".into()));
        }
        if self.columns_per_tick == 0 {
            return Err(ConfigError::Invalid("columns_per_tick must be greater than 0".into()));
        }
        if self.max_ticks == Some(0) {
            return Err(ConfigError::Invalid("max_ticks must be greater than 0 when set".into()));
        }
        if self.min_y >= self.max_y {
            return Err(ConfigError::Invalid(format!(
                "min_y ({}) must be below max_y ({})",
                self.min_y, self.max_y
            )));
        }
        Ok(())
    }

    /// Time between ticks.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Blocks generated per column.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub const fn column_height(&self) -> u64 {
        // validate() guarantees min_y < max_y
        (self.max_y as i64 - self.min_y as i64) as u64
    }
}
