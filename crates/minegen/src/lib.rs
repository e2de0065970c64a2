//! # Minegen
//!
//! Streams generated terrain columns on a fixed interval.
//!
//! Ties [`minegen_worldgen`] (what a block is) to [`minegen_tickers`] (when
//! to generate more), configured from a TOML file.
//!
//! ## Example
//!
//! ```rust
//! use minegen::{ColumnStreamer, StreamConfig};
//!
//! let config = StreamConfig::from_toml_str("interval_ms = 1\ncolumns_per_tick = 2\nmax_ticks = 3")?;
//! let streamer = ColumnStreamer::new(config)?;
//!
//! let mut ticker = streamer.start()?;
//! ticker.join();
//!
//! let tally = streamer.tally();
//! assert_eq!(tally.columns(), 6);
//! assert_eq!(tally.total(), 6 * 64);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod stream;

pub use config::StreamConfig;
pub use error::{ConfigError, ConfigResult, StreamError, StreamResult};
pub use stream::{BlockTally, ColumnStreamer, SpiralWalk};
