//! # Minegen Tickers
//!
//! Runs a callback repeatedly on a fixed interval, on a dedicated thread.
//!
//! ## Callback Contract
//!
//! The callback receives the tick timestamp and the time elapsed since the
//! previous tick (since `start` for the first one) and returns:
//!
//! - `Ok(true)` to keep ticking
//! - `Ok(false)` to stop gracefully
//! - `Err(_)` to stop; the error is logged
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use minegen_tickers::Ticker;
//!
//! let mut remaining = 3;
//! let mut ticker = Ticker::spawn(Duration::from_millis(1), move |_now, _dt| {
//!     remaining -= 1;
//!     Ok(remaining > 0)
//! })?;
//!
//! ticker.join();
//! assert_eq!(ticker.ticks(), 3);
//! # Ok::<(), minegen_tickers::TickError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod error;
pub mod ticker;

pub use error::{TickError, TickResult};
pub use ticker::{StopHandle, Ticker};
