//! # Interval Ticker
//!
//! ## Design
//!
//! ```text
//! ┌──────────────┐  tick(interval)  ┌──────────────┐
//! │ Timer chan   │ ───────────────▶ │              │ ──▶ callback(now, dt)
//! └──────────────┘                  │ Worker       │
//! ┌──────────────┐  stop signal     │ (select!)    │
//! │ Stop chan    │ ───────────────▶ │              │ ──▶ exit
//! └──────────────┘                  └──────────────┘
//! ```
//!
//! The worker owns the callback. The ticker keeps the stop sender, the
//! running flag and the join handle.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, select, tick, Receiver, Sender};

use crate::error::{TickError, TickResult};

type Callback = Box<dyn FnMut(Instant, Duration) -> TickResult<bool> + Send + 'static>;

/// Stops a ticker from any thread.
///
/// Stopping only signals the worker; it does not wait for it. Use
/// [`Ticker::stop`] or [`Ticker::join`] on the owner to wait.
#[derive(Clone, Debug)]
pub struct StopHandle {
    stop_tx: Sender<()>,
    running: Arc<AtomicBool>,
}

impl StopHandle {
    /// Signals the ticker to stop after its current tick.
    pub fn stop(&self) {
        // A pending signal already does the job
        let _ = self.stop_tx.try_send(());
    }

    /// Returns true while the worker is alive.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

/// A repeating callback on a fixed interval.
///
/// Created idle by [`Ticker::new`]; [`Ticker::start`] launches the worker.
/// Dropping a ticker stops it and joins the worker.
pub struct Ticker {
    /// Time between ticks.
    interval: Duration,
    /// The callback, until the worker takes it.
    callback: Option<Callback>,
    /// Sender side of the stop channel.
    stop_tx: Sender<()>,
    /// Receiver side of the stop channel, cloned into the worker.
    stop_rx: Receiver<()>,
    /// Whether the worker is alive.
    running: Arc<AtomicBool>,
    /// Callbacks run so far.
    ticks: Arc<AtomicU64>,
    /// Worker thread handle.
    worker: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Creates an idle ticker.
    pub fn new<F>(interval: Duration, callback: F) -> Self
    where
        F: FnMut(Instant, Duration) -> TickResult<bool> + Send + 'static,
    {
        let (stop_tx, stop_rx) = bounded(1);

        Self {
            interval,
            callback: Some(Box::new(callback)),
            stop_tx,
            stop_rx,
            running: Arc::new(AtomicBool::new(false)),
            ticks: Arc::new(AtomicU64::new(0)),
            worker: None,
        }
    }

    /// Creates and starts a ticker in one step.
    ///
    /// # Errors
    ///
    /// Same as [`Ticker::start`].
    pub fn spawn<F>(interval: Duration, callback: F) -> TickResult<Self>
    where
        F: FnMut(Instant, Duration) -> TickResult<bool> + Send + 'static,
    {
        let mut ticker = Self::new(interval, callback);
        ticker.start()?;
        Ok(ticker)
    }

    /// Launches the worker thread.
    ///
    /// # Errors
    ///
    /// - [`TickError::ZeroInterval`] if the interval is zero
    /// - [`TickError::AlreadyStarted`] if the ticker was started or stopped before
    /// - [`TickError::Spawn`] if the thread could not be created
    pub fn start(&mut self) -> TickResult<()> {
        if self.interval.is_zero() {
            return Err(TickError::ZeroInterval);
        }
        let callback = self.callback.take().ok_or(TickError::AlreadyStarted)?;

        let interval = self.interval;
        let stop_rx = self.stop_rx.clone();
        let running = Arc::clone(&self.running);
        let ticks = Arc::clone(&self.ticks);

        tracing::debug!("starting ticker every {:?}", interval);
        self.running.store(true, Ordering::SeqCst);

        let spawned = thread::Builder::new()
            .name("minegen-ticker".to_string())
            .spawn(move || {
                run(interval, callback, &stop_rx, &ticks);
                running.store(false, Ordering::SeqCst);
            });

        match spawned {
            Ok(worker) => {
                self.worker = Some(worker);
                Ok(())
            }
            Err(err) => {
                self.running.store(false, Ordering::SeqCst);
                Err(TickError::Spawn(err))
            }
        }
    }

    /// Stops the ticker and waits for the worker to exit.
    ///
    /// Idempotent. A ticker stopped before it was started never runs.
    pub fn stop(&mut self) {
        self.callback = None;
        let _ = self.stop_tx.try_send(());
        self.join();
    }

    /// Waits for the worker to exit on its own.
    ///
    /// Blocks forever if the callback never stops the ticker and nobody
    /// else does.
    pub fn join(&mut self) {
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                tracing::error!("ticker worker panicked");
                self.running.store(false, Ordering::SeqCst);
            }
        }
    }

    /// A handle that can stop this ticker from another thread.
    #[must_use]
    pub fn stop_handle(&self) -> StopHandle {
        StopHandle {
            stop_tx: self.stop_tx.clone(),
            running: Arc::clone(&self.running),
        }
    }

    /// Returns true while the worker is alive.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Number of callbacks run so far.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::SeqCst)
    }

    /// Time between ticks.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Worker loop: fire the callback on every tick until told to stop.
fn run(interval: Duration, mut callback: Callback, stop_rx: &Receiver<()>, ticks: &AtomicU64) {
    let timer = tick(interval);
    let mut last_tick = Instant::now();

    loop {
        select! {
            recv(stop_rx) -> _ => {
                tracing::debug!("ticker stopped");
                return;
            }
            recv(timer) -> timestamp => {
                let Ok(timestamp) = timestamp else {
                    return;
                };
                let dt = timestamp.saturating_duration_since(last_tick);
                last_tick = timestamp;
                ticks.fetch_add(1, Ordering::SeqCst);

                match callback(timestamp, dt) {
                    Ok(true) => {}
                    Ok(false) => {
                        tracing::info!("ticker safely exiting");
                        return;
                    }
                    Err(err) => {
                        tracing::error!("ticker encountered error: {}", err);
                        return;
                    }
                }
            }
        }
    }
}
