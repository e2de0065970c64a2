//! # Column Streaming
//!
//! Generates whole columns of blocks on a ticker, walking an outward square
//! spiral from the configured origin so the explored area stays compact.
//!
//! ## Flow
//!
//! ```text
//! Ticker ──tick──▶ Batch::run ──▶ SpiralWalk ──(x, z)──▶ get_gen over [min_y, max_y)
//!                                                              │
//!                                      Arc<Mutex<BlockTally>> ◀┘ (one lock per column)
//! ```

use std::sync::Arc;
use std::time::Duration;

use minegen_tickers::Ticker;
use minegen_worldgen::{BlockType, Position, WorldGenerator, BLOCK_TYPE_COUNT};
use parking_lot::Mutex;

use crate::config::StreamConfig;
use crate::error::{ConfigResult, StreamResult};

/// Outward square spiral over (X, Z), starting at the origin.
///
/// Visits every column exactly once; the first `(2n + 1)²` steps cover the
/// square of radius `n` around the origin.
#[derive(Clone, Debug)]
pub struct SpiralWalk {
    x: i32,
    z: i32,
    dx: i32,
    dz: i32,
    leg_len: u32,
    leg_step: u32,
    turns: u32,
}

impl SpiralWalk {
    /// Starts a spiral at `(x, z)`.
    #[must_use]
    pub const fn new(x: i32, z: i32) -> Self {
        Self {
            x,
            z,
            dx: 1,
            dz: 0,
            leg_len: 1,
            leg_step: 0,
            turns: 0,
        }
    }
}

impl Iterator for SpiralWalk {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        let current = (self.x, self.z);

        self.x = self.x.wrapping_add(self.dx);
        self.z = self.z.wrapping_add(self.dz);
        self.leg_step += 1;

        if self.leg_step == self.leg_len {
            self.leg_step = 0;
            (self.dx, self.dz) = (-self.dz, self.dx);
            self.turns += 1;
            if self.turns % 2 == 0 {
                self.leg_len = self.leg_len.saturating_add(1);
            }
        }

        Some(current)
    }
}

/// Running totals of what a stream has generated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockTally {
    counts: [u64; BLOCK_TYPE_COUNT],
    columns: u64,
    ticks: u64,
    elapsed: Duration,
}

impl BlockTally {
    /// Blocks of one type generated so far.
    #[must_use]
    pub const fn count(&self, block_type: BlockType) -> u64 {
        self.counts[block_type as usize]
    }

    /// All blocks generated so far.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Columns completed.
    #[must_use]
    pub const fn columns(&self) -> u64 {
        self.columns
    }

    /// Ticks completed.
    #[must_use]
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Sum of the `dt` values delivered to the stream.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// `(type, count)` for every block type, in discriminant order.
    pub fn iter(&self) -> impl Iterator<Item = (BlockType, u64)> + '_ {
        BlockType::ALL.iter().map(|&block_type| (block_type, self.count(block_type)))
    }

    fn add_column(&mut self, column: &[u64; BLOCK_TYPE_COUNT]) {
        for (total, n) in self.counts.iter_mut().zip(column) {
            *total += n;
        }
        self.columns += 1;
    }
}

/// Streams columns from a shared generator on a fixed interval.
pub struct ColumnStreamer {
    config: StreamConfig,
    generator: Arc<WorldGenerator>,
    tally: Arc<Mutex<BlockTally>>,
}

impl ColumnStreamer {
    /// Builds a streamer and its generator.
    ///
    /// # Errors
    ///
    /// Returns the validation error if `config` is invalid.
    pub fn new(config: StreamConfig) -> ConfigResult<Self> {
        config.validate()?;
        let generator = Arc::new(WorldGenerator::new(config.seed));

        Ok(Self {
            config,
            generator,
            tally: Arc::new(Mutex::new(BlockTally::default())),
        })
    }

    /// The configuration this streamer runs with.
    #[must_use]
    pub const fn config(&self) -> &StreamConfig {
        &self.config
    }

    /// The shared generator.
    #[must_use]
    pub fn generator(&self) -> &Arc<WorldGenerator> {
        &self.generator
    }

    /// Snapshot of the totals so far.
    #[must_use]
    pub fn tally(&self) -> BlockTally {
        self.tally.lock().clone()
    }

    /// Starts streaming on a new ticker.
    ///
    /// Each call walks its own spiral from the origin; totals accumulate in
    /// the streamer's shared tally.
    ///
    /// # Errors
    ///
    /// Returns the ticker's error if it could not start.
    pub fn start(&self) -> StreamResult<Ticker> {
        let mut batch = Batch {
            generator: Arc::clone(&self.generator),
            tally: Arc::clone(&self.tally),
            spiral: SpiralWalk::new(self.config.origin[0], self.config.origin[1]),
            columns_per_tick: self.config.columns_per_tick,
            min_y: self.config.min_y,
            max_y: self.config.max_y,
            max_ticks: self.config.max_ticks,
            ticks: 0,
        };

        tracing::info!(
            "streaming {} columns every {:?} from seed {}",
            self.config.columns_per_tick,
            self.config.interval(),
            self.config.seed
        );

        let ticker = Ticker::spawn(self.config.interval(), move |_now, dt| Ok(batch.run(dt)))?;
        Ok(ticker)
    }
}

/// Per-ticker streaming state, owned by the worker.
struct Batch {
    generator: Arc<WorldGenerator>,
    tally: Arc<Mutex<BlockTally>>,
    spiral: SpiralWalk,
    columns_per_tick: u32,
    min_y: i32,
    max_y: i32,
    max_ticks: Option<u64>,
    ticks: u64,
}

impl Batch {
    /// Generates one tick's worth of columns. Returns false once done.
    fn run(&mut self, dt: Duration) -> bool {
        for _ in 0..self.columns_per_tick {
            let Some((x, z)) = self.spiral.next() else {
                break;
            };

            let mut column = [0u64; BLOCK_TYPE_COUNT];
            for y in self.min_y..self.max_y {
                let block = self.generator.get_gen(Position::new(x, y, z));
                column[block.block_type() as usize] += 1;
            }

            self.tally.lock().add_column(&column);
        }

        self.ticks += 1;
        {
            let mut tally = self.tally.lock();
            tally.ticks += 1;
            tally.elapsed += dt;
        }

        match self.max_ticks {
            Some(max) if self.ticks >= max => {
                tracing::info!("stream finished after {} ticks", self.ticks);
                false
            }
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_spiral_first_ring() {
        let steps: Vec<_> = SpiralWalk::new(0, 0).take(9).collect();
        assert_eq!(
            steps,
            vec![(0, 0), (1, 0), (1, 1), (0, 1), (-1, 1), (-1, 0), (-1, -1), (0, -1), (1, -1)]
        );
    }

    #[test]
    fn test_spiral_covers_squares() {
        for radius in 1..6i32 {
            let side = usize::try_from(2 * radius + 1).unwrap();
            let steps: HashSet<_> = SpiralWalk::new(0, 0).take(side * side).collect();

            assert_eq!(steps.len(), side * side, "Spiral revisited a column");
            for (x, z) in steps {
                assert!(x.abs() <= radius && z.abs() <= radius, "({x}, {z}) outside radius {radius}");
            }
        }
    }

    #[test]
    fn test_spiral_offset_origin() {
        let steps: Vec<_> = SpiralWalk::new(100, -50).take(3).collect();
        assert_eq!(steps, vec![(100, -50), (101, -50), (101, -49)]);
    }

    #[test]
    fn test_spiral_wraps_at_edge() {
        let mut walk = SpiralWalk::new(i32::MAX, 0);
        assert_eq!(walk.next(), Some((i32::MAX, 0)));
        assert_eq!(walk.next(), Some((i32::MIN, 0)));
    }

    #[test]
    fn test_tally_iter_order() {
        let tally = BlockTally::default();
        let types: Vec<_> = tally.iter().map(|(t, _)| t).collect();
        assert_eq!(types, BlockType::ALL.to_vec());
        assert_eq!(tally.total(), 0);
    }

    #[test]
    fn test_batch_counts_columns() {
        let config = StreamConfig {
            columns_per_tick: 5,
            min_y: 0,
            max_y: 20,
            max_ticks: Some(2),
            ..StreamConfig::default()
        };
        let streamer = ColumnStreamer::new(config).unwrap();
        let mut batch = Batch {
            generator: Arc::clone(&streamer.generator),
            tally: Arc::clone(&streamer.tally),
            spiral: SpiralWalk::new(0, 0),
            columns_per_tick: 5,
            min_y: 0,
            max_y: 20,
            max_ticks: Some(2),
            ticks: 0,
        };

        assert!(batch.run(Duration::from_millis(3)));
        assert!(!batch.run(Duration::from_millis(4)));

        let tally = streamer.tally();
        assert_eq!(tally.ticks(), 2);
        assert_eq!(tally.columns(), 10);
        assert_eq!(tally.total(), 200);
        assert_eq!(tally.elapsed(), Duration::from_millis(7));
        // Ground never drops below 12, so the bottom of every column is stone
        assert!(tally.count(BlockType::Stone) >= 10 * 7);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = StreamConfig {
            min_y: 5,
            max_y: 1,
            ..StreamConfig::default()
        };
        assert!(ColumnStreamer::new(config).is_err());
    }
}
