//! # Minegen World Generation
//!
//! Deterministic voxel terrain classification for infinite, reproducible
//! worlds.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Same seed always produces the same world
//! 2. **Stateless**: Every query is a pure function of (seed, position)
//! 3. **Shareable**: Generators are immutable and `Send + Sync`
//!
//! ## Core Components
//!
//! - `SimplexNoise`: seeded 2D/3D gradient noise behind the `NoiseSource` trait
//! - `FractalSampler`: octave summation over a noise source
//! - `WorldGenerator`: ground level, block classification and decoration
//! - `Block` / `BlockType`: what a query returns
//!
//! ## Example
//!
//! ```rust
//! use minegen_worldgen::{Position, WorldGenerator};
//!
//! let generator = WorldGenerator::new(42);
//!
//! let ground = generator.ground_level(100, 200);
//! assert!(ground >= WorldGenerator::MIN_GROUND_LEVEL);
//!
//! let surface = generator.get_gen(Position::new(100, ground, 200));
//! assert!(!surface.is_air());
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod block;
pub mod fractal;
pub mod noise;
pub mod position;
pub mod terrain;

pub use block::{Block, BlockType, BLOCK_TYPE_COUNT};
pub use fractal::FractalSampler;
pub use noise::{NoiseSource, SimplexNoise, WorldSeed};
pub use position::Position;
pub use terrain::WorldGenerator;
