//! # Terrain Generation
//!
//! Turns fractal samples into block decisions.
//!
//! ## Pipeline
//!
//! ```text
//! Position ──▶ ground_level(x, z) ──▶ raw_gen ──▶ base_gen ──▶ get_gen ──▶ Block
//!                                    (classify)  (decorate)   (wrap)
//! ```
//!
//! Every query is a pure function of (seed, position). Nothing is cached:
//! `base_gen` classifies both the cell and the cell below it, each costing
//! up to three fractal samples. Callers filling whole columns should cache
//! [`WorldGenerator::ground_level`] per (X, Z) themselves.

use crate::block::{Block, BlockType};
use crate::fractal::FractalSampler;
use crate::noise::{NoiseSource, SimplexNoise, WorldSeed};
use crate::position::Position;

/// One octave schedule: where to sample and how to stack layers.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Layer {
    /// Coordinate scale applied to X.
    scale_x: f64,
    /// Coordinate scale applied to Z.
    scale_z: f64,
    octaves: u32,
    persistence: f64,
    lacunarity: f64,
}

impl Layer {
    /// Broad hills deciding where the ground sits.
    const HEIGHT: Self = Self::new(0.01, 0.01, 4, 0.5, 2.0);
    /// Mirrored, smoother field scaling the hill height.
    const HEIGHT_SCALE: Self = Self::new(-0.01, -0.01, 2, 0.9, 2.0);
    /// Grass versus sand patches.
    const SURFACE: Self = Self::new(-0.1, 0.1, 4, 0.8, 2.0);
    /// Flower meadows on grass.
    const FLOWERS: Self = Self::new(0.05, -0.05, 4, 0.8, 2.0);

    const fn new(scale_x: f64, scale_z: f64, octaves: u32, persistence: f64, lacunarity: f64) -> Self {
        Self {
            scale_x,
            scale_z,
            octaves,
            persistence,
            lacunarity,
        }
    }
}

/// Deterministic voxel terrain generator.
///
/// Immutable after construction, so a single generator can be shared across
/// threads (e.g. in an `Arc`) without locking.
///
/// # Example
///
/// ```rust
/// use minegen_worldgen::{BlockType, Position, WorldGenerator};
///
/// let generator = WorldGenerator::new(42);
/// let block = generator.get_gen(Position::new(0, 200, 0));
///
/// assert_eq!(block.block_type(), BlockType::Air);
/// assert!(!block.is_dirty());
/// ```
pub struct WorldGenerator<N = SimplexNoise> {
    sampler: FractalSampler<N>,
}

impl WorldGenerator {
    /// Lowest ground level any column can have.
    pub const MIN_GROUND_LEVEL: i32 = 12;

    /// Depth of the soil band; anything deeper below the surface is stone.
    pub const SOIL_DEPTH: i32 = 5;

    /// Surface threshold above which a column is grass-covered.
    pub const GRASS_THRESHOLD: f64 = 0.6;

    /// Flower threshold on grass.
    pub const FLOWER_THRESHOLD: f64 = 0.7;

    /// Creates a generator for the given seed.
    ///
    /// Every seed is valid.
    #[must_use]
    pub fn new(seed: i64) -> Self {
        tracing::debug!("world generator seeded with {}", seed);
        Self::with_noise(SimplexNoise::new(WorldSeed::from(seed)))
    }
}

impl<N: NoiseSource> WorldGenerator<N> {
    /// Creates a generator over an arbitrary noise source.
    #[must_use]
    pub const fn with_noise(noise: N) -> Self {
        Self {
            sampler: FractalSampler::new(noise),
        }
    }

    /// The fractal sampler driving this generator.
    #[must_use]
    pub const fn sampler(&self) -> &FractalSampler<N> {
        &self.sampler
    }

    #[inline]
    fn sample(&self, layer: Layer, x: i32, z: i32) -> f64 {
        self.sampler.sample_2d(
            f64::from(x) * layer.scale_x,
            f64::from(z) * layer.scale_z,
            layer.octaves,
            layer.persistence,
            layer.lacunarity,
        )
    }

    /// Top solid Y of the column at (X, Z).
    ///
    /// Never below [`WorldGenerator::MIN_GROUND_LEVEL`].
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn ground_level(&self, x: i32, z: i32) -> i32 {
        let height = self.sample(Layer::HEIGHT, x, z);
        let scale = self.sample(Layer::HEIGHT_SCALE, x, z);

        let level = (height * (scale * 32.0 + 16.0)).floor() as i32;
        level.max(WorldGenerator::MIN_GROUND_LEVEL)
    }

    /// Classifies a cell from terrain alone, without decorations.
    #[must_use]
    pub fn raw_gen(&self, pos: Position) -> BlockType {
        let ground = self.ground_level(pos.x, pos.z);

        if pos.y > ground {
            return BlockType::Air;
        }

        if pos.y < ground - WorldGenerator::SOIL_DEPTH {
            return BlockType::Stone;
        }

        if self.sample(Layer::SURFACE, pos.x, pos.z) > WorldGenerator::GRASS_THRESHOLD {
            if pos.y == ground {
                BlockType::Grass
            } else {
                BlockType::Dirt
            }
        } else {
            BlockType::Sand
        }
    }

    /// Classifies a cell including decorations.
    ///
    /// A cell sitting on grass may become a flower; otherwise this is
    /// [`WorldGenerator::raw_gen`]. The cell below is looked up with no
    /// lower bound on Y.
    #[must_use]
    pub fn base_gen(&self, pos: Position) -> BlockType {
        if self.raw_gen(pos.down()) == BlockType::Grass
            && self.sample(Layer::FLOWERS, pos.x, pos.z) > WorldGenerator::FLOWER_THRESHOLD
        {
            return BlockType::Flower;
        }

        self.raw_gen(pos)
    }

    /// Generates the block at a position.
    ///
    /// The returned block is always clean.
    #[must_use]
    pub fn get_gen(&self, pos: Position) -> Block {
        Block::new(self.base_gen(pos))
    }
}
