//! # Simplex Noise Implementation
//!
//! Seeded, deterministic gradient noise in two and three dimensions.
//!
//! ## Determinism Guarantee
//!
//! Given the same `WorldSeed`, this implementation will produce
//! **exactly** the same values on any platform, any time. The permutation
//! shuffle uses 64-bit integer arithmetic only, so pointer width never
//! leaks into the table.

/// World seed for deterministic generation.
///
/// All procedural generation derives from this seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WorldSeed(u64);

impl WorldSeed {
    /// Creates a new world seed.
    #[inline]
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Returns the raw seed value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Derives a sub-seed for a specific purpose.
    ///
    /// Uses a hash function to create independent streams from one seed.
    #[inline]
    #[must_use]
    pub const fn derive(self, purpose: u64) -> Self {
        let mut hash = self.0;
        hash ^= purpose;
        hash = hash.wrapping_mul(0x517c_c1b7_2722_0a95);
        hash ^= hash >> 32;
        Self(hash)
    }
}

impl Default for WorldSeed {
    fn default() -> Self {
        Self(0xDEAD_BEEF_CAFE_BABE)
    }
}

impl From<i64> for WorldSeed {
    /// Reinterprets a signed seed bit-for-bit.
    #[allow(clippy::cast_sign_loss)]
    fn from(seed: i64) -> Self {
        Self(seed as u64)
    }
}

/// A continuous, seeded scalar field.
///
/// Implementations return values in approximately [-1, 1], vary smoothly
/// between nearby coordinates and are pure functions of their inputs.
pub trait NoiseSource: Send + Sync {
    /// Samples the field at a 2D coordinate.
    fn sample_2d(&self, x: f64, y: f64) -> f64;

    /// Samples the field at a 3D coordinate.
    fn sample_3d(&self, x: f64, y: f64, z: f64) -> f64;
}

/// Purpose tag used to derive the permutation stream from the world seed.
const PERMUTATION_STREAM: u64 = 0x6d69_6e65_6765_6e00;

/// Pre-computed permutation table for noise.
///
/// This is computed once from the seed and reused.
struct PermutationTable {
    /// 512-entry permutation table (256 entries, doubled for overflow handling).
    perm: [u8; 512],
}

impl PermutationTable {
    /// 12 gradient vectors for 2D simplex.
    const GRAD2: [[i8; 2]; 12] = [
        [1, 0], [1, 1], [0, 1], [-1, 1],
        [-1, 0], [-1, -1], [0, -1], [1, -1],
        [1, 0], [0, 1], [-1, 0], [0, -1],
    ];

    /// 12 cube-edge gradient vectors for 3D simplex.
    const GRAD3: [[i8; 3]; 12] = [
        [1, 1, 0], [-1, 1, 0], [1, -1, 0], [-1, -1, 0],
        [1, 0, 1], [-1, 0, 1], [1, 0, -1], [-1, 0, -1],
        [0, 1, 1], [0, -1, 1], [0, 1, -1], [0, -1, -1],
    ];

    /// Creates a new permutation table from a seed.
    #[allow(clippy::cast_possible_truncation)]
    fn new(seed: WorldSeed) -> Self {
        let mut perm = [0u8; 512];

        for (i, slot) in perm.iter_mut().take(256).enumerate() {
            *slot = i as u8;
        }

        // xorshift64 is stuck at zero, so never start there
        let mut rng_state = seed.derive(PERMUTATION_STREAM).value();
        if rng_state == 0 {
            rng_state = WorldSeed::default().value();
        }

        // Fisher-Yates shuffle
        for i in (1..256usize).rev() {
            rng_state ^= rng_state << 13;
            rng_state ^= rng_state >> 7;
            rng_state ^= rng_state << 17;

            let j = (rng_state % (i as u64 + 1)) as usize;
            perm.swap(i, j);
        }

        // Double the table to avoid index wrapping
        perm.copy_within(0..256, 256);

        Self { perm }
    }

    /// Gets a permutation value (with automatic wrapping).
    #[inline]
    fn get(&self, index: usize) -> usize {
        self.perm[index & 511] as usize
    }

    #[inline]
    fn gradient_2d(hash: usize) -> [i8; 2] {
        Self::GRAD2[hash % 12]
    }

    #[inline]
    fn gradient_3d(hash: usize) -> [i8; 3] {
        Self::GRAD3[hash % 12]
    }
}

/// Simplex noise generator.
///
/// Produces smooth, continuous noise values in the range [-1, 1].
///
/// # Performance
///
/// - O(1) per sample
/// - No allocations
///
/// # Example
///
/// ```rust
/// use minegen_worldgen::{NoiseSource, SimplexNoise, WorldSeed};
///
/// let noise = SimplexNoise::new(WorldSeed::new(42));
/// let value = noise.sample_2d(100.5, 200.3);
/// assert!((-1.0..=1.0).contains(&value));
/// ```
pub struct SimplexNoise {
    /// The permutation table.
    perm_table: PermutationTable,
}

impl SimplexNoise {
    /// Skewing factor for 2D simplex grid.
    const F2: f64 = 0.366_025_403_784_439; // (sqrt(3) - 1) / 2
    /// Unskewing factor for 2D simplex grid.
    const G2: f64 = 0.211_324_865_405_187; // (3 - sqrt(3)) / 6
    /// Skewing factor for 3D simplex grid.
    const F3: f64 = 1.0 / 3.0;
    /// Unskewing factor for 3D simplex grid.
    const G3: f64 = 1.0 / 6.0;

    /// Creates a new simplex noise generator from a seed.
    #[must_use]
    pub fn new(seed: WorldSeed) -> Self {
        Self {
            perm_table: PermutationTable::new(seed),
        }
    }

    /// Calculates the contribution from one corner of a 2D simplex.
    #[inline]
    fn contribution_2d(x: f64, y: f64, hash: usize) -> f64 {
        let t = 0.5 - x * x - y * y;
        if t < 0.0 {
            0.0
        } else {
            let grad = PermutationTable::gradient_2d(hash);
            let t2 = t * t;
            t2 * t2 * (x * f64::from(grad[0]) + y * f64::from(grad[1]))
        }
    }

    /// Calculates the contribution from one corner of a 3D simplex.
    #[inline]
    fn contribution_3d(x: f64, y: f64, z: f64, hash: usize) -> f64 {
        let t = 0.6 - x * x - y * y - z * z;
        if t < 0.0 {
            0.0
        } else {
            let grad = PermutationTable::gradient_3d(hash);
            let t2 = t * t;
            t2 * t2 * (x * f64::from(grad[0]) + y * f64::from(grad[1]) + z * f64::from(grad[2]))
        }
    }
}

impl NoiseSource for SimplexNoise {
    #[allow(clippy::cast_precision_loss, clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    fn sample_2d(&self, x: f64, y: f64) -> f64 {
        // Skew input coordinates to simplex grid
        let skew = (x + y) * Self::F2;
        let i = fast_floor(x + skew);
        let j = fast_floor(y + skew);

        // Unskew to get first corner in simplex
        let unskew = i.wrapping_add(j) as f64 * Self::G2;
        let x0 = x - (i as f64 - unskew);
        let y0 = y - (j as f64 - unskew);

        // Upper or lower triangle
        let (i1, j1): (u8, u8) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - f64::from(i1) + Self::G2;
        let y1 = y0 - f64::from(j1) + Self::G2;
        let x2 = x0 - 1.0 + 2.0 * Self::G2;
        let y2 = y0 - 1.0 + 2.0 * Self::G2;

        let ii = (i & 255) as usize;
        let jj = (j & 255) as usize;
        let p = &self.perm_table;

        let gi0 = p.get(ii + p.get(jj));
        let gi1 = p.get(ii + usize::from(i1) + p.get(jj + usize::from(j1)));
        let gi2 = p.get(ii + 1 + p.get(jj + 1));

        let n0 = Self::contribution_2d(x0, y0, gi0);
        let n1 = Self::contribution_2d(x1, y1, gi1);
        let n2 = Self::contribution_2d(x2, y2, gi2);

        // The magic number 70.0 normalizes the output to [-1, 1]
        70.0 * (n0 + n1 + n2)
    }

    #[allow(clippy::cast_precision_loss, clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    fn sample_3d(&self, x: f64, y: f64, z: f64) -> f64 {
        let skew = (x + y + z) * Self::F3;
        let i = fast_floor(x + skew);
        let j = fast_floor(y + skew);
        let k = fast_floor(z + skew);

        let unskew = i.wrapping_add(j).wrapping_add(k) as f64 * Self::G3;
        let x0 = x - (i as f64 - unskew);
        let y0 = y - (j as f64 - unskew);
        let z0 = z - (k as f64 - unskew);

        // Which of the six tetrahedra we're in
        let ((i1, j1, k1), (i2, j2, k2)): ((u8, u8, u8), (u8, u8, u8)) = if x0 >= y0 {
            if y0 >= z0 {
                ((1, 0, 0), (1, 1, 0))
            } else if x0 >= z0 {
                ((1, 0, 0), (1, 0, 1))
            } else {
                ((0, 0, 1), (1, 0, 1))
            }
        } else if y0 < z0 {
            ((0, 0, 1), (0, 1, 1))
        } else if x0 < z0 {
            ((0, 1, 0), (0, 1, 1))
        } else {
            ((0, 1, 0), (1, 1, 0))
        };

        let x1 = x0 - f64::from(i1) + Self::G3;
        let y1 = y0 - f64::from(j1) + Self::G3;
        let z1 = z0 - f64::from(k1) + Self::G3;
        let x2 = x0 - f64::from(i2) + 2.0 * Self::G3;
        let y2 = y0 - f64::from(j2) + 2.0 * Self::G3;
        let z2 = z0 - f64::from(k2) + 2.0 * Self::G3;
        let x3 = x0 - 1.0 + 3.0 * Self::G3;
        let y3 = y0 - 1.0 + 3.0 * Self::G3;
        let z3 = z0 - 1.0 + 3.0 * Self::G3;

        let ii = (i & 255) as usize;
        let jj = (j & 255) as usize;
        let kk = (k & 255) as usize;
        let p = &self.perm_table;
        let corner = |di: u8, dj: u8, dk: u8| {
            p.get(ii + usize::from(di) + p.get(jj + usize::from(dj) + p.get(kk + usize::from(dk))))
        };

        let n0 = Self::contribution_3d(x0, y0, z0, corner(0, 0, 0));
        let n1 = Self::contribution_3d(x1, y1, z1, corner(i1, j1, k1));
        let n2 = Self::contribution_3d(x2, y2, z2, corner(i2, j2, k2));
        let n3 = Self::contribution_3d(x3, y3, z3, corner(1, 1, 1));

        32.0 * (n0 + n1 + n2 + n3)
    }
}

/// Fast floor function.
///
/// Saturates for coordinates beyond the `i64` range.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn fast_floor(x: f64) -> i64 {
    let xi = x as i64;
    if x < xi as f64 { xi.wrapping_sub(1) } else { xi }
}
