//! # Fractal Sampling
//!
//! Sums octaves of a noise source for natural-looking detail.
//!
//! The base octave is always sampled at frequency 1 and amplitude 1, then
//! `octaves` further layers are added on top. The sum is normalised by the
//! total amplitude and remapped with `(1 + n) / 2`.
//!
//! ## Range
//!
//! The result is **not clamped**. For ordinary schedules (`0 < persistence`)
//! it stays in [0, 1], but a negative persistence can shrink the amplitude
//! total below the magnitude of the sum and push the output outside that
//! range. Terrain statistics depend on this exact mapping, so it is kept.

use crate::noise::NoiseSource;

/// Fractal (octave-summed) sampler over a single noise source.
pub struct FractalSampler<N> {
    noise: N,
}

impl<N: NoiseSource> FractalSampler<N> {
    /// Wraps a noise source.
    #[must_use]
    pub const fn new(noise: N) -> Self {
        Self { noise }
    }

    /// The underlying noise source.
    #[must_use]
    pub const fn noise(&self) -> &N {
        &self.noise
    }

    /// Samples 2D fractal noise.
    ///
    /// # Arguments
    ///
    /// * `x`, `y` - Coordinates
    /// * `octaves` - Number of layers added on top of the base octave
    /// * `persistence` - Amplitude multiplier per octave (typically < 1)
    /// * `lacunarity` - Frequency multiplier per octave (typically > 1)
    ///
    /// # Returns
    ///
    /// A value normally in [0, 1]; see the module docs for when it is not.
    #[must_use]
    pub fn sample_2d(&self, x: f64, y: f64, octaves: u32, persistence: f64, lacunarity: f64) -> f64 {
        let mut frequency = 1.0;
        let mut amplitude = 1.0;
        let mut max_amplitude = 1.0;
        let mut total = self.noise.sample_2d(x, y);

        for _ in 0..octaves {
            frequency *= lacunarity;
            amplitude *= persistence;
            max_amplitude += amplitude;
            total += self.noise.sample_2d(x * frequency, y * frequency) * amplitude;
        }

        (1.0 + total / max_amplitude) / 2.0
    }

    /// Samples 3D fractal noise.
    ///
    /// Same schedule as [`FractalSampler::sample_2d`], one dimension up.
    #[must_use]
    pub fn sample_3d(
        &self,
        x: f64,
        y: f64,
        z: f64,
        octaves: u32,
        persistence: f64,
        lacunarity: f64,
    ) -> f64 {
        let mut frequency = 1.0;
        let mut amplitude = 1.0;
        let mut max_amplitude = 1.0;
        let mut total = self.noise.sample_3d(x, y, z);

        for _ in 0..octaves {
            frequency *= lacunarity;
            amplitude *= persistence;
            max_amplitude += amplitude;
            total += self.noise.sample_3d(x * frequency, y * frequency, z * frequency) * amplitude;
        }

        (1.0 + total / max_amplitude) / 2.0
    }
}
