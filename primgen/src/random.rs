//! Deterministic seeded float sampler
//!
//! Every generator pulls its randomness from a [`RandomSource`]. The stream is
//! fully specified (engine, stream constant and float mapping) so that output
//! is bit-identical across runs, platforms and conforming implementations.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;

/// PCG stream selector shared by every source
///
/// This is the default increment published with the PCG reference code.
pub const DEFAULT_STREAM: u64 = 0x0a02_bdbf_7bb3_c0a7;

/// 2^-24, the spacing of the unit grid a single draw lands on
const UNIT_SCALE: f32 = 1.0 / 16_777_216.0;

/// Seeded uniform float sampler
///
/// Draws are stateful and order-dependent. One engine word is consumed per
/// [`uniform`](Self::uniform) call, so two sources seeded identically and
/// queried with the same sequence of ranges return the same bits.
#[derive(Clone, Debug)]
pub struct RandomSource {
    rng: Pcg32,
    seed: u64,
    draws: u64,
}

impl RandomSource {
    /// Create a source positioned at the start of `seed`'s stream
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::new(seed, DEFAULT_STREAM),
            seed,
            draws: 0,
        }
    }

    /// Restart the stream from `seed`
    pub fn seed(&mut self, seed: u64) {
        *self = Self::new(seed);
    }

    /// Seed the stream was last started from
    pub fn current_seed(&self) -> u64 {
        self.seed
    }

    /// Number of draws taken since the last seed
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Sample a float in `[min, max]`
    ///
    /// The top 24 bits of one engine word select one of 2^24 evenly spaced
    /// steps above `min`, clamped so the top step never exceeds `max`.
    /// `min > max` is not supported; `min == max` returns `min`.
    pub fn uniform(&mut self, min: f32, max: f32) -> f32 {
        debug_assert!(min <= max, "uniform: min ({min}) > max ({max})");
        let word = self.rng.next_u32();
        self.draws += 1;
        map_word(word, min, max)
    }

    /// Sample three components in x, y, z order from the same range
    pub fn uniform_vec3(&mut self, min: f32, max: f32) -> glam::Vec3 {
        let x = self.uniform(min, max);
        let y = self.uniform(min, max);
        let z = self.uniform(min, max);
        glam::Vec3::new(x, y, z)
    }
}

/// Map one engine word onto `[min, max]`.
///
/// Rounding in `min + span * 1.0` can overshoot `max` when `min != 0`, so the
/// result is clamped.
fn map_word(word: u32, min: f32, max: f32) -> f32 {
    let unit = ((word >> 8) + 1) as f32 * UNIT_SCALE;
    (min + (max - min) * unit).min(max)
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new(0)
    }
}

impl SeedableRng for RandomSource {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}
