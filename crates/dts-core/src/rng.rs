//! Simulation-level RNG: the random interval source.
//!
//! A run draws from exactly one `SimRng`, always in the same order (people,
//! then gap, per generated arrival; then one check delay per admission), so
//! the same seed reproduces the same run bit for bit.

use rand::distributions::uniform::SampleUniform;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::UniformRange;

/// Seeded RNG used by the engine for every random draw of a run.
///
/// Not shared across runs or threads: each engine owns its own.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Draw uniformly from the closed range `[range.min, range.max]`.
    ///
    /// A degenerate range (`min == max`) always yields `min`, which is how
    /// tests pin delays to exact values.
    #[inline]
    pub fn sample<T>(&mut self, range: &UniformRange<T>) -> T
    where
        T: SampleUniform + PartialOrd + Copy,
    {
        self.0.gen_range(range.min..=range.max)
    }

    /// Uniform integer in `[low, high]`.
    ///
    /// # Panics
    /// Panics if `low > high`.
    #[inline]
    pub fn uniform_int(&mut self, low: u64, high: u64) -> u64 {
        self.sample(&UniformRange::new(low, high))
    }

    /// Uniform float in `[low, high)`; returns `low` when the range is empty.
    #[inline]
    pub fn uniform_float(&mut self, low: f64, high: f64) -> f64 {
        if low >= high {
            return low;
        }
        self.0.gen_range(low..high)
    }
}
