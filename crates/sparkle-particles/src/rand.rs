//! Particle randomness on top of a seedable `StdRng`

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub struct ParticleRng {
    inner: StdRng,
}

impl ParticleRng {
    /// Deterministic stream for a given seed
    pub fn new(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Stream seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
        }
    }

    /// Returns a float in [0, 1)
    pub fn next_f32(&mut self) -> f32 {
        self.inner.gen::<f32>()
    }

    /// Returns a float in [min, max).
    ///
    /// Reversed or non-finite bounds are not rejected: the result is
    /// `min + u * (max - min)` whatever that evaluates to.
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }

    /// Returns a float in [-half_width, half_width)
    pub fn symmetric(&mut self, half_width: f32) -> f32 {
        self.range(-half_width, half_width)
    }

    /// Uniform pick from `items`; `None` when empty
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.inner)
    }
}
