//! Pluggable random sources for obstacle generation

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of uniform draws in `[0, 1)`
pub trait RandomSource {
    fn next(&mut self) -> f32;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next(&mut self) -> f32 {
        (**self).next()
    }
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    fn next(&mut self) -> f32 {
        (**self).next()
    }
}

/// Seeded PCG generator; the same seed yields the same obstacle course
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: u64,
    rng: Pcg32,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn next(&mut self) -> f32 {
        self.rng.random::<f32>()
    }
}

/// Replays a fixed list of draws, cycling when exhausted
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f32>,
    cursor: usize,
}

impl ScriptedRandom {
    /// Values are clamped into `[0, 1)`; an empty list always draws 0.
    pub fn new(values: impl IntoIterator<Item = f32>) -> Self {
        let values = values
            .into_iter()
            .map(|v| v.clamp(0.0, 1.0 - f32::EPSILON))
            .collect();
        Self { values, cursor: 0 }
    }

    /// Always draws the same value
    pub fn constant(value: f32) -> Self {
        Self::new([value])
    }
}

impl RandomSource for ScriptedRandom {
    fn next(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor = self.cursor.wrapping_add(1);
        value
    }
}
