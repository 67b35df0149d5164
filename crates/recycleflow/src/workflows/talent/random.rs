use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform draws for the roster generator and reassessments.
///
/// Everything random in the desk goes through this trait so tests can replay
/// fixed sequences.
pub trait RandomSource: Send {
    /// Uniform integer in `0..upper`. `upper` is never zero.
    fn next_below(&mut self, upper: u32) -> u32;

    /// Uniform integer within the inclusive range.
    fn in_range(&mut self, range: RangeInclusive<u32>) -> u32 {
        let (low, high) = range.into_inner();
        low + self.next_below(high - low + 1)
    }

    /// Uniform pick from a non-empty slice.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T
    where
        Self: Sized,
    {
        let index = self.next_below(items.len() as u32) as usize;
        &items[index]
    }
}

/// `StdRng`-backed source, seeded for reproducible rosters or from entropy.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::from_seed)
    }
}

impl RandomSource for SeededRandom {
    fn next_below(&mut self, upper: u32) -> u32 {
        self.rng.gen_range(0..upper)
    }
}
