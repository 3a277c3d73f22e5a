//! Pluggable randomness for growth counts and path selection

use rand::{Rng, SeedableRng, rngs::StdRng};
use std::ops::Range;

/// Uniform random choices used by the generator
///
/// Implement this to script generation in tests or to share an engine RNG.
pub trait RandomSource {
    /// Uniform integer in `range`; an empty range yields `range.start`
    fn range(&mut self, range: Range<usize>) -> usize;

    /// Uniform element of `items`, or `None` when empty
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.range(0..items.len()))
    }
}

/// Seeded random selector for reproducible generation
#[derive(Debug, Clone)]
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for RandomSelector {
    fn range(&mut self, range: Range<usize>) -> usize {
        if range.is_empty() {
            return range.start;
        }
        self.rng.random_range(range)
    }
}
