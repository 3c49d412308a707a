//! Injectable randomness for the start-column draw.

use rand::rngs::{StdRng, ThreadRng};
use rand::Rng;

/// Source of the uniformly drawn start column.
pub trait RandomSource {
    /// A value in `[0, upper)`. Callers guarantee `upper > 0`.
    fn below(&mut self, upper: usize) -> usize;
}

impl RandomSource for ThreadRng {
    fn below(&mut self, upper: usize) -> usize {
        self.gen_range(0..upper)
    }
}

impl RandomSource for StdRng {
    fn below(&mut self, upper: usize) -> usize {
        self.gen_range(0..upper)
    }
}

/// Always answers the same value, clamped into range. Used to pin the start
/// column in tests and reproducible runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedSource(pub usize);

impl RandomSource for FixedSource {
    fn below(&mut self, upper: usize) -> usize {
        self.0.min(upper - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_fixed_source_clamps() {
        assert_eq!(FixedSource(0).below(5), 0);
        assert_eq!(FixedSource(9).below(5), 4);
    }

    #[test]
    fn test_seeded_source_in_range_and_reproducible() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let x = a.below(10);
            assert!(x < 10);
            assert_eq!(x, b.below(10));
        }
    }
}
