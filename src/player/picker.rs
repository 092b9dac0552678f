//! Random video selection
//!
//! The player asks a `VideoPicker` to choose among the playable ids, so
//! tests can swap the RNG for something deterministic.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses one index out of `count` candidates
pub trait VideoPicker {
    /// Return an index in `0..count`. Never called with `count == 0`.
    fn pick(&mut self, count: usize) -> usize;
}

/// Uniform picker backed by `rand`
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    /// Picker seeded from the operating system
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible picker
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoPicker for RandomPicker {
    fn pick(&mut self, count: usize) -> usize {
        self.rng.gen_range(0..count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_in_range() {
        let mut picker = RandomPicker::new();
        for count in 1..20 {
            assert!(picker.pick(count) < count);
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = RandomPicker::seeded(42);
        let mut b = RandomPicker::seeded(42);
        let left: Vec<usize> = (0..10).map(|_| a.pick(100)).collect();
        let right: Vec<usize> = (0..10).map(|_| b.pick(100)).collect();
        assert_eq!(left, right);
    }
}
