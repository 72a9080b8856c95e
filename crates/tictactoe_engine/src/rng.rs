//! Seedable RNG for the opponent's random fallback.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// RNG owned by one engine. The seed is kept so a game can be reproduced.
#[derive(Debug, Clone)]
pub struct MoveRng {
    rng: StdRng,
    seed: u64,
}

impl MoveRng {
    /// Creates an RNG from a fixed seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates an RNG from a freshly drawn seed.
    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    /// The seed this RNG started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `[0, upper)`. `upper` must be non-zero.
    pub fn index_below(&mut self, upper: usize) -> usize {
        self.rng.random_range(0..upper)
    }
}
