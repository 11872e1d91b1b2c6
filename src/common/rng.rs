//! Deterministic RNG for loot rolls.
//!
//! Seeded from `Tunables::loot_seed` so a replayed input/tick sequence yields
//! the same drops.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(Resource, Debug, Clone)]
pub struct LootRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl LootRng {
    pub fn new(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed), seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// `true` with probability `p`, clamped to [0, 1].
    pub fn roll(&mut self, p: f64) -> bool {
        self.rng.gen_bool(p.clamp(0.0, 1.0))
    }
}
