//! Seeded RNG state carried by the session

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// RNG state wrapper for serialization and injection in tests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    /// Seed the generator was created from
    pub seed: u64,
    rng: Pcg32,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Generator positioned after every draw made so far
    pub fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }
}
