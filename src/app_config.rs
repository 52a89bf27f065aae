//! Runtime configuration read from the environment
//!
//! - `COSMATH_SEED`: fixed question seed (u64) for reproducible runs
//! - `RUST_LOG`: log filter, handled by `env_logger`

use log::{info, warn};

/// Environment variable holding a fixed RNG seed
pub const SEED_VAR: &str = "COSMATH_SEED";

/// Where the session seed came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedSource {
    Environment,
    Entropy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: u64,
    pub seed_source: SeedSource,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_seed_value(std::env::var(SEED_VAR).ok().as_deref())
    }

    /// Resolve a seed from an optional raw value, falling back to entropy
    pub fn from_seed_value(raw: Option<&str>) -> Self {
        if let Some(raw) = raw {
            match raw.trim().parse::<u64>() {
                Ok(seed) => {
                    info!("Using seed {} from {}", seed, SEED_VAR);
                    return Self {
                        seed,
                        seed_source: SeedSource::Environment,
                    };
                }
                Err(err) => warn!("Ignoring {}={:?}: {}", SEED_VAR, raw, err),
            }
        }
        Self {
            seed: rand::random(),
            seed_source: SeedSource::Entropy,
        }
    }
}
