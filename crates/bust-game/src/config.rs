//! Configuration for a play session.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for a session.
///
/// The rules themselves are fixed (see [`crate::rules`]); the only knob is
/// the seed of the draw generator.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// RNG seed for a reproducible draw sequence. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the random generator described by this configuration.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
