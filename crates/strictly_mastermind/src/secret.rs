//! Secret code generation.

use crate::error::MastermindError;
use crate::types::{Code, Peg};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Draws secret codes from an injected random source.
///
/// Each peg is drawn independently and uniformly from `1..=colors`,
/// so duplicates are allowed and expected.
#[derive(Debug, Clone)]
pub struct SecretGenerator<R = StdRng> {
    rng: R,
}

impl SecretGenerator<StdRng> {
    /// Creates a generator seeded from the operating system.
    #[instrument]
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Creates a deterministic generator, for tests and replays.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SecretGenerator<R> {
    /// Wraps an existing random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draws a code of `pins` pegs over a palette of `colors`.
    ///
    /// # Errors
    ///
    /// Returns [`MastermindError::InvalidConfiguration`] if either count is zero.
    #[instrument(skip(self))]
    pub fn make_code(&mut self, pins: usize, colors: u8) -> Result<Code, MastermindError> {
        if pins == 0 {
            return Err(MastermindError::invalid_configuration(
                "number of pins must be positive",
            ));
        }
        if colors == 0 {
            return Err(MastermindError::invalid_configuration(
                "number of colors must be positive",
            ));
        }

        let code: Code = (0..pins)
            .map(|_| Peg::from(self.rng.random_range(1..=colors)))
            .collect();
        debug!(secret = %code, "Secret generated");
        Ok(code)
    }
}
