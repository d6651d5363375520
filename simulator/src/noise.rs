//! White noise generation for simulated photometry.
//!
//! Photometric noise is modeled as independent Gaussian draws per exposure,
//! in the same relative-flux units as the light curve. Generators take the
//! random source from the caller so a seeded RNG reproduces a light curve
//! exactly.

use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, RngCore, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::error::SimulationError;

/// Zero-mean Gaussian white noise with a fixed standard deviation.
#[derive(Debug, Clone, Copy)]
pub struct WhiteNoise {
    sigma: f64,
    distribution: Normal<f64>,
}

impl WhiteNoise {
    /// Create a noise model with standard deviation `sigma`.
    ///
    /// # Returns
    /// * `Err(SimulationError::InvalidConfiguration)` if `sigma` is negative
    ///   or not finite
    pub fn new(sigma: f64) -> Result<Self, SimulationError> {
        if !sigma.is_finite() {
            return Err(SimulationError::InvalidConfiguration(format!(
                "white noise sigma must be finite, got {sigma}"
            )));
        }
        // Normal::new accepts negative standard deviations in rand_distr 0.4
        if sigma < 0.0 {
            return Err(SimulationError::InvalidConfiguration(format!(
                "white noise sigma must be non-negative, got {sigma}"
            )));
        }
        let distribution = Normal::new(0.0, sigma).map_err(|e| {
            SimulationError::InvalidConfiguration(format!("white noise sigma {sigma}: {e}"))
        })?;
        Ok(Self {
            sigma,
            distribution,
        })
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Draw one independent noise value per sample.
    pub fn sample<R: Rng + ?Sized>(&self, len: usize, rng: &mut R) -> Array1<f64> {
        Array1::from_shape_fn(len, |_| self.distribution.sample(rng))
    }
}

/// Seeded random source, falling back to a fresh seed from the thread RNG
pub fn seeded_rng(rng_seed: Option<u64>) -> StdRng {
    let seed = rng_seed.unwrap_or(thread_rng().next_u64());
    StdRng::seed_from_u64(seed)
}
