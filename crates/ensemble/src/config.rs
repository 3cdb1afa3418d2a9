//! Configuration for frequency-noise ensembles.

use crate::error::EnsembleError;

/// Configuration for a Monte Carlo frequency-noise ensemble.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use ramsey_ensemble::NoiseConfig;
///
/// let config = NoiseConfig::new().with_sigma_frac(0.03).with_n_draws(500);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct NoiseConfig {
    /// Standard deviation of the frequency jitter, as a fraction of the
    /// base frequency.
    sigma_frac: f64,
    /// Number of Monte Carlo draws.
    n_draws: usize,
}

impl NoiseConfig {
    /// Creates a new configuration.
    ///
    /// Defaults: `sigma_frac = 0.03` (3% readout jitter), `n_draws = 1000`.
    pub fn new() -> Self {
        Self {
            sigma_frac: 0.03,
            n_draws: 1000,
        }
    }

    /// Sets the jitter standard deviation as a fraction of the base frequency.
    pub fn with_sigma_frac(mut self, sigma_frac: f64) -> Self {
        self.sigma_frac = sigma_frac;
        self
    }

    /// Sets the number of Monte Carlo draws.
    pub fn with_n_draws(mut self, n_draws: usize) -> Self {
        self.n_draws = n_draws;
        self
    }

    /// Returns the jitter fraction.
    pub fn sigma_frac(&self) -> f64 {
        self.sigma_frac
    }

    /// Returns the number of draws.
    pub fn n_draws(&self) -> usize {
        self.n_draws
    }

    /// Validates this configuration.
    ///
    /// Returns an error if `sigma_frac` is negative or non-finite, or
    /// `n_draws` is zero. `sigma_frac = 0` is the valid noise-free case.
    pub fn validate(&self) -> Result<(), EnsembleError> {
        if !self.sigma_frac.is_finite() || self.sigma_frac < 0.0 {
            return Err(EnsembleError::InvalidSigmaFrac {
                sigma_frac: self.sigma_frac,
            });
        }
        if self.n_draws == 0 {
            return Err(EnsembleError::InvalidDrawCount {
                n_draws: self.n_draws,
            });
        }
        Ok(())
    }
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self::new()
    }
}
