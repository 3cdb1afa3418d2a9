//! Grid and sweep configuration.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use ramsey_ensemble::NoiseConfig;
use ramsey_signal::SpectrumConfig;

use crate::error::SweepError;

/// `n` evenly spaced values from `start` to `end` inclusive.
///
/// The last value is pinned to `end` exactly so that inclusive range
/// checks never trip on accumulated rounding. `n = 1` returns just
/// `start`; `n = 0` returns an empty vector.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + i as f64 * step })
                .collect()
        }
    }
}

/// The four parameter axes whose Cartesian product forms the sweep grid.
#[derive(Debug, Clone)]
pub struct GridConfig {
    /// Spin sizes J.
    spin_sizes: Vec<u32>,
    /// Squeezing strengths chi, each in `[0, pi/2)`.
    squeezings: Vec<f64>,
    /// First phase angles, each in `[0, 2*pi]`.
    alphas: Vec<f64>,
    /// Second phase angles, each in `[0, pi]`.
    betas: Vec<f64>,
}

impl GridConfig {
    /// Creates a grid from its four axes.
    pub fn new(
        spin_sizes: Vec<u32>,
        squeezings: Vec<f64>,
        alphas: Vec<f64>,
        betas: Vec<f64>,
    ) -> Self {
        Self {
            spin_sizes,
            squeezings,
            alphas,
            betas,
        }
    }

    /// Returns the spin-size axis.
    pub fn spin_sizes(&self) -> &[u32] {
        &self.spin_sizes
    }

    /// Returns the squeezing axis.
    pub fn squeezings(&self) -> &[f64] {
        &self.squeezings
    }

    /// Returns the alpha axis.
    pub fn alphas(&self) -> &[f64] {
        &self.alphas
    }

    /// Returns the beta axis.
    pub fn betas(&self) -> &[f64] {
        &self.betas
    }

    /// Returns the total number of grid combinations.
    pub fn n_combinations(&self) -> usize {
        self.spin_sizes.len() * self.squeezings.len() * self.alphas.len() * self.betas.len()
    }

    /// Validates this grid.
    ///
    /// Returns an error if any axis is empty, a spin size is zero, or a
    /// value lies outside its physical range (`chi` in `[0, pi/2)`,
    /// `alpha` in `[0, 2*pi]`, `beta` in `[0, pi]`).
    pub fn validate(&self) -> Result<(), SweepError> {
        if self.spin_sizes.is_empty() {
            return Err(SweepError::EmptyAxis { axis: "spin_sizes" });
        }
        if self.squeezings.is_empty() {
            return Err(SweepError::EmptyAxis { axis: "squeezings" });
        }
        if self.alphas.is_empty() {
            return Err(SweepError::EmptyAxis { axis: "alphas" });
        }
        if self.betas.is_empty() {
            return Err(SweepError::EmptyAxis { axis: "betas" });
        }
        if self.spin_sizes.iter().any(|&j| j == 0) {
            return Err(SweepError::InvalidSpinSize);
        }
        for &chi in &self.squeezings {
            if !chi.is_finite() || !(0.0..FRAC_PI_2).contains(&chi) {
                return Err(SweepError::ParamOutOfRange {
                    name: "squeezing",
                    value: chi,
                });
            }
        }
        for &alpha in &self.alphas {
            if !alpha.is_finite() || !(0.0..=TAU).contains(&alpha) {
                return Err(SweepError::ParamOutOfRange {
                    name: "alpha",
                    value: alpha,
                });
            }
        }
        for &beta in &self.betas {
            if !beta.is_finite() || !(0.0..=PI).contains(&beta) {
                return Err(SweepError::ParamOutOfRange {
                    name: "beta",
                    value: beta,
                });
            }
        }
        Ok(())
    }
}

/// Everything a single combination needs besides its parameter tuple:
/// base frequency, timing, noise model, and the global RNG seed.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Nominal oscillation frequency being estimated.
    base_omega: f64,
    /// Timing and padding of the spectral estimator.
    spectrum: SpectrumConfig,
    /// Monte Carlo noise model.
    noise: NoiseConfig,
    /// Global seed; per-combination streams are derived from it.
    seed: u64,
}

impl SweepConfig {
    /// Creates a sweep configuration for the given base frequency.
    ///
    /// The spectral estimator's sampling clock is tied to `base_omega`.
    /// Defaults: default [`SpectrumConfig`] timing, default [`NoiseConfig`],
    /// `seed = 0`.
    pub fn new(base_omega: f64) -> Self {
        Self {
            base_omega,
            spectrum: SpectrumConfig::new(base_omega),
            noise: NoiseConfig::new(),
            seed: 0,
        }
    }

    /// Sets the spectral estimator configuration.
    pub fn with_spectrum(mut self, spectrum: SpectrumConfig) -> Self {
        self.spectrum = spectrum;
        self
    }

    /// Sets the noise configuration.
    pub fn with_noise(mut self, noise: NoiseConfig) -> Self {
        self.noise = noise;
        self
    }

    /// Sets the global RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Returns the base frequency.
    pub fn base_omega(&self) -> f64 {
        self.base_omega
    }

    /// Returns the spectral estimator configuration.
    pub fn spectrum(&self) -> &SpectrumConfig {
        &self.spectrum
    }

    /// Returns the noise configuration.
    pub fn noise(&self) -> &NoiseConfig {
        &self.noise
    }

    /// Returns the global RNG seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Validates this configuration, cascading into the timing and noise
    /// configurations.
    pub fn validate(&self) -> Result<(), SweepError> {
        if !self.base_omega.is_finite() || self.base_omega <= 0.0 {
            return Err(SweepError::InvalidBaseOmega {
                base_omega: self.base_omega,
            });
        }
        self.spectrum
            .validate()
            .map_err(ramsey_ensemble::EnsembleError::from)?;
        self.noise.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn linspace_endpoints_inclusive() {
        let v = linspace(0.0, PI, 5);
        assert_eq!(v.len(), 5);
        assert_relative_eq!(v[0], 0.0);
        assert_relative_eq!(v[4], PI);
        assert_relative_eq!(v[2], PI / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn linspace_last_value_is_exact() {
        assert_eq!(*linspace(0.0, TAU, 8).last().unwrap(), TAU);
        assert_eq!(*linspace(0.0, PI, 7).last().unwrap(), PI);
    }

    #[test]
    fn linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
    }

    fn valid_grid() -> GridConfig {
        GridConfig::new(
            vec![10, 100],
            vec![0.0, 0.2],
            linspace(0.0, TAU, 4),
            linspace(0.0, PI, 3),
        )
    }

    #[test]
    fn grid_combination_count() {
        assert_eq!(valid_grid().n_combinations(), 2 * 2 * 4 * 3);
    }

    #[test]
    fn grid_validate_ok() {
        assert!(valid_grid().validate().is_ok());
    }

    #[test]
    fn grid_rejects_empty_axes() {
        let g = GridConfig::new(vec![], vec![0.0], vec![0.0], vec![0.0]);
        assert!(matches!(
            g.validate().unwrap_err(),
            SweepError::EmptyAxis { axis: "spin_sizes" }
        ));
    }

    #[test]
    fn grid_rejects_zero_spin() {
        let g = GridConfig::new(vec![0], vec![0.0], vec![0.0], vec![0.0]);
        assert!(matches!(g.validate().unwrap_err(), SweepError::InvalidSpinSize));
    }

    #[test]
    fn grid_rejects_squeezing_at_half_pi() {
        // chi = pi/2 collapses the contrast; the range is half-open.
        let g = GridConfig::new(vec![1], vec![FRAC_PI_2], vec![0.0], vec![0.0]);
        assert!(matches!(
            g.validate().unwrap_err(),
            SweepError::ParamOutOfRange { name: "squeezing", .. }
        ));
    }

    #[test]
    fn grid_rejects_out_of_range_angles() {
        let g = GridConfig::new(vec![1], vec![0.0], vec![7.0], vec![0.0]);
        assert!(matches!(
            g.validate().unwrap_err(),
            SweepError::ParamOutOfRange { name: "alpha", .. }
        ));
        let g = GridConfig::new(vec![1], vec![0.0], vec![0.0], vec![-0.1]);
        assert!(matches!(
            g.validate().unwrap_err(),
            SweepError::ParamOutOfRange { name: "beta", .. }
        ));
    }

    #[test]
    fn sweep_config_defaults_validate() {
        assert!(SweepConfig::new(1.0).validate().is_ok());
    }

    #[test]
    fn sweep_config_rejects_bad_base_omega() {
        for bad in [0.0, -2.0, f64::NAN] {
            assert!(matches!(
                SweepConfig::new(bad).validate().unwrap_err(),
                SweepError::InvalidBaseOmega { .. }
            ));
        }
    }

    #[test]
    fn sweep_config_cascades_validation() {
        let cfg = SweepConfig::new(1.0)
            .with_noise(NoiseConfig::new().with_n_draws(0));
        assert!(cfg.validate().is_err());
    }
}
