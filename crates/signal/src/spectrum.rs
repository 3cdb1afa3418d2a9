//! One-sided power spectrum estimation via windowed, zero-padded FFT.

use std::f64::consts::TAU;
use std::sync::Arc;

use num_complex::Complex;
use rustfft::{Fft, FftPlanner};

use crate::error::SignalError;
use crate::signal::{expectation, PhysicalParams};
use crate::window::blackman_harris;

/// Timing and padding configuration for spectral estimation.
///
/// The frequency axis of the resulting spectra depends only on this
/// configuration, never on the per-trial frequency draw, so callers may
/// reuse one axis across a whole noise ensemble.
///
/// # Example
///
/// ```
/// use ramsey_signal::SpectrumConfig;
///
/// let config = SpectrumConfig::new(1.0)
///     .with_n_periods(4.0)
///     .with_sample_count(256)
///     .with_pad_len(4096);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct SpectrumConfig {
    /// Number of oscillation periods spanned by the time grid.
    n_periods: f64,
    /// Number of time samples.
    sample_count: usize,
    /// Zero-padded FFT length (even).
    pad_len: usize,
    /// Nominal estimation frequency governing the sampling clock.
    est_omega: f64,
}

impl SpectrumConfig {
    /// Creates a configuration for the given estimation frequency.
    ///
    /// Defaults: `n_periods = 4.0`, `sample_count = 512`, `pad_len = 8192`.
    pub fn new(est_omega: f64) -> Self {
        Self {
            n_periods: 4.0,
            sample_count: 512,
            pad_len: 8192,
            est_omega,
        }
    }

    /// Sets the number of sampled periods.
    pub fn with_n_periods(mut self, n_periods: f64) -> Self {
        self.n_periods = n_periods;
        self
    }

    /// Sets the number of time samples.
    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    /// Sets the zero-padded FFT length.
    pub fn with_pad_len(mut self, pad_len: usize) -> Self {
        self.pad_len = pad_len;
        self
    }

    /// Returns the number of sampled periods.
    pub fn n_periods(&self) -> f64 {
        self.n_periods
    }

    /// Returns the number of time samples.
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Returns the zero-padded FFT length.
    pub fn pad_len(&self) -> usize {
        self.pad_len
    }

    /// Returns the nominal estimation frequency.
    pub fn est_omega(&self) -> f64 {
        self.est_omega
    }

    /// Time step of the sampling grid:
    /// `(n_periods / (sample_count - 1)) * (2*pi / est_omega)`.
    ///
    /// Meaningful only for configurations that pass [`Self::validate`];
    /// in particular `sample_count` must be at least 2.
    pub fn dt(&self) -> f64 {
        (self.n_periods / (self.sample_count - 1) as f64) * (TAU / self.est_omega)
    }

    /// Validates this configuration.
    ///
    /// Returns an error if the sample count is below 2, the pad length is
    /// odd or shorter than the sample count, or the estimation frequency or
    /// period count is non-finite / non-positive.
    pub fn validate(&self) -> Result<(), SignalError> {
        if self.sample_count < 2 {
            return Err(SignalError::InvalidSampleCount {
                sample_count: self.sample_count,
            });
        }
        if self.pad_len < self.sample_count {
            return Err(SignalError::PadTooShort {
                pad_len: self.pad_len,
                sample_count: self.sample_count,
            });
        }
        if self.pad_len % 2 != 0 {
            return Err(SignalError::OddPadLength {
                pad_len: self.pad_len,
            });
        }
        if !self.est_omega.is_finite() || self.est_omega <= 0.0 {
            return Err(SignalError::InvalidEstOmega {
                est_omega: self.est_omega,
            });
        }
        if !self.n_periods.is_finite() || self.n_periods <= 0.0 {
            return Err(SignalError::InvalidPeriods {
                n_periods: self.n_periods,
            });
        }
        Ok(())
    }
}

impl Default for SpectrumConfig {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// One-sided power spectrum: monotonically increasing angular frequencies
/// and the magnitude-squared FFT at each bin.
#[derive(Clone, Debug)]
pub struct PowerSpectrum {
    /// Angular frequency axis.
    freqs: Vec<f64>,
    /// Power (magnitude squared) per bin.
    powers: Vec<f64>,
}

impl PowerSpectrum {
    pub(crate) fn new(freqs: Vec<f64>, powers: Vec<f64>) -> Self {
        debug_assert_eq!(freqs.len(), powers.len());
        Self { freqs, powers }
    }

    /// Returns the angular frequency axis.
    pub fn freqs(&self) -> &[f64] {
        &self.freqs
    }

    /// Returns the power values.
    pub fn powers(&self) -> &[f64] {
        &self.powers
    }

    /// Returns the number of bins (`pad_len / 2`).
    pub fn len(&self) -> usize {
        self.freqs.len()
    }

    /// Returns true if the spectrum has no bins.
    pub fn is_empty(&self) -> bool {
        self.freqs.is_empty()
    }

    /// Consumes the spectrum, returning only the power values.
    pub fn into_powers(self) -> Vec<f64> {
        self.powers
    }
}

/// Shared one-sided frequency axis for the given configuration:
/// `freq[i] = i * 2*pi / ((pad_len - 1) * dt)` over the first `pad_len / 2` bins.
///
/// The configuration must pass [`SpectrumConfig::validate`];
/// [`SpectrumScratch::new`] checks this before building its axis.
pub fn frequency_axis(config: &SpectrumConfig) -> Vec<f64> {
    let step = TAU / ((config.pad_len - 1) as f64 * config.dt());
    (0..config.pad_len / 2).map(|i| i as f64 * step).collect()
}

/// Reusable state for spectrum estimation over a fixed configuration.
///
/// Holds the FFT plan, window, frequency axis, and scratch buffer so hot
/// loops (one call per noise draw) avoid per-call planning and allocation.
pub struct SpectrumScratch {
    fft: Arc<dyn Fft<f64>>,
    window: Vec<f64>,
    freqs: Vec<f64>,
    buf: Vec<Complex<f64>>,
    dt: f64,
    sample_count: usize,
    pad_len: usize,
}

impl SpectrumScratch {
    /// Validates the configuration and plans the FFT.
    pub fn new(config: &SpectrumConfig) -> Result<Self, SignalError> {
        config.validate()?;
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(config.pad_len);
        Ok(Self {
            fft,
            window: blackman_harris(config.sample_count),
            freqs: frequency_axis(config),
            buf: vec![Complex::new(0.0, 0.0); config.pad_len],
            dt: config.dt(),
            sample_count: config.sample_count,
            pad_len: config.pad_len,
        })
    }

    /// Returns the shared frequency axis.
    pub fn freqs(&self) -> &[f64] {
        &self.freqs
    }

    /// Estimates the one-sided power spectrum of the expectation-value
    /// signal oscillating at `omega`, sampled on the nominal clock.
    pub fn estimate(&mut self, params: &PhysicalParams, omega: f64) -> PowerSpectrum {
        for (i, slot) in self.buf.iter_mut().enumerate().take(self.sample_count) {
            let t = i as f64 * self.dt;
            *slot = Complex::new(expectation(params, omega, t) * self.window[i], 0.0);
        }
        for slot in self.buf.iter_mut().skip(self.sample_count) {
            *slot = Complex::new(0.0, 0.0);
        }

        self.fft.process(&mut self.buf);

        let powers: Vec<f64> = self.buf[..self.pad_len / 2]
            .iter()
            .map(|c| c.norm_sqr())
            .collect();
        PowerSpectrum::new(self.freqs.clone(), powers)
    }
}

/// One-shot spectrum estimation.
///
/// Equivalent to building a [`SpectrumScratch`] and estimating once; use
/// the scratch directly when estimating many spectra for one configuration.
///
/// # Errors
///
/// Returns [`SignalError`] when `config` fails validation.
pub fn estimate_spectrum(
    params: &PhysicalParams,
    omega: f64,
    config: &SpectrumConfig,
) -> Result<PowerSpectrum, SignalError> {
    let mut scratch = SpectrumScratch::new(config)?;
    Ok(scratch.estimate(params, omega))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn test_config() -> SpectrumConfig {
        SpectrumConfig::new(1.0)
            .with_n_periods(4.0)
            .with_sample_count(128)
            .with_pad_len(1024)
    }

    #[test]
    fn output_length_is_half_pad() {
        let params = PhysicalParams::new(10, 0.0, PI / 2.0, PI / 2.0);
        let spec = estimate_spectrum(&params, 1.0, &test_config()).unwrap();
        assert_eq!(spec.len(), 512);
        assert!(!spec.is_empty());
    }

    #[test]
    fn axis_strictly_increasing() {
        let axis = frequency_axis(&test_config());
        assert_eq!(axis[0], 0.0);
        for pair in axis.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn axis_independent_of_omega() {
        // Only the powers respond to the frequency draw.
        let params = PhysicalParams::new(10, 0.1, 0.5, 1.0);
        let config = test_config();
        let a = estimate_spectrum(&params, 1.0, &config).unwrap();
        let b = estimate_spectrum(&params, 1.37, &config).unwrap();
        assert_eq!(a.freqs(), b.freqs());
        assert_ne!(a.powers(), b.powers());
    }

    #[test]
    fn scratch_matches_one_shot() {
        let params = PhysicalParams::new(50, 0.2, 1.0, 1.0);
        let config = test_config();
        let mut scratch = SpectrumScratch::new(&config).unwrap();
        let a = scratch.estimate(&params, 1.1);
        let b = estimate_spectrum(&params, 1.1, &config).unwrap();
        assert_eq!(a.powers(), b.powers());
    }

    #[test]
    fn scratch_reuse_is_clean() {
        // A second estimate must not see residue from the first.
        let params = PhysicalParams::new(10, 0.0, 0.0, PI / 2.0);
        let config = test_config();
        let mut scratch = SpectrumScratch::new(&config).unwrap();
        scratch.estimate(&params, 3.0);
        let again = scratch.estimate(&params, 1.0);
        let fresh = estimate_spectrum(&params, 1.0, &config).unwrap();
        assert_eq!(again.powers(), fresh.powers());
    }

    #[test]
    fn dt_formula() {
        let config = test_config();
        assert_relative_eq!(
            config.dt(),
            (4.0 / 127.0) * (2.0 * PI / 1.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn powers_non_negative() {
        let params = PhysicalParams::new(100, 0.3, 2.0, 1.5);
        let spec = estimate_spectrum(&params, 0.9, &test_config()).unwrap();
        assert!(spec.powers().iter().all(|&p| p >= 0.0));
    }

    #[test]
    fn validate_rejects_bad_configs() {
        assert!(matches!(
            SpectrumConfig::new(1.0).with_sample_count(1).validate(),
            Err(SignalError::InvalidSampleCount { sample_count: 1 })
        ));
        assert!(matches!(
            SpectrumConfig::new(1.0)
                .with_sample_count(100)
                .with_pad_len(64)
                .validate(),
            Err(SignalError::PadTooShort { .. })
        ));
        assert!(matches!(
            SpectrumConfig::new(1.0).with_pad_len(1025).validate(),
            Err(SignalError::OddPadLength { pad_len: 1025 })
        ));
        assert!(matches!(
            SpectrumConfig::new(0.0).validate(),
            Err(SignalError::InvalidEstOmega { .. })
        ));
        assert!(matches!(
            SpectrumConfig::new(1.0).with_n_periods(-2.0).validate(),
            Err(SignalError::InvalidPeriods { .. })
        ));
    }

    #[test]
    fn default_config_is_valid() {
        assert!(SpectrumConfig::default().validate().is_ok());
    }
}
