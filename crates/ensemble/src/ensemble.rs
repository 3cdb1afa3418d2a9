//! Monte Carlo evaluation of power spectra under frequency-readout noise.

use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

use ramsey_signal::{PhysicalParams, SpectrumConfig, SpectrumScratch};

use crate::config::NoiseConfig;
use crate::error::EnsembleError;

/// The spectra of one noise ensemble: a shared frequency axis plus one
/// power vector per Monte Carlo draw.
#[derive(Clone, Debug)]
pub struct NoiseEnsemble {
    /// Angular frequency axis shared by all members.
    freqs: Vec<f64>,
    /// Per-draw power spectra, `[n_draws][n_bins]`.
    draws: Vec<Vec<f64>>,
}

impl NoiseEnsemble {
    /// Returns the shared frequency axis.
    pub fn freqs(&self) -> &[f64] {
        &self.freqs
    }

    /// Returns the per-draw power spectra.
    pub fn draws(&self) -> &[Vec<f64>] {
        &self.draws
    }

    /// Returns the number of draws.
    pub fn n_draws(&self) -> usize {
        self.draws.len()
    }

    /// Returns the number of frequency bins.
    pub fn n_bins(&self) -> usize {
        self.freqs.len()
    }
}

/// Evaluates an ensemble of power spectra under Gaussian frequency jitter.
///
/// Each draw perturbs the oscillation frequency by
/// `Normal(0, sigma_frac * base_omega)` while the sampling clock stays on
/// the nominal `est_omega` of the timing configuration. This models
/// frequency-readout noise: the true frequency jitters per trial, the
/// clock does not.
///
/// Reproducible: a given `rng` state yields a bit-identical ensemble.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`EnsembleError::InvalidSigmaFrac`] | negative or non-finite noise fraction |
/// | [`EnsembleError::InvalidDrawCount`] | zero draws |
/// | [`EnsembleError::InvalidBaseOmega`] | non-finite or non-positive base frequency |
/// | [`EnsembleError::Spectrum`] | invalid timing configuration |
pub fn evaluate_ensemble(
    params: &PhysicalParams,
    base_omega: f64,
    spectrum_config: &SpectrumConfig,
    noise_config: &NoiseConfig,
    rng: &mut StdRng,
) -> Result<NoiseEnsemble, EnsembleError> {
    noise_config.validate()?;
    if !base_omega.is_finite() || base_omega <= 0.0 {
        return Err(EnsembleError::InvalidBaseOmega { base_omega });
    }

    let sigma = noise_config.sigma_frac() * base_omega;
    let normal = Normal::new(0.0, sigma)
        .map_err(|_| EnsembleError::InvalidSigmaFrac {
            sigma_frac: noise_config.sigma_frac(),
        })?;

    let mut scratch = SpectrumScratch::new(spectrum_config)?;
    let freqs = scratch.freqs().to_vec();

    let mut draws = Vec::with_capacity(noise_config.n_draws());
    for _ in 0..noise_config.n_draws() {
        let delta = normal.sample(rng);
        let spectrum = scratch.estimate(params, base_omega + delta);
        draws.push(spectrum.into_powers());
    }

    Ok(NoiseEnsemble { freqs, draws })
}
