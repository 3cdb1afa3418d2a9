//! Monte Carlo frequency-noise ensembles of power spectra.
//!
//! For each trial the true oscillation frequency is perturbed by a
//! zero-mean Gaussian draw while the sampling clock stays on the nominal
//! estimation frequency, and the perturbed signal is run through the
//! spectral estimator. All members of an ensemble share one frequency
//! axis; only the power values vary with the draw.
//!
//! # Quick start
//!
//! ```
//! use ramsey_ensemble::{evaluate_ensemble, NoiseConfig};
//! use ramsey_signal::{PhysicalParams, SpectrumConfig};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let params = PhysicalParams::new(10, 0.0, 0.0, std::f64::consts::FRAC_PI_2);
//! let spectrum = SpectrumConfig::new(1.0).with_sample_count(64).with_pad_len(256);
//! let noise = NoiseConfig::new().with_n_draws(20);
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let ensemble = evaluate_ensemble(&params, 1.0, &spectrum, &noise, &mut rng).unwrap();
//! assert_eq!(ensemble.n_draws(), 20);
//! ```

pub mod config;
pub mod ensemble;
pub mod error;

pub use config::NoiseConfig;
pub use ensemble::{evaluate_ensemble, NoiseEnsemble};
pub use error::EnsembleError;
