//! Spin expectation-value signal model and FFT spectral estimation.
//!
//! This crate produces the noiseless time-domain signal of a squeezed
//! collective spin and turns it into a one-sided power spectrum:
//!
//! ```text
//! estimate_spectrum()
//!   ├─ expectation()        (signal.rs)   time-domain model
//!   ├─ blackman_harris()    (window.rs)   leakage suppression
//!   └─ FFT + |.|^2          (spectrum.rs) one-sided power
//! ```
//!
//! The frequency axis is a function of the timing configuration alone;
//! ensemble evaluations over many frequency draws share a single axis.
//!
//! # Quick start
//!
//! ```
//! use ramsey_signal::{estimate_spectrum, PhysicalParams, SpectrumConfig};
//!
//! let params = PhysicalParams::new(10, 0.0, 0.0, std::f64::consts::FRAC_PI_2);
//! let config = SpectrumConfig::new(1.0).with_sample_count(128).with_pad_len(1024);
//! let spectrum = estimate_spectrum(&params, 1.0, &config).unwrap();
//! assert_eq!(spectrum.len(), 512);
//! ```
//!
//! For hot loops, use [`SpectrumScratch`] to reuse the FFT plan and window
//! across calls.

pub mod error;
pub mod signal;
pub mod spectrum;
pub mod window;

pub use error::SignalError;
pub use signal::{expectation, PhysicalParams};
pub use spectrum::{
    estimate_spectrum, frequency_axis, PowerSpectrum, SpectrumConfig, SpectrumScratch,
};
pub use window::blackman_harris;
