//! Error types for the ramsey-ensemble crate.

use ramsey_signal::SignalError;

/// Error type for all fallible operations in the ramsey-ensemble crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EnsembleError {
    /// Returned when the noise fraction is negative or non-finite.
    #[error("noise fraction must be finite and non-negative, got {sigma_frac}")]
    InvalidSigmaFrac {
        /// The invalid noise fraction.
        sigma_frac: f64,
    },

    /// Returned when the draw count is zero.
    #[error("draw count must be >= 1, got {n_draws}")]
    InvalidDrawCount {
        /// The invalid draw count.
        n_draws: usize,
    },

    /// Returned when the base frequency is non-finite or non-positive.
    #[error("base frequency must be finite and positive, got {base_omega}")]
    InvalidBaseOmega {
        /// The invalid base frequency.
        base_omega: f64,
    },

    /// Propagated from spectral estimation (invalid timing configuration).
    #[error(transparent)]
    Spectrum(#[from] SignalError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_sigma_frac() {
        let e = EnsembleError::InvalidSigmaFrac { sigma_frac: -0.1 };
        assert_eq!(
            e.to_string(),
            "noise fraction must be finite and non-negative, got -0.1"
        );
    }

    #[test]
    fn error_invalid_draw_count() {
        let e = EnsembleError::InvalidDrawCount { n_draws: 0 };
        assert_eq!(e.to_string(), "draw count must be >= 1, got 0");
    }

    #[test]
    fn error_invalid_base_omega() {
        let e = EnsembleError::InvalidBaseOmega { base_omega: 0.0 };
        assert_eq!(
            e.to_string(),
            "base frequency must be finite and positive, got 0"
        );
    }

    #[test]
    fn error_wraps_signal_error() {
        let e = EnsembleError::from(SignalError::OddPadLength { pad_len: 7 });
        assert_eq!(e.to_string(), "pad length must be even, got 7");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<EnsembleError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<EnsembleError>();
    }
}
