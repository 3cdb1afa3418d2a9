//! Error types for the ramsey-signal crate.

/// Error type for all fallible operations in the ramsey-signal crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SignalError {
    /// Returned when the sample count is too small to form a time grid.
    #[error("sample count must be >= 2, got {sample_count}")]
    InvalidSampleCount {
        /// The invalid sample count.
        sample_count: usize,
    },

    /// Returned when the padded length is shorter than the sample count.
    #[error("pad length {pad_len} is shorter than sample count {sample_count}")]
    PadTooShort {
        /// The invalid padded length.
        pad_len: usize,
        /// The configured sample count.
        sample_count: usize,
    },

    /// Returned when the padded length is odd (one-sided spectrum needs an even length).
    #[error("pad length must be even, got {pad_len}")]
    OddPadLength {
        /// The invalid padded length.
        pad_len: usize,
    },

    /// Returned when the estimation frequency is non-finite or non-positive.
    #[error("estimation frequency must be finite and positive, got {est_omega}")]
    InvalidEstOmega {
        /// The invalid estimation frequency.
        est_omega: f64,
    },

    /// Returned when the number of sampled periods is non-finite or non-positive.
    #[error("period count must be finite and positive, got {n_periods}")]
    InvalidPeriods {
        /// The invalid period count.
        n_periods: f64,
    },
}
