//! Error types for the ramsey-sweep crate.

use ramsey_ensemble::EnsembleError;

/// Error type for all fallible operations in the ramsey-sweep crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SweepError {
    /// Returned when a grid axis is empty.
    #[error("grid axis '{axis}' is empty")]
    EmptyAxis {
        /// Name of the empty axis.
        axis: &'static str,
    },

    /// Returned when a spin size of zero appears in the grid.
    #[error("spin size must be >= 1")]
    InvalidSpinSize,

    /// Returned when a grid parameter lies outside its physical range.
    #[error("parameter '{name}' out of range: {value}")]
    ParamOutOfRange {
        /// Name of the offending parameter.
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// Returned when the base frequency is non-finite or non-positive.
    #[error("base frequency must be finite and positive, got {base_omega}")]
    InvalidBaseOmega {
        /// The invalid base frequency.
        base_omega: f64,
    },

    /// Returned when a spline is requested over too few knots.
    #[error("spline needs at least {min} knots, got {len}")]
    SplineTooShort {
        /// Number of knots provided.
        len: usize,
        /// Minimum number required.
        min: usize,
    },

    /// Returned when spline knots are not strictly increasing.
    #[error("spline knots not strictly increasing at index {index}")]
    NonMonotonicKnots {
        /// Index of the first offending knot.
        index: usize,
    },

    /// Returned when a spline input contains NaN or infinity.
    #[error("non-finite value in spline {input}")]
    NonFiniteKnots {
        /// Which input contained the non-finite value.
        input: &'static str,
    },

    /// Returned when the bounded peak search cannot produce a result.
    #[error("peak search failed on [{lo}, {hi}]")]
    PeakSearchFailed {
        /// Lower search bound.
        lo: f64,
        /// Upper search bound.
        hi: f64,
    },

    /// Returned when a combination produces a non-finite metric.
    #[error("non-finite {metric} for combination: {value}")]
    NonFiniteMetric {
        /// Name of the metric.
        metric: &'static str,
        /// The non-finite value.
        value: f64,
    },

    /// Propagated from ensemble evaluation.
    #[error(transparent)]
    Ensemble(#[from] EnsembleError),
}
