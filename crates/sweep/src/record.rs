//! Result records produced by the sweep.

use serde::Serialize;

use ramsey_signal::PhysicalParams;

use crate::error::SweepError;

/// The two metrics of one evaluated combination, alongside its parameters.
///
/// Immutable once produced; downstream consumers key on the parameter
/// fields, never on position in a result sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResultRecord {
    /// Collective spin size J.
    pub spin_size: u32,
    /// Squeezing strength chi.
    pub squeezing: f64,
    /// First phase angle.
    pub alpha: f64,
    /// Second phase angle.
    pub beta: f64,
    /// Mean spectral power over its standard deviation at the peak.
    pub snr: f64,
    /// `|1 - peak_freq / base_omega|`.
    pub rel_freq_error: f64,
}

impl ResultRecord {
    /// Returns the parameter tuple of this record.
    pub fn params(&self) -> PhysicalParams {
        PhysicalParams::new(self.spin_size, self.squeezing, self.alpha, self.beta)
    }
}

/// A combination that could not be evaluated, with the offending parameters.
#[derive(Debug, Clone)]
pub struct FailedCombination {
    /// The parameter tuple that failed.
    pub params: PhysicalParams,
    /// Why it failed.
    pub error: SweepError,
}

/// All outcomes of a grid evaluation: successful records plus the
/// combinations that failed numerically. Failures never abort the sweep.
#[derive(Debug, Clone, Default)]
pub struct SweepResult {
    records: Vec<ResultRecord>,
    failures: Vec<FailedCombination>,
}

impl SweepResult {
    pub(crate) fn new(records: Vec<ResultRecord>, failures: Vec<FailedCombination>) -> Self {
        Self { records, failures }
    }

    /// Returns the successfully evaluated records (unordered).
    pub fn records(&self) -> &[ResultRecord] {
        &self.records
    }

    /// Returns the failed combinations.
    pub fn failures(&self) -> &[FailedCombination] {
        &self.failures
    }

    /// Returns the number of successful records.
    pub fn n_records(&self) -> usize {
        self.records.len()
    }

    /// Returns the number of failed combinations.
    pub fn n_failed(&self) -> usize {
        self.failures.len()
    }

    /// Consumes the result, returning the records.
    pub fn into_records(self) -> Vec<ResultRecord> {
        self.records
    }
}
