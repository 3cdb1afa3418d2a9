//! JSON report structures for sweep and selection results.

use serde::Serialize;

use ramsey_stats::{mean, population_sd};
use ramsey_sweep::ResultRecord;

/// Values below this are treated as numerically zero when summarising
/// relative frequency errors; they would otherwise drag the mean to the
/// float noise floor. The points themselves are always reported.
const ERROR_FLOOR: f64 = 1e-10;

/// Top-level sweep report.
#[derive(Debug, Serialize)]
pub struct SweepReport {
    /// Configuration summary.
    pub config: ConfigSummary,
    /// Grid bookkeeping.
    pub grid: GridSummary,
    /// Records selected by baseline dominance.
    pub selected: Vec<ResultRecord>,
    /// Aggregate statistics over the selected records.
    pub summary: Option<SelectionSummary>,
}

impl SweepReport {
    /// Whether this report warrants a file artifact.
    ///
    /// An empty selection produces console output only; no file is
    /// written.
    pub fn should_export(&self) -> bool {
        !self.selected.is_empty()
    }
}

/// Summary of the configuration used.
#[derive(Debug, Serialize)]
pub struct ConfigSummary {
    pub base_omega: f64,
    pub sample_count: usize,
    pub pad_len: usize,
    pub sigma_frac: f64,
    pub n_draws: usize,
    pub seed: u64,
}

/// Counts over the evaluated grid.
#[derive(Debug, Serialize)]
pub struct GridSummary {
    pub n_combinations: usize,
    pub n_evaluated: usize,
    pub n_failed: usize,
    pub n_selected: usize,
}

/// Aggregate statistics over the selected records.
#[derive(Debug, Serialize)]
pub struct SelectionSummary {
    pub snr_min: f64,
    pub snr_max: f64,
    pub snr_mean: f64,
    pub snr_sd: f64,
    /// Error statistics over errors above the numerical floor; absent
    /// when every selected error is effectively zero.
    pub error_min: Option<f64>,
    pub error_max: Option<f64>,
    pub error_mean: Option<f64>,
    /// Selected record with the smallest relative frequency error.
    pub best_error_point: ResultRecord,
}

impl SelectionSummary {
    /// Builds aggregate statistics; `None` when nothing was selected.
    pub fn from_records(selected: &[ResultRecord]) -> Option<Self> {
        let first = selected.first()?;

        let snrs: Vec<f64> = selected.iter().map(|r| r.snr).collect();
        let mut best = first;
        for record in selected {
            if record.rel_freq_error < best.rel_freq_error {
                best = record;
            }
        }

        let errors: Vec<f64> = selected
            .iter()
            .map(|r| r.rel_freq_error)
            .filter(|&e| e >= ERROR_FLOOR)
            .collect();
        let (error_min, error_max, error_mean) = if errors.is_empty() {
            (None, None, None)
        } else {
            let min = errors.iter().copied().fold(f64::INFINITY, f64::min);
            let max = errors.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            (Some(min), Some(max), Some(mean(&errors)))
        };

        Some(Self {
            snr_min: snrs.iter().copied().fold(f64::INFINITY, f64::min),
            snr_max: snrs.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            snr_mean: mean(&snrs),
            snr_sd: population_sd(&snrs),
            error_min,
            error_max,
            error_mean,
            best_error_point: *best,
        })
    }
}

/// Prints a human-readable summary of the report to stdout.
pub fn print_summary(report: &SweepReport) {
    println!(
        "Evaluated {} of {} combinations ({} failed).",
        report.grid.n_evaluated, report.grid.n_combinations, report.grid.n_failed
    );
    match &report.summary {
        Some(summary) => {
            println!(
                "{} squeezed points beat their unsqueezed baseline on both SNR and frequency error.",
                report.grid.n_selected
            );
            println!(
                "  SNR: {:.3} .. {:.3} (mean {:.3}, sd {:.3})",
                summary.snr_min, summary.snr_max, summary.snr_mean, summary.snr_sd
            );
            if let (Some(min), Some(max), Some(mean)) =
                (summary.error_min, summary.error_max, summary.error_mean)
            {
                println!("  rel. freq. error: {min:.3e} .. {max:.3e} (mean {mean:.3e})");
            } else {
                println!("  rel. freq. error: all below {ERROR_FLOOR:.0e}");
            }
            let best = &summary.best_error_point;
            println!(
                "  best error point: J = {}, chi = {}, alpha = {:.4}, beta = {:.4} \
                 (snr {:.3}, error {:.3e})",
                best.spin_size, best.squeezing, best.alpha, best.beta, best.snr,
                best.rel_freq_error
            );
        }
        None => {
            println!("No squeezed combination dominates its unsqueezed baseline.");
        }
    }
}
