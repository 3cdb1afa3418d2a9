//! Baseline-dominance selection over sweep results.
//!
//! Each squeezed record is compared against the unsqueezed record sharing
//! its spin size and angle pair. A record is selected iff it is strictly
//! better on *both* axes: higher SNR and lower relative frequency error.
//! This is a joint-dominance rule against the squeezing-zero baseline, not
//! a Pareto-front construction among the squeezed records themselves.
//!
//! Selection is a pure filter: re-running it on the same input yields the
//! same output.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use ramsey_sweep::ResultRecord;

/// Grouping key for baseline comparison: spin size and the two phase
/// angles. Angle bits are compared exactly; grid values are generated
/// once upstream, so equal parameters are bit-identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct BaselineKey {
    spin_size: u32,
    alpha_bits: u64,
    beta_bits: u64,
}

impl BaselineKey {
    fn of(record: &ResultRecord) -> Self {
        Self {
            spin_size: record.spin_size,
            alpha_bits: record.alpha.to_bits(),
            beta_bits: record.beta.to_bits(),
        }
    }
}

/// Selects every squeezed record that strictly dominates its baseline.
///
/// Keys with no squeezing-zero record contribute nothing and are reported
/// as a data-completeness warning, not an error. Records with
/// `squeezing == 0` are never selected.
pub fn select_pareto(records: &[ResultRecord]) -> Vec<ResultRecord> {
    let mut groups: BTreeMap<BaselineKey, Vec<&ResultRecord>> = BTreeMap::new();
    for record in records {
        groups.entry(BaselineKey::of(record)).or_default().push(record);
    }

    let mut selected = Vec::new();
    for (key, group) in &groups {
        let Some(baseline) = group.iter().find(|r| r.squeezing == 0.0) else {
            warn!(
                spin_size = key.spin_size,
                alpha = f64::from_bits(key.alpha_bits),
                beta = f64::from_bits(key.beta_bits),
                "no squeezing-zero baseline for key, skipping"
            );
            continue;
        };

        for record in group {
            if record.squeezing > 0.0
                && record.snr > baseline.snr
                && record.rel_freq_error < baseline.rel_freq_error
            {
                selected.push(**record);
            }
        }
    }

    debug!(
        n_input = records.len(),
        n_selected = selected.len(),
        "dominance selection complete"
    );
    selected
}
