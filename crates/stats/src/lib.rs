//! Statistical helper functions for the ramsey sweep.

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Population variance with N denominator (the ensemble is the whole
/// population of draws, not a sample from one).
/// Returns 0.0 if empty.
pub fn population_variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n == 0 {
        return 0.0;
    }
    let nf = n as f64;
    let m = data.iter().sum::<f64>() / nf;
    data.iter().map(|&x| (x - m) * (x - m)).sum::<f64>() / nf
}

/// Population standard deviation with N denominator. Returns 0.0 if empty.
pub fn population_sd(data: &[f64]) -> f64 {
    population_variance(data).sqrt()
}

/// Per-column mean and population standard deviation across equal-length rows.
///
/// Rows are ensemble members; columns are frequency bins. Returns a pair of
/// empty vectors for empty input.
///
/// # Panics
///
/// Panics if rows differ in length.
pub fn column_mean_std(rows: &[Vec<f64>]) -> (Vec<f64>, Vec<f64>) {
    let Some(first) = rows.first() else {
        return (Vec::new(), Vec::new());
    };
    let width = first.len();
    let n = rows.len() as f64;

    let mut means = vec![0.0; width];
    for row in rows {
        assert_eq!(row.len(), width, "column_mean_std: ragged rows");
        for (m, &v) in means.iter_mut().zip(row) {
            *m += v;
        }
    }
    for m in &mut means {
        *m /= n;
    }

    let mut stds = vec![0.0; width];
    for row in rows {
        for ((s, &v), &m) in stds.iter_mut().zip(row).zip(&means) {
            let d = v - m;
            *s += d * d;
        }
    }
    for s in &mut stds {
        *s = (*s / n).sqrt();
    }

    (means, stds)
}

/// Index of the maximum value. Returns `None` for an empty slice; NaN
/// entries never win a comparison.
pub fn argmax(data: &[f64]) -> Option<usize> {
    data.iter()
        .enumerate()
        .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
}
