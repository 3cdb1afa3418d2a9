//! Natural cubic spline interpolation over a strictly increasing knot grid.
//!
//! Used to recover sub-bin structure from discretely sampled spectra. The
//! second-derivative solve is the standard tridiagonal recurrence with
//! natural (zero-curvature) boundary conditions; evaluation outside the
//! knot range extends the boundary segment's cubic, which is what the SNR
//! interpolation needs when the refined peak lands past the last bin
//! centre.

use crate::error::SweepError;

/// Minimum number of knots for a cubic fit.
const MIN_KNOTS: usize = 3;

/// A fitted natural cubic spline.
#[derive(Debug, Clone)]
pub(crate) struct CubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Second derivatives at the knots (zero at both ends).
    y2: Vec<f64>,
}

impl CubicSpline {
    /// Fits a natural cubic spline through `(xs[i], ys[i])`.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`SweepError::SplineTooShort`] | fewer than 3 knots |
    /// | [`SweepError::NonMonotonicKnots`] | knots not strictly increasing |
    /// | [`SweepError::NonFiniteKnots`] | NaN or infinity in either input |
    pub fn fit(xs: &[f64], ys: &[f64]) -> Result<Self, SweepError> {
        let n = xs.len();
        if n < MIN_KNOTS || ys.len() < MIN_KNOTS {
            return Err(SweepError::SplineTooShort {
                len: n.min(ys.len()),
                min: MIN_KNOTS,
            });
        }
        debug_assert_eq!(xs.len(), ys.len());
        if xs.iter().any(|x| !x.is_finite()) {
            return Err(SweepError::NonFiniteKnots { input: "knots" });
        }
        if ys.iter().any(|y| !y.is_finite()) {
            return Err(SweepError::NonFiniteKnots { input: "values" });
        }
        if let Some(index) = xs.windows(2).position(|w| w[1] <= w[0]) {
            return Err(SweepError::NonMonotonicKnots { index: index + 1 });
        }

        // Tridiagonal solve for the interior second derivatives.
        let mut y2 = vec![0.0; n];
        let mut u = vec![0.0; n];
        for i in 1..n - 1 {
            let sig = (xs[i] - xs[i - 1]) / (xs[i + 1] - xs[i - 1]);
            let p = sig * y2[i - 1] + 2.0;
            y2[i] = (sig - 1.0) / p;
            let slope_diff = (ys[i + 1] - ys[i]) / (xs[i + 1] - xs[i])
                - (ys[i] - ys[i - 1]) / (xs[i] - xs[i - 1]);
            u[i] = (6.0 * slope_diff / (xs[i + 1] - xs[i - 1]) - sig * u[i - 1]) / p;
        }
        for k in (0..n - 1).rev() {
            y2[k] = y2[k] * y2[k + 1] + u[k];
        }

        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            y2,
        })
    }

    /// Returns the knot range `(first, last)`.
    pub fn range(&self) -> (f64, f64) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    /// Evaluates the spline at `x`.
    ///
    /// Outside the knot range the boundary segment's cubic is extended.
    pub fn eval(&self, x: f64) -> f64 {
        let n = self.xs.len();
        // Segment index: partition_point gives the first knot > x.
        let hi = self.xs.partition_point(|&k| k <= x).clamp(1, n - 1);
        let lo = hi - 1;

        let h = self.xs[hi] - self.xs[lo];
        let a = (self.xs[hi] - x) / h;
        let b = (x - self.xs[lo]) / h;
        a * self.ys[lo]
            + b * self.ys[hi]
            + ((a * a * a - a) * self.y2[lo] + (b * b * b - b) * self.y2[hi]) * h * h / 6.0
    }
}
