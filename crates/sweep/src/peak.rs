//! Sub-bin peak refinement via bounded golden-section search.
//!
//! Wraps the `argmin` crate to maximise a spline-interpolated spectrum over
//! a bracketed frequency interval, recovering peak resolution beyond the
//! discrete FFT grid spacing.

use argmin::core::{CostFunction, Executor};
use argmin::solver::goldensectionsearch::GoldenSectionSearch;

use crate::error::SweepError;
use crate::spline::CubicSpline;

const MAX_ITERS: u64 = 200;
/// Absolute convergence tolerance on the frequency argument.
const TOLERANCE: f64 = 1e-9;

/// Finds the frequency maximising `spline` within `[lo, hi]`.
///
/// `init` is the coarse starting point (the argmax bin frequency); it is
/// nudged into the open interval when it sits on a bound.
pub(crate) fn refine_peak(
    spline: &CubicSpline,
    lo: f64,
    hi: f64,
    init: f64,
) -> Result<f64, SweepError> {
    if !(lo < hi) || !lo.is_finite() || !hi.is_finite() {
        return Err(SweepError::PeakSearchFailed { lo, hi });
    }

    let margin = (hi - lo) * 1e-6;
    let init = init.clamp(lo + margin, hi - margin);

    let cost = NegatedSpline { spline };
    let solver = GoldenSectionSearch::new(lo, hi)
        .and_then(|s| s.with_tolerance(TOLERANCE))
        .map_err(|_| SweepError::PeakSearchFailed { lo, hi })?;

    let result = Executor::new(cost, solver)
        .configure(|state| state.param(init).max_iters(MAX_ITERS))
        .run()
        .map_err(|_| SweepError::PeakSearchFailed { lo, hi })?;

    let best = result
        .state()
        .best_param
        .ok_or(SweepError::PeakSearchFailed { lo, hi })?;
    if !best.is_finite() {
        return Err(SweepError::PeakSearchFailed { lo, hi });
    }
    Ok(best)
}

/// Cost function for argmin: negated spline value (minimise to maximise).
struct NegatedSpline<'a> {
    spline: &'a CubicSpline,
}

impl CostFunction for NegatedSpline<'_> {
    type Param = f64;
    type Output = f64;

    fn cost(&self, x: &Self::Param) -> Result<Self::Output, argmin::core::Error> {
        let v = self.spline.eval(*x);
        if v.is_finite() {
            Ok(-v)
        } else {
            Ok(f64::MAX)
        }
    }
}
