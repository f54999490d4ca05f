//! Grid alignment by linear interpolation.
//!
//! The reference sweep and an external approximation rarely share a grid;
//! metrics only make sense after the approximation is resampled onto the
//! reference voltages.

use rectify_core::IvCurve;

use crate::error::{Error, Result};

/// Linearly interpolate `ys` at `x` over the ascending grid `xs`.
///
/// Outside the grid the edge samples are returned unchanged; a query that
/// lands exactly on a grid point returns that sample exactly.
pub fn interp_linear(x: f64, xs: &[f64], ys: &[f64]) -> f64 {
    debug_assert_eq!(xs.len(), ys.len());
    debug_assert!(!xs.is_empty());

    if x <= xs[0] {
        return ys[0];
    }
    if x >= xs[xs.len() - 1] {
        return ys[ys.len() - 1];
    }

    // First index with xs[i] > x; the query sits in [i-1, i]
    let i = xs.partition_point(|&xi| xi <= x);
    let (x0, x1) = (xs[i - 1], xs[i]);
    let alpha = (x - x0) / (x1 - x0);
    ys[i - 1] * (1.0 - alpha) + ys[i] * alpha
}

/// Resample an approximation onto a reference grid.
///
/// Returns the approximation's current at every reference voltage. The
/// approximation's grid must be ascending; [`IvCurve::is_ascending`] checks
/// external curves before they get here.
pub fn align_onto(reference: &IvCurve, approx: &IvCurve) -> Result<Vec<f64>> {
    if reference.is_empty() || approx.is_empty() {
        return Err(Error::EmptyInput);
    }
    debug_assert!(approx.is_ascending());

    Ok(reference
        .voltage()
        .iter()
        .map(|&v| interp_linear(v, approx.voltage(), approx.current()))
        .collect())
}
