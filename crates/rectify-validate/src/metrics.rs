//! Pointwise error metrics between a reference and an approximation.
//!
//! All functions take the reference samples first. Inputs must be aligned
//! (same grid, same length); use [`crate::align`] to resample an
//! approximation onto the reference grid beforehand.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Guard term keeping the relative error finite where the reference
/// current crosses zero.
pub const EPSILON: f64 = 1e-15;

/// Mean absolute error.
pub fn mae(reference: &[f64], approx: &[f64]) -> Result<f64> {
    check_inputs(reference, approx)?;
    let sum: f64 = reference
        .iter()
        .zip(approx)
        .map(|(&r, &a)| (a - r).abs())
        .sum();
    Ok(sum / reference.len() as f64)
}

/// Root mean square error.
pub fn rmse(reference: &[f64], approx: &[f64]) -> Result<f64> {
    check_inputs(reference, approx)?;
    let sum: f64 = reference
        .iter()
        .zip(approx)
        .map(|(&r, &a)| (a - r) * (a - r))
        .sum();
    Ok((sum / reference.len() as f64).sqrt())
}

/// Largest absolute error.
pub fn max_error(reference: &[f64], approx: &[f64]) -> Result<f64> {
    check_inputs(reference, approx)?;
    Ok(reference
        .iter()
        .zip(approx)
        .map(|(&r, &a)| (a - r).abs())
        .fold(0.0, f64::max))
}

/// Mean pointwise relative error, in percent.
///
/// Each point is weighted by its own reference magnitude, so the metric
/// reflects accuracy across the decades an I-V curve spans rather than
/// being dominated by the high-current end.
pub fn relative_error_pct(reference: &[f64], approx: &[f64]) -> Result<f64> {
    check_inputs(reference, approx)?;
    let sum: f64 = reference
        .iter()
        .zip(approx)
        .map(|(&r, &a)| (a - r).abs() / (r.abs() + EPSILON))
        .sum();
    Ok(sum / reference.len() as f64 * 100.0)
}

/// Coefficient of determination.
///
/// A constant reference has no variance to explain; that case scores 1.0.
pub fn r_squared(reference: &[f64], approx: &[f64]) -> Result<f64> {
    check_inputs(reference, approx)?;
    let mean = reference.iter().sum::<f64>() / reference.len() as f64;
    let ss_tot: f64 = reference.iter().map(|&r| (r - mean) * (r - mean)).sum();
    if ss_tot == 0.0 {
        return Ok(1.0);
    }
    let ss_res: f64 = reference
        .iter()
        .zip(approx)
        .map(|(&r, &a)| (r - a) * (r - a))
        .sum();
    Ok(1.0 - ss_res / ss_tot)
}

fn check_inputs(reference: &[f64], approx: &[f64]) -> Result<()> {
    if reference.len() != approx.len() {
        return Err(Error::DimensionMismatch {
            expected: reference.len(),
            actual: approx.len(),
        });
    }
    if reference.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(())
}

/// The full metric set for one comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Mean absolute error (A).
    pub mae: f64,
    /// Root mean square error (A).
    pub rmse: f64,
    /// Largest absolute error (A).
    pub e_max: f64,
    /// Mean pointwise relative error (%).
    pub e_rel_pct: f64,
    /// Coefficient of determination.
    pub r2: f64,
}

impl Metrics {
    /// Compute every metric for an aligned sample pair.
    pub fn compute(reference: &[f64], approx: &[f64]) -> Result<Self> {
        Ok(Self {
            mae: mae(reference, approx)?,
            rmse: rmse(reference, approx)?,
            e_max: max_error(reference, approx)?,
            e_rel_pct: relative_error_pct(reference, approx)?,
            r2: r_squared(reference, approx)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mae() {
        let value = mae(&[1.0, 2.0, 3.0], &[1.1, 1.9, 3.2]).unwrap();
        assert!((value - 0.4 / 3.0).abs() < 1e-12, "mae = {}", value);
    }

    #[test]
    fn test_rmse() {
        let value = rmse(&[1.0, 2.0, 3.0], &[1.0, 2.0, 4.0]).unwrap();
        assert!(
            (value - (1.0_f64 / 3.0).sqrt()).abs() < 1e-12,
            "rmse = {}",
            value
        );
    }

    #[test]
    fn test_max_error() {
        let value = max_error(&[1.0, 1.0], &[1.5, 0.8]).unwrap();
        assert!((value - 0.5).abs() < 1e-12, "e_max = {}", value);
    }

    #[test]
    fn test_relative_error_uniform_one_percent() {
        let reference = [1.0, 2.0, 4.0];
        let approx: Vec<f64> = reference.iter().map(|r| r * 1.01).collect();
        let value = relative_error_pct(&reference, &approx).unwrap();
        assert!((value - 1.0).abs() < 1e-9, "e_rel = {} %", value);
    }

    #[test]
    fn test_relative_error_survives_zero_reference() {
        let value = relative_error_pct(&[0.0, 1.0], &[0.0, 1.0]).unwrap();
        assert_eq!(value, 0.0);

        let value = relative_error_pct(&[0.0], &[1e-12]).unwrap();
        assert!(value.is_finite(), "zero reference must not divide by zero");
    }

    #[test]
    fn test_identical_arrays_are_perfect() {
        let samples = [1e-9, 1e-6, 1e-3, 0.1, 1.0];
        let m = Metrics::compute(&samples, &samples).unwrap();
        assert_eq!(m.mae, 0.0);
        assert_eq!(m.rmse, 0.0);
        assert_eq!(m.e_max, 0.0);
        assert_eq!(m.e_rel_pct, 0.0);
        assert_eq!(m.r2, 1.0);
    }

    #[test]
    fn test_r_squared_constant_reference() {
        let value = r_squared(&[2.0, 2.0, 2.0], &[2.1, 1.9, 2.0]).unwrap();
        assert_eq!(value, 1.0, "constant reference scores R^2 = 1");
    }

    #[test]
    fn test_r_squared_good_fit() {
        let reference = [1.0, 2.0, 3.0, 4.0];
        let approx = [1.05, 1.95, 3.05, 3.95];
        let value = r_squared(&reference, &approx).unwrap();
        assert!(value > 0.99 && value <= 1.0, "r2 = {}", value);
    }

    #[test]
    fn test_length_mismatch() {
        let err = mae(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionMismatch {
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_empty_input() {
        let err = Metrics::compute(&[], &[]).unwrap_err();
        assert!(matches!(err, Error::EmptyInput));
    }

    #[test]
    fn test_metric_ordering_invariants() {
        let reference = [1.0, 2.0, 3.0, 4.0, 5.0];
        let approx = [1.2, 1.9, 3.3, 3.8, 5.1];
        let m = Metrics::compute(&reference, &approx).unwrap();
        assert!(m.rmse >= m.mae, "rmse {} < mae {}", m.rmse, m.mae);
        assert!(m.e_max >= m.mae, "e_max {} < mae {}", m.e_max, m.mae);
        assert!(m.e_max >= m.rmse, "e_max {} < rmse {}", m.e_max, m.rmse);
    }
}
