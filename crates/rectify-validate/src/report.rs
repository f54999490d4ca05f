//! Validation reports and the comparison entry points.

use serde::{Deserialize, Serialize};

use rectify_core::{CurveCache, IvCurve};

use crate::align::align_onto;
use crate::error::{Error, Result};
use crate::metrics::Metrics;
use crate::verdict::{verdict, ApproxKind, Verdict};

/// Outcome of validating one approximation against its reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Device name.
    pub device: String,
    /// Approximation kind that was judged.
    pub kind: ApproxKind,
    /// Threshold (%) the verdict was judged against.
    pub threshold_pct: f64,
    /// Error metrics over the aligned curves.
    pub metrics: Metrics,
    /// Pass/fail verdict.
    pub verdict: Verdict,
    /// Number of reference points compared.
    pub points: usize,
}

impl ValidationReport {
    /// Whether the approximation passed.
    pub fn passed(&self) -> bool {
        self.verdict.is_pass()
    }

    /// Format as human-readable text.
    pub fn to_text(&self) -> String {
        let border = "=".repeat(45);
        let mut out = String::new();
        out.push_str(&border);
        out.push('\n');
        out.push_str(&format!("Validation {} ({})\n", self.device, self.kind));
        out.push_str(&format!("Points     : {}\n", self.points));
        out.push_str(&format!("MAE        : {:.6e} A\n", self.metrics.mae));
        out.push_str(&format!("RMSE       : {:.6e} A\n", self.metrics.rmse));
        out.push_str(&format!("Max error  : {:.6e} A\n", self.metrics.e_max));
        out.push_str(&format!(
            "Rel. error : {:.4} % (threshold {} %)\n",
            self.metrics.e_rel_pct, self.threshold_pct
        ));
        out.push_str(&format!("R^2        : {:.6}\n", self.metrics.r2));
        out.push_str(&format!("VERDICT    : {}\n", self.verdict));
        out.push_str(&border);
        out.push('\n');
        out
    }
}

/// Validate an approximation against a reference curve.
///
/// The approximation is resampled onto the reference grid, metrics are
/// computed over the aligned samples, and the mean relative error is
/// judged against the kind's threshold.
pub fn compare_curves(
    device: &str,
    reference: &IvCurve,
    approx: &IvCurve,
    kind: ApproxKind,
) -> Result<ValidationReport> {
    let aligned = align_onto(reference, approx)?;
    let metrics = Metrics::compute(reference.current(), &aligned)?;
    let verdict = verdict(metrics.e_rel_pct, kind);

    log::debug!(
        "{} ({}): e_rel = {:.4} %, verdict {}",
        device,
        kind,
        metrics.e_rel_pct,
        verdict
    );

    Ok(ValidationReport {
        device: device.to_string(),
        kind,
        threshold_pct: kind.threshold_pct(),
        metrics,
        verdict,
        points: reference.len(),
    })
}

/// Validate an approximation against the cached reference for a device.
///
/// Fails with [`Error::CurveNotFound`] when no sweep has been cached under
/// the device name.
pub fn compare_cached(
    cache: &CurveCache,
    device: &str,
    approx: &IvCurve,
    kind: ApproxKind,
) -> Result<ValidationReport> {
    let reference = cache
        .get(device)
        .ok_or_else(|| Error::CurveNotFound(device.to_string()))?;
    compare_curves(device, &reference, approx, kind)
}
