//! Validation of approximated I-V curves against solved references.
//!
//! This crate provides infrastructure for:
//! - Resampling an approximation onto the reference voltage grid
//! - Error metrics (MAE, RMSE, max error, relative error, R^2)
//! - Per-kind accuracy thresholds and pass/fail verdicts
//! - Human-readable and JSON validation reports
//! - The JSON curve file format used to exchange curves

pub mod align;
pub mod curvefile;
pub mod error;
pub mod metrics;
pub mod report;
pub mod verdict;

pub use align::{align_onto, interp_linear};
pub use curvefile::CurveFile;
pub use error::{Error, Result};
pub use metrics::{mae, max_error, r_squared, relative_error_pct, rmse, Metrics, EPSILON};
pub use report::{compare_cached, compare_curves, ValidationReport};
pub use verdict::{verdict, ApproxKind, Verdict};
