//! # Rectify
//!
//! Reference I-V curves for semiconductor devices, with validation of
//! external approximations against them.
//!
//! Rectify provides:
//! - SPICE diode model parameters and a named device store
//! - Newton-Raphson solving of the implicit diode equation
//! - Knee-weighted voltage sweeps with curve caching
//! - Error metrics and pass/fail verdicts for approximated curves
//!
//! ## Quick Start
//!
//! ```rust
//! use rectify::prelude::*;
//!
//! let params = DiodeParams {
//!     is: 7.62767e-9,
//!     rs: 0.0341512,
//!     n: 1.80803,
//!     ..Default::default()
//! };
//!
//! let solver = DiodeSolver::new(params).unwrap();
//! let point = solver.solve_at(0.7, None);
//! println!("I(0.7 V) = {:.3} mA", point.current * 1e3);
//! ```
//!
//! ## Sweeping and Validating
//!
//! ```rust,ignore
//! use std::path::Path;
//! use rectify::prelude::*;
//!
//! // Load stored devices and solve a reference curve
//! let mut store = DeviceStore::new();
//! store.load_dir(Path::new("devices"))?;
//! let cache = CurveCache::new();
//! let reference = sweep_device(&store, &cache, "1N4007", &SweepParams::default())?;
//!
//! // Judge an external approximation against it
//! let approx = CurveFile::load(Path::new("1N4007_ia.json"))?.into_curve()?;
//! let report = compare_cached(&cache, "1N4007", &approx, ApproxKind::Ia)?;
//! println!("{}", report.to_text());
//! ```

// Re-export the member crates
pub use rectify_core as core;
pub use rectify_devices as devices;
pub use rectify_solver as solver;
pub use rectify_validate as validate;

// ============================================================================
// Convenient re-exports from rectify_core
// ============================================================================

pub use rectify_core::{
    // Curve cache
    CurveCache,
    // Errors
    Error as CoreError,
    // Curve representation
    IvCurve,
    // SI units
    format_value,
    parse_value,
};

// ============================================================================
// Convenient re-exports from rectify_devices
// ============================================================================

pub use rectify_devices::{
    DeviceKind,
    DeviceRecord,
    DeviceStore,
    // Diode model
    DiodeParams,
    // Errors
    Error as DeviceError,
    VT,
    thermal_voltage,
};

// ============================================================================
// Convenient re-exports from rectify_solver
// ============================================================================

pub use rectify_solver::{
    // Newton-Raphson
    ConvergenceCriteria,
    // Device solvers
    DeviceSolver,
    DiodeSolver,
    // Errors
    Error as SolverError,
    // Parallel sweeps
    ParallelSweepConfig,
    PointSolution,
    RootResult,
    // Sweeps
    SweepParams,
    knee_grid,
    linspace,
    solve_newton,
    sweep_device,
    sweep_device_parallel,
};

// ============================================================================
// Convenient re-exports from rectify_validate
// ============================================================================

pub use rectify_validate::{
    // Kinds and verdicts
    ApproxKind,
    // Curve files
    CurveFile,
    // Errors
    Error as ValidateError,
    // Metrics
    Metrics,
    ValidationReport,
    Verdict,
    // Alignment
    align_onto,
    // Comparison
    compare_cached,
    compare_curves,
    interp_linear,
    verdict,
};

// ============================================================================
// Prelude module for convenient imports
// ============================================================================

/// Prelude module containing commonly used types and functions.
///
/// ```rust
/// use rectify::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::{CurveCache, IvCurve};

    // Devices
    pub use crate::{DeviceKind, DeviceRecord, DeviceStore, DiodeParams};

    // Solving and sweeping
    pub use crate::{
        sweep_device, sweep_device_parallel, ConvergenceCriteria, DeviceSolver, DiodeSolver,
        ParallelSweepConfig, SweepParams,
    };

    // Validation
    pub use crate::{
        compare_cached, compare_curves, ApproxKind, CurveFile, Metrics, ValidationReport, Verdict,
    };
}
