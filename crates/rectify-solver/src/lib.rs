//! I-V solving and sweep execution for rectify.
//!
//! This crate provides:
//! - Scalar Newton-Raphson iteration with step-based convergence
//! - The implicit diode equation solver with breakdown handling
//! - Knee-weighted voltage grids and cached I-V sweeps
//! - Parallel sweep execution via rayon

pub mod device;
pub mod error;
pub mod newton;
pub mod parallel;
pub mod sweep;

pub use device::{DeviceSolver, DiodeSolver, PointSolution};
pub use error::{Error, Result};
pub use newton::{solve_newton, ConvergenceCriteria, RootResult};
pub use parallel::{sweep_device_parallel, ParallelSweepConfig};
pub use sweep::{knee_grid, linspace, sweep_device, SweepParams};
