//! Solver error types.

use thiserror::Error;

/// Errors from solver construction and sweep execution.
#[derive(Debug, Error)]
pub enum Error {
    /// No record with this name in the device store.
    #[error("device not found: {0}")]
    DeviceNotFound(String),

    /// The record's kind has no solver in this build.
    #[error("unsupported device kind: {0}")]
    UnsupportedKind(String),

    /// Parameter decode or validation failure.
    #[error("device error: {0}")]
    Device(#[from] rectify_devices::Error),

    /// Curve assembly failure.
    #[error("curve error: {0}")]
    Curve(#[from] rectify_core::Error),
}

/// Result type for solver operations.
pub type Result<T> = std::result::Result<T, Error>;
