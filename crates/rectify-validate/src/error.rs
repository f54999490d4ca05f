//! Validation error types.

use thiserror::Error;

/// Errors from metric computation and curve comparison.
#[derive(Debug, Error)]
pub enum Error {
    /// Sample arrays that must be compared pointwise differ in length.
    #[error("dimension mismatch: expected {expected} samples, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Metrics over zero samples are undefined.
    #[error("empty input: metrics need at least one sample")]
    EmptyInput,

    /// Approximation kind string not recognized.
    #[error("invalid approximation kind: {0} (expected \"ia\" or \"hls\")")]
    InvalidKind(String),

    /// No cached reference curve for the device.
    #[error("no cached curve for device: {0}")]
    CurveNotFound(String),

    /// Curve assembly failure.
    #[error("curve error: {0}")]
    Curve(#[from] rectify_core::Error),

    /// IO error reading or writing curve files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error in a curve file.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for validation operations.
pub type Result<T> = std::result::Result<T, Error>;
