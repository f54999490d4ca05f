//! Error types for rectify-core.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("voltage/current length mismatch: {voltage} vs {current}")]
    LengthMismatch { voltage: usize, current: usize },

    #[error("invalid numeric value: {0}")]
    ParseValue(String),
}

pub type Result<T> = std::result::Result<T, Error>;
