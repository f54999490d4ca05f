//! Core data types for the rectify validation pipeline.
//!
//! This crate provides the fundamental types shared by the solver and
//! validation crates: the I-V curve representation, the reference-curve
//! cache, and SPICE-style engineering unit handling.

pub mod cache;
pub mod curve;
pub mod error;
pub mod units;

pub use cache::CurveCache;
pub use curve::IvCurve;
pub use error::{Error, Result};
pub use units::{format_value, parse_value};
