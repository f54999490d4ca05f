//! Device models and the device parameter store for rectify.
//!
//! This crate provides:
//! - SPICE diode model parameters with validation and serde support
//! - The junction capacitance model
//! - An in-memory store of named device parameter records

pub mod diode;
pub mod error;
pub mod kind;
pub mod store;

pub use diode::{thermal_voltage, DiodeParams, VT};
pub use error::{Error, Result};
pub use kind::DeviceKind;
pub use store::{DeviceRecord, DeviceStore};
