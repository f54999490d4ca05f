//! On-disk curve files.

use std::path::Path;

use serde::{Deserialize, Serialize};

use rectify_core::IvCurve;

use crate::error::Result;

/// JSON exchange format for I-V curves.
///
/// This is how external approximations (ML predictions, quantized hardware
/// output) enter the validator, and how reference sweeps are exported. The
/// arrays are kept raw so a malformed file is rejected by
/// [`CurveFile::into_curve`] rather than at parse time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveFile {
    /// Device name.
    pub device: String,
    /// Approximation kind tag, when the producer recorded one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Voltage grid (V).
    pub voltage: Vec<f64>,
    /// Current samples (A).
    pub current: Vec<f64>,
}

impl CurveFile {
    /// Wrap a curve for writing.
    pub fn from_curve(device: impl Into<String>, curve: &IvCurve) -> Self {
        Self {
            device: device.into(),
            kind: None,
            description: String::new(),
            voltage: curve.voltage().to_vec(),
            current: curve.current().to_vec(),
        }
    }

    /// Convert the raw arrays into a validated curve.
    pub fn into_curve(self) -> Result<IvCurve> {
        Ok(IvCurve::new(self.voltage, self.current)?)
    }

    /// Load a curve file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Write the curve file to disk.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
