//! Diode model parameters and the junction capacitance model.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Thermal voltage at room temperature (V), the value used by the I-V solve.
pub const VT: f64 = 0.02585;

/// Thermal voltage kT/q at a given temperature.
pub fn thermal_voltage(temp_k: f64) -> f64 {
    const K_BOLTZMANN: f64 = 1.380649e-23;
    const Q_ELECTRON: f64 = 1.602176634e-19;
    K_BOLTZMANN * temp_k / Q_ELECTRON
}

/// SPICE diode model parameters.
///
/// Field names serialize in their SPICE spelling (`IS`, `RS`, ...), matching
/// the parameter documents accepted by the device store. Missing fields fall
/// back to the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiodeParams {
    /// Saturation current (A). Default: 1e-14.
    #[serde(rename = "IS")]
    pub is: f64,
    /// Series resistance (ohms). Default: 0.0.
    #[serde(rename = "RS")]
    pub rs: f64,
    /// Emission coefficient. Default: 1.0.
    #[serde(rename = "N")]
    pub n: f64,
    /// Reverse breakdown voltage (V). Default: 100.0.
    #[serde(rename = "BV")]
    pub bv: f64,
    /// Current at breakdown (A). Default: 1e-10.
    #[serde(rename = "IBV")]
    pub ibv: f64,
    /// Zero-bias junction capacitance (F). Default: 0.0.
    #[serde(rename = "CJO")]
    pub cjo: f64,
    /// Junction potential (V). Default: 1.0.
    #[serde(rename = "VJ")]
    pub vj: f64,
    /// Junction grading coefficient. Default: 0.5.
    #[serde(rename = "M")]
    pub m: f64,
    /// Forward-bias depletion capacitance coefficient. Default: 0.5.
    #[serde(rename = "FC")]
    pub fc: f64,
    /// Transit time (s). Default: 0.0.
    #[serde(rename = "TT")]
    pub tt: f64,
    /// Activation energy (eV). Default: 1.11.
    #[serde(rename = "EG")]
    pub eg: f64,
    /// Saturation current temperature exponent. Default: 3.0.
    #[serde(rename = "XTI")]
    pub xti: f64,
    /// Flicker noise coefficient. Default: 0.0.
    #[serde(rename = "KF")]
    pub kf: f64,
    /// Flicker noise exponent. Default: 1.0.
    #[serde(rename = "AF")]
    pub af: f64,
}

impl Default for DiodeParams {
    fn default() -> Self {
        Self {
            is: 1e-14,
            rs: 0.0,
            n: 1.0,
            bv: 100.0,
            ibv: 1e-10,
            cjo: 0.0,
            vj: 1.0,
            m: 0.5,
            fc: 0.5,
            tt: 0.0,
            eg: 1.11,
            xti: 3.0,
            kf: 0.0,
            af: 1.0,
        }
    }
}

impl DiodeParams {
    /// Check the parameter invariants required by the I-V solve.
    ///
    /// `TT`, `EG`, `XTI`, `KF` and `AF` are carried through unchecked; the
    /// solve does not read them.
    pub fn validate(&self) -> Result<()> {
        if !(self.is > 0.0) {
            return Err(invalid("IS", self.is, "must be positive"));
        }
        if !(self.n > 0.0) {
            return Err(invalid("N", self.n, "must be positive"));
        }
        if !(self.rs >= 0.0) {
            return Err(invalid("RS", self.rs, "must be non-negative"));
        }
        if !(self.bv > 0.0) {
            return Err(invalid("BV", self.bv, "must be positive"));
        }
        if !(self.ibv > 0.0) {
            return Err(invalid("IBV", self.ibv, "must be positive"));
        }
        Ok(())
    }

    /// Junction capacitance at a bias voltage.
    ///
    /// For `v <= FC * VJ` this is the depletion formula
    /// `CJO / (1 - v/VJ)^M` with the base floored at 1e-6; above that bias
    /// it switches to the SPICE linearization
    /// `CJO * F1 * (1 + M * (v - FC*VJ) / (VJ * (1 - FC)))` with
    /// `F1 = (1 / (1 - FC))^(1 + M)`.
    pub fn junction_capacitance(&self, v: f64) -> f64 {
        if v <= self.fc * self.vj {
            let base = (1.0 - v / self.vj).max(1e-6);
            self.cjo / base.powf(self.m)
        } else {
            let f1 = (1.0 / (1.0 - self.fc)).powf(1.0 + self.m);
            self.cjo * f1 * (1.0 + self.m * (v - self.fc * self.vj) / (self.vj * (1.0 - self.fc)))
        }
    }

    /// Junction capacitance sampled over a voltage grid.
    pub fn capacitance_curve(&self, grid: &[f64]) -> Vec<f64> {
        grid.iter().map(|&v| self.junction_capacitance(v)).collect()
    }
}

fn invalid(name: &'static str, value: f64, reason: &'static str) -> Error {
    Error::InvalidParameter {
        name,
        value,
        reason,
    }
}
