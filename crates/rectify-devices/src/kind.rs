//! Device kind tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of a stored device.
///
/// Only the diode kind has a solver today. Records with other kind strings
/// still load and list normally; they are rejected when a solver is
/// requested for them, so new kinds can be staged in a parameter store
/// before their solver lands.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DeviceKind {
    /// Two-terminal junction diode.
    Diode,
    /// A kind with no registered solver.
    Other(String),
}

impl DeviceKind {
    /// Canonical lowercase tag for this kind.
    pub fn as_str(&self) -> &str {
        match self {
            DeviceKind::Diode => "diode",
            DeviceKind::Other(s) => s,
        }
    }
}

impl From<String> for DeviceKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "diode" => DeviceKind::Diode,
            _ => DeviceKind::Other(s),
        }
    }
}

impl From<DeviceKind> for String {
    fn from(kind: DeviceKind) -> Self {
        kind.as_str().to_string()
    }
}

impl FromStr for DeviceKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(DeviceKind::from(s.to_string()))
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
