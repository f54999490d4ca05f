//! Approximation kinds and the pass/fail verdict.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Source of an approximated curve, which sets its accuracy bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApproxKind {
    /// Learned analytic model.
    Ia,
    /// Quantized hardware implementation.
    Hls,
}

impl ApproxKind {
    /// Relative-error threshold (%) this kind must stay strictly under.
    pub fn threshold_pct(self) -> f64 {
        match self {
            Self::Ia => 2.0,
            Self::Hls => 5.0,
        }
    }

    /// The kind tag as written in curve files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ia => "ia",
            Self::Hls => "hls",
        }
    }
}

impl FromStr for ApproxKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ia" => Ok(Self::Ia),
            "hls" => Ok(Self::Hls),
            other => Err(Error::InvalidKind(other.to_string())),
        }
    }
}

impl fmt::Display for ApproxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    /// Relative error strictly under the threshold.
    Pass,
    /// Threshold met or exceeded, or the metric was not finite.
    Fail,
}

impl Verdict {
    /// Whether this is a pass.
    pub fn is_pass(self) -> bool {
        matches!(self, Self::Pass)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
        })
    }
}

/// Judge a relative error against a kind's threshold.
///
/// The comparison is strict, so landing exactly on the threshold fails,
/// and a NaN error can never pass.
pub fn verdict(e_rel_pct: f64, kind: ApproxKind) -> Verdict {
    if e_rel_pct < kind.threshold_pct() {
        Verdict::Pass
    } else {
        Verdict::Fail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_are_strict() {
        assert_eq!(verdict(1.999999, ApproxKind::Ia), Verdict::Pass);
        assert_eq!(verdict(2.0, ApproxKind::Ia), Verdict::Fail);
        assert_eq!(verdict(4.999999, ApproxKind::Hls), Verdict::Pass);
        assert_eq!(verdict(5.0, ApproxKind::Hls), Verdict::Fail);
    }

    #[test]
    fn test_hls_bar_is_looser() {
        // 3% passes for hardware, fails for the learned model
        assert_eq!(verdict(3.0, ApproxKind::Hls), Verdict::Pass);
        assert_eq!(verdict(3.0, ApproxKind::Ia), Verdict::Fail);
    }

    #[test]
    fn test_nan_never_passes() {
        assert_eq!(verdict(f64::NAN, ApproxKind::Ia), Verdict::Fail);
        assert_eq!(verdict(f64::NAN, ApproxKind::Hls), Verdict::Fail);
        assert_eq!(verdict(f64::INFINITY, ApproxKind::Hls), Verdict::Fail);
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("ia".parse::<ApproxKind>().unwrap(), ApproxKind::Ia);
        assert_eq!("hls".parse::<ApproxKind>().unwrap(), ApproxKind::Hls);

        let err = "mlp".parse::<ApproxKind>().unwrap_err();
        assert!(matches!(err, Error::InvalidKind(kind) if kind == "mlp"));
        assert!("IA".parse::<ApproxKind>().is_err(), "tags are lowercase");
    }

    #[test]
    fn test_serde_tags() {
        assert_eq!(serde_json::to_string(&ApproxKind::Ia).unwrap(), "\"ia\"");
        assert_eq!(serde_json::to_string(&Verdict::Pass).unwrap(), "\"PASS\"");
        let kind: ApproxKind = serde_json::from_str("\"hls\"").unwrap();
        assert_eq!(kind, ApproxKind::Hls);
    }

    #[test]
    fn test_display() {
        assert_eq!(Verdict::Pass.to_string(), "PASS");
        assert_eq!(Verdict::Fail.to_string(), "FAIL");
        assert_eq!(ApproxKind::Hls.to_string(), "hls");
    }
}
