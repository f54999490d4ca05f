//! I-V curve representation.

use crate::error::{Error, Result};

/// An immutable current-voltage characteristic.
///
/// Holds two equal-length sample arrays: the voltage grid and the terminal
/// current at each grid point. Both the reference simulation and external
/// approximations (ML prediction, quantized hardware model) use this shape.
#[derive(Debug, Clone, PartialEq)]
pub struct IvCurve {
    voltage: Vec<f64>,
    current: Vec<f64>,
}

impl IvCurve {
    /// Create a curve from separate voltage and current arrays.
    ///
    /// Fails if the arrays differ in length.
    pub fn new(voltage: Vec<f64>, current: Vec<f64>) -> Result<Self> {
        if voltage.len() != current.len() {
            return Err(Error::LengthMismatch {
                voltage: voltage.len(),
                current: current.len(),
            });
        }
        Ok(Self { voltage, current })
    }

    /// Create a curve from (voltage, current) sample pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let (voltage, current) = pairs.into_iter().unzip();
        Self { voltage, current }
    }

    /// Voltage grid.
    pub fn voltage(&self) -> &[f64] {
        &self.voltage
    }

    /// Current samples, aligned with the voltage grid.
    pub fn current(&self) -> &[f64] {
        &self.current
    }

    /// Number of sample points.
    pub fn len(&self) -> usize {
        self.voltage.len()
    }

    /// Whether the curve has no samples.
    pub fn is_empty(&self) -> bool {
        self.voltage.is_empty()
    }

    /// Iterate over (voltage, current) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.voltage
            .iter()
            .zip(self.current.iter())
            .map(|(&v, &i)| (v, i))
    }

    /// Whether the voltage grid is strictly increasing.
    ///
    /// Sweep-produced curves always satisfy this; external curves should be
    /// checked before interpolation.
    pub fn is_ascending(&self) -> bool {
        self.voltage.windows(2).all(|w| w[0] < w[1])
    }

    /// Minimum current sample, if the curve is non-empty.
    pub fn current_min(&self) -> Option<f64> {
        self.current.iter().copied().reduce(f64::min)
    }

    /// Maximum current sample, if the curve is non-empty.
    pub fn current_max(&self) -> Option<f64> {
        self.current.iter().copied().reduce(f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_length_mismatch() {
        let result = IvCurve::new(vec![0.0, 0.1], vec![0.0]);
        assert!(matches!(
            result,
            Err(Error::LengthMismatch {
                voltage: 2,
                current: 1
            })
        ));
    }

    #[test]
    fn test_from_pairs() {
        let curve = IvCurve::from_pairs([(0.0, 0.0), (0.5, 1e-3), (1.0, 0.1)]);
        assert_eq!(curve.len(), 3);
        assert_eq!(curve.voltage(), &[0.0, 0.5, 1.0]);
        assert_eq!(curve.current(), &[0.0, 1e-3, 0.1]);
    }

    #[test]
    fn test_is_ascending() {
        let sorted = IvCurve::from_pairs([(-1.0, 0.0), (0.0, 0.0), (1.0, 0.1)]);
        assert!(sorted.is_ascending());

        let duplicate = IvCurve::from_pairs([(0.0, 0.0), (0.0, 0.1)]);
        assert!(!duplicate.is_ascending(), "equal voltages are not ascending");

        let unsorted = IvCurve::from_pairs([(1.0, 0.0), (0.0, 0.1)]);
        assert!(!unsorted.is_ascending());
    }

    #[test]
    fn test_current_extrema() {
        let curve = IvCurve::from_pairs([(-1.0, -5e-8), (0.0, 0.0), (1.0, 0.3)]);
        assert_eq!(curve.current_min(), Some(-5e-8));
        assert_eq!(curve.current_max(), Some(0.3));

        let empty = IvCurve::from_pairs(std::iter::empty());
        assert_eq!(empty.current_min(), None);
    }
}
