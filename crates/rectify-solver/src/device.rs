//! Per-kind device solvers.

use rectify_devices::{DeviceKind, DeviceRecord, DiodeParams, VT};

use crate::error::{Error, Result};
use crate::newton::{solve_newton, ConvergenceCriteria};

/// Bound on the argument fed to `exp` in the diode equation.
const EXP_ARG_LIMIT: f64 = 500.0;

/// Above breakdown the I-V point is pinned without iterating; this margin
/// keeps the exponential branch away from the breakdown wall.
const BREAKDOWN_MARGIN: f64 = 0.1;

/// Solution at a single bias point.
#[derive(Debug, Clone, Copy)]
pub struct PointSolution {
    /// Terminal current (A).
    pub current: f64,
    /// Newton iterations spent on this point.
    pub iterations: usize,
    /// Whether the point met the convergence criteria.
    pub converged: bool,
}

/// Newton solver for the implicit diode equation.
///
/// Finds the terminal current satisfying
/// `I = IS * (exp((V - I*RS) / (N*VT)) - 1)` at an applied voltage `V`.
/// The series resistance couples the junction voltage to the current, so
/// each bias point is a scalar root-finding problem.
#[derive(Debug, Clone)]
pub struct DiodeSolver {
    params: DiodeParams,
    criteria: ConvergenceCriteria,
}

impl DiodeSolver {
    /// Build a solver after validating the parameters.
    pub fn new(params: DiodeParams) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            params,
            criteria: ConvergenceCriteria::default(),
        })
    }

    /// Replace the convergence criteria.
    pub fn with_criteria(mut self, criteria: ConvergenceCriteria) -> Self {
        self.criteria = criteria;
        self
    }

    /// The model parameters this solver was built with.
    pub fn params(&self) -> &DiodeParams {
        &self.params
    }

    /// Solve for the current at an applied voltage.
    ///
    /// `hint` warm-starts the iteration, typically with the current from an
    /// adjacent sweep point; `None` falls back to a guess from the explicit
    /// diode equation. Past breakdown (`v < -BV + 0.1`) the current is
    /// pinned to `-IBV` without iterating.
    pub fn solve_at(&self, v: f64, hint: Option<f64>) -> PointSolution {
        let p = &self.params;

        if v < -p.bv + BREAKDOWN_MARGIN {
            return PointSolution {
                current: -p.ibv,
                iterations: 0,
                converged: true,
            };
        }

        let nvt = p.n * VT;
        let is = p.is;
        let rs = p.rs;

        let residual = move |i: f64| {
            let arg = ((v - i * rs) / nvt).clamp(-EXP_ARG_LIMIT, EXP_ARG_LIMIT);
            i - is * (arg.exp() - 1.0)
        };
        // In the clamped region the exponential stops responding to i and
        // the residual slope is exactly 1.
        let derivative = move |i: f64| {
            let arg = (v - i * rs) / nvt;
            if arg.abs() >= EXP_ARG_LIMIT {
                1.0
            } else {
                1.0 + is * rs / nvt * arg.exp()
            }
        };

        let x0 = hint.unwrap_or_else(|| self.cold_guess(v));
        let result = solve_newton(residual, derivative, x0, &self.criteria);

        PointSolution {
            current: result.root,
            iterations: result.iterations,
            converged: result.converged,
        }
    }

    /// Starting estimate for a cold solve: the explicit diode equation in
    /// forward bias, the saturation current in reverse.
    fn cold_guess(&self, v: f64) -> f64 {
        let p = &self.params;
        if v > 0.0 {
            let arg = (v / (p.n * VT)).clamp(-EXP_ARG_LIMIT, EXP_ARG_LIMIT);
            p.is * (arg.exp() - 1.0)
        } else {
            -p.is
        }
    }
}

/// Kind-dispatched device solver.
///
/// One variant per modeled device kind. Construction fails with
/// [`Error::UnsupportedKind`] for records this build does not model, so a
/// store can hold records of any kind without breaking sweeps of the
/// supported ones.
#[derive(Debug, Clone)]
pub enum DeviceSolver {
    /// Diode I-V solver.
    Diode(DiodeSolver),
}

impl DeviceSolver {
    /// Build the solver matching a record's kind.
    pub fn from_record(record: &DeviceRecord) -> Result<Self> {
        match &record.kind {
            DeviceKind::Diode => {
                let params = record.diode_params()?;
                Ok(Self::Diode(DiodeSolver::new(params)?))
            }
            DeviceKind::Other(kind) => Err(Error::UnsupportedKind(kind.clone())),
        }
    }

    /// Replace the convergence criteria.
    pub fn with_criteria(self, criteria: ConvergenceCriteria) -> Self {
        match self {
            Self::Diode(solver) => Self::Diode(solver.with_criteria(criteria)),
        }
    }

    /// Solve for the current at an applied voltage.
    pub fn solve_at(&self, v: f64, hint: Option<f64>) -> PointSolution {
        match self {
            Self::Diode(solver) => solver.solve_at(v, hint),
        }
    }
}
