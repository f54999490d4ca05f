//! Scalar Newton-Raphson root finding.

/// Convergence criteria for Newton-Raphson iteration.
#[derive(Debug, Clone)]
pub struct ConvergenceCriteria {
    /// Absolute step tolerance. Default: 1e-12.
    pub abstol: f64,
    /// Relative step tolerance. Default: 1e-6.
    pub reltol: f64,
    /// Maximum iterations before giving up. Default: 100.
    pub max_iterations: usize,
}

impl Default for ConvergenceCriteria {
    fn default() -> Self {
        Self {
            abstol: 1e-12,
            reltol: 1e-6,
            max_iterations: 100,
        }
    }
}

/// Result of a scalar Newton-Raphson solve.
#[derive(Debug, Clone, Copy)]
pub struct RootResult {
    /// Best root estimate.
    pub root: f64,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Whether the step tolerance was met within the iteration budget.
    pub converged: bool,
    /// Residual at the returned estimate.
    pub residual: f64,
}

/// Find a root of `residual` by Newton-Raphson iteration.
///
/// Iterates `x <- x - residual(x) / derivative(x)` from `x0` until the step
/// satisfies `|dx| <= reltol * max(|x_new|, |x_old|) + abstol` or the
/// iteration budget runs out. The best estimate is always returned; callers
/// that need a guarantee check `converged`.
pub fn solve_newton<F, D>(
    residual: F,
    derivative: D,
    x0: f64,
    criteria: &ConvergenceCriteria,
) -> RootResult
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    let mut x = x0;

    for iteration in 0..criteria.max_iterations {
        let f = residual(x);
        let df = derivative(x);

        // A vanishing or broken derivative leaves no usable step
        if df == 0.0 || !df.is_finite() {
            return RootResult {
                root: x,
                iterations: iteration,
                converged: false,
                residual: f,
            };
        }

        let x_new = x - f / df;

        // Check convergence on the step size
        let delta = (x_new - x).abs();
        let tol = criteria.reltol * x_new.abs().max(x.abs()) + criteria.abstol;
        let converged = delta <= tol;

        x = x_new;

        if converged {
            return RootResult {
                root: x,
                iterations: iteration + 1,
                converged: true,
                residual: residual(x),
            };
        }
    }

    // Failed to converge - return last estimate
    RootResult {
        root: x,
        iterations: criteria.max_iterations,
        converged: false,
        residual: residual(x),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newton_sqrt2() {
        let criteria = ConvergenceCriteria::default();
        let result = solve_newton(|x| x * x - 2.0, |x| 2.0 * x, 1.0, &criteria);

        assert!(result.converged, "should converge");
        assert!(
            result.iterations < 10,
            "should converge in < 10 iterations, took {}",
            result.iterations
        );
        assert!(
            (result.root - 2.0_f64.sqrt()).abs() < 1e-10,
            "root = {} (expected sqrt(2))",
            result.root
        );
        assert!(result.residual.abs() < 1e-10);
    }

    #[test]
    fn test_newton_linear_converges_in_one_step() {
        let criteria = ConvergenceCriteria::default();
        let result = solve_newton(|x| 3.0 * x - 6.0, |_| 3.0, 0.0, &criteria);

        assert!(result.converged);
        // One step to the root, one to observe the zero step
        assert!(result.iterations <= 2);
        assert!((result.root - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_newton_exhausts_budget_without_failing() {
        // Constant residual with unit slope never settles; the solver must
        // hand back its last estimate instead of erroring.
        let criteria = ConvergenceCriteria {
            max_iterations: 20,
            ..Default::default()
        };
        let result = solve_newton(|_| 1.0, |_| 1.0, 0.0, &criteria);

        assert!(!result.converged);
        assert_eq!(result.iterations, 20);
        assert!(result.root.is_finite());
    }

    #[test]
    fn test_newton_zero_derivative_stops() {
        let criteria = ConvergenceCriteria::default();
        let result = solve_newton(|x| x * x + 1.0, |_| 0.0, 5.0, &criteria);

        assert!(!result.converged);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.root, 5.0, "estimate stays at the starting point");
    }
}
