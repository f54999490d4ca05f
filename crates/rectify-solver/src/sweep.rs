//! Voltage grids and the cached sweep pipeline.

use std::sync::Arc;

use rectify_core::{CurveCache, IvCurve};
use rectify_devices::DeviceStore;

use crate::device::DeviceSolver;
use crate::error::{Error, Result};

/// I-V sweep parameters.
#[derive(Debug, Clone)]
pub struct SweepParams {
    /// Sweep start (V). Default: -5.0.
    pub v_min: f64,
    /// Sweep stop (V). Default: 1.2.
    pub v_max: f64,
    /// Nominal point count, before duplicate grid points are merged.
    /// Default: 2000.
    pub points: usize,
    /// Recompute even when the cache already holds a curve. Default: false.
    pub force: bool,
}

impl Default for SweepParams {
    fn default() -> Self {
        Self {
            v_min: -5.0,
            v_max: 1.2,
            points: 2000,
            force: false,
        }
    }
}

impl SweepParams {
    /// Set the voltage range.
    pub fn with_range(mut self, v_min: f64, v_max: f64) -> Self {
        self.v_min = v_min;
        self.v_max = v_max;
        self
    }

    /// Set the nominal point count.
    pub fn with_points(mut self, points: usize) -> Self {
        self.points = points;
        self
    }

    /// Force a recompute, ignoring any cached curve.
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

/// Nonuniform voltage grid concentrating samples around the diode knee.
///
/// Concatenates three linear segments, `[v_min, 0.4]` at a quarter of the
/// points, `[0.4, 0.9]` at half, and `[0.9, v_max]` at the remaining
/// quarter, then sorts and merges exact duplicates (the segment endpoints
/// overlap). The returned grid is strictly ascending.
pub fn knee_grid(v_min: f64, v_max: f64, points: usize) -> Vec<f64> {
    let mut grid = Vec::with_capacity(points);
    grid.extend(linspace(v_min, 0.4, points / 4));
    grid.extend(linspace(0.4, 0.9, points / 2));
    grid.extend(linspace(0.9, v_max, points / 4));
    grid.sort_unstable_by(f64::total_cmp);
    grid.dedup();
    grid
}

/// Evenly spaced samples over `[start, end]`, endpoints included.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count)
                .map(|k| {
                    // Pin the endpoint so overlapping segments dedup exactly
                    if k == count - 1 {
                        end
                    } else {
                        start + step * k as f64
                    }
                })
                .collect()
        }
    }
}

/// Sweep a stored device over the knee grid, consulting the curve cache.
///
/// Returns the cached curve when one exists for `name` and `params.force`
/// is not set. A computed curve is stored in the cache before returning.
/// Points solve sequentially, each warm-started from its neighbor.
pub fn sweep_device(
    store: &DeviceStore,
    cache: &CurveCache,
    name: &str,
    params: &SweepParams,
) -> Result<Arc<IvCurve>> {
    if !params.force {
        if let Some(curve) = cache.get(name) {
            log::info!("cache hit for {} ({} points)", name, curve.len());
            return Ok(curve);
        }
    }

    let record = store
        .get(name)
        .ok_or_else(|| Error::DeviceNotFound(name.to_string()))?;
    let solver = DeviceSolver::from_record(record)?;

    let grid = knee_grid(params.v_min, params.v_max, params.points);
    let current = solve_grid(&solver, &grid, name);

    let curve = cache.put(name, IvCurve::new(grid, current)?);
    log::info!(
        "swept {} over [{}, {}] V ({} points, I in [{:.3e}, {:.3e}] A)",
        name,
        params.v_min,
        params.v_max,
        curve.len(),
        curve.current_min().unwrap_or(0.0),
        curve.current_max().unwrap_or(0.0),
    );
    Ok(curve)
}

/// Solve every grid point sequentially with neighbor warm starts.
pub(crate) fn solve_grid(solver: &DeviceSolver, grid: &[f64], name: &str) -> Vec<f64> {
    let mut current = Vec::with_capacity(grid.len());
    let mut hint = None;
    let mut failed = 0usize;

    for &v in grid {
        let sol = solver.solve_at(v, hint);
        if !sol.converged {
            failed += 1;
        }
        // Chain the estimate even when unconverged; it is still the best
        // starting point for the neighboring bias.
        hint = Some(sol.current);
        current.push(sol.current);
    }

    if failed > 0 {
        log::warn!(
            "{}: {} of {} points did not converge",
            name,
            failed,
            grid.len()
        );
    }

    current
}
