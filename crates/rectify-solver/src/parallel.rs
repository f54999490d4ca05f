//! Parallel sweep execution using rayon.
//!
//! Each bias point of an I-V sweep solves independently, so large grids can
//! fan out across rayon's thread pool. Two schedules are offered:
//!
//! 1. Point-parallel: every point cold-starts. Fully deterministic and
//!    independent of the thread count.
//! 2. Chunk-parallel: the grid splits into fixed chunks and points
//!    warm-start from their neighbor within a chunk. Deterministic for a
//!    fixed chunk size.
//!
//! Small sweeps fall back to the sequential path, where neighbor warm
//! starts make individual points cheapest.

use std::sync::Arc;

use rayon::prelude::*;

use rectify_core::{CurveCache, IvCurve};
use rectify_devices::DeviceStore;

use crate::device::{DeviceSolver, PointSolution};
use crate::error::{Error, Result};
use crate::sweep::{knee_grid, sweep_device, SweepParams};

/// Configuration for parallel sweep execution.
#[derive(Debug, Clone)]
pub struct ParallelSweepConfig {
    /// Minimum points to use parallel execution (below this, sequential is
    /// faster). Default: 512.
    pub min_points_for_parallel: usize,
    /// Chunk size for work distribution. None = one task per point.
    pub chunk_size: Option<usize>,
}

impl Default for ParallelSweepConfig {
    fn default() -> Self {
        Self {
            min_points_for_parallel: 512,
            chunk_size: None,
        }
    }
}

impl ParallelSweepConfig {
    /// Create config with explicit chunk size.
    pub fn with_chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = Some(size);
        self
    }

    /// Create config with minimum parallel threshold.
    pub fn with_min_parallel(mut self, min: usize) -> Self {
        self.min_points_for_parallel = min;
        self
    }
}

/// Sweep a stored device with the grid points solved in parallel.
///
/// Cache behavior matches [`sweep_device`]. Falls back to the sequential
/// sweep when the grid is below `config.min_points_for_parallel` or only
/// one rayon thread is available.
pub fn sweep_device_parallel(
    store: &DeviceStore,
    cache: &CurveCache,
    name: &str,
    params: &SweepParams,
    config: &ParallelSweepConfig,
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

    let use_parallel =
        grid.len() >= config.min_points_for_parallel && rayon::current_num_threads() > 1;
    if !use_parallel {
        return sweep_device(store, cache, name, params);
    }

    log::info!(
        "parallel sweep for {} ({} points, {} threads)",
        name,
        grid.len(),
        rayon::current_num_threads()
    );

    let solutions: Vec<PointSolution> = if let Some(chunk_size) = config.chunk_size {
        grid.par_chunks(chunk_size)
            .flat_map_iter(|chunk| solve_chunk(&solver, chunk))
            .collect()
    } else {
        grid.par_iter().map(|&v| solver.solve_at(v, None)).collect()
    };

    let failed = solutions.iter().filter(|sol| !sol.converged).count();
    if failed > 0 {
        log::warn!(
            "{}: {} of {} points did not converge",
            name,
            failed,
            grid.len()
        );
    }

    let current: Vec<f64> = solutions.iter().map(|sol| sol.current).collect();
    let curve = cache.put(name, IvCurve::new(grid, current)?);
    Ok(curve)
}

/// Solve one chunk of grid points with intra-chunk warm starts.
fn solve_chunk(solver: &DeviceSolver, chunk: &[f64]) -> Vec<PointSolution> {
    let mut solutions = Vec::with_capacity(chunk.len());
    let mut hint = None;
    for &v in chunk {
        let sol = solver.solve_at(v, hint);
        hint = Some(sol.current);
        solutions.push(sol);
    }
    solutions
}
