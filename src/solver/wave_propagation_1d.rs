//! One-dimensional reference block.
//!
//! Same edge solver and time step rule as the 2D blocks, over plain
//! vectors with one outflow ghost cell at each end. Used to check that a
//! 2D block with a single row reproduces the 1D solution.

use crate::flux::{EdgeState, FWaveSolver, RiemannSolver};
use crate::grid::GridError;
use crate::scenario::Profile1D;

use super::sweep::SAFETY_FACTOR;

/// 1D f-wave block over `h`, `hu` and `b`.
///
/// Vectors hold `n + 2` values: ghost, `n` interior cells, ghost. Net
/// updates are stored per edge, edge `i` lying between cells `i` and
/// `i + 1`.
///
/// # Example
///
/// ```
/// use swe_tsunami::scenario::BathymetryScenario1D;
/// use swe_tsunami::solver::WavePropagation1D;
///
/// let mut block = WavePropagation1D::from_profile(&BathymetryScenario1D::default());
/// let dt = block.compute_numerical_fluxes();
/// block.update_unknowns(dt);
/// assert_eq!(block.height().len(), 100);
/// ```
#[derive(Clone, Debug)]
pub struct WavePropagation1D<S: RiemannSolver = FWaveSolver> {
    h: Vec<f64>,
    hu: Vec<f64>,
    b: Vec<f64>,
    h_net_left: Vec<f64>,
    h_net_right: Vec<f64>,
    hu_net_left: Vec<f64>,
    hu_net_right: Vec<f64>,
    cell_size: f64,
    solver: S,
    max_wave_speed: f64,
}

impl WavePropagation1D<FWaveSolver> {
    /// Block over interior values `h`, `hu`, `b`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyGrid`] for empty input and
    /// [`GridError::DimensionMismatch`] if the lengths differ.
    pub fn new(h: &[f64], hu: &[f64], b: &[f64], cell_size: f64) -> Result<Self, GridError> {
        Self::with_solver(h, hu, b, cell_size, FWaveSolver::default())
    }

    /// Sample every cell of `profile`, ghosts included.
    pub fn from_profile(profile: &dyn Profile1D) -> Self {
        let n = profile.size();
        let sample = |f: &dyn Fn(usize) -> f64| (0..n + 2).map(f).collect::<Vec<_>>();
        let mut block = Self::from_padded(
            sample(&|pos| profile.height(pos)),
            sample(&|pos| profile.momentum(pos)),
            sample(&|pos| profile.bathymetry(pos)),
            profile.cell_size(),
            FWaveSolver::default(),
        );
        block.set_outflow_boundaries();
        block
    }
}

impl<S: RiemannSolver> WavePropagation1D<S> {
    /// Block with an explicit edge solver.
    ///
    /// # Errors
    ///
    /// See [`WavePropagation1D::new`].
    pub fn with_solver(
        h: &[f64],
        hu: &[f64],
        b: &[f64],
        cell_size: f64,
        solver: S,
    ) -> Result<Self, GridError> {
        let n = h.len();
        if n == 0 {
            return Err(GridError::EmptyGrid { nx: 0, ny: 1 });
        }
        for len in [hu.len(), b.len()] {
            if len != n {
                return Err(GridError::DimensionMismatch {
                    expected: n,
                    actual: len,
                });
            }
        }
        let pad = |v: &[f64]| {
            let mut out = Vec::with_capacity(n + 2);
            out.push(0.0);
            out.extend_from_slice(v);
            out.push(0.0);
            out
        };
        let mut block = Self::from_padded(pad(h), pad(hu), pad(b), cell_size, solver);
        block.set_outflow_boundaries();
        Ok(block)
    }

    fn from_padded(h: Vec<f64>, hu: Vec<f64>, b: Vec<f64>, cell_size: f64, solver: S) -> Self {
        let edges = h.len() - 1;
        Self {
            h,
            hu,
            b,
            h_net_left: vec![0.0; edges],
            h_net_right: vec![0.0; edges],
            hu_net_left: vec![0.0; edges],
            hu_net_right: vec![0.0; edges],
            cell_size,
            solver,
            max_wave_speed: 0.0,
        }
    }

    /// Number of interior cells.
    #[inline]
    pub fn size(&self) -> usize {
        self.h.len() - 2
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Interior water heights.
    pub fn height(&self) -> &[f64] {
        &self.h[1..=self.size()]
    }

    /// Interior momenta.
    pub fn momentum(&self) -> &[f64] {
        &self.hu[1..=self.size()]
    }

    /// Interior bathymetry.
    pub fn bathymetry(&self) -> &[f64] {
        &self.b[1..=self.size()]
    }

    /// Largest edge speed of the last flux computation.
    pub fn max_wave_speed(&self) -> f64 {
        self.max_wave_speed
    }

    /// Copy the outermost interior cells into the ghosts.
    pub fn set_outflow_boundaries(&mut self) {
        let n = self.size();
        for v in [&mut self.h, &mut self.hu, &mut self.b] {
            v[0] = v[1];
            v[n + 1] = v[n];
        }
    }

    /// Solve every edge and return the stable time step
    /// (`f64::INFINITY` if nothing moves).
    pub fn compute_numerical_fluxes(&mut self) -> f64 {
        let mut max_speed: f64 = 0.0;
        for i in 0..=self.size() {
            let u = self.solver.net_updates(
                EdgeState::new(self.h[i], self.hu[i], self.b[i]),
                EdgeState::new(self.h[i + 1], self.hu[i + 1], self.b[i + 1]),
            );
            self.h_net_left[i] = u.h_left;
            self.h_net_right[i] = u.h_right;
            self.hu_net_left[i] = u.hu_left;
            self.hu_net_right[i] = u.hu_right;
            max_speed = max_speed.max(u.max_wave_speed);
        }
        self.max_wave_speed = max_speed;

        if max_speed > 0.0 {
            SAFETY_FACTOR * self.cell_size / max_speed
        } else {
            f64::INFINITY
        }
    }

    /// Apply the net updates of the last flux computation over `dt`.
    pub fn update_unknowns(&mut self, dt: f64) {
        let r = dt / self.cell_size;
        for i in 1..=self.size() {
            self.h[i] -= r * (self.h_net_right[i - 1] + self.h_net_left[i]);
            self.hu[i] -= r * (self.hu_net_right[i - 1] + self.hu_net_left[i]);
        }
    }

    /// Boundaries, fluxes and update in one call; returns the step used.
    pub fn step(&mut self, limit: Option<f64>) -> f64 {
        self.set_outflow_boundaries();
        let max_dt = self.compute_numerical_fluxes();
        let dt = limit.map_or(max_dt, |limit| max_dt.min(limit));
        if dt.is_finite() {
            self.update_unknowns(dt);
        }
        dt
    }
}
