//! Full-grid block: x- and y-sweeps over every interior edge.

use crate::boundary::{BoundaryConditions, apply_ghost_layer};
use crate::flux::{FWaveSolver, RiemannSolver};
use crate::grid::GridState;
use crate::scenario::Scenario;
use crate::types::{DomainWindow, Resolution2D};

use super::block::WaveBlock;
use super::sweep::{
    NetUpdateFields, apply_net_updates, check_cfl, stable_time_step, sweep_x, sweep_y,
};

/// Block that sweeps the whole grid in x and in y every iteration.
///
/// Both sweeps read the state left by the previous update and store their
/// net updates in separate buffers; [`update_unknowns`](WaveBlock::update_unknowns)
/// then applies both with a single time step derived from the larger of the
/// two CFL limits.
///
/// # Example
///
/// ```
/// use swe_tsunami::boundary::BoundaryConditions;
/// use swe_tsunami::grid::GridState;
/// use swe_tsunami::scenario::StillWaterScenario;
/// use swe_tsunami::solver::{DimensionalSplitting, WaveBlock};
/// use swe_tsunami::types::Resolution2D;
///
/// let state = GridState::from_scenario(Resolution2D::new(16, 16), &StillWaterScenario::default());
/// let mut block = DimensionalSplitting::new(state, BoundaryConditions::walls());
/// block.step(Some(1.0));
/// assert!(block.state().h.interior().all(|h| (h - 10.0).abs() < 1e-12));
/// ```
#[derive(Debug)]
pub struct DimensionalSplitting<S: RiemannSolver = FWaveSolver> {
    state: GridState,
    boundaries: BoundaryConditions,
    solver: S,
    x_updates: NetUpdateFields,
    y_updates: NetUpdateFields,
    max_speed: (f64, f64),
    max_time_step: f64,
}

impl DimensionalSplitting<FWaveSolver> {
    /// Block with the default f-wave solver.
    pub fn new(state: GridState, boundaries: BoundaryConditions) -> Self {
        Self::with_solver(state, boundaries, FWaveSolver::default())
    }

    /// Sample `scenario` on `resolution` cells and take its boundary kinds.
    pub fn from_scenario(resolution: Resolution2D, scenario: &dyn Scenario) -> Self {
        let state = GridState::from_scenario(resolution, scenario);
        Self::new(state, scenario.boundary_conditions())
    }
}

impl<S: RiemannSolver> DimensionalSplitting<S> {
    /// Block with an explicit edge solver. The ghost ring is filled
    /// immediately.
    pub fn with_solver(mut state: GridState, boundaries: BoundaryConditions, solver: S) -> Self {
        let (nx, ny) = (state.nx(), state.ny());
        apply_ghost_layer(&mut state, &boundaries);
        tracing::debug!(
            nx,
            ny,
            solver = solver.name(),
            boundaries = %boundaries,
            "created dimensional splitting block"
        );
        Self {
            state,
            boundaries,
            solver,
            x_updates: NetUpdateFields::new(nx, ny),
            y_updates: NetUpdateFields::new(nx, ny),
            max_speed: (0.0, 0.0),
            max_time_step: f64::INFINITY,
        }
    }

    pub fn into_state(self) -> GridState {
        self.state
    }

    pub fn solver(&self) -> &S {
        &self.solver
    }

    /// Largest edge speeds `(x, y)` of the last flux computation.
    pub fn max_wave_speeds(&self) -> (f64, f64) {
        self.max_speed
    }

    /// Net updates `(x, y)` of the last flux computation.
    pub fn net_updates(&self) -> (&NetUpdateFields, &NetUpdateFields) {
        (&self.x_updates, &self.y_updates)
    }

    /// Flux computation restricted to the edges around `window`.
    pub(crate) fn compute_fluxes_in(&mut self, window: DomainWindow) {
        let speed_x = sweep_x(&self.solver, &self.state, &mut self.x_updates, window);
        let speed_y = sweep_y(&self.solver, &self.state, &mut self.y_updates, window);
        self.max_speed = (speed_x, speed_y);
        self.max_time_step = stable_time_step(self.state.dx(), self.state.dy(), speed_x, speed_y);
    }

    /// Update restricted to the cells of `window`.
    pub(crate) fn update_in(&mut self, dt: f64, window: DomainWindow) {
        debug_assert!(dt >= 0.0, "negative time step {dt}");
        let (speed_x, speed_y) = self.max_speed;
        check_cfl(dt, self.state.dx(), self.state.dy(), speed_x, speed_y);
        apply_net_updates(
            &mut self.state,
            &self.x_updates,
            &self.y_updates,
            dt,
            window,
        );
    }

    /// Rotate the state along x by `shift` columns and refresh the ghosts.
    pub(crate) fn rotate_x(&mut self, shift: usize) {
        self.state.rotate_x(shift);
        apply_ghost_layer(&mut self.state, &self.boundaries);
    }

    fn interior(&self) -> DomainWindow {
        DomainWindow::interior(self.state.nx(), self.state.ny())
    }
}

impl<S: RiemannSolver> WaveBlock for DimensionalSplitting<S> {
    fn apply_boundary_conditions(&mut self) {
        apply_ghost_layer(&mut self.state, &self.boundaries);
    }

    fn compute_numerical_fluxes(&mut self) {
        self.compute_fluxes_in(self.interior());
    }

    fn max_time_step(&self) -> f64 {
        self.max_time_step
    }

    fn update_unknowns(&mut self, dt: f64) {
        self.update_in(dt, self.interior());
    }

    fn state(&self) -> &GridState {
        &self.state
    }

    fn boundaries(&self) -> &BoundaryConditions {
        &self.boundaries
    }

    fn name(&self) -> &'static str {
        "dimensional-splitting"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::{RadialDamBreakScenario, StillWaterScenario};
    use crate::types::Bounds2D;
    use approx::assert_relative_eq;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_lake_at_rest() {
        let mut block =
            DimensionalSplitting::from_scenario(Resolution2D::new(10, 10), &StillWaterScenario::default());
        for _ in 0..20 {
            block.step(Some(1.0));
        }
        for (h, hu) in block.state().h.interior().zip(block.state().hu.interior()) {
            assert!((h - 10.0).abs() < TOL);
            assert!(hu.abs() < TOL);
        }
    }

    #[test]
    fn test_time_step_from_wave_speed() {
        let mut block =
            DimensionalSplitting::from_scenario(Resolution2D::new(10, 10), &StillWaterScenario::default());
        block.compute_numerical_fluxes();

        // u = 0, h = 10 everywhere
        let c = (9.81_f64 * 10.0).sqrt();
        let (sx, sy) = block.max_wave_speeds();
        assert_relative_eq!(sx, c, epsilon = TOL);
        assert_relative_eq!(sy, c, epsilon = TOL);
        assert_relative_eq!(block.max_time_step(), 0.4 * 100.0 / c, epsilon = TOL);
    }

    #[test]
    fn test_dry_grid_has_no_time_step_limit() {
        let state = GridState::new(Resolution2D::new(4, 4), Bounds2D::square(4.0));
        let mut block = DimensionalSplitting::new(state, BoundaryConditions::walls());
        assert_eq!(block.step(None), f64::INFINITY);
        assert_eq!(block.step(Some(2.0)), 2.0);
        assert!(block.state().h.interior().all(|h| h == 0.0));
    }

    #[test]
    fn test_step_respects_limit() {
        let mut block = DimensionalSplitting::from_scenario(
            Resolution2D::new(20, 20),
            &RadialDamBreakScenario::default(),
        );
        let dt = block.step(Some(1e-3));
        assert_eq!(dt, 1e-3);
        assert!(block.max_time_step() > 1e-3);
    }

    #[test]
    fn test_dam_break_spreads_with_walls() {
        let scenario = RadialDamBreakScenario::default();
        let state = GridState::from_scenario(Resolution2D::new(20, 20), &scenario);
        let mut block = DimensionalSplitting::new(state, BoundaryConditions::walls());
        let mass = block.state().h.interior_sum();
        let peak = block.state().h[(10, 10)];

        for _ in 0..10 {
            let dt = block.step(None);
            assert!(dt.is_finite() && dt > 0.0);
        }

        assert!(block.state().h[(10, 10)] < peak);
        assert_relative_eq!(block.state().h.interior_sum(), mass, max_relative = 1e-12);
    }
}
