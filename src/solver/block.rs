//! Common interface of the 2D wave propagation blocks.

use crate::boundary::BoundaryConditions;
use crate::grid::GridState;

/// A block that advances the shallow water state over its grid.
///
/// One iteration is strictly
/// [`apply_boundary_conditions`](Self::apply_boundary_conditions) →
/// [`compute_numerical_fluxes`](Self::compute_numerical_fluxes) →
/// [`update_unknowns`](Self::update_unknowns), with the time step taken
/// from [`max_time_step`](Self::max_time_step) of the same iteration.
/// [`step`](Self::step) performs exactly that sequence.
///
/// # Example
///
/// ```
/// use swe_tsunami::scenario::RadialDamBreakScenario;
/// use swe_tsunami::solver::{DimensionalSplitting, WaveBlock};
/// use swe_tsunami::types::Resolution2D;
///
/// let scenario = RadialDamBreakScenario::default();
/// let mut block = DimensionalSplitting::from_scenario(Resolution2D::new(20, 20), &scenario);
/// let dt = block.step(None);
/// assert!(dt > 0.0 && dt.is_finite());
/// ```
pub trait WaveBlock: Send {
    /// Fill the ghost ring from the interior.
    fn apply_boundary_conditions(&mut self);

    /// Solve every edge Riemann problem and derive the stable time step.
    fn compute_numerical_fluxes(&mut self);

    /// Largest stable time step found by the last flux computation.
    ///
    /// `f64::INFINITY` when no wave moves anywhere in the block.
    fn max_time_step(&self) -> f64;

    /// Apply the stored net updates over `dt`.
    fn update_unknowns(&mut self, dt: f64);

    fn state(&self) -> &GridState;

    fn boundaries(&self) -> &BoundaryConditions;

    /// Short name for logging.
    fn name(&self) -> &'static str;

    /// Run one full iteration and return the time step used.
    ///
    /// The step is `max_time_step()` capped at `limit`. If that is not
    /// finite (no motion and no limit) the state is left untouched and
    /// the infinite step is returned.
    fn step(&mut self, limit: Option<f64>) -> f64 {
        self.apply_boundary_conditions();
        self.compute_numerical_fluxes();
        let dt = match limit {
            Some(limit) => self.max_time_step().min(limit),
            None => self.max_time_step(),
        };
        if dt.is_finite() {
            self.update_unknowns(dt);
        }
        dt
    }
}
