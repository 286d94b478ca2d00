//! Block construction from a scenario.

use crate::boundary::BoundaryConditions;
use crate::flux::{FWaveSolver, GRAVITY};
use crate::grid::GridState;
use crate::scenario::Scenario;
use crate::types::{CellIndex, Resolution2D};

use super::block::WaveBlock;
use super::dimensional_splitting::DimensionalSplitting;
use super::reduced::ReducedDomain;

/// Which block to build.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockKind {
    /// Sweep the whole grid
    DimensionalSplitting,
    /// Sweep only the window between two cells
    ReducedDomain { start: CellIndex, end: CellIndex },
}

/// Builder for wave propagation blocks.
///
/// Boundary kinds default to the scenario's; gravity defaults to
/// [`GRAVITY`].
///
/// # Example
///
/// ```
/// use swe_tsunami::boundary::BoundaryConditions;
/// use swe_tsunami::scenario::RadialDamBreakScenario;
/// use swe_tsunami::solver::{BlockBuilder, BlockKind, WaveBlock};
/// use swe_tsunami::types::Resolution2D;
///
/// let scenario = RadialDamBreakScenario::default();
/// let block = BlockBuilder::new(Resolution2D::new(32, 32))
///     .with_boundaries(BoundaryConditions::walls())
///     .build(&scenario, BlockKind::DimensionalSplitting);
/// assert_eq!(block.name(), "dimensional-splitting");
/// assert_eq!(block.boundaries().code(), 2222);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct BlockBuilder {
    resolution: Resolution2D,
    boundaries: Option<BoundaryConditions>,
    gravity: f64,
}

impl BlockBuilder {
    pub fn new(resolution: Resolution2D) -> Self {
        Self {
            resolution,
            boundaries: None,
            gravity: GRAVITY,
        }
    }

    /// Override the scenario's boundary kinds.
    pub fn with_boundaries(mut self, boundaries: BoundaryConditions) -> Self {
        self.boundaries = Some(boundaries);
        self
    }

    /// Gravitational acceleration used by the edge solver.
    pub fn with_gravity(mut self, g: f64) -> Self {
        self.gravity = g;
        self
    }

    pub fn dimensional_splitting(&self, scenario: &dyn Scenario) -> DimensionalSplitting {
        let state = GridState::from_scenario(self.resolution, scenario);
        let boundaries = self
            .boundaries
            .unwrap_or_else(|| scenario.boundary_conditions());
        DimensionalSplitting::with_solver(state, boundaries, FWaveSolver::new(self.gravity))
    }

    /// # Panics
    ///
    /// Panics if `start` or `end` is not an interior cell.
    pub fn reduced_domain(
        &self,
        scenario: &dyn Scenario,
        start: CellIndex,
        end: CellIndex,
    ) -> ReducedDomain {
        ReducedDomain::new(self.dimensional_splitting(scenario), start, end)
    }

    /// Build the block selected by `kind`.
    pub fn build(&self, scenario: &dyn Scenario, kind: BlockKind) -> Box<dyn WaveBlock> {
        tracing::info!(
            scenario = scenario.name(),
            resolution = %self.resolution,
            ?kind,
            "building block"
        );
        match kind {
            BlockKind::DimensionalSplitting => Box::new(self.dimensional_splitting(scenario)),
            BlockKind::ReducedDomain { start, end } => {
                Box::new(self.reduced_domain(scenario, start, end))
            }
        }
    }
}
