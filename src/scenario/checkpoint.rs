//! Resuming from a stored checkpoint.

use super::Scenario;
use crate::boundary::BoundaryType;
use crate::io::Checkpoint;
use crate::types::{BoundaryEdge, Bounds2D};

/// Scenario that replays a [`Checkpoint`] cell by cell.
///
/// Points outside the stored domain read as zero. Velocities are
/// recovered as momentum / height (zero in dry cells).
#[derive(Clone, Debug)]
pub struct CheckpointScenario {
    checkpoint: Checkpoint,
    end_time: f64,
}

impl CheckpointScenario {
    /// Resume `checkpoint` and run until `end_time`.
    pub fn new(checkpoint: Checkpoint, end_time: f64) -> Self {
        Self {
            checkpoint,
            end_time,
        }
    }

    pub fn checkpoint(&self) -> &Checkpoint {
        &self.checkpoint
    }

    fn velocity(&self, momentum: f64, height: f64) -> f64 {
        if height == 0.0 { 0.0 } else { momentum / height }
    }
}

impl Scenario for CheckpointScenario {
    fn water_height(&self, x: f64, y: f64) -> f64 {
        self.checkpoint
            .locate(x, y)
            .map_or(0.0, |cell| self.checkpoint.height[cell])
    }

    fn bathymetry(&self, x: f64, y: f64) -> f64 {
        self.checkpoint
            .locate(x, y)
            .map_or(0.0, |cell| self.checkpoint.bathymetry[cell])
    }

    fn velocity_u(&self, x: f64, y: f64) -> f64 {
        self.checkpoint.locate(x, y).map_or(0.0, |cell| {
            self.velocity(self.checkpoint.momentum_x[cell], self.checkpoint.height[cell])
        })
    }

    fn velocity_v(&self, x: f64, y: f64) -> f64 {
        self.checkpoint.locate(x, y).map_or(0.0, |cell| {
            self.velocity(self.checkpoint.momentum_y[cell], self.checkpoint.height[cell])
        })
    }

    fn boundary_type(&self, edge: BoundaryEdge) -> BoundaryType {
        self.checkpoint.boundaries.get(edge)
    }

    fn boundary_position(&self, edge: BoundaryEdge) -> f64 {
        let Bounds2D {
            x_min,
            x_max,
            y_min,
            y_max,
        } = self.checkpoint.bounds();
        match edge {
            BoundaryEdge::Left => x_min,
            BoundaryEdge::Right => x_max,
            BoundaryEdge::Bottom => y_min,
            BoundaryEdge::Top => y_max,
        }
    }

    fn end_simulation_time(&self) -> f64 {
        self.end_time
    }

    fn start_time(&self) -> f64 {
        self.checkpoint.time
    }

    fn name(&self) -> &'static str {
        "checkpoint"
    }
}
