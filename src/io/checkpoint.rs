//! Saved simulation state for resuming a run.

use crate::boundary::BoundaryConditions;
use crate::grid::{Field, GridState};
use crate::types::{Bounds2D, Resolution2D};

/// Complete state of a block at one instant.
///
/// Fields use the same ghost-padded layout as the block they came from;
/// only interior values are meaningful.
#[derive(Clone, Debug, PartialEq)]
pub struct Checkpoint {
    /// Simulated time at which the state was captured
    pub time: f64,
    pub bathymetry: Field,
    pub height: Field,
    pub momentum_x: Field,
    pub momentum_y: Field,
    pub boundaries: BoundaryConditions,
    pub dx: f64,
    pub dy: f64,
    pub nx: usize,
    pub ny: usize,
    /// Lower-left corner of the domain `(x_min, y_min)`
    pub origin: (f64, f64),
}

impl Checkpoint {
    /// Copy the current state of a block.
    pub fn capture(state: &GridState, boundaries: BoundaryConditions, time: f64) -> Self {
        let bounds = state.bounds();
        Self {
            time,
            bathymetry: state.b.clone(),
            height: state.h.clone(),
            momentum_x: state.hu.clone(),
            momentum_y: state.hv.clone(),
            boundaries,
            dx: state.dx(),
            dy: state.dy(),
            nx: state.nx(),
            ny: state.ny(),
            origin: (bounds.x_min, bounds.y_min),
        }
    }

    pub fn resolution(&self) -> Resolution2D {
        Resolution2D::new(self.nx, self.ny)
    }

    /// Physical extent covered by the stored cells.
    pub fn bounds(&self) -> Bounds2D {
        let (x0, y0) = self.origin;
        Bounds2D::new(
            x0,
            x0 + self.nx as f64 * self.dx,
            y0,
            y0 + self.ny as f64 * self.dy,
        )
    }

    /// Field index of the cell containing `(x, y)`, if inside the domain.
    pub fn locate(&self, x: f64, y: f64) -> Option<(usize, usize)> {
        let fx = (x - self.origin.0) / self.dx;
        let fy = (y - self.origin.1) / self.dy;
        if !(fx >= 0.0 && fy >= 0.0 && fx < self.nx as f64 && fy < self.ny as f64) {
            return None;
        }
        Some((fx.floor() as usize + 1, fy.floor() as usize + 1))
    }
}
