//! Conserved variables and bathymetry of one Cartesian block.

use crate::scenario::Scenario;
use crate::types::{Bounds2D, Resolution2D};

use super::{Field, GridError};

/// Water height, momenta and bathymetry over a ghost-padded grid.
///
/// All four fields share the resolution of the block; cell `(i, j)` of
/// the interior is centred at `x_min + (i - ½)·dx`, `y_min + (j - ½)·dy`.
#[derive(Clone, Debug, PartialEq)]
pub struct GridState {
    /// Water height (≤ 0 marks a dry cell)
    pub h: Field,
    /// Momentum in x-direction
    pub hu: Field,
    /// Momentum in y-direction
    pub hv: Field,
    /// Bathymetry (negative below sea level)
    pub b: Field,
    resolution: Resolution2D,
    bounds: Bounds2D,
    dx: f64,
    dy: f64,
}

impl GridState {
    /// Zero state over `bounds` with `resolution` cells.
    pub fn new(resolution: Resolution2D, bounds: Bounds2D) -> Self {
        let (nx, ny) = resolution.as_tuple();
        let (dx, dy) = bounds.cell_size(resolution);
        Self {
            h: Field::new(nx, ny),
            hu: Field::new(nx, ny),
            hv: Field::new(nx, ny),
            b: Field::new(nx, ny),
            resolution,
            bounds,
            dx,
            dy,
        }
    }

    /// Sample `scenario` at every interior cell centre.
    ///
    /// The domain extents are taken from the scenario's boundary positions.
    pub fn from_scenario(resolution: Resolution2D, scenario: &dyn Scenario) -> Self {
        let mut state = Self::new(resolution, scenario.bounds());
        state.sample(scenario);
        state
    }

    /// Assemble from existing fields.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ShapeMismatch`] if any field does not match
    /// `resolution`.
    pub fn from_fields(
        resolution: Resolution2D,
        bounds: Bounds2D,
        h: Field,
        hu: Field,
        hv: Field,
        b: Field,
    ) -> Result<Self, GridError> {
        let (nx, ny) = resolution.as_tuple();
        for (name, field) in [("h", &h), ("hu", &hu), ("hv", &hv), ("b", &b)] {
            if (field.nx(), field.ny()) != (nx, ny) {
                return Err(GridError::ShapeMismatch {
                    name: name.to_string(),
                    expected: (nx, ny),
                    actual: (field.nx(), field.ny()),
                });
            }
        }
        let (dx, dy) = bounds.cell_size(resolution);
        Ok(Self {
            h,
            hu,
            hv,
            b,
            resolution,
            bounds,
            dx,
            dy,
        })
    }

    /// Overwrite the interior with values sampled from `scenario`.
    pub fn sample(&mut self, scenario: &dyn Scenario) {
        for i in 1..=self.nx() {
            for j in 1..=self.ny() {
                let (x, y) = self.cell_center(i, j);
                let h = scenario.water_height(x, y);
                self.h[(i, j)] = h;
                self.hu[(i, j)] = h * scenario.velocity_u(x, y);
                self.hv[(i, j)] = h * scenario.velocity_v(x, y);
                self.b[(i, j)] = scenario.bathymetry(x, y);
            }
        }
    }

    #[inline]
    pub fn nx(&self) -> usize {
        self.resolution.nx()
    }

    #[inline]
    pub fn ny(&self) -> usize {
        self.resolution.ny()
    }

    #[inline]
    pub fn resolution(&self) -> Resolution2D {
        self.resolution
    }

    #[inline]
    pub fn bounds(&self) -> Bounds2D {
        self.bounds
    }

    #[inline]
    pub fn dx(&self) -> f64 {
        self.dx
    }

    #[inline]
    pub fn dy(&self) -> f64 {
        self.dy
    }

    /// Physical centre of cell `(i, j)` in field index space.
    #[inline]
    pub fn cell_center(&self, i: usize, j: usize) -> (f64, f64) {
        (
            self.bounds.x_min + (i as f64 - 0.5) * self.dx,
            self.bounds.y_min + (j as f64 - 0.5) * self.dy,
        )
    }

    /// Rotate all four fields along x by `shift` interior columns.
    pub fn rotate_x(&mut self, shift: usize) {
        for field in [&mut self.h, &mut self.hu, &mut self.hv, &mut self.b] {
            field.rotate_interior_x(shift);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::{RadialDamBreakScenario, StillWaterScenario};

    #[test]
    fn test_cell_centers() {
        let state = GridState::new(Resolution2D::new(10, 5), Bounds2D::new(0.0, 100.0, -50.0, 0.0));
        assert_eq!(state.dx(), 10.0);
        assert_eq!(state.dy(), 10.0);
        assert_eq!(state.cell_center(1, 1), (5.0, -45.0));
        assert_eq!(state.cell_center(10, 5), (95.0, -5.0));
    }

    #[test]
    fn test_sample_still_water() {
        let scenario = StillWaterScenario::default();
        let state = GridState::from_scenario(Resolution2D::new(4, 4), &scenario);
        assert!(state.h.interior().all(|h| h == 10.0));
        assert!(state.hu.interior().all(|hu| hu == 0.0));
        // Ghost ring untouched by sampling
        assert_eq!(state.h[(0, 0)], 0.0);
    }

    #[test]
    fn test_sample_dam_break_center() {
        let scenario = RadialDamBreakScenario::default();
        let state = GridState::from_scenario(Resolution2D::new(10, 10), &scenario);
        // Cells (5,5)/(6,6) straddle the centre (500, 500)
        assert_eq!(state.h[(5, 5)], 15.0);
        assert_eq!(state.h[(1, 1)], 10.0);
        assert!(state.b.interior().all(|b| b == -10.0));
    }

    #[test]
    fn test_from_fields_shape_check() {
        let res = Resolution2D::new(3, 3);
        let bounds = Bounds2D::square(3.0);
        let err = GridState::from_fields(
            res,
            bounds,
            Field::new(3, 3),
            Field::new(3, 3),
            Field::new(2, 3),
            Field::new(3, 3),
        )
        .unwrap_err();
        assert!(matches!(err, GridError::ShapeMismatch { ref name, .. } if name == "hv"));
    }

    #[test]
    fn test_rotate_moves_all_fields() {
        let mut state = GridState::new(Resolution2D::new(4, 1), Bounds2D::square(4.0));
        state.h[(1, 1)] = 1.0;
        state.b[(1, 1)] = -1.0;
        state.rotate_x(2);
        assert_eq!(state.h[(3, 1)], 1.0);
        assert_eq!(state.b[(3, 1)], -1.0);
        assert_eq!(state.h[(1, 1)], 0.0);
    }
}
