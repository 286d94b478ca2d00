//! Initial-condition provider abstraction.

use crate::boundary::{BoundaryConditions, BoundaryType};
use crate::types::{BoundaryEdge, Bounds2D, SideBoundaries};

/// Source of initial conditions and domain configuration.
///
/// A block samples the scenario once per interior cell centre when it is
/// built. Coordinates are physical (metres), inside [`Scenario::bounds`].
///
/// # Example
/// ```
/// use swe_tsunami::scenario::{Scenario, RadialDamBreakScenario};
///
/// let s = RadialDamBreakScenario::default();
/// assert_eq!(s.water_height(500.0, 500.0), 15.0);
/// assert_eq!(s.bounds().width(), 1000.0);
/// ```
pub trait Scenario {
    /// Water height at `(x, y)`.
    fn water_height(&self, x: f64, y: f64) -> f64;

    /// Bathymetry at `(x, y)` (negative below sea level).
    fn bathymetry(&self, x: f64, y: f64) -> f64;

    /// Velocity in x-direction.
    fn velocity_u(&self, _x: f64, _y: f64) -> f64 {
        0.0
    }

    /// Velocity in y-direction.
    fn velocity_v(&self, _x: f64, _y: f64) -> f64 {
        0.0
    }

    /// Boundary kind of an edge.
    fn boundary_type(&self, _edge: BoundaryEdge) -> BoundaryType {
        BoundaryType::Wall
    }

    /// Physical coordinate of an edge (x for left/right, y for bottom/top).
    fn boundary_position(&self, edge: BoundaryEdge) -> f64;

    /// Simulated time at which the run ends.
    fn end_simulation_time(&self) -> f64 {
        15.0
    }

    /// Simulated time at which the run starts (non-zero when resuming).
    fn start_time(&self) -> f64 {
        0.0
    }

    /// Short name for logging.
    fn name(&self) -> &'static str;

    /// Domain extents assembled from the four boundary positions.
    fn bounds(&self) -> Bounds2D {
        Bounds2D::new(
            self.boundary_position(BoundaryEdge::Left),
            self.boundary_position(BoundaryEdge::Right),
            self.boundary_position(BoundaryEdge::Bottom),
            self.boundary_position(BoundaryEdge::Top),
        )
    }

    /// Boundary kinds of all four edges.
    fn boundary_conditions(&self) -> BoundaryConditions {
        BoundaryConditions::new(SideBoundaries::from_fn(|edge| self.boundary_type(edge)))
    }
}

/// Snap shallow bathymetry away from zero.
///
/// Values in `(-limit, 0]` become `-limit` and values in `(0, limit)`
/// become `limit`; this keeps coastal cells out of the regime where
/// thin water columns make the explicit scheme stiff.
#[inline]
pub fn snap_shallow_bathymetry(b: f64, limit: f64) -> f64 {
    if b > -limit && b <= 0.0 {
        -limit
    } else if b > 0.0 && b < limit {
        limit
    } else {
        b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Basin;

    impl Scenario for Basin {
        fn water_height(&self, _x: f64, _y: f64) -> f64 {
            1.0
        }

        fn bathymetry(&self, _x: f64, _y: f64) -> f64 {
            -1.0
        }

        fn boundary_type(&self, edge: BoundaryEdge) -> BoundaryType {
            if edge == BoundaryEdge::Top {
                BoundaryType::Outflow
            } else {
                BoundaryType::Wall
            }
        }

        fn boundary_position(&self, edge: BoundaryEdge) -> f64 {
            match edge {
                BoundaryEdge::Left | BoundaryEdge::Bottom => -1.0,
                BoundaryEdge::Right | BoundaryEdge::Top => 1.0,
            }
        }

        fn name(&self) -> &'static str {
            "basin"
        }
    }

    #[test]
    fn test_provided_methods() {
        let s = Basin;
        assert_eq!(s.bounds(), Bounds2D::new(-1.0, 1.0, -1.0, 1.0));
        assert_eq!(s.boundary_conditions().code(), 2221);
        assert_eq!(s.velocity_u(0.0, 0.0), 0.0);
        assert_eq!(s.start_time(), 0.0);
    }

    #[test]
    fn test_snap_shallow_bathymetry() {
        assert_eq!(snap_shallow_bathymetry(-5.0, 20.0), -20.0);
        assert_eq!(snap_shallow_bathymetry(0.0, 20.0), -20.0);
        assert_eq!(snap_shallow_bathymetry(3.0, 20.0), 20.0);
        assert_eq!(snap_shallow_bathymetry(-20.0, 20.0), -20.0);
        assert_eq!(snap_shallow_bathymetry(-95.0, 20.0), -95.0);
        assert_eq!(snap_shallow_bathymetry(150.0, 20.0), 150.0);
    }
}
