//! Tsunami initial conditions from gridded bathymetry and displacement.

use super::traits::{Scenario, snap_shallow_bathymetry};
use crate::boundary::{BoundaryConditions, BoundaryType};
use crate::io::GridData;
use crate::types::{BoundaryEdge, Bounds2D};

/// Minimum |bathymetry| kept near the coastline (m).
const SHALLOW_LIMIT: f64 = 20.0;

/// Scenario sampled from a bathymetry grid plus a sea-floor displacement.
///
/// Lookups use the nearest sample (binary search over the coordinate
/// arrays owned by this instance). Bathymetry is first snapped away from
/// the shoreline band `(-20, 20)`, the still-water height is `max(-b, 0)`,
/// and the displacement (zero outside its own grid) is then added to the
/// bathymetry, so the lifted sea floor shows up as the initial wave.
#[derive(Clone, Debug)]
pub struct GriddedTsunamiScenario {
    bathymetry: GridData,
    displacement: GridData,
    bounds: Bounds2D,
    boundaries: BoundaryConditions,
    end_time: f64,
}

impl GriddedTsunamiScenario {
    /// The domain is the extent of the bathymetry grid.
    pub fn new(bathymetry: GridData, displacement: GridData) -> Self {
        let bounds = bathymetry.bounds();
        Self {
            bathymetry,
            displacement,
            bounds,
            boundaries: BoundaryConditions::outflow(),
            end_time: 15.0,
        }
    }

    pub fn with_boundaries(mut self, boundaries: BoundaryConditions) -> Self {
        self.boundaries = boundaries;
        self
    }

    pub fn with_end_time(mut self, end_time: f64) -> Self {
        self.end_time = end_time;
        self
    }

    /// Bathymetry before the displacement, after shoreline snapping.
    fn resting_bathymetry(&self, x: f64, y: f64) -> f64 {
        let raw = self.bathymetry.nearest(x, y).unwrap_or(0.0);
        snap_shallow_bathymetry(raw, SHALLOW_LIMIT)
    }
}

impl Scenario for GriddedTsunamiScenario {
    fn water_height(&self, x: f64, y: f64) -> f64 {
        (-self.resting_bathymetry(x, y)).max(0.0)
    }

    fn bathymetry(&self, x: f64, y: f64) -> f64 {
        self.resting_bathymetry(x, y) + self.displacement.nearest(x, y).unwrap_or(0.0)
    }

    fn boundary_type(&self, edge: BoundaryEdge) -> BoundaryType {
        self.boundaries.get(edge)
    }

    fn boundary_position(&self, edge: BoundaryEdge) -> f64 {
        match edge {
            BoundaryEdge::Left => self.bounds.x_min,
            BoundaryEdge::Right => self.bounds.x_max,
            BoundaryEdge::Bottom => self.bounds.y_min,
            BoundaryEdge::Top => self.bounds.y_max,
        }
    }

    fn end_simulation_time(&self) -> f64 {
        self.end_time
    }

    fn name(&self) -> &'static str {
        "tsunami"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ocean_with_island() -> GridData {
        // 4 × 1 strip: deep, shallow sea, low land, mountain
        GridData::new(
            vec![50.0, 150.0, 250.0, 350.0],
            vec![50.0],
            vec![-3000.0, -5.0, 8.0, 400.0],
        )
        .unwrap()
    }

    fn uplift() -> GridData {
        GridData::new(vec![50.0], vec![50.0], vec![2.0]).unwrap()
    }

    #[test]
    fn test_domain_from_bathymetry_grid() {
        let s = GriddedTsunamiScenario::new(ocean_with_island(), uplift());
        assert_eq!(s.bounds(), Bounds2D::new(0.0, 400.0, 0.0, 100.0));
        assert_eq!(s.boundary_conditions(), BoundaryConditions::outflow());
    }

    #[test]
    fn test_heights_and_snapping() {
        let s = GriddedTsunamiScenario::new(ocean_with_island(), uplift());
        assert_eq!(s.water_height(150.0, 50.0), 20.0);
        assert_eq!(s.bathymetry(150.0, 50.0), -20.0);
        assert_eq!(s.water_height(250.0, 50.0), 0.0);
        assert_eq!(s.bathymetry(250.0, 50.0), 20.0);
        assert_eq!(s.water_height(350.0, 50.0), 0.0);
        assert_eq!(s.bathymetry(350.0, 50.0), 400.0);
    }

    #[test]
    fn test_displacement_only_inside_its_grid() {
        let s = GriddedTsunamiScenario::new(ocean_with_island(), uplift());
        // Single-sample displacement grid covers [49.5, 50.5] x [49.5, 50.5]
        assert_eq!(s.water_height(50.0, 50.0), 3000.0);
        assert_eq!(s.bathymetry(50.0, 50.0), -2998.0);
        assert_eq!(s.bathymetry(150.0, 50.0), -20.0);
    }
}
