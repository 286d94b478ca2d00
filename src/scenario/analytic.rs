//! Closed-form test scenarios.

use std::f64::consts::PI;

use super::traits::{Scenario, snap_shallow_bathymetry};
use crate::boundary::{BoundaryConditions, BoundaryType};
use crate::types::BoundaryEdge;

// =============================================================================
// Still water
// =============================================================================

/// Lake at rest: uniform height over flat bathymetry.
#[derive(Clone, Copy, Debug)]
pub struct StillWaterScenario {
    /// Water height (m)
    pub height: f64,
    /// Domain side length (m)
    pub size: f64,
    pub boundaries: BoundaryConditions,
}

impl Default for StillWaterScenario {
    fn default() -> Self {
        Self {
            height: 10.0,
            size: 1000.0,
            boundaries: BoundaryConditions::walls(),
        }
    }
}

impl Scenario for StillWaterScenario {
    fn water_height(&self, _x: f64, _y: f64) -> f64 {
        self.height
    }

    fn bathymetry(&self, _x: f64, _y: f64) -> f64 {
        0.0
    }

    fn boundary_type(&self, edge: BoundaryEdge) -> BoundaryType {
        self.boundaries.get(edge)
    }

    fn boundary_position(&self, edge: BoundaryEdge) -> f64 {
        match edge {
            BoundaryEdge::Left | BoundaryEdge::Bottom => 0.0,
            BoundaryEdge::Right | BoundaryEdge::Top => self.size,
        }
    }

    fn name(&self) -> &'static str {
        "still-water"
    }
}

// =============================================================================
// Radial dam break
// =============================================================================

/// Cylindrical column of raised water collapsing in a 1 km basin.
///
/// Height is 15 m within 100 m of the centre `(500, 500)` and 10 m
/// elsewhere, over a flat bottom at -10 m. An optional dry island occupies
/// `[400, 600] × [200, 300]` (height 0, bathymetry +10).
#[derive(Clone, Copy, Debug)]
pub struct RadialDamBreakScenario {
    pub boundaries: BoundaryConditions,
    pub island: bool,
    pub end_time: f64,
}

impl Default for RadialDamBreakScenario {
    fn default() -> Self {
        Self {
            boundaries: BoundaryConditions::outflow(),
            island: false,
            end_time: 30.0,
        }
    }
}

impl RadialDamBreakScenario {
    pub fn with_island(mut self, island: bool) -> Self {
        self.island = island;
        self
    }

    pub fn with_boundaries(mut self, boundaries: BoundaryConditions) -> Self {
        self.boundaries = boundaries;
        self
    }

    pub fn with_end_time(mut self, end_time: f64) -> Self {
        self.end_time = end_time;
        self
    }

    #[inline]
    fn on_island(&self, x: f64, y: f64) -> bool {
        self.island && (400.0..=600.0).contains(&x) && (200.0..=300.0).contains(&y)
    }
}

impl Scenario for RadialDamBreakScenario {
    fn water_height(&self, x: f64, y: f64) -> f64 {
        if self.on_island(x, y) {
            return 0.0;
        }
        let r = ((x - 500.0).powi(2) + (y - 500.0).powi(2)).sqrt();
        if r < 100.0 { 15.0 } else { 10.0 }
    }

    fn bathymetry(&self, x: f64, y: f64) -> f64 {
        if self.on_island(x, y) { 10.0 } else { -10.0 }
    }

    fn boundary_type(&self, edge: BoundaryEdge) -> BoundaryType {
        self.boundaries.get(edge)
    }

    fn boundary_position(&self, edge: BoundaryEdge) -> f64 {
        match edge {
            BoundaryEdge::Left | BoundaryEdge::Bottom => 0.0,
            BoundaryEdge::Right | BoundaryEdge::Top => 1000.0,
        }
    }

    fn end_simulation_time(&self) -> f64 {
        self.end_time
    }

    fn name(&self) -> &'static str {
        "radial-dam-break"
    }
}

// =============================================================================
// Artificial tsunami
// =============================================================================

/// Synthetic sea-floor displacement in a 10 km × 10 km ocean.
///
/// Still water of 100 m over a -100 m bottom; within the 1 km square
/// centred on the domain the bottom is lifted by
/// `d(x', y') = 5 · sin((x'/500 + 1)·π) · (1 − (y'/500)²)`
/// with `x', y'` measured from the centre. Displaced bathymetry in
/// `(-20, 20)` is snapped to ±20.
#[derive(Clone, Copy, Debug)]
pub struct ArtificialTsunamiScenario {
    pub boundaries: BoundaryConditions,
    pub end_time: f64,
}

impl Default for ArtificialTsunamiScenario {
    fn default() -> Self {
        Self {
            boundaries: BoundaryConditions::outflow(),
            end_time: 15.0,
        }
    }
}

impl ArtificialTsunamiScenario {
    const SIZE: f64 = 10_000.0;
    const CENTER: f64 = 5_000.0;
    const HALF_WIDTH: f64 = 500.0;

    pub fn with_boundaries(mut self, boundaries: BoundaryConditions) -> Self {
        self.boundaries = boundaries;
        self
    }

    pub fn with_end_time(mut self, end_time: f64) -> Self {
        self.end_time = end_time;
        self
    }

    /// Vertical displacement at offsets `(dx, dy)` from the epicentre.
    pub fn displacement(dx: f64, dy: f64) -> f64 {
        let d_x = ((dx / Self::HALF_WIDTH + 1.0) * PI).sin();
        let d_y = 1.0 - (dy / Self::HALF_WIDTH).powi(2);
        5.0 * d_x * d_y
    }
}

impl Scenario for ArtificialTsunamiScenario {
    fn water_height(&self, _x: f64, _y: f64) -> f64 {
        100.0
    }

    fn bathymetry(&self, x: f64, y: f64) -> f64 {
        let dx = x - Self::CENTER;
        let dy = y - Self::CENTER;
        if dx.abs() <= Self::HALF_WIDTH && dy.abs() <= Self::HALF_WIDTH {
            snap_shallow_bathymetry(-100.0 + Self::displacement(dx, dy), 20.0)
        } else {
            -100.0
        }
    }

    fn boundary_type(&self, edge: BoundaryEdge) -> BoundaryType {
        self.boundaries.get(edge)
    }

    fn boundary_position(&self, edge: BoundaryEdge) -> f64 {
        match edge {
            BoundaryEdge::Left | BoundaryEdge::Bottom => 0.0,
            BoundaryEdge::Right | BoundaryEdge::Top => Self::SIZE,
        }
    }

    fn end_simulation_time(&self) -> f64 {
        self.end_time
    }

    fn name(&self) -> &'static str {
        "artificial-tsunami"
    }
}

// =============================================================================
// Earthquake
// =============================================================================

/// Tsunami raised by an earthquake of moment magnitude `Mw` in a flat
/// 10 km × 10 km ocean.
///
/// The expected wave height at the coast follows the empirical fit
/// `7.6875 · Mw − 50.0417` (zero below `Mw = 6.51`). Green's law,
/// `H ∝ d^(-1/4)`, carries that height from 50 m of coastal water back to
/// the epicentre depth; the result is the amplitude of a paraboloid hump
/// of radius 500 m on the sea surface around the epicentre.
#[derive(Clone, Copy, Debug)]
pub struct EarthquakeScenario {
    /// Moment magnitude
    pub magnitude: f64,
    /// Epicentre position (m)
    pub epicenter: (f64, f64),
    /// Still-water depth of the whole ocean (m)
    pub depth: f64,
    pub boundaries: BoundaryConditions,
    pub end_time: f64,
}

impl Default for EarthquakeScenario {
    fn default() -> Self {
        Self::new(9.0)
    }
}

impl EarthquakeScenario {
    const SIZE: f64 = 10_000.0;
    const RADIUS: f64 = 500.0;
    /// Smallest magnitude with a tsunami in the empirical fit.
    pub const MIN_MAGNITUDE: f64 = 6.51;
    /// Water depth the coastal wave height refers to (m).
    pub const COASTAL_DEPTH: f64 = 50.0;

    /// Epicentre in the centre of a 100 m deep ocean with walls all round.
    pub fn new(magnitude: f64) -> Self {
        Self {
            magnitude,
            epicenter: (0.5 * Self::SIZE, 0.5 * Self::SIZE),
            depth: 100.0,
            boundaries: BoundaryConditions::walls(),
            end_time: 100.0,
        }
    }

    pub fn with_epicenter(mut self, x: f64, y: f64) -> Self {
        self.epicenter = (x, y);
        self
    }

    pub fn with_depth(mut self, depth: f64) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_boundaries(mut self, boundaries: BoundaryConditions) -> Self {
        self.boundaries = boundaries;
        self
    }

    pub fn with_end_time(mut self, end_time: f64) -> Self {
        self.end_time = end_time;
        self
    }

    /// Expected wave height at the coast (m).
    pub fn max_wave_height(&self) -> f64 {
        if self.magnitude < Self::MIN_MAGNITUDE {
            0.0
        } else {
            7.6875 * self.magnitude - 50.0417
        }
    }

    /// Wave amplitude over the epicentre (m).
    pub fn starting_wave_height(&self) -> f64 {
        self.max_wave_height() * (Self::COASTAL_DEPTH / self.depth).powf(0.25)
    }
}

impl Scenario for EarthquakeScenario {
    fn water_height(&self, x: f64, y: f64) -> f64 {
        let (ex, ey) = self.epicenter;
        let r2 = ((x - ex).powi(2) + (y - ey).powi(2)) / (Self::RADIUS * Self::RADIUS);
        self.depth + self.starting_wave_height() * (1.0 - r2).max(0.0)
    }

    fn bathymetry(&self, _x: f64, _y: f64) -> f64 {
        -self.depth
    }

    fn boundary_type(&self, edge: BoundaryEdge) -> BoundaryType {
        self.boundaries.get(edge)
    }

    fn boundary_position(&self, edge: BoundaryEdge) -> f64 {
        match edge {
            BoundaryEdge::Left | BoundaryEdge::Bottom => 0.0,
            BoundaryEdge::Right | BoundaryEdge::Top => Self::SIZE,
        }
    }

    fn end_simulation_time(&self) -> f64 {
        self.end_time
    }

    fn name(&self) -> &'static str {
        "earthquake"
    }
}
