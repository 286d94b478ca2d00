//! One-dimensional test profiles.
//!
//! Profiles are indexed by integer cell position `pos` (1-based for the
//! interior, 0 and `size + 1` for the ghosts). [`RowScenario`] lifts a
//! profile onto a single row of 2D cells so that a 2D block with `ny = 1`
//! sees exactly the same initial data as the 1D reference block.

use super::Scenario;
use crate::boundary::BoundaryType;
use crate::flux::GRAVITY;
use crate::types::BoundaryEdge;

/// Cell-indexed initial data along one axis.
pub trait Profile1D {
    /// Number of interior cells.
    fn size(&self) -> usize;

    /// Cell width (m).
    fn cell_size(&self) -> f64 {
        1000.0 / self.size() as f64
    }

    fn height(&self, pos: usize) -> f64;

    fn momentum(&self, pos: usize) -> f64;

    fn bathymetry(&self, pos: usize) -> f64;

    fn name(&self) -> &'static str;
}

// =============================================================================
// Bathymetry ridge
// =============================================================================

/// Still water stepping over a submerged ridge, with a gentle current
/// in the right half.
#[derive(Clone, Copy, Debug)]
pub struct BathymetryScenario1D {
    size: usize,
}

impl BathymetryScenario1D {
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    fn ridge(&self, pos: usize) -> bool {
        let p = pos as f64;
        let n = self.size as f64;
        p >= 0.45 * n && p <= 0.55 * n
    }
}

impl Default for BathymetryScenario1D {
    fn default() -> Self {
        Self::new(100)
    }
}

impl Profile1D for BathymetryScenario1D {
    fn size(&self) -> usize {
        self.size
    }

    fn height(&self, pos: usize) -> f64 {
        let p = pos as f64;
        let n = self.size as f64;
        if p < 0.45 * n {
            20.0
        } else if p <= 0.5 * n {
            16.0
        } else if p <= 0.55 * n {
            6.0
        } else {
            10.0
        }
    }

    fn momentum(&self, pos: usize) -> f64 {
        if pos <= self.size / 2 { 0.0 } else { 0.7 }
    }

    fn bathymetry(&self, pos: usize) -> f64 {
        if self.ridge(pos) { -16.0 } else { -20.0 }
    }

    fn name(&self) -> &'static str {
        "bathymetry-1d"
    }
}

// =============================================================================
// Subcritical flow over a bump
// =============================================================================

/// Steady subcritical inflow (`hu = 4.42`) over a parabolic bump between
/// cells 8 and 12; the channel is filled up to cell 25 and dry beyond.
#[derive(Clone, Copy, Debug)]
pub struct SubcriticalFlow1D {
    size: usize,
}

impl SubcriticalFlow1D {
    /// Last wet cell.
    const WET_EXTENT: usize = 25;
    const INFLOW: f64 = 4.42;

    pub fn new(size: usize) -> Self {
        Self { size }
    }

    /// Froude number `u / sqrt(g h)` at `pos` (zero where dry).
    pub fn froude_number(&self, pos: usize) -> f64 {
        let h = self.height(pos);
        if h == 0.0 {
            return 0.0;
        }
        let u = self.momentum(pos) / h;
        u / (GRAVITY * h).sqrt()
    }

    /// Largest Froude number over positions `0..size` and where it occurs.
    ///
    /// The first position wins on ties. Returns `None` for an empty profile.
    pub fn max_froude_number(&self) -> Option<(f64, usize)> {
        (0..self.size)
            .map(|pos| (self.froude_number(pos), pos))
            .fold(None, |best, (fr, pos)| match best {
                Some((max, _)) if fr <= max => best,
                _ => Some((fr, pos)),
            })
    }
}

impl Default for SubcriticalFlow1D {
    fn default() -> Self {
        Self::new(100)
    }
}

impl Profile1D for SubcriticalFlow1D {
    fn size(&self) -> usize {
        self.size
    }

    fn height(&self, pos: usize) -> f64 {
        if pos <= Self::WET_EXTENT {
            -self.bathymetry(pos)
        } else {
            0.0
        }
    }

    fn momentum(&self, pos: usize) -> f64 {
        if pos <= Self::WET_EXTENT { Self::INFLOW } else { 0.0 }
    }

    fn bathymetry(&self, pos: usize) -> f64 {
        if pos > 8 && pos < 12 {
            let d = pos as f64 - 10.0;
            -1.8 - 0.05 * d * d
        } else {
            -2.0
        }
    }

    fn name(&self) -> &'static str {
        "subcritical-flow-1d"
    }
}

// =============================================================================
// 2D lift
// =============================================================================

/// A [`Profile1D`] seen as a 2D scenario of one row of cells.
///
/// The domain is `[0, size · cell_size] × [0, cell_size]` with outflow on
/// every edge; a point maps to `pos = floor(x / cell_size) + 1`.
#[derive(Clone, Copy, Debug)]
pub struct RowScenario<P> {
    profile: P,
}

impl<P: Profile1D> RowScenario<P> {
    pub fn new(profile: P) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &P {
        &self.profile
    }

    fn position(&self, x: f64) -> usize {
        (x / self.profile.cell_size()).floor().max(0.0) as usize + 1
    }
}

impl<P: Profile1D> Scenario for RowScenario<P> {
    fn water_height(&self, x: f64, _y: f64) -> f64 {
        self.profile.height(self.position(x))
    }

    fn bathymetry(&self, x: f64, _y: f64) -> f64 {
        self.profile.bathymetry(self.position(x))
    }

    fn velocity_u(&self, x: f64, _y: f64) -> f64 {
        let pos = self.position(x);
        let h = self.profile.height(pos);
        if h == 0.0 { 0.0 } else { self.profile.momentum(pos) / h }
    }

    fn boundary_type(&self, _edge: BoundaryEdge) -> BoundaryType {
        BoundaryType::Outflow
    }

    fn boundary_position(&self, edge: BoundaryEdge) -> f64 {
        let dx = self.profile.cell_size();
        match edge {
            BoundaryEdge::Left | BoundaryEdge::Bottom => 0.0,
            BoundaryEdge::Right => self.profile.size() as f64 * dx,
            BoundaryEdge::Top => dx,
        }
    }

    fn name(&self) -> &'static str {
        self.profile.name()
    }
}
