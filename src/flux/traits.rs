//! Trait-based Riemann solver abstraction.
//!
//! Blocks are generic over [`RiemannSolver`] so alternative edge solvers
//! can be swapped in without touching the sweep code.
//!
//! # Example
//! ```
//! use swe_tsunami::flux::{EdgeState, FWaveSolver, RiemannSolver};
//!
//! let solver = FWaveSolver::default();
//! let updates = solver.net_updates(
//!     EdgeState::new(10.0, 0.0, -10.0),
//!     EdgeState::new(10.0, 0.0, -10.0),
//! );
//! assert_eq!(updates.h_left, 0.0);
//!
//! let dyn_solver: &dyn RiemannSolver = &solver;
//! assert_eq!(dyn_solver.name(), "f-wave");
//! ```

use super::fwave::{EdgeState, GRAVITY, NetUpdates, fwave_net_updates};

/// Solver for the local Riemann problem at one cell edge.
///
/// # Implementation Notes
///
/// - `net_updates` is called once per edge per sweep and must not allocate
/// - Implementations are shared across rayon workers, hence `Send + Sync`
pub trait RiemannSolver: Send + Sync {
    /// Net updates for the cells left and right of an edge.
    ///
    /// # Arguments
    /// * `left` - Cell with the lower index along the sweep direction
    /// * `right` - Cell with the higher index along the sweep direction
    fn net_updates(&self, left: EdgeState, right: EdgeState) -> NetUpdates;

    /// Human-readable name for logging.
    fn name(&self) -> &'static str;
}

/// F-wave solver with configurable gravity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FWaveSolver {
    /// Gravitational acceleration (m/s²)
    pub g: f64,
}

impl FWaveSolver {
    pub fn new(g: f64) -> Self {
        Self { g }
    }
}

impl Default for FWaveSolver {
    fn default() -> Self {
        Self { g: GRAVITY }
    }
}

impl RiemannSolver for FWaveSolver {
    #[inline]
    fn net_updates(&self, left: EdgeState, right: EdgeState) -> NetUpdates {
        fwave_net_updates(left, right, self.g)
    }

    fn name(&self) -> &'static str {
        "f-wave"
    }
}
