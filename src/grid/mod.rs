//! Ghost-padded Cartesian grid storage.
//!
//! - [`Field`]: one dense `(nx + 2) × (ny + 2)` array
//! - [`GridState`]: the four fields `h`, `hu`, `hv`, `b` of a block
//! - [`coarsen`]: block averaging for reduced-resolution output

mod coarsen;
mod field;
mod state;

use thiserror::Error;

pub use coarsen::{coarse_len, coarsen};
pub use field::Field;
pub use state::GridState;

/// Errors raised when building or reshaping grid data.
#[derive(Debug, Error)]
pub enum GridError {
    /// Buffer length does not match the requested shape.
    #[error("expected {expected} values, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A named field has the wrong interior size.
    #[error("field '{name}' has shape {actual:?}, expected {expected:?}")]
    ShapeMismatch {
        name: String,
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// Zero cells along an axis.
    #[error("grid must have at least one cell per axis, got {nx}x{ny}")]
    EmptyGrid { nx: usize, ny: usize },

    /// Coarsening by zero.
    #[error("coarsening factor must be at least 1, got {0}")]
    InvalidCoarsenFactor(usize),
}
