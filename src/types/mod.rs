//! Strongly-typed grid and domain types.
//!
//! - **Named edges over positional arrays**: `SideBoundaries { left, right, bottom, top }`
//! - **Index space is explicit**: [`CellIndex`] always addresses field storage
//!   including the ghost ring, so interior cells start at 1
//!
//! # Example
//!
//! ```
//! use swe_tsunami::types::{Bounds2D, Resolution2D};
//!
//! let bounds = Bounds2D::new(0.0, 100e3, 0.0, 50e3);
//! let res = Resolution2D::new(200, 100);
//! assert_eq!(bounds.cell_size(res), (500.0, 500.0));
//! ```

mod bounds;
mod cells;
mod resolution;
mod sides;

pub use bounds::Bounds2D;
pub use cells::{CellIndex, DomainWindow};
pub use resolution::Resolution2D;
pub use sides::{BoundaryEdge, SideBoundaries};
