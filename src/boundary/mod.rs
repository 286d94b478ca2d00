//! Ghost-layer boundary conditions.
//!
//! Before every flux computation the ghost ring of the grid is filled
//! from the interior, one edge at a time:
//!
//! | Kind | Digit | Ghost state |
//! |------|-------|-------------|
//! | [`BoundaryType::Outflow`] | `1` | copy of the adjacent interior cell |
//! | [`BoundaryType::Wall`] | `2` | copy with the normal momentum negated |
//!
//! Configurations are written as four-digit codes, one digit per edge in
//! the order left, right, bottom, top (`1112` = outflow everywhere except
//! a wall at the top).

mod conditions;
mod ghost;

use thiserror::Error;

use crate::types::BoundaryEdge;

pub use conditions::{BoundaryConditions, BoundaryType};
pub use ghost::apply_ghost_layer;

/// Errors raised when decoding boundary configuration.
#[derive(Debug, Error)]
pub enum BoundaryError {
    /// Not a four-digit integer.
    #[error("invalid boundary code '{0}': expected four digits (left, right, bottom, top)")]
    InvalidCode(String),

    /// A digit other than 1 (outflow) or 2 (wall).
    #[error("invalid boundary digit {digit} for {edge} edge: use 1 (outflow) or 2 (wall)")]
    InvalidDigit { digit: u32, edge: BoundaryEdge },
}
