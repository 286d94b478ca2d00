//! Finite-volume wave propagation blocks.
//!
//! # Blocks
//!
//! - [`DimensionalSplitting`]: x- and y-sweeps over the whole grid
//! - [`ReducedDomain`]: the same sweeps restricted to a [`search`] window
//!   between a wave source and a point of interest
//! - [`WavePropagation1D`]: 1D reference block
//!
//! The 2D blocks implement [`WaveBlock`]; [`BlockBuilder`] picks one at
//! configuration time.
//!
//! # Iteration
//!
//! ```text
//! apply_boundary_conditions → compute_numerical_fluxes → update_unknowns(dt)
//! ```
//!
//! with `dt = 0.4 · min(dx / s_x, dy / s_y)` from the largest edge speeds
//! `s_x`, `s_y` of the same iteration. With the `parallel` feature both the
//! sweeps and the update are split over grid columns with rayon.

mod block;
mod builder;
mod dimensional_splitting;
mod reduced;
pub mod search;
mod sweep;
mod wave_propagation_1d;

pub use block::WaveBlock;
pub use builder::{BlockBuilder, BlockKind};
pub use dimensional_splitting::DimensionalSplitting;
pub use reduced::ReducedDomain;
pub use search::{SearchArea, SearchStrategy};
pub use sweep::{CFL_WARN_LIMIT, NetUpdateFields, SAFETY_FACTOR, stable_time_step};
pub use wave_propagation_1d::WavePropagation1D;
