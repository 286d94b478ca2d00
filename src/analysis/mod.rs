//! Monitoring and integral diagnostics.
//!
//! - [`WarningMonitor`]: threshold alarm on the water height at one cell,
//!   able to stop a run once the wave has passed
//! - [`total_mass`], [`total_momentum`], [`max_elevation`]: integral checks
//!   logged per checkpoint
//!
//! # Example
//!
//! ```
//! use swe_tsunami::analysis::total_mass;
//! use swe_tsunami::grid::GridState;
//! use swe_tsunami::scenario::StillWaterScenario;
//! use swe_tsunami::types::Resolution2D;
//!
//! let state = GridState::from_scenario(Resolution2D::new(4, 4), &StillWaterScenario::default());
//! assert!((total_mass(&state) - 1.0e7).abs() < 1e-3);
//! ```

mod diagnostics;
mod warning;

pub use diagnostics::{max_elevation, total_mass, total_momentum};
pub use warning::WarningMonitor;
