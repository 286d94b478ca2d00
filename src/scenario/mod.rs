//! Initial conditions and domain configuration.
//!
//! A [`Scenario`] answers point queries for water height, bathymetry and
//! velocity, and describes the domain: its four edge positions, the
//! boundary kind of each edge and the simulated time span.
//!
//! ## Available scenarios
//!
//! - [`StillWaterScenario`]: lake at rest
//! - [`RadialDamBreakScenario`]: collapsing water column, optional island
//! - [`ArtificialTsunamiScenario`]: synthetic sea-floor uplift
//! - [`EarthquakeScenario`]: wave hump sized from an earthquake magnitude
//! - [`GriddedTsunamiScenario`]: bathymetry and displacement from sampled grids
//! - [`CheckpointScenario`]: resume from a saved [`Checkpoint`](crate::io::Checkpoint)
//! - [`RowScenario`] over a [`Profile1D`]: one-row fixtures
//!   ([`BathymetryScenario1D`], [`SubcriticalFlow1D`])

mod analytic;
mod checkpoint;
mod gridded;
mod one_d;
mod traits;

pub use analytic::{
    ArtificialTsunamiScenario, EarthquakeScenario, RadialDamBreakScenario, StillWaterScenario,
};
pub use checkpoint::CheckpointScenario;
pub use gridded::GriddedTsunamiScenario;
pub use one_d::{BathymetryScenario1D, Profile1D, RowScenario, SubcriticalFlow1D};
pub use traits::{Scenario, snap_shallow_bathymetry};
