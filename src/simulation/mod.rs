//! Simulation runner.
//!
//! Ties together a [`WaveBlock`](crate::solver::WaveBlock), a
//! [`SnapshotWriter`](crate::io::SnapshotWriter) and an optional
//! [`WarningMonitor`](crate::analysis::WarningMonitor):
//! - Checkpoint scheduling between start and end time
//! - Time steps capped so every checkpoint is hit exactly
//! - Per-iteration callbacks and early stop
//!
//! # Example
//! ```no_run
//! use swe_tsunami::io::VtkWriter;
//! use swe_tsunami::scenario::ArtificialTsunamiScenario;
//! use swe_tsunami::simulation::{Simulation, SimulationConfig};
//! use swe_tsunami::solver::{DimensionalSplitting, WaveBlock};
//! use swe_tsunami::types::Resolution2D;
//!
//! let scenario = ArtificialTsunamiScenario::default();
//! let mut block = DimensionalSplitting::from_scenario(Resolution2D::new(200, 200), &scenario);
//! let mut writer = VtkWriter::new("output/tsunami", block.state(), 1).unwrap();
//!
//! let config = SimulationConfig::from_scenario(&scenario).with_checkpoints(50);
//! let result = Simulation::new(config).unwrap().run(&mut block, &mut writer).unwrap();
//! println!("{} iterations", result.iterations);
//! ```

mod runner;

pub use runner::{Simulation, SimulationConfig, SimulationError, SimulationResult};
