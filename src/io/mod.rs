//! Snapshot output, checkpoints and gridded input data.
//!
//! This module provides:
//! - **Writers**: [`SnapshotWriter`] implementations for in-memory capture,
//!   legacy VTK files and NetCDF (requires `netcdf` feature)
//! - **Checkpoints**: complete block state for resuming a run
//! - **Gridded data**: rectilinear samples (bathymetry, displacement)
//!
//! All writers can coarsen their output by block averaging; bathymetry is
//! written once when the writer is created.
//!
//! # Example
//!
//! ```
//! use swe_tsunami::grid::GridState;
//! use swe_tsunami::io::{MemoryWriter, SnapshotWriter};
//! use swe_tsunami::scenario::StillWaterScenario;
//! use swe_tsunami::types::Resolution2D;
//!
//! let state = GridState::from_scenario(Resolution2D::new(8, 8), &StillWaterScenario::default());
//! let mut writer = MemoryWriter::with_coarsening(&state, 2).unwrap();
//! writer.write_time_step(&state, 0.0).unwrap();
//! assert_eq!(writer.last().unwrap().h.nx(), 4);
//! ```

mod checkpoint;
mod grid_data;
#[cfg(feature = "netcdf")]
mod netcdf_io;
mod vtk;
mod writer;

pub use checkpoint::Checkpoint;
pub use grid_data::{GridData, nearest_index};
#[cfg(feature = "netcdf")]
pub use netcdf_io::{NetCDFError, NetCDFWriter, read_checkpoint, read_grid};
pub use vtk::VtkWriter;
pub use writer::{MemoryWriter, Snapshot, SnapshotWriter, WriterError};
