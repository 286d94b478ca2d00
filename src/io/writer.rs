//! Snapshot output at checkpoints.

use thiserror::Error;

use crate::grid::{Field, GridError, GridState, coarsen};

/// Error type for snapshot output.
#[derive(Debug, Error)]
pub enum WriterError {
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// State shape changed after the writer was created
    #[error("state has {actual:?} cells, writer was created for {expected:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// Coarsening failed
    #[error(transparent)]
    Grid(#[from] GridError),

    /// NetCDF library error
    #[cfg(feature = "netcdf")]
    #[error("NetCDF error: {0}")]
    NetCDF(#[from] netcdf::Error),
}

/// Sink for the state of a block at successive checkpoints.
///
/// Bathymetry is static and captured once when the writer is created;
/// every call to [`write_time_step`](Self::write_time_step) records
/// `h`, `hu` and `hv` tagged with the simulation time.
pub trait SnapshotWriter {
    /// Record one checkpoint.
    ///
    /// # Errors
    ///
    /// Returns [`WriterError`] if the state shape differs from the one the
    /// writer was created for, or if the underlying sink fails.
    fn write_time_step(&mut self, state: &GridState, time: f64) -> Result<(), WriterError>;

    /// Number of checkpoints written so far.
    fn snapshots_written(&self) -> usize;
}

/// Coarsening shared by all writers.
#[derive(Clone, Copy, Debug)]
pub(crate) struct OutputGrid {
    pub nx: usize,
    pub ny: usize,
    pub factor: usize,
}

impl OutputGrid {
    /// # Errors
    ///
    /// Returns [`GridError::InvalidCoarsenFactor`] for a zero factor.
    pub fn new(state: &GridState, factor: usize) -> Result<Self, WriterError> {
        if factor == 0 {
            return Err(GridError::InvalidCoarsenFactor(factor).into());
        }
        Ok(Self {
            nx: state.nx(),
            ny: state.ny(),
            factor,
        })
    }

    pub fn check(&self, state: &GridState) -> Result<(), WriterError> {
        if (state.nx(), state.ny()) != (self.nx, self.ny) {
            return Err(WriterError::DimensionMismatch {
                expected: (self.nx, self.ny),
                actual: (state.nx(), state.ny()),
            });
        }
        Ok(())
    }

    /// Field as it should be written: coarsened unless the factor is 1.
    pub fn prepare(&self, field: &Field) -> Result<Field, WriterError> {
        if self.factor == 1 {
            return Ok(field.clone());
        }
        Ok(coarsen(field, self.factor)?)
    }
}

/// One recorded checkpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub time: f64,
    pub h: Field,
    pub hu: Field,
    pub hv: Field,
}

/// Writer that keeps every snapshot in memory.
///
/// Used by tests and by callers that post-process results without
/// touching the file system.
#[derive(Clone, Debug)]
pub struct MemoryWriter {
    grid: OutputGrid,
    bathymetry: Field,
    snapshots: Vec<Snapshot>,
}

impl MemoryWriter {
    /// Capture the bathymetry of `state` at full resolution.
    pub fn new(state: &GridState) -> Self {
        Self {
            grid: OutputGrid {
                nx: state.nx(),
                ny: state.ny(),
                factor: 1,
            },
            bathymetry: state.b.clone(),
            snapshots: Vec::new(),
        }
    }

    /// Capture the bathymetry of `state`, averaging output over
    /// `factor × factor` blocks.
    ///
    /// # Errors
    ///
    /// Returns [`WriterError::Grid`] if `factor` is zero.
    pub fn with_coarsening(state: &GridState, factor: usize) -> Result<Self, WriterError> {
        let grid = OutputGrid::new(state, factor)?;
        Ok(Self {
            grid,
            bathymetry: grid.prepare(&state.b)?,
            snapshots: Vec::new(),
        })
    }

    pub fn bathymetry(&self) -> &Field {
        &self.bathymetry
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }
}

impl SnapshotWriter for MemoryWriter {
    fn write_time_step(&mut self, state: &GridState, time: f64) -> Result<(), WriterError> {
        self.grid.check(state)?;
        self.snapshots.push(Snapshot {
            time,
            h: self.grid.prepare(&state.h)?,
            hu: self.grid.prepare(&state.hu)?,
            hv: self.grid.prepare(&state.hv)?,
        });
        Ok(())
    }

    fn snapshots_written(&self) -> usize {
        self.snapshots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::{RadialDamBreakScenario, StillWaterScenario};
    use crate::types::Resolution2D;

    #[test]
    fn test_memory_writer_records_snapshots() {
        let state = GridState::from_scenario(Resolution2D::new(6, 6), &StillWaterScenario::default());
        let mut writer = MemoryWriter::new(&state);
        writer.write_time_step(&state, 0.0).unwrap();
        writer.write_time_step(&state, 1.5).unwrap();

        assert_eq!(writer.snapshots_written(), 2);
        assert_eq!(writer.last().unwrap().time, 1.5);
        assert_eq!(writer.snapshots()[0].h, state.h);
        assert_eq!(writer.bathymetry(), &state.b);
    }

    #[test]
    fn test_memory_writer_coarsens() {
        let state =
            GridState::from_scenario(Resolution2D::new(10, 10), &RadialDamBreakScenario::default());
        let mut writer = MemoryWriter::with_coarsening(&state, 4).unwrap();
        writer.write_time_step(&state, 0.0).unwrap();

        let snap = writer.last().unwrap();
        assert_eq!((snap.h.nx(), snap.h.ny()), (3, 3));
        assert_eq!(writer.bathymetry()[(3, 3)], -10.0);
        // Corner block lies outside the raised column
        assert_eq!(snap.h[(1, 1)], 10.0);
    }

    #[test]
    fn test_rejects_zero_factor_and_shape_change() {
        let small = GridState::from_scenario(Resolution2D::new(4, 4), &StillWaterScenario::default());
        assert!(matches!(
            MemoryWriter::with_coarsening(&small, 0),
            Err(WriterError::Grid(GridError::InvalidCoarsenFactor(0)))
        ));

        let mut writer = MemoryWriter::new(&small);
        let big = GridState::from_scenario(Resolution2D::new(5, 4), &StillWaterScenario::default());
        assert!(matches!(
            writer.write_time_step(&big, 0.0),
            Err(WriterError::DimensionMismatch { .. })
        ));
    }
}
