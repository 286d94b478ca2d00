//! NetCDF I/O for block snapshots and gridded input data.
//!
//! # Output layout
//!
//! - dimensions `x`, `y` (cell centres) and unlimited `time`
//! - coordinate variables `x`, `y`, `time`
//! - static `b(y, x)`, per-checkpoint `h(time, y, x)`, `hu(time, y, x)`, `hv(time, y, x)`
//! - global attributes `Conventions`, `boundary_code`, `dx`, `dy`, `history`
//!
//! The same layout is read back by [`read_checkpoint`] to resume a run.
//! [`read_grid`] loads any `var(y, x)` with 1D `x` and `y` coordinates,
//! e.g. bathymetry and displacement inputs for
//! [`GriddedTsunamiScenario`](crate::scenario::GriddedTsunamiScenario).
//!
//! # Example
//!
//! ```rust,ignore
//! use swe_tsunami::io::{NetCDFWriter, SnapshotWriter, read_checkpoint};
//!
//! let mut writer = NetCDFWriter::create("run.nc", block.state(), block.boundaries(), 1)?;
//! writer.write_time_step(block.state(), 0.0)?;
//! drop(writer);
//! let cp = read_checkpoint("run.nc")?;
//! ```

use std::path::{Path, PathBuf};

use chrono::Utc;
use netcdf::create;
use thiserror::Error;

use super::writer::{OutputGrid, SnapshotWriter, WriterError};
use super::{Checkpoint, GridData};
use crate::boundary::{BoundaryConditions, BoundaryError};
use crate::grid::{Field, GridError, GridState};

/// Error type for NetCDF input.
#[derive(Debug, Error)]
pub enum NetCDFError {
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// NetCDF library error
    #[error("NetCDF error: {0}")]
    NetCDF(#[from] netcdf::Error),

    /// Invalid data
    #[error("Invalid data in {path}: {reason}")]
    InvalidData { path: PathBuf, reason: String },

    /// Missing variable
    #[error("{path}: missing variable '{name}'")]
    MissingVariable { path: PathBuf, name: String },

    /// Missing dimension
    #[error("{path}: missing dimension '{name}'")]
    MissingDimension { path: PathBuf, name: String },

    /// Stored boundary code is not valid
    #[error(transparent)]
    Boundary(#[from] BoundaryError),

    /// Stored fields have inconsistent shapes
    #[error(transparent)]
    Grid(#[from] GridError),
}

// ============================================================================
// NetCDF Writer
// ============================================================================

/// Snapshot writer appending checkpoints to one NetCDF file.
pub struct NetCDFWriter {
    file: netcdf::FileMut,
    grid: OutputGrid,
    time_index: usize,
}

impl NetCDFWriter {
    /// Create the file, write coordinates and bathymetry.
    ///
    /// # Arguments
    ///
    /// * `path` - Output file (overwritten if it exists)
    /// * `state` - Block state, used for geometry and bathymetry
    /// * `boundaries` - Stored as the `boundary_code` attribute
    /// * `coarse` - Coarsening factor (`1` writes full resolution)
    pub fn create(
        path: impl AsRef<Path>,
        state: &GridState,
        boundaries: BoundaryConditions,
        coarse: usize,
    ) -> Result<Self, WriterError> {
        let grid = OutputGrid::new(state, coarse)?;
        let bathymetry = grid.prepare(&state.b)?;
        let (nx, ny) = (bathymetry.nx(), bathymetry.ny());
        let dx = state.dx() * coarse as f64;
        let dy = state.dy() * coarse as f64;
        let bounds = state.bounds();

        let x: Vec<f64> = (0..nx).map(|i| bounds.x_min + (i as f64 + 0.5) * dx).collect();
        let y: Vec<f64> = (0..ny).map(|j| bounds.y_min + (j as f64 + 0.5) * dy).collect();

        let mut file = create(path.as_ref())?;

        file.add_unlimited_dimension("time")?;
        file.add_dimension("y", ny)?;
        file.add_dimension("x", nx)?;

        {
            let mut time_var = file.add_variable::<f64>("time", &["time"])?;
            time_var.put_attribute("long_name", "simulation time")?;
            time_var.put_attribute("units", "seconds")?;
        }

        {
            let mut x_var = file.add_variable::<f64>("x", &["x"])?;
            x_var.put_attribute("long_name", "x coordinate of cell centre")?;
            x_var.put_attribute("units", "m")?;
            x_var.put_values(&x, ..)?;
        }

        {
            let mut y_var = file.add_variable::<f64>("y", &["y"])?;
            y_var.put_attribute("long_name", "y coordinate of cell centre")?;
            y_var.put_attribute("units", "m")?;
            y_var.put_values(&y, ..)?;
        }

        {
            let mut b_var = file.add_variable::<f64>("b", &["y", "x"])?;
            b_var.put_attribute("long_name", "bathymetry")?;
            b_var.put_attribute("units", "m")?;
            b_var.put_values(&bathymetry.interior_row_major(), (.., ..))?;
        }

        for (name, long_name, units) in [
            ("h", "water height", "m"),
            ("hu", "momentum in x-direction", "m2 s-1"),
            ("hv", "momentum in y-direction", "m2 s-1"),
        ] {
            let mut var = file.add_variable::<f64>(name, &["time", "y", "x"])?;
            var.put_attribute("long_name", long_name)?;
            var.put_attribute("units", units)?;
        }

        file.add_attribute("Conventions", "CF-1.8")?;
        file.add_attribute("boundary_code", boundaries.code() as i32)?;
        file.add_attribute("dx", dx)?;
        file.add_attribute("dy", dy)?;

        let now = Utc::now();
        file.add_attribute(
            "history",
            format!("{}: Created by swe-tsunami", now.format("%Y-%m-%d %H:%M:%S UTC")).as_str(),
        )?;

        Ok(Self {
            file,
            grid,
            time_index: 0,
        })
    }

    fn put_field(&mut self, name: &str, field: &Field) -> Result<(), WriterError> {
        let t_idx = self.time_index;
        let mut var = self
            .file
            .variable_mut(name)
            .ok_or_else(|| netcdf::Error::from(format!("variable '{name}' not defined")))?;
        var.put_values(&field.interior_row_major(), (t_idx, .., ..))?;
        Ok(())
    }
}

impl SnapshotWriter for NetCDFWriter {
    fn write_time_step(&mut self, state: &GridState, time: f64) -> Result<(), WriterError> {
        self.grid.check(state)?;
        let t_idx = self.time_index;

        {
            let mut time_var = self
                .file
                .variable_mut("time")
                .ok_or_else(|| netcdf::Error::from("variable 'time' not defined".to_string()))?;
            time_var.put_value(time, [t_idx])?;
        }

        let h = self.grid.prepare(&state.h)?;
        let hu = self.grid.prepare(&state.hu)?;
        let hv = self.grid.prepare(&state.hv)?;
        self.put_field("h", &h)?;
        self.put_field("hu", &hu)?;
        self.put_field("hv", &hv)?;

        self.time_index += 1;
        Ok(())
    }

    fn snapshots_written(&self) -> usize {
        self.time_index
    }
}

// ============================================================================
// Readers
// ============================================================================

fn read_var(file: &netcdf::File, path: &Path, name: &str) -> Result<Vec<f64>, NetCDFError> {
    let var = file.variable(name).ok_or_else(|| NetCDFError::MissingVariable {
        path: path.to_path_buf(),
        name: name.to_string(),
    })?;
    Ok(var.get_values::<f64, _>(..)?)
}

fn dim_len(file: &netcdf::File, path: &Path, name: &str) -> Result<usize, NetCDFError> {
    file.dimension(name)
        .map(|d| d.len())
        .ok_or_else(|| NetCDFError::MissingDimension {
            path: path.to_path_buf(),
            name: name.to_string(),
        })
}

fn global_f64(file: &netcdf::File, path: &Path, name: &str) -> Result<f64, NetCDFError> {
    let value = file
        .attribute(name)
        .ok_or_else(|| NetCDFError::InvalidData {
            path: path.to_path_buf(),
            reason: format!("missing global attribute '{name}'"),
        })?
        .value()?;
    match value {
        netcdf::AttributeValue::Double(d) => Ok(d),
        netcdf::AttributeValue::Float(f) => Ok(f as f64),
        netcdf::AttributeValue::Int(i) => Ok(i as f64),
        netcdf::AttributeValue::Short(s) => Ok(s as f64),
        _ => Err(NetCDFError::InvalidData {
            path: path.to_path_buf(),
            reason: format!("global attribute '{name}' is not numeric"),
        }),
    }
}

/// Field from row-major `[y][x]` values.
fn field_from_row_major(nx: usize, ny: usize, values: &[f64]) -> Result<Field, GridError> {
    if values.len() != nx * ny {
        return Err(GridError::DimensionMismatch {
            expected: nx * ny,
            actual: values.len(),
        });
    }
    let mut field = Field::new(nx, ny);
    for j in 1..=ny {
        for i in 1..=nx {
            field[(i, j)] = values[(j - 1) * nx + (i - 1)];
        }
    }
    Ok(field)
}

/// Read the last time slice of a file written by [`NetCDFWriter`].
///
/// # Errors
///
/// Returns [`NetCDFError`] naming the file and the missing variable,
/// dimension or attribute, or when the file holds no time slice.
pub fn read_checkpoint(path: impl AsRef<Path>) -> Result<Checkpoint, NetCDFError> {
    let path = path.as_ref();
    let file = netcdf::open(path)?;

    let nx = dim_len(&file, path, "x")?;
    let ny = dim_len(&file, path, "y")?;
    let times = read_var(&file, path, "time")?;
    let last = times.len().checked_sub(1).ok_or_else(|| NetCDFError::InvalidData {
        path: path.to_path_buf(),
        reason: "no time steps written".to_string(),
    })?;

    let dx = global_f64(&file, path, "dx")?;
    let dy = global_f64(&file, path, "dy")?;
    let code = global_f64(&file, path, "boundary_code")? as u32;
    let boundaries = BoundaryConditions::from_code(code)?;

    let x = read_var(&file, path, "x")?;
    let y = read_var(&file, path, "y")?;
    let origin = (
        x.first().map_or(0.0, |x0| x0 - 0.5 * dx),
        y.first().map_or(0.0, |y0| y0 - 0.5 * dy),
    );

    let slice = |name: &str| -> Result<Field, NetCDFError> {
        let var = file.variable(name).ok_or_else(|| NetCDFError::MissingVariable {
            path: path.to_path_buf(),
            name: name.to_string(),
        })?;
        let values: Vec<f64> = var.get_values((last, .., ..))?;
        Ok(field_from_row_major(nx, ny, &values)?)
    };

    let bathymetry = field_from_row_major(nx, ny, &read_var(&file, path, "b")?)?;

    Ok(Checkpoint {
        time: times[last],
        bathymetry,
        height: slice("h")?,
        momentum_x: slice("hu")?,
        momentum_y: slice("hv")?,
        boundaries,
        dx,
        dy,
        nx,
        ny,
        origin,
    })
}

/// Read a gridded variable `var(y, x)` with its 1D coordinates.
///
/// # Errors
///
/// Returns [`NetCDFError::MissingVariable`] naming the file and variable
/// when `x`, `y` or `var` is absent.
pub fn read_grid(path: impl AsRef<Path>, var: &str) -> Result<GridData, NetCDFError> {
    let path = path.as_ref();
    let file = netcdf::open(path)?;

    let x = read_var(&file, path, "x")?;
    let y = read_var(&file, path, "y")?;
    let values = read_var(&file, path, var)?;
    tracing::debug!(path = %path.display(), var, nx = x.len(), ny = y.len(), "read grid");

    Ok(GridData::new(x, y, values)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::RadialDamBreakScenario;
    use crate::types::Resolution2D;

    #[test]
    fn test_checkpoint_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.nc");

        let mut state =
            GridState::from_scenario(Resolution2D::new(8, 6), &RadialDamBreakScenario::default());
        let bcs = BoundaryConditions::from_code(1212).unwrap();
        {
            let mut writer = NetCDFWriter::create(&path, &state, bcs, 1).unwrap();
            writer.write_time_step(&state, 0.0).unwrap();
            state.hu[(3, 2)] = 1.25;
            writer.write_time_step(&state, 4.5).unwrap();
            assert_eq!(writer.snapshots_written(), 2);
        }

        let cp = read_checkpoint(&path).unwrap();
        assert_eq!(cp.time, 4.5);
        assert_eq!((cp.nx, cp.ny), (8, 6));
        assert_eq!(cp.dx, state.dx());
        assert_eq!(cp.boundaries, bcs);
        assert_eq!(cp.bounds(), state.bounds());
        assert_eq!(cp.momentum_x[(3, 2)], 1.25);
        assert_eq!(cp.height.max_abs_diff(&state.h), 0.0);
        assert_eq!(cp.bathymetry.max_abs_diff(&state.b), 0.0);
    }

    #[test]
    fn test_read_grid_and_missing_variable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bathy.nc");
        let state =
            GridState::from_scenario(Resolution2D::new(4, 3), &RadialDamBreakScenario::default());
        NetCDFWriter::create(&path, &state, BoundaryConditions::outflow(), 1).unwrap();

        let grid = read_grid(&path, "b").unwrap();
        assert_eq!((grid.nx(), grid.ny()), (4, 3));
        assert_eq!(grid.bounds(), state.bounds());
        assert!(grid.values.iter().all(|&b| b == -10.0));

        let err = read_grid(&path, "z").unwrap_err();
        assert!(matches!(err, NetCDFError::MissingVariable { ref name, .. } if name == "z"));
        assert!(err.to_string().contains("bathy.nc"));
    }
}
