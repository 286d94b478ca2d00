//! VTK output for block snapshots.
//!
//! Writes one legacy ASCII file per checkpoint on a `STRUCTURED_POINTS`
//! dataset, readable by ParaView and VisIt. Cell data: water height `h`,
//! momenta `hu`/`hv`, bathymetry `b` and surface elevation `eta = h + b`.
//!
//! Files are named `<base>_<NNNN>.vtk`, numbered from zero.
//!
//! # Example
//!
//! ```ignore
//! use swe_tsunami::io::{SnapshotWriter, VtkWriter};
//!
//! let mut writer = VtkWriter::new("out/dambreak", block.state(), 1)?;
//! writer.write_time_step(block.state(), 0.0)?;
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::writer::{OutputGrid, SnapshotWriter, WriterError};
use crate::grid::{Field, GridState};

/// Values per line in the data sections.
const VALUES_PER_LINE: usize = 6;

/// Snapshot writer producing a series of legacy VTK files.
#[derive(Debug)]
pub struct VtkWriter {
    base: PathBuf,
    grid: OutputGrid,
    bathymetry: Field,
    origin: (f64, f64),
    spacing: (f64, f64),
    written: usize,
}

impl VtkWriter {
    /// Create a writer for the block in `state`.
    ///
    /// # Arguments
    ///
    /// * `base` - Output path without suffix; missing parent directories are created
    /// * `state` - Block state, used for geometry and bathymetry
    /// * `coarse` - Coarsening factor (`1` writes full resolution)
    ///
    /// # Errors
    ///
    /// Returns [`WriterError`] for a zero coarsening factor or when the
    /// output directory cannot be created.
    pub fn new(
        base: impl AsRef<Path>,
        state: &GridState,
        coarse: usize,
    ) -> Result<Self, WriterError> {
        let base = base.as_ref().to_path_buf();
        if let Some(parent) = base.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let grid = OutputGrid::new(state, coarse)?;
        let bounds = state.bounds();
        Ok(Self {
            base,
            bathymetry: grid.prepare(&state.b)?,
            origin: (bounds.x_min, bounds.y_min),
            spacing: (state.dx() * coarse as f64, state.dy() * coarse as f64),
            grid,
            written: 0,
        })
    }

    /// Path of the file for checkpoint `index`.
    pub fn file_path(&self, index: usize) -> PathBuf {
        let mut name = self
            .base
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(format!("_{index:04}.vtk"));
        self.base.with_file_name(name)
    }

    fn write_file(
        &self,
        path: &Path,
        time: f64,
        h: &Field,
        hu: &Field,
        hv: &Field,
    ) -> std::io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        let (nx, ny) = (h.nx(), h.ny());

        writeln!(out, "# vtk DataFile Version 3.0")?;
        writeln!(out, "shallow water snapshot, time = {time:.10e}")?;
        writeln!(out, "ASCII")?;
        writeln!(out, "DATASET STRUCTURED_POINTS")?;
        writeln!(out, "DIMENSIONS {} {} 1", nx + 1, ny + 1)?;
        writeln!(out, "ORIGIN {} {} 0", self.origin.0, self.origin.1)?;
        writeln!(out, "SPACING {} {} 1", self.spacing.0, self.spacing.1)?;
        writeln!(out, "CELL_DATA {}", nx * ny)?;

        let eta: Vec<f64> = h
            .interior_row_major()
            .iter()
            .zip(self.bathymetry.interior_row_major())
            .map(|(h, b)| h + b)
            .collect();

        write_scalars(&mut out, "h", &h.interior_row_major())?;
        write_scalars(&mut out, "hu", &hu.interior_row_major())?;
        write_scalars(&mut out, "hv", &hv.interior_row_major())?;
        write_scalars(&mut out, "b", &self.bathymetry.interior_row_major())?;
        write_scalars(&mut out, "eta", &eta)?;
        out.flush()
    }
}

impl SnapshotWriter for VtkWriter {
    fn write_time_step(&mut self, state: &GridState, time: f64) -> Result<(), WriterError> {
        self.grid.check(state)?;
        let h = self.grid.prepare(&state.h)?;
        let hu = self.grid.prepare(&state.hu)?;
        let hv = self.grid.prepare(&state.hv)?;

        let path = self.file_path(self.written);
        self.write_file(&path, time, &h, &hu, &hv)?;
        tracing::debug!(path = %path.display(), time, "wrote VTK snapshot");

        self.written += 1;
        Ok(())
    }

    fn snapshots_written(&self) -> usize {
        self.written
    }
}

fn write_scalars<W: Write>(out: &mut W, name: &str, data: &[f64]) -> std::io::Result<()> {
    writeln!(out, "SCALARS {name} double 1")?;
    writeln!(out, "LOOKUP_TABLE default")?;
    for line in data.chunks(VALUES_PER_LINE) {
        let text: Vec<String> = line.iter().map(|v| format!("{v:.10e}")).collect();
        writeln!(out, "{}", text.join(" "))?;
    }
    Ok(())
}
