//! Command line driver for the shallow water solver.
//!
//! Builds a scenario and a wave block from the arguments, then runs the
//! block to the requested time, writing one snapshot per checkpoint.

use std::path::PathBuf;

use anyhow::{Context, bail, ensure};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use swe_tsunami::analysis::{WarningMonitor, max_elevation, total_mass};
use swe_tsunami::boundary::BoundaryConditions;
use swe_tsunami::io::{SnapshotWriter, VtkWriter};
use swe_tsunami::scenario::{
    ArtificialTsunamiScenario, EarthquakeScenario, RadialDamBreakScenario, Scenario,
    StillWaterScenario,
};
use swe_tsunami::simulation::{Simulation, SimulationConfig};
use swe_tsunami::solver::{BlockBuilder, WaveBlock, search};
use swe_tsunami::types::{CellIndex, DomainWindow, Resolution2D};

/// 2D shallow water solver (f-wave, dimensional splitting)
#[derive(Parser, Debug)]
#[command(name = "swe")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Finite-volume shallow water solver for tsunami propagation", long_about = None)]
struct Cli {
    /// Number of cells in x-direction
    #[arg(short = 'x', long, default_value_t = 10)]
    grid_size_x: usize,

    /// Number of cells in y-direction
    #[arg(short = 'y', long, default_value_t = 10)]
    grid_size_y: usize,

    /// Output base path, without suffix
    #[arg(short = 'o', long, default_value = "SWE")]
    output_basepath: PathBuf,

    /// Number of checkpoints
    #[arg(short = 'n', long, default_value_t = 20)]
    number_of_checkpoints: usize,

    /// Simulated time at which the run ends (seconds)
    #[arg(short = 't', long, default_value_t = 10.0, allow_negative_numbers = true)]
    simulation_time: f64,

    /// Boundary kinds as four digits (left, right, bottom, top); 1 = outflow, 2 = wall.
    /// Defaults to the scenario's.
    #[arg(short = 'b', long)]
    boundary_conditions: Option<BoundaryConditions>,

    /// Initial condition
    #[arg(long, value_enum, default_value_t = ScenarioKind::ArtificialTsunami)]
    scenario: ScenarioKind,

    /// Moment magnitude (scenario `earthquake`)
    #[arg(long, default_value_t = 9.0)]
    magnitude: f64,

    /// Checkpoint file to resume from (scenario `checkpoint`)
    #[arg(long)]
    checkpoint_file: Option<PathBuf>,

    /// Bathymetry grid (scenario `tsunami`)
    #[arg(long)]
    bathymetry: Option<PathBuf>,

    /// Displacement grid (scenario `tsunami`)
    #[arg(long)]
    displacement: Option<PathBuf>,

    /// Output file format
    #[arg(long, value_enum, default_value_t = OutputFormat::Vtk)]
    format: OutputFormat,

    /// Average output over `coarse × coarse` cells
    #[arg(long, default_value_t = 1)]
    coarse: usize,

    /// Wave source cell `x,y` (with --end-cell: reduced domain run)
    #[arg(long, value_parser = parse_cell)]
    start_cell: Option<CellIndex>,

    /// Point of interest `x,y` (with --start-cell: reduced domain run)
    #[arg(long, value_parser = parse_cell)]
    end_cell: Option<CellIndex>,

    /// Cell `x,y` watched by the warning monitor
    #[arg(long, value_parser = parse_cell)]
    warning_cell: Option<CellIndex>,

    /// Water height deviation that raises the alarm (m)
    #[arg(long, default_value_t = 1.0)]
    warning_threshold: f64,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Log every iteration at debug level instead of trace
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ScenarioKind {
    StillWater,
    RadialDamBreak,
    ArtificialTsunami,
    Earthquake,
    Checkpoint,
    Tsunami,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Vtk,
    Netcdf,
}

fn parse_cell(s: &str) -> Result<CellIndex, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected 'x,y', got '{s}'"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<usize>()
            .map_err(|e| format!("invalid cell coordinate '{v}': {e}"))
    };
    Ok(CellIndex::new(parse(x)?, parse(y)?))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    run(cli)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    ensure!(
        cli.simulation_time >= 0.0,
        "simulation time must not be negative, got {}",
        cli.simulation_time
    );
    ensure!(
        cli.grid_size_x > 0 && cli.grid_size_y > 0,
        "grid must have at least one cell per axis"
    );

    let resolution = Resolution2D::new(cli.grid_size_x, cli.grid_size_y);
    let scenario = load_scenario(&cli)?;
    let interior = DomainWindow::interior(resolution.nx(), resolution.ny());

    let mut builder = BlockBuilder::new(resolution);
    if let Some(boundaries) = cli.boundary_conditions {
        builder = builder.with_boundaries(boundaries);
    }

    let (mut block, shift): (Box<dyn WaveBlock>, usize) = match (cli.start_cell, cli.end_cell) {
        (Some(start), Some(end)) => {
            ensure!(interior.contains(start), "start cell {start} outside {interior}");
            ensure!(interior.contains(end), "end cell {end} outside {interior}");
            let reduced = builder.reduced_domain(scenario.as_ref(), start, end);
            let shift = reduced.shift();
            if shift != 0 {
                tracing::warn!(shift, "grid rotated in x; output columns are rotated too");
            }
            (Box::new(reduced), shift)
        }
        (None, None) => (Box::new(builder.dimensional_splitting(scenario.as_ref())), 0),
        _ => bail!("--start-cell and --end-cell must be given together"),
    };

    let config = SimulationConfig::from_scenario(scenario.as_ref())
        .with_end_time(cli.simulation_time)
        .with_checkpoints(cli.number_of_checkpoints)
        .with_verbose(cli.verbose);
    let mut sim = Simulation::new(config)?;

    if let Some(cell) = cli.warning_cell {
        ensure!(interior.contains(cell), "warning cell {cell} outside {interior}");
        let mut monitor = WarningMonitor::new(cell, cli.warning_threshold);
        if shift != 0 {
            monitor.relocate(CellIndex::new(search::shifted_column(cell.x, resolution.nx()), cell.y));
        }
        sim = sim.with_monitor(monitor);
    }

    let mut writer = create_writer(&cli, block.as_ref())?;
    let result = sim.run(block.as_mut(), writer.as_mut())?;

    tracing::info!(
        final_time = result.final_time,
        iterations = result.iterations,
        snapshots = result.checkpoints_written,
        wall_time = result.wall_time,
        mass = total_mass(block.state()),
        "finished"
    );
    if let Some((max_h, max_eta)) = max_elevation(block.state()) {
        tracing::info!(max_h, max_eta, "final water level");
    }
    if let Some((deviation, time)) = sim.monitor().and_then(WarningMonitor::peak) {
        tracing::info!(deviation, time, stopped = result.stopped_by_monitor, "warning cell peak");
    }
    Ok(())
}

fn load_scenario(cli: &Cli) -> anyhow::Result<Box<dyn Scenario>> {
    Ok(match cli.scenario {
        ScenarioKind::StillWater => Box::new(StillWaterScenario::default()),
        ScenarioKind::RadialDamBreak => Box::new(RadialDamBreakScenario::default()),
        ScenarioKind::ArtificialTsunami => Box::new(ArtificialTsunamiScenario::default()),
        ScenarioKind::Earthquake => {
            let scenario = EarthquakeScenario::new(cli.magnitude);
            if scenario.max_wave_height() == 0.0 {
                tracing::warn!(
                    magnitude = cli.magnitude,
                    "magnitude below {}, no tsunami expected",
                    EarthquakeScenario::MIN_MAGNITUDE
                );
            }
            tracing::info!(
                magnitude = cli.magnitude,
                coastal_height = scenario.max_wave_height(),
                epicentre_height = scenario.starting_wave_height(),
                "earthquake wave estimate"
            );
            Box::new(scenario)
        }
        ScenarioKind::Checkpoint => load_checkpoint(cli)?,
        ScenarioKind::Tsunami => load_tsunami(cli)?,
    })
}

#[cfg(feature = "netcdf")]
fn load_checkpoint(cli: &Cli) -> anyhow::Result<Box<dyn Scenario>> {
    use swe_tsunami::io::read_checkpoint;
    use swe_tsunami::scenario::CheckpointScenario;

    let path = cli
        .checkpoint_file
        .as_ref()
        .context("scenario 'checkpoint' requires --checkpoint-file")?;
    let checkpoint = read_checkpoint(path)
        .with_context(|| format!("failed to read checkpoint {}", path.display()))?;
    tracing::info!(path = %path.display(), time = checkpoint.time, "resuming from checkpoint");
    Ok(Box::new(CheckpointScenario::new(checkpoint, cli.simulation_time)))
}

#[cfg(feature = "netcdf")]
fn load_tsunami(cli: &Cli) -> anyhow::Result<Box<dyn Scenario>> {
    use swe_tsunami::io::read_grid;
    use swe_tsunami::scenario::GriddedTsunamiScenario;

    let bathymetry = cli
        .bathymetry
        .as_ref()
        .context("scenario 'tsunami' requires --bathymetry")?;
    let displacement = cli
        .displacement
        .as_ref()
        .context("scenario 'tsunami' requires --displacement")?;
    let b = read_grid(bathymetry, "z")
        .with_context(|| format!("failed to read bathymetry {}", bathymetry.display()))?;
    let d = read_grid(displacement, "z")
        .with_context(|| format!("failed to read displacement {}", displacement.display()))?;
    Ok(Box::new(GriddedTsunamiScenario::new(b, d).with_end_time(cli.simulation_time)))
}

#[cfg(not(feature = "netcdf"))]
fn load_checkpoint(_cli: &Cli) -> anyhow::Result<Box<dyn Scenario>> {
    bail!("scenario 'checkpoint' requires the 'netcdf' feature")
}

#[cfg(not(feature = "netcdf"))]
fn load_tsunami(_cli: &Cli) -> anyhow::Result<Box<dyn Scenario>> {
    bail!("scenario 'tsunami' requires the 'netcdf' feature")
}

fn create_writer(cli: &Cli, block: &dyn WaveBlock) -> anyhow::Result<Box<dyn SnapshotWriter>> {
    match cli.format {
        OutputFormat::Vtk => {
            let writer = VtkWriter::new(&cli.output_basepath, block.state(), cli.coarse)
                .context("failed to create VTK writer")?;
            Ok(Box::new(writer))
        }
        #[cfg(feature = "netcdf")]
        OutputFormat::Netcdf => {
            use swe_tsunami::io::NetCDFWriter;

            let path = cli.output_basepath.with_extension("nc");
            let writer = NetCDFWriter::create(&path, block.state(), *block.boundaries(), cli.coarse)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Box::new(writer))
        }
        #[cfg(not(feature = "netcdf"))]
        OutputFormat::Netcdf => bail!("NetCDF output requires the 'netcdf' feature"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cell() {
        assert_eq!(parse_cell("3,4").unwrap(), CellIndex::new(3, 4));
        assert_eq!(parse_cell(" 10 , 2").unwrap(), CellIndex::new(10, 2));
        assert!(parse_cell("3").is_err());
        assert!(parse_cell("a,1").is_err());
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["swe"]);
        assert_eq!(cli.grid_size_x, 10);
        assert_eq!(cli.number_of_checkpoints, 20);
        assert_eq!(cli.simulation_time, 10.0);
        assert_eq!(cli.scenario, ScenarioKind::ArtificialTsunami);
        assert!(cli.boundary_conditions.is_none());
    }

    #[test]
    fn test_parse_arguments() {
        let cli = Cli::parse_from([
            "swe",
            "-x",
            "50",
            "-b",
            "2211",
            "--scenario",
            "radial-dam-break",
            "--start-cell",
            "5,5",
            "--end-cell",
            "40,20",
        ]);
        assert_eq!(cli.grid_size_x, 50);
        assert_eq!(cli.boundary_conditions.map(|b| b.code()), Some(2211));
        assert_eq!(cli.scenario, ScenarioKind::RadialDamBreak);
        assert_eq!(cli.end_cell, Some(CellIndex::new(40, 20)));
    }

    #[test]
    fn test_earthquake_scenario() {
        let cli = Cli::parse_from(["swe", "--scenario", "earthquake", "--magnitude", "8.5"]);
        assert_eq!(cli.scenario, ScenarioKind::Earthquake);
        let scenario = load_scenario(&cli).unwrap();
        assert_eq!(scenario.name(), "earthquake");
        assert!(scenario.water_height(5000.0, 5000.0) > 100.0);
    }

    #[test]
    fn test_rejects_negative_time() {
        let cli = Cli::parse_from(["swe", "-t", "-1"]);
        assert!(run(cli).is_err());
    }
}
