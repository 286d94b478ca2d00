//! Simulation runner implementation.
//!
//! Advances a [`WaveBlock`] through a sequence of checkpoints and hands the
//! state to a [`SnapshotWriter`] at each of them.

use std::time::Instant;

use thiserror::Error;

use crate::analysis::{WarningMonitor, total_mass, total_momentum};
use crate::grid::GridState;
use crate::io::{SnapshotWriter, WriterError};
use crate::scenario::Scenario;
use crate::solver::WaveBlock;

/// Errors raised by the simulation driver.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// End time not after the start time, or not finite.
    #[error("end time {end} must be finite and greater than start time {start}")]
    InvalidEndTime { start: f64, end: f64 },

    /// Zero checkpoints requested.
    #[error("number of checkpoints must be at least 1")]
    InvalidCheckpointCount,

    /// The block returned a time step that cannot advance the run.
    #[error("block returned time step {dt} at t = {time}")]
    Stalled { time: f64, dt: f64 },

    /// Snapshot output failed.
    #[error(transparent)]
    Writer(#[from] WriterError),
}

// =============================================================================
// Simulation Configuration
// =============================================================================

/// Configuration for a simulation run.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Simulated time at which the run starts.
    pub start_time: f64,
    /// Simulated time at which the run ends.
    pub end_time: f64,
    /// Number of checkpoints between start and end (the initial snapshot
    /// is written in addition).
    pub checkpoints: usize,
    /// Stop after this many iterations.
    pub max_iterations: Option<usize>,
    /// Log every iteration at debug level instead of trace.
    pub verbose: bool,
}

impl SimulationConfig {
    /// Run from 0 to `end_time` with 20 checkpoints.
    pub fn new(end_time: f64) -> Self {
        Self {
            start_time: 0.0,
            end_time,
            checkpoints: 20,
            max_iterations: None,
            verbose: false,
        }
    }

    /// Start and end time of `scenario`.
    pub fn from_scenario(scenario: &dyn Scenario) -> Self {
        Self::new(scenario.end_simulation_time()).with_start_time(scenario.start_time())
    }

    pub fn with_checkpoints(mut self, checkpoints: usize) -> Self {
        self.checkpoints = checkpoints;
        self
    }

    pub fn with_start_time(mut self, start_time: f64) -> Self {
        self.start_time = start_time;
        self
    }

    pub fn with_end_time(mut self, end_time: f64) -> Self {
        self.end_time = end_time;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidEndTime`] unless
    /// `start_time < end_time < ∞`, and
    /// [`SimulationError::InvalidCheckpointCount`] for zero checkpoints.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !(self.end_time.is_finite() && self.start_time.is_finite())
            || self.end_time <= self.start_time
        {
            return Err(SimulationError::InvalidEndTime {
                start: self.start_time,
                end: self.end_time,
            });
        }
        if self.checkpoints == 0 {
            return Err(SimulationError::InvalidCheckpointCount);
        }
        Ok(())
    }

    /// Simulated time of checkpoint `index` (`0` is the start).
    pub fn checkpoint_time(&self, index: usize) -> f64 {
        if index >= self.checkpoints {
            return self.end_time;
        }
        let interval = (self.end_time - self.start_time) / self.checkpoints as f64;
        self.start_time + index as f64 * interval
    }
}

// =============================================================================
// Simulation Result
// =============================================================================

/// Result of a simulation run.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationResult {
    /// Final simulation time reached.
    pub final_time: f64,
    /// Total number of iterations.
    pub iterations: usize,
    /// Snapshots handed to the writer, the initial one included.
    pub checkpoints_written: usize,
    /// Total wall-clock time in seconds.
    pub wall_time: f64,
    /// Whether the warning monitor ended the run early.
    pub stopped_by_monitor: bool,
    /// Whether the iteration limit ended the run early.
    pub hit_iteration_limit: bool,
    /// Smallest time step used.
    pub dt_min: f64,
    /// Largest time step used.
    pub dt_max: f64,
}

impl SimulationResult {
    /// Whether the run reached its end time.
    pub fn completed(&self) -> bool {
        !self.stopped_by_monitor && !self.hit_iteration_limit
    }
}

// =============================================================================
// Simulation Runner
// =============================================================================

/// Checkpoint-driven simulation runner.
///
/// The interval `[start_time, end_time]` is divided into `checkpoints`
/// equal parts. Every iteration's time step is capped at the time left to
/// the next checkpoint, so checkpoints are hit exactly.
///
/// # Example
///
/// ```
/// use swe_tsunami::io::MemoryWriter;
/// use swe_tsunami::scenario::RadialDamBreakScenario;
/// use swe_tsunami::simulation::{Simulation, SimulationConfig};
/// use swe_tsunami::solver::{DimensionalSplitting, WaveBlock};
/// use swe_tsunami::types::Resolution2D;
///
/// let scenario = RadialDamBreakScenario::default();
/// let mut block = DimensionalSplitting::from_scenario(Resolution2D::new(16, 16), &scenario);
/// let mut writer = MemoryWriter::new(block.state());
///
/// let mut sim = Simulation::new(SimulationConfig::new(2.0).with_checkpoints(4)).unwrap();
/// let result = sim.run(&mut block, &mut writer).unwrap();
///
/// assert_eq!(result.final_time, 2.0);
/// assert_eq!(result.checkpoints_written, 5);
/// assert_eq!(writer.snapshots()[2].time, 1.0);
/// ```
#[derive(Clone, Debug)]
pub struct Simulation {
    config: SimulationConfig,
    monitor: Option<WarningMonitor>,
}

impl Simulation {
    /// # Errors
    ///
    /// Returns the error of [`SimulationConfig::validate`].
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        Ok(Self {
            config,
            monitor: None,
        })
    }

    /// Watch one cell and stop once a wave has passed it.
    ///
    /// The reference level is taken from the block state when the run
    /// starts.
    pub fn with_monitor(mut self, monitor: WarningMonitor) -> Self {
        self.monitor = Some(monitor);
        self
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn monitor(&self) -> Option<&WarningMonitor> {
        self.monitor.as_ref()
    }

    /// Run the simulation, writing a snapshot at every checkpoint.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError`] if a snapshot cannot be written or the
    /// block stops advancing.
    pub fn run<B, W>(&mut self, block: &mut B, writer: &mut W) -> Result<SimulationResult, SimulationError>
    where
        B: WaveBlock + ?Sized,
        W: SnapshotWriter + ?Sized,
    {
        self.run_with_callback(block, writer, |_, _| {})
    }

    /// Run the simulation with a callback.
    ///
    /// The callback sees the state after every iteration, e.g. to drive a
    /// live view.
    ///
    /// # Errors
    ///
    /// See [`run`](Self::run).
    pub fn run_with_callback<B, W, F>(
        &mut self,
        block: &mut B,
        writer: &mut W,
        mut callback: F,
    ) -> Result<SimulationResult, SimulationError>
    where
        B: WaveBlock + ?Sized,
        W: SnapshotWriter + ?Sized,
        F: FnMut(&GridState, f64),
    {
        let start_wall = Instant::now();
        let config = &self.config;

        let mut t = config.start_time;
        let mut iterations = 0;
        let mut written = 0;
        let mut dt_min_used = f64::INFINITY;
        let mut dt_max_used: f64 = 0.0;
        let mut stopped_by_monitor = false;
        let mut hit_iteration_limit = false;

        if let Some(monitor) = self.monitor.as_mut() {
            monitor.calibrate(block.state());
        }

        tracing::info!(
            block = block.name(),
            resolution = %block.state().resolution(),
            cells = block.state().resolution().interior_cells(),
            boundaries = %block.boundaries(),
            start = config.start_time,
            end = config.end_time,
            checkpoints = config.checkpoints,
            "starting simulation"
        );

        writer.write_time_step(block.state(), t)?;
        written += 1;

        'checkpoints: for index in 1..=config.checkpoints {
            let target = config.checkpoint_time(index);

            while t < target {
                if config.max_iterations.is_some_and(|max| iterations >= max) {
                    hit_iteration_limit = true;
                    break 'checkpoints;
                }

                let remaining = target - t;
                let dt = block.step(Some(remaining));
                if !(dt > 0.0) {
                    return Err(SimulationError::Stalled { time: t, dt });
                }
                t = if dt >= remaining { target } else { t + dt };
                iterations += 1;
                dt_min_used = dt_min_used.min(dt);
                dt_max_used = dt_max_used.max(dt);

                if config.verbose {
                    tracing::debug!(iteration = iterations, dt, time = t, "iteration");
                } else {
                    tracing::trace!(iteration = iterations, dt, time = t, "iteration");
                }

                callback(block.state(), t);

                if let Some(monitor) = self.monitor.as_mut()
                    && monitor.observe_state(block.state(), t)
                {
                    stopped_by_monitor = true;
                    break 'checkpoints;
                }
            }

            writer.write_time_step(block.state(), t)?;
            written += 1;
            log_checkpoint(index, t, iterations, start_wall, block.state());
        }

        if stopped_by_monitor || hit_iteration_limit {
            writer.write_time_step(block.state(), t)?;
            written += 1;
            tracing::info!(
                time = t,
                iterations,
                by_monitor = stopped_by_monitor,
                "simulation stopped early"
            );
        }

        let wall_time = start_wall.elapsed().as_secs_f64();
        tracing::info!(
            final_time = t,
            iterations,
            snapshots = written,
            wall_time,
            "simulation complete"
        );

        Ok(SimulationResult {
            final_time: t,
            iterations,
            checkpoints_written: written,
            wall_time,
            stopped_by_monitor,
            hit_iteration_limit,
            dt_min: dt_min_used,
            dt_max: dt_max_used,
        })
    }
}

fn log_checkpoint(index: usize, time: f64, iterations: usize, start: Instant, state: &GridState) {
    tracing::info!(
        checkpoint = index,
        time,
        iterations,
        elapsed = start.elapsed().as_secs_f64(),
        "reached checkpoint"
    );
    let (momentum_x, momentum_y) = total_momentum(state);
    tracing::debug!(
        checkpoint = index,
        mass = total_mass(state),
        momentum_x,
        momentum_y,
        "checkpoint diagnostics"
    );
}
