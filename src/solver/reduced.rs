//! Block restricted to the window between a wave source and a target.

use crate::boundary::BoundaryConditions;
use crate::flux::{FWaveSolver, RiemannSolver};
use crate::grid::GridState;
use crate::scenario::Scenario;
use crate::types::{CellIndex, DomainWindow, Resolution2D};

use super::block::WaveBlock;
use super::dimensional_splitting::DimensionalSplitting;
use super::search::{SearchArea, SearchStrategy, needs_shift, search_window, shifted_column};

/// [`DimensionalSplitting`] that only sweeps and updates the cells of a
/// search window.
///
/// The window is found when the block is built, from a start cell
/// (the wave source) and an end cell (the point of interest); see
/// [`search`](super::search) for the algorithm. Both cells can be moved
/// between runs, followed by a new [`find_search_area`](Self::find_search_area). Cells outside the window
/// keep their initial values.
///
/// If start and end are more than half the grid apart in x, all fields
/// are rotated by `nx / 2` columns first so the region between them is
/// contiguous. The state then stays rotated: [`shift`](Self::shift)
/// reports the rotation and [`into_state`](Self::into_state) undoes it.
///
/// # Example
///
/// ```
/// use swe_tsunami::scenario::ArtificialTsunamiScenario;
/// use swe_tsunami::solver::{ReducedDomain, SearchStrategy};
/// use swe_tsunami::types::{CellIndex, Resolution2D};
///
/// let scenario = ArtificialTsunamiScenario::default();
/// let block = ReducedDomain::from_scenario(
///     Resolution2D::new(100, 100),
///     &scenario,
///     CellIndex::new(50, 50),
///     CellIndex::new(80, 60),
/// );
/// assert_eq!(block.search_area().strategy, SearchStrategy::DirectLine);
/// assert_eq!(block.window().bottom, CellIndex::new(47, 47));
/// ```
#[derive(Debug)]
pub struct ReducedDomain<S: RiemannSolver = FWaveSolver> {
    inner: DimensionalSplitting<S>,
    start: CellIndex,
    end: CellIndex,
    area: SearchArea,
    shift: usize,
}

impl ReducedDomain<FWaveSolver> {
    /// Sample `scenario` and search between `start` and `end`.
    ///
    /// # Panics
    ///
    /// Panics if `start` or `end` is not an interior cell.
    pub fn from_scenario(
        resolution: Resolution2D,
        scenario: &dyn Scenario,
        start: CellIndex,
        end: CellIndex,
    ) -> Self {
        Self::new(DimensionalSplitting::from_scenario(resolution, scenario), start, end)
    }
}

impl<S: RiemannSolver> ReducedDomain<S> {
    /// Restrict `block` to the window between `start` and `end`.
    ///
    /// # Panics
    ///
    /// Panics if `start` or `end` is not an interior cell.
    pub fn new(block: DimensionalSplitting<S>, start: CellIndex, end: CellIndex) -> Self {
        let interior = DomainWindow::interior(block.state().nx(), block.state().ny());
        assert!(interior.contains(start), "start cell {start} outside {interior}");
        assert!(interior.contains(end), "end cell {end} outside {interior}");

        let mut reduced = Self {
            inner: block,
            start,
            end,
            area: SearchArea {
                window: interior,
                strategy: SearchStrategy::FullDomain,
                shifted: false,
            },
            shift: 0,
        };
        reduced.find_search_area();
        reduced
    }

    /// Determine the window, rotating the grid first if needed.
    ///
    /// Runs automatically on construction; calling it again recomputes the
    /// window from the current bathymetry without rotating a second time.
    pub fn find_search_area(&mut self) -> SearchArea {
        let nx = self.inner.state().nx();
        if self.shift == 0 && needs_shift(self.start, self.end, nx) {
            self.shift = nx / 2;
            self.inner.rotate_x(self.shift);
            self.start.x = shifted_column(self.start.x, nx);
            self.end.x = shifted_column(self.end.x, nx);
        }

        let (window, strategy) = search_window(&self.inner.state().b, self.start, self.end);
        self.area = SearchArea {
            window,
            strategy,
            shifted: self.shift != 0,
        };
        tracing::info!(
            %window,
            %strategy,
            shifted = self.area.shifted,
            cells = window.cell_count(),
            "selected search area"
        );
        self.area
    }

    pub fn search_area(&self) -> SearchArea {
        self.area
    }

    pub fn window(&self) -> DomainWindow {
        self.area.window
    }

    /// Columns the state was rotated by (0 if not shifted).
    pub fn shift(&self) -> usize {
        self.shift
    }

    /// Move the wave source to `cell`, given in the original column order.
    ///
    /// The window is not recomputed; call
    /// [`find_search_area`](Self::find_search_area) afterwards.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is not an interior cell.
    pub fn set_start_cell(&mut self, cell: CellIndex) {
        self.start = self.to_state_index(cell, "start");
    }

    /// Move the point of interest to `cell`, given in the original column
    /// order.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is not an interior cell.
    pub fn set_end_cell(&mut self, cell: CellIndex) {
        self.end = self.to_state_index(cell, "end");
    }

    fn to_state_index(&self, mut cell: CellIndex, role: &str) -> CellIndex {
        let (nx, ny) = (self.inner.state().nx(), self.inner.state().ny());
        let interior = DomainWindow::interior(nx, ny);
        assert!(interior.contains(cell), "{role} cell {cell} outside {interior}");
        if self.shift != 0 {
            cell.x = shifted_column(cell.x, nx);
        }
        cell
    }

    /// Start cell in the (possibly rotated) index space of the state.
    pub fn start(&self) -> CellIndex {
        self.start
    }

    /// End cell in the (possibly rotated) index space of the state.
    pub fn end(&self) -> CellIndex {
        self.end
    }

    pub fn max_wave_speeds(&self) -> (f64, f64) {
        self.inner.max_wave_speeds()
    }

    /// State in the original column order.
    pub fn into_state(self) -> GridState {
        let mut state = self.inner.into_state();
        if self.shift != 0 {
            let nx = state.nx();
            state.rotate_x(nx - self.shift);
        }
        state
    }
}

impl<S: RiemannSolver> WaveBlock for ReducedDomain<S> {
    fn apply_boundary_conditions(&mut self) {
        self.inner.apply_boundary_conditions();
    }

    fn compute_numerical_fluxes(&mut self) {
        self.inner.compute_fluxes_in(self.area.window);
    }

    fn max_time_step(&self) -> f64 {
        self.inner.max_time_step()
    }

    fn update_unknowns(&mut self, dt: f64) {
        self.inner.update_in(dt, self.area.window);
    }

    fn state(&self) -> &GridState {
        self.inner.state()
    }

    fn boundaries(&self) -> &BoundaryConditions {
        self.inner.boundaries()
    }

    fn name(&self) -> &'static str {
        "reduced-domain"
    }
}
