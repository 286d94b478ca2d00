//! Edge sweeps and the finite-volume update shared by all 2D blocks.
//!
//! Every loop runs over x-columns: a column of a [`Field`] is contiguous,
//! columns are independent within one sweep, and each column writes only
//! to its own slice of the output. With the `parallel` feature the columns
//! are distributed over the rayon pool; the only reduction is the maximum
//! wave speed.

use crate::flux::{EdgeState, RiemannSolver};
use crate::grid::{Field, GridState};
use crate::types::DomainWindow;

/// Fraction of the CFL bound used as time step.
pub const SAFETY_FACTOR: f64 = 0.4;

/// CFL number above which the debug build warns.
pub const CFL_WARN_LIMIT: f64 = 0.5;

/// Net updates of one sweep direction, stored at the left (or bottom)
/// cell of each edge.
///
/// `hu_*` hold the momentum along the sweep direction: `hu` for the
/// x-sweep, `hv` for the y-sweep.
#[derive(Clone, Debug)]
pub struct NetUpdateFields {
    pub h_left: Field,
    pub h_right: Field,
    pub hu_left: Field,
    pub hu_right: Field,
}

/// Mutable columns of the four buffers at one x-index.
pub(crate) struct ColumnUpdates<'a> {
    pub h_left: &'a mut [f64],
    pub h_right: &'a mut [f64],
    pub hu_left: &'a mut [f64],
    pub hu_right: &'a mut [f64],
}

impl NetUpdateFields {
    pub fn new(nx: usize, ny: usize) -> Self {
        Self {
            h_left: Field::new(nx, ny),
            h_right: Field::new(nx, ny),
            hu_left: Field::new(nx, ny),
            hu_right: Field::new(nx, ny),
        }
    }

    /// Run `kernel` on every column in `first..=last` and return the
    /// largest value it reports.
    fn for_each_column<F>(&mut self, first: usize, last: usize, kernel: F) -> f64
    where
        F: Fn(usize, ColumnUpdates<'_>) -> f64 + Send + Sync,
    {
        let stride = self.h_left.stride();
        let range = first * stride..(last + 1) * stride;
        let h_left = &mut self.h_left.as_mut_slice()[range.clone()];
        let h_right = &mut self.h_right.as_mut_slice()[range.clone()];
        let hu_left = &mut self.hu_left.as_mut_slice()[range.clone()];
        let hu_right = &mut self.hu_right.as_mut_slice()[range];

        #[cfg(feature = "parallel")]
        let max_speed = {
            use rayon::prelude::*;

            h_left
                .par_chunks_exact_mut(stride)
                .zip(h_right.par_chunks_exact_mut(stride))
                .zip(hu_left.par_chunks_exact_mut(stride))
                .zip(hu_right.par_chunks_exact_mut(stride))
                .enumerate()
                .map(|(k, (((h_left, h_right), hu_left), hu_right))| {
                    let column = ColumnUpdates {
                        h_left,
                        h_right,
                        hu_left,
                        hu_right,
                    };
                    kernel(first + k, column)
                })
                .reduce(|| 0.0, f64::max)
        };

        #[cfg(not(feature = "parallel"))]
        let max_speed = h_left
            .chunks_exact_mut(stride)
            .zip(h_right.chunks_exact_mut(stride))
            .zip(hu_left.chunks_exact_mut(stride))
            .zip(hu_right.chunks_exact_mut(stride))
            .enumerate()
            .map(|(k, (((h_left, h_right), hu_left), hu_right))| {
                let column = ColumnUpdates {
                    h_left,
                    h_right,
                    hu_left,
                    hu_right,
                };
                kernel(first + k, column)
            })
            .fold(0.0, f64::max);

        max_speed
    }
}

/// Solve every x-edge touching `window` and return the largest wave speed.
///
/// Edges run from column `bottom.x - 1` to `top.x`, so the ghost column
/// left of the window contributes.
pub(crate) fn sweep_x<S: RiemannSolver>(
    solver: &S,
    state: &GridState,
    out: &mut NetUpdateFields,
    window: DomainWindow,
) -> f64 {
    let rows = window.bottom.y..=window.top.y;
    out.for_each_column(window.bottom.x - 1, window.top.x, |i, col| {
        let (h_l, h_r) = (state.h.column(i), state.h.column(i + 1));
        let (hu_l, hu_r) = (state.hu.column(i), state.hu.column(i + 1));
        let (b_l, b_r) = (state.b.column(i), state.b.column(i + 1));

        let mut max_speed: f64 = 0.0;
        for j in rows.clone() {
            let u = solver.net_updates(
                EdgeState::new(h_l[j], hu_l[j], b_l[j]),
                EdgeState::new(h_r[j], hu_r[j], b_r[j]),
            );
            col.h_left[j] = u.h_left;
            col.h_right[j] = u.h_right;
            col.hu_left[j] = u.hu_left;
            col.hu_right[j] = u.hu_right;
            max_speed = max_speed.max(u.max_wave_speed);
        }
        max_speed
    })
}

/// Solve every y-edge touching `window` and return the largest wave speed.
pub(crate) fn sweep_y<S: RiemannSolver>(
    solver: &S,
    state: &GridState,
    out: &mut NetUpdateFields,
    window: DomainWindow,
) -> f64 {
    let edges = window.bottom.y - 1..=window.top.y;
    out.for_each_column(window.bottom.x, window.top.x, |i, col| {
        let h = state.h.column(i);
        let hv = state.hv.column(i);
        let b = state.b.column(i);

        let mut max_speed: f64 = 0.0;
        for j in edges.clone() {
            let u = solver.net_updates(
                EdgeState::new(h[j], hv[j], b[j]),
                EdgeState::new(h[j + 1], hv[j + 1], b[j + 1]),
            );
            col.h_left[j] = u.h_left;
            col.h_right[j] = u.h_right;
            col.hu_left[j] = u.hu_left;
            col.hu_right[j] = u.hu_right;
            max_speed = max_speed.max(u.max_wave_speed);
        }
        max_speed
    })
}

/// Largest stable time step for the observed wave speeds.
///
/// A direction without motion imposes no limit; with no motion at all the
/// result is `f64::INFINITY` and the caller must cap it.
pub fn stable_time_step(dx: f64, dy: f64, speed_x: f64, speed_y: f64) -> f64 {
    let limit = |d: f64, s: f64| if s > 0.0 { d / s } else { f64::INFINITY };
    SAFETY_FACTOR * limit(dx, speed_x).min(limit(dy, speed_y))
}

/// Warn when `dt` exceeds the CFL bound of either sweep. Debug builds only.
#[inline]
pub(crate) fn check_cfl(dt: f64, dx: f64, dy: f64, speed_x: f64, speed_y: f64) {
    if cfg!(debug_assertions) {
        let cfl_x = dt * speed_x / dx;
        let cfl_y = dt * speed_y / dy;
        if cfl_x > CFL_WARN_LIMIT || cfl_y > CFL_WARN_LIMIT {
            tracing::warn!(dt, cfl_x, cfl_y, "time step violates CFL condition");
        }
    }
}

/// Apply both sweeps' net updates to the cells of `window`.
///
/// `h` and the sweep-direction momenta move by `dt / dx` (x) and `dt / dy`
/// (y) times the sum of the updates entering each cell through its edges.
pub(crate) fn apply_net_updates(
    state: &mut GridState,
    x: &NetUpdateFields,
    y: &NetUpdateFields,
    dt: f64,
    window: DomainWindow,
) {
    let rx = dt / state.dx();
    let ry = dt / state.dy();
    let rows = window.bottom.y..=window.top.y;

    let update_column = |i: usize, h: &mut [f64], hu: &mut [f64], hv: &mut [f64]| {
        let (xh_r, xh_l) = (x.h_right.column(i - 1), x.h_left.column(i));
        let (xm_r, xm_l) = (x.hu_right.column(i - 1), x.hu_left.column(i));
        let (yh_r, yh_l) = (y.h_right.column(i), y.h_left.column(i));
        let (ym_r, ym_l) = (y.hu_right.column(i), y.hu_left.column(i));
        for j in rows.clone() {
            h[j] -= rx * (xh_r[j] + xh_l[j]) + ry * (yh_r[j - 1] + yh_l[j]);
            hu[j] -= rx * (xm_r[j] + xm_l[j]);
            hv[j] -= ry * (ym_r[j - 1] + ym_l[j]);
        }
    };

    let first = window.bottom.x;
    let stride = state.h.stride();
    let range = first * stride..(window.top.x + 1) * stride;
    let GridState { h, hu, hv, .. } = state;
    let h = &mut h.as_mut_slice()[range.clone()];
    let hu = &mut hu.as_mut_slice()[range.clone()];
    let hv = &mut hv.as_mut_slice()[range];

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        h.par_chunks_exact_mut(stride)
            .zip(hu.par_chunks_exact_mut(stride))
            .zip(hv.par_chunks_exact_mut(stride))
            .enumerate()
            .for_each(|(k, ((h, hu), hv))| update_column(first + k, h, hu, hv));
    }

    #[cfg(not(feature = "parallel"))]
    {
        h.chunks_exact_mut(stride)
            .zip(hu.chunks_exact_mut(stride))
            .zip(hv.chunks_exact_mut(stride))
            .enumerate()
            .for_each(|(k, ((h, hu), hv))| update_column(first + k, h, hu, hv));
    }
}
