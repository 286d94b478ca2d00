//! Integral quantities of a block state.

use crate::grid::GridState;

/// Total water volume `Σ h · dx · dy` over the interior (m³).
pub fn total_mass(state: &GridState) -> f64 {
    state.h.interior_sum() * state.dx() * state.dy()
}

/// Total momentum `(Σ hu, Σ hv) · dx · dy` over the interior.
pub fn total_momentum(state: &GridState) -> (f64, f64) {
    let area = state.dx() * state.dy();
    (
        state.hu.interior_sum() * area,
        state.hv.interior_sum() * area,
    )
}

/// Largest water height and surface elevation `h + b` over wet cells.
///
/// Returns `None` if every cell is dry.
pub fn max_elevation(state: &GridState) -> Option<(f64, f64)> {
    state
        .h
        .interior()
        .zip(state.b.interior())
        .filter(|(h, _)| *h > 0.0)
        .fold(None, |acc, (h, b)| match acc {
            None => Some((h, h + b)),
            Some((max_h, max_eta)) => Some((max_h.max(h), max_eta.max(h + b))),
        })
}
