//! Filling the ghost ring of a [`GridState`] from its interior.

use super::BoundaryConditions;
use crate::grid::GridState;
use crate::types::BoundaryEdge;

/// Populate ghost columns `0`, `nx + 1` and ghost rows `0`, `ny + 1`.
///
/// Height and bathymetry are copied from the adjacent interior cell on
/// every edge. The tangential momentum is copied too; the normal
/// momentum is copied for [`Outflow`](super::BoundaryType::Outflow) and
/// negated for [`Wall`](super::BoundaryType::Wall). Corner ghosts take the
/// diagonal interior cell (they are not read by the sweeps).
pub fn apply_ghost_layer(state: &mut GridState, bcs: &BoundaryConditions) {
    let (nx, ny) = (state.nx(), state.ny());

    // Left and right columns, normal momentum is hu
    for (edge, ghost, inner) in [
        (BoundaryEdge::Left, 0, 1),
        (BoundaryEdge::Right, nx + 1, nx),
    ] {
        let kind = bcs.get(edge);
        for j in 1..=ny {
            copy_cell(state, (inner, j), (ghost, j));
            state.hu[(ghost, j)] = kind.ghost_normal_momentum(state.hu[(inner, j)]);
        }
    }

    // Bottom and top rows, normal momentum is hv
    for (edge, ghost, inner) in [
        (BoundaryEdge::Bottom, 0, 1),
        (BoundaryEdge::Top, ny + 1, ny),
    ] {
        let kind = bcs.get(edge);
        for i in 1..=nx {
            copy_cell(state, (i, inner), (i, ghost));
            state.hv[(i, ghost)] = kind.ghost_normal_momentum(state.hv[(i, inner)]);
        }
    }

    for (ghost, inner) in [
        ((0, 0), (1, 1)),
        ((nx + 1, 0), (nx, 1)),
        ((0, ny + 1), (1, ny)),
        ((nx + 1, ny + 1), (nx, ny)),
    ] {
        copy_cell(state, inner, ghost);
    }
}

#[inline]
fn copy_cell(state: &mut GridState, from: (usize, usize), to: (usize, usize)) {
    state.h[to] = state.h[from];
    state.hu[to] = state.hu[from];
    state.hv[to] = state.hv[from];
    state.b[to] = state.b[from];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Bounds2D, Resolution2D};

    fn ramp_state() -> GridState {
        let mut state = GridState::new(Resolution2D::new(3, 2), Bounds2D::square(3.0));
        for i in 1..=3 {
            for j in 1..=2 {
                let v = (10 * i + j) as f64;
                state.h[(i, j)] = v;
                state.hu[(i, j)] = v + 0.5;
                state.hv[(i, j)] = -v;
                state.b[(i, j)] = -2.0 * v;
            }
        }
        state
    }

    #[test]
    fn test_outflow_copies_everything() {
        let mut state = ramp_state();
        apply_ghost_layer(&mut state, &BoundaryConditions::outflow());

        assert_eq!(state.h[(0, 2)], state.h[(1, 2)]);
        assert_eq!(state.hu[(0, 2)], state.hu[(1, 2)]);
        assert_eq!(state.hu[(4, 1)], state.hu[(3, 1)]);
        assert_eq!(state.hv[(2, 0)], state.hv[(2, 1)]);
        assert_eq!(state.hv[(2, 3)], state.hv[(2, 2)]);
        assert_eq!(state.b[(2, 3)], state.b[(2, 2)]);
    }

    #[test]
    fn test_wall_negates_normal_momentum_only() {
        let mut state = ramp_state();
        apply_ghost_layer(&mut state, &BoundaryConditions::walls());

        // Left/right: hu flips, hv is tangential and copied
        assert_eq!(state.hu[(0, 1)], -state.hu[(1, 1)]);
        assert_eq!(state.hu[(4, 2)], -state.hu[(3, 2)]);
        assert_eq!(state.hv[(0, 1)], state.hv[(1, 1)]);
        // Bottom/top: hv flips, hu copied
        assert_eq!(state.hv[(3, 0)], -state.hv[(3, 1)]);
        assert_eq!(state.hv[(1, 3)], -state.hv[(1, 2)]);
        assert_eq!(state.hu[(1, 3)], state.hu[(1, 2)]);
        // Height and bathymetry unchanged
        assert_eq!(state.h[(4, 2)], state.h[(3, 2)]);
        assert_eq!(state.b[(0, 1)], state.b[(1, 1)]);
    }

    #[test]
    fn test_mixed_edges_are_independent() {
        let mut state = ramp_state();
        let bcs = BoundaryConditions::from_code(2111).unwrap();
        apply_ghost_layer(&mut state, &bcs);
        assert_eq!(state.hu[(0, 1)], -state.hu[(1, 1)]);
        assert_eq!(state.hu[(4, 1)], state.hu[(3, 1)]);
        assert!(!bcs.get(BoundaryEdge::Left).is_open());
    }

    #[test]
    fn test_corners_from_diagonal() {
        let mut state = ramp_state();
        apply_ghost_layer(&mut state, &BoundaryConditions::outflow());
        assert_eq!(state.h[(0, 0)], state.h[(1, 1)]);
        assert_eq!(state.h[(4, 3)], state.h[(3, 2)]);
    }
}
