//! Search for the part of the grid a wave has to cross.
//!
//! Given a source cell (e.g. an epicentre) and a target cell, the search
//! returns a [`DomainWindow`] that contains both and every water cell on a
//! plausible path between them:
//!
//! 1. Probe the straight line from start to end. If no land (`b > 0`) lies
//!    within one cell of the line, the window is the bounding box of the
//!    two cells grown by [`LINE_MARGIN`].
//! 2. Otherwise run a best-first search over water cells (8-connected,
//!    priority `0.1·g + distance to goal`) and take the bounding box of all
//!    expanded cells, grown by a margin that shrinks with the box size.
//! 3. If the target cannot be reached, use the whole interior.
//!
//! Every window is clamped to `[1, nx - 1] × [1, ny - 1]`.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

use crate::grid::Field;
use crate::types::{CellIndex, DomainWindow};

/// Margin around the straight-line bounding box.
pub const LINE_MARGIN: usize = 3;

/// Cells within this Chebyshev distance of start or end are passable.
pub const ENDPOINT_RADIUS: usize = 3;

/// Weight of the path cost in the search priority.
const PATH_COST_WEIGHT: f64 = 0.1;

/// Margin of a best-first window before the size correction.
const BASE_SEARCH_MARGIN: f64 = 40.0;

/// How a search window was obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchStrategy {
    /// Unobstructed straight line
    DirectLine,
    /// Best-first search around obstacles
    BestFirst,
    /// Target unreachable; whole interior
    FullDomain,
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchStrategy::DirectLine => f.write_str("direct line"),
            SearchStrategy::BestFirst => f.write_str("best-first search"),
            SearchStrategy::FullDomain => f.write_str("full domain"),
        }
    }
}

/// Result of a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchArea {
    /// Cells the block updates
    pub window: DomainWindow,
    pub strategy: SearchStrategy,
    /// Whether the grid was rotated along x before searching
    pub shifted: bool,
}

/// Whether start and end are further apart in x than half the grid.
#[inline]
pub fn needs_shift(start: CellIndex, end: CellIndex, nx: usize) -> bool {
    start.x.abs_diff(end.x) > nx / 2
}

/// Column of interior cell `x` after rotating the grid by `nx / 2`.
#[inline]
pub fn shifted_column(x: usize, nx: usize) -> usize {
    (x - 1 + nx / 2) % nx + 1
}

/// Search window between `start` and `end` over `bathymetry`.
///
/// Both cells must be interior cells of the field.
pub fn search_window(
    bathymetry: &Field,
    start: CellIndex,
    end: CellIndex,
) -> (DomainWindow, SearchStrategy) {
    let (nx, ny) = (bathymetry.nx(), bathymetry.ny());
    let lo = CellIndex::new(1, 1);
    let hi = CellIndex::new(nx.saturating_sub(1), ny.saturating_sub(1));

    if line_is_clear(bathymetry, start, end) {
        let window = DomainWindow::spanning(start, end).expand_clamped(LINE_MARGIN, lo, hi);
        return (window, SearchStrategy::DirectLine);
    }

    match best_first_bounds(bathymetry, start, end) {
        Some(visited) => {
            let extent = (visited.width() - 1).max(visited.height() - 1).max(1);
            let margin = (BASE_SEARCH_MARGIN - (extent as f64).ln()).floor().max(0.0) as usize;
            (
                visited.expand_clamped(margin, lo, hi),
                SearchStrategy::BestFirst,
            )
        }
        None => (
            DomainWindow::interior(nx, ny).expand_clamped(0, lo, hi),
            SearchStrategy::FullDomain,
        ),
    }
}

/// Walk the segment `start → end` in unit steps along its longer axis and
/// check the 3×3 neighbourhood of every sample for land.
fn line_is_clear(bathymetry: &Field, start: CellIndex, end: CellIndex) -> bool {
    let dx = end.x as f64 - start.x as f64;
    let dy = end.y as f64 - start.y as f64;
    let steps = start.x.abs_diff(end.x).max(start.y.abs_diff(end.y));

    (0..=steps).all(|k| {
        let t = if steps == 0 { 0.0 } else { k as f64 / steps as f64 };
        let cell = CellIndex::new(
            (start.x as f64 + t * dx).round() as usize,
            (start.y as f64 + t * dy).round() as usize,
        );
        !land_nearby(bathymetry, cell)
    })
}

fn land_nearby(bathymetry: &Field, cell: CellIndex) -> bool {
    let (nx, ny) = (bathymetry.nx(), bathymetry.ny());
    let xs = cell.x.saturating_sub(1).max(1)..=(cell.x + 1).min(nx);
    xs.into_iter().any(|i| {
        let ys = cell.y.saturating_sub(1).max(1)..=(cell.y + 1).min(ny);
        ys.into_iter().any(|j| bathymetry[(i, j)] > 0.0)
    })
}

#[inline]
fn chebyshev(a: CellIndex, b: CellIndex) -> usize {
    a.x.abs_diff(b.x).max(a.y.abs_diff(b.y))
}

/// Open-list entry. Ordered so that `BinaryHeap` pops the lowest priority
/// first and, among equal priorities, the earliest push.
#[derive(Clone, Copy, Debug)]
struct Node {
    priority: f64,
    seq: u64,
    cell: CellIndex,
    cost: f64,
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Node {}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Bounding box of every cell expanded by a best-first search from
/// `start` to `end`, or `None` if `end` is unreachable.
fn best_first_bounds(bathymetry: &Field, start: CellIndex, end: CellIndex) -> Option<DomainWindow> {
    let (nx, ny) = (bathymetry.nx(), bathymetry.ny());
    let stride = bathymetry.stride();
    let index = |c: CellIndex| c.x * stride + c.y;
    let passable = |c: CellIndex| {
        (1..=nx).contains(&c.x)
            && (1..=ny).contains(&c.y)
            && (bathymetry[(c.x, c.y)] < 0.0
                || chebyshev(c, start) <= ENDPOINT_RADIUS
                || chebyshev(c, end) <= ENDPOINT_RADIUS)
    };

    let mut closed = vec![false; (nx + 2) * (ny + 2)];
    let mut best_cost = vec![f64::INFINITY; (nx + 2) * (ny + 2)];
    let mut open = BinaryHeap::new();
    let mut seq = 0u64;
    let mut bounds = DomainWindow::spanning(start, start);

    best_cost[index(start)] = 0.0;
    open.push(Node {
        priority: start.distance(end),
        seq,
        cell: start,
        cost: 0.0,
    });

    while let Some(node) = open.pop() {
        if closed[index(node.cell)] {
            continue;
        }
        closed[index(node.cell)] = true;
        bounds.extend(node.cell);
        if node.cell == end {
            return Some(bounds);
        }

        for di in -1i64..=1 {
            for dj in -1i64..=1 {
                if di == 0 && dj == 0 {
                    continue;
                }
                // Ghost ring keeps these non-negative for interior cells
                let next = CellIndex::new(
                    (node.cell.x as i64 + di) as usize,
                    (node.cell.y as i64 + dj) as usize,
                );
                if !passable(next) || closed[index(next)] {
                    continue;
                }
                let step = if di != 0 && dj != 0 {
                    std::f64::consts::SQRT_2
                } else {
                    1.0
                };
                let cost = node.cost + step;
                if cost >= best_cost[index(next)] {
                    continue;
                }
                best_cost[index(next)] = cost;
                seq += 1;
                open.push(Node {
                    priority: PATH_COST_WEIGHT * cost + next.distance(end),
                    seq,
                    cell: next,
                    cost,
                });
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Ocean at -100 m with `land` cells raised to +10 m.
    fn ocean(nx: usize, ny: usize, land: impl Fn(usize, usize) -> bool) -> Field {
        let mut b = Field::filled(nx, ny, -100.0);
        for i in 1..=nx {
            for j in 1..=ny {
                if land(i, j) {
                    b[(i, j)] = 10.0;
                }
            }
        }
        b
    }

    #[test]
    fn test_shift_helpers() {
        assert!(!needs_shift(CellIndex::new(1, 1), CellIndex::new(21, 1), 40));
        assert!(needs_shift(CellIndex::new(1, 1), CellIndex::new(22, 1), 40));
        assert_eq!(shifted_column(1, 40), 21);
        assert_eq!(shifted_column(20, 40), 40);
        assert_eq!(shifted_column(21, 40), 1);
        assert_eq!(shifted_column(40, 40), 20);
    }

    #[test]
    fn test_clear_line() {
        let b = ocean(50, 50, |_, _| false);
        let (window, strategy) = search_window(&b, CellIndex::new(10, 12), CellIndex::new(30, 20));
        assert_eq!(strategy, SearchStrategy::DirectLine);
        assert_eq!(
            window,
            DomainWindow::new(CellIndex::new(7, 9), CellIndex::new(33, 23))
        );
    }

    #[test]
    fn test_clear_line_clamped_at_border() {
        let b = ocean(20, 20, |_, _| false);
        let (window, _) = search_window(&b, CellIndex::new(2, 2), CellIndex::new(19, 18));
        assert_eq!(window.bottom, CellIndex::new(1, 1));
        assert_eq!(window.top, CellIndex::new(19, 19));
    }

    #[test]
    fn test_land_next_to_line_blocks_it() {
        // Land one row above the line still counts
        let b = ocean(30, 30, |i, j| i == 15 && j == 11);
        assert!(!line_is_clear(&b, CellIndex::new(5, 10), CellIndex::new(25, 10)));
        let b = ocean(30, 30, |i, j| i == 15 && j == 12);
        assert!(line_is_clear(&b, CellIndex::new(5, 10), CellIndex::new(25, 10)));
    }

    #[test]
    fn test_best_first_detours_around_wall() {
        // Wall at x = 20 from y = 1 to 40 leaves a gap at the top
        let b = ocean(60, 60, |i, j| i == 20 && j <= 40);
        let start = CellIndex::new(10, 10);
        let end = CellIndex::new(30, 10);
        let (window, strategy) = search_window(&b, start, end);

        assert_eq!(strategy, SearchStrategy::BestFirst);
        assert!(window.contains(start) && window.contains(end));
        // The path has to pass y = 41
        assert!(window.top.y >= 41);
        assert_eq!(window.top.y, 59);
    }

    #[test]
    fn test_best_first_bounds_contain_path() {
        let b = ocean(60, 60, |i, j| i == 20 && j <= 40);
        let start = CellIndex::new(10, 10);
        let end = CellIndex::new(30, 10);
        let visited = best_first_bounds(&b, start, end).unwrap();
        assert!(visited.contains(start) && visited.contains(end));
        assert!(visited.top.y >= 41);
    }

    #[test]
    fn test_endpoints_on_land_are_passable() {
        let b = ocean(40, 40, |i, j| (i >= 28 && j >= 28) || (i == 20 && j == 20));
        let (window, strategy) = search_window(&b, CellIndex::new(10, 10), CellIndex::new(30, 30));
        assert_eq!(strategy, SearchStrategy::BestFirst);
        assert!(window.contains(CellIndex::new(30, 30)));
    }

    #[test]
    fn test_unreachable_target_uses_full_domain() {
        let b = ocean(30, 30, |i, _| i == 15);
        let (window, strategy) = search_window(&b, CellIndex::new(5, 5), CellIndex::new(25, 25));
        assert_eq!(strategy, SearchStrategy::FullDomain);
        assert_eq!(window, DomainWindow::new(CellIndex::new(1, 1), CellIndex::new(29, 29)));
    }

    #[test]
    fn test_node_order() {
        let cell = CellIndex::new(1, 1);
        let mut heap = BinaryHeap::new();
        heap.push(Node { priority: 2.0, seq: 0, cell, cost: 0.0 });
        heap.push(Node { priority: 1.0, seq: 1, cell, cost: 0.0 });
        heap.push(Node { priority: 1.0, seq: 2, cell, cost: 0.0 });
        let order: Vec<u64> = std::iter::from_fn(|| heap.pop().map(|n| n.seq)).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }
}
