//! Integer cell coordinates and axis-aligned cell windows.

use std::fmt;

/// Integer coordinate of a cell in field index space.
///
/// Index space includes the ghost ring: interior cells are
/// `1..=nx` × `1..=ny`, while `0` and `nx + 1` (`ny + 1`) are ghosts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CellIndex {
    pub x: usize,
    pub y: usize,
}

impl CellIndex {
    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another cell, in cells.
    #[inline]
    pub fn distance(&self, other: CellIndex) -> f64 {
        let dx = self.x as f64 - other.x as f64;
        let dy = self.y as f64 - other.y as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(usize, usize)> for CellIndex {
    #[inline]
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

/// Inclusive rectangle of cells `[bottom.x, top.x] × [bottom.y, top.y]`.
///
/// ```
/// use swe_tsunami::types::{CellIndex, DomainWindow};
///
/// let w = DomainWindow::new(CellIndex::new(2, 3), CellIndex::new(5, 3));
/// assert_eq!(w.width(), 4);
/// assert_eq!(w.height(), 1);
/// assert!(w.contains(CellIndex::new(4, 3)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DomainWindow {
    /// Lower-left corner (inclusive)
    pub bottom: CellIndex,
    /// Upper-right corner (inclusive)
    pub top: CellIndex,
}

impl DomainWindow {
    /// # Panics
    ///
    /// Panics unless `bottom <= top` componentwise.
    pub fn new(bottom: CellIndex, top: CellIndex) -> Self {
        assert!(
            bottom.x <= top.x && bottom.y <= top.y,
            "window corners out of order: {} > {}",
            bottom,
            top
        );
        Self { bottom, top }
    }

    /// The whole interior of an `nx × ny` grid.
    pub fn interior(nx: usize, ny: usize) -> Self {
        Self::new(CellIndex::new(1, 1), CellIndex::new(nx, ny))
    }

    /// Smallest window containing both cells.
    pub fn spanning(a: CellIndex, b: CellIndex) -> Self {
        Self {
            bottom: CellIndex::new(a.x.min(b.x), a.y.min(b.y)),
            top: CellIndex::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.top.x - self.bottom.x + 1
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.top.y - self.bottom.y + 1
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width() * self.height()
    }

    #[inline]
    pub fn contains(&self, cell: CellIndex) -> bool {
        (self.bottom.x..=self.top.x).contains(&cell.x)
            && (self.bottom.y..=self.top.y).contains(&cell.y)
    }

    /// Grow by `margin` cells on every side, then clamp each axis to
    /// `[lo, hi]`.
    pub fn expand_clamped(&self, margin: usize, lo: CellIndex, hi: CellIndex) -> Self {
        let clamp = |v: usize, lo: usize, hi: usize| v.clamp(lo, hi.max(lo));
        let bottom = CellIndex::new(
            clamp(self.bottom.x.saturating_sub(margin), lo.x, hi.x),
            clamp(self.bottom.y.saturating_sub(margin), lo.y, hi.y),
        );
        let top = CellIndex::new(
            clamp(self.top.x + margin, lo.x, hi.x).max(bottom.x),
            clamp(self.top.y + margin, lo.y, hi.y).max(bottom.y),
        );
        Self { bottom, top }
    }

    /// Include `cell` in the window.
    pub fn extend(&mut self, cell: CellIndex) {
        self.bottom.x = self.bottom.x.min(cell.x);
        self.bottom.y = self.bottom.y.min(cell.y);
        self.top.x = self.top.x.max(cell.x);
        self.top.y = self.top.y.max(cell.y);
    }
}

impl fmt::Display for DomainWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.bottom, self.top)
    }
}
