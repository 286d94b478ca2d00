//! Per-edge values for the four sides of a rectangular grid.

use std::fmt;

/// One of the four edges of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoundaryEdge {
    /// x = x_min (ghost column 0)
    Left,
    /// x = x_max (ghost column nx + 1)
    Right,
    /// y = y_min (ghost row 0)
    Bottom,
    /// y = y_max (ghost row ny + 1)
    Top,
}

impl BoundaryEdge {
    /// All edges in code order: left, right, bottom, top.
    pub const ALL: [BoundaryEdge; 4] = [
        BoundaryEdge::Left,
        BoundaryEdge::Right,
        BoundaryEdge::Bottom,
        BoundaryEdge::Top,
    ];
}

impl fmt::Display for BoundaryEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BoundaryEdge::Left => "left",
            BoundaryEdge::Right => "right",
            BoundaryEdge::Bottom => "bottom",
            BoundaryEdge::Top => "top",
        };
        f.write_str(name)
    }
}

/// Value per grid edge with named fields.
///
/// Field order follows the boundary code convention
/// (left, right, bottom, top) so that `[T; 4]` conversions line up
/// with four-digit boundary codes.
///
/// ```
/// use swe_tsunami::types::{BoundaryEdge, SideBoundaries};
///
/// let sides = SideBoundaries::new(1, 2, 3, 4);
/// assert_eq!(*sides.get(BoundaryEdge::Bottom), 3);
/// assert_eq!(sides.to_array(), [1, 2, 3, 4]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SideBoundaries<T> {
    pub left: T,
    pub right: T,
    pub bottom: T,
    pub top: T,
}

impl<T> SideBoundaries<T> {
    /// Order: left, right, bottom, top.
    pub fn new(left: T, right: T, bottom: T, top: T) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
        }
    }

    /// Same value on all sides.
    pub fn uniform(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            left: value.clone(),
            right: value.clone(),
            bottom: value.clone(),
            top: value,
        }
    }

    /// Build by evaluating `f` for every edge.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(BoundaryEdge) -> T,
    {
        Self {
            left: f(BoundaryEdge::Left),
            right: f(BoundaryEdge::Right),
            bottom: f(BoundaryEdge::Bottom),
            top: f(BoundaryEdge::Top),
        }
    }

    pub fn get(&self, edge: BoundaryEdge) -> &T {
        match edge {
            BoundaryEdge::Left => &self.left,
            BoundaryEdge::Right => &self.right,
            BoundaryEdge::Bottom => &self.bottom,
            BoundaryEdge::Top => &self.top,
        }
    }

    pub fn get_mut(&mut self, edge: BoundaryEdge) -> &mut T {
        match edge {
            BoundaryEdge::Left => &mut self.left,
            BoundaryEdge::Right => &mut self.right,
            BoundaryEdge::Bottom => &mut self.bottom,
            BoundaryEdge::Top => &mut self.top,
        }
    }

    /// Convert to array [left, right, bottom, top].
    pub fn to_array(self) -> [T; 4] {
        [self.left, self.right, self.bottom, self.top]
    }
}

impl<T: fmt::Display> fmt::Display for SideBoundaries<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "L:{} R:{} B:{} T:{}",
            self.left, self.right, self.bottom, self.top
        )
    }
}

impl<T> From<[T; 4]> for SideBoundaries<T> {
    fn from([left, right, bottom, top]: [T; 4]) -> Self {
        Self::new(left, right, bottom, top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_by_edge() {
        let sides = SideBoundaries::new('l', 'r', 'b', 't');
        assert_eq!(*sides.get(BoundaryEdge::Left), 'l');
        assert_eq!(*sides.get(BoundaryEdge::Right), 'r');
        assert_eq!(*sides.get(BoundaryEdge::Bottom), 'b');
        assert_eq!(*sides.get(BoundaryEdge::Top), 't');
    }

    #[test]
    fn test_get_mut() {
        let mut sides = SideBoundaries::uniform(0);
        *sides.get_mut(BoundaryEdge::Top) = 7;
        assert_eq!(sides.to_array(), [0, 0, 0, 7]);
    }

    #[test]
    fn test_from_fn_follows_code_order() {
        let sides = SideBoundaries::from_fn(|e| BoundaryEdge::ALL.iter().position(|&a| a == e));
        assert_eq!(sides.to_array(), [Some(0), Some(1), Some(2), Some(3)]);
        assert_eq!(SideBoundaries::from([1, 2, 3, 4]), SideBoundaries::new(1, 2, 3, 4));
    }

    #[test]
    fn test_display() {
        let sides = SideBoundaries::new(1, 2, 1, 2);
        assert_eq!(format!("{}", sides), "L:1 R:2 B:1 T:2");
        assert_eq!(format!("{}", BoundaryEdge::Bottom), "bottom");
    }
}
