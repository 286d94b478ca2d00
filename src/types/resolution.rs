//! Grid resolution (interior cell counts).

use std::fmt;

/// Number of interior cells in each direction of a Cartesian grid.
///
/// Every field allocated for a grid of this resolution carries one ghost
/// cell on each side, so its storage spans `(nx + 2) × (ny + 2)` values.
///
/// # Example
///
/// ```
/// use swe_tsunami::types::Resolution2D;
///
/// let res = Resolution2D::new(100, 50);
/// assert_eq!(res.nx(), 100);
/// assert_eq!(res.interior_cells(), 5000);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Resolution2D {
    nx: usize,
    ny: usize,
}

impl Resolution2D {
    /// Create a new resolution.
    ///
    /// # Panics
    ///
    /// Panics if either `nx` or `ny` is zero.
    pub fn new(nx: usize, ny: usize) -> Self {
        assert!(nx > 0, "nx must be positive, got {}", nx);
        assert!(ny > 0, "ny must be positive, got {}", ny);
        Self { nx, ny }
    }

    /// Square grid with `n` cells per side.
    pub fn square(n: usize) -> Self {
        Self::new(n, n)
    }

    /// Interior cells in x-direction.
    #[inline]
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Interior cells in y-direction.
    #[inline]
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Number of interior (computational) cells.
    #[inline]
    pub fn interior_cells(&self) -> usize {
        self.nx * self.ny
    }

    /// Return as tuple (nx, ny).
    #[inline]
    pub fn as_tuple(&self) -> (usize, usize) {
        (self.nx, self.ny)
    }
}

impl fmt::Display for Resolution2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.nx, self.ny)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_cells() {
        let r = Resolution2D::new(10, 5);
        assert_eq!(r.interior_cells(), 50);
    }

    #[test]
    fn test_display() {
        let r = Resolution2D::new(20, 10);
        assert_eq!(r.as_tuple(), (20, 10));
        assert_eq!(format!("{}", r), "20×10");
    }

    #[test]
    #[should_panic(expected = "nx must be positive")]
    fn test_zero_nx() {
        Resolution2D::new(0, 10);
    }

    #[test]
    #[should_panic(expected = "ny must be positive")]
    fn test_zero_ny() {
        Resolution2D::new(10, 0);
    }
}
