//! Physical extent of the simulated domain.

use std::fmt;

use super::Resolution2D;

/// Rectangular domain bounds in metres.
///
/// ```
/// use swe_tsunami::types::{Bounds2D, Resolution2D};
///
/// let bounds = Bounds2D::new(0.0, 1000.0, 0.0, 500.0);
/// let (dx, dy) = bounds.cell_size(Resolution2D::new(100, 50));
/// assert_eq!(dx, 10.0);
/// assert_eq!(dy, 10.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2D {
    /// Left boundary (minimum x)
    pub x_min: f64,
    /// Right boundary (maximum x)
    pub x_max: f64,
    /// Bottom boundary (minimum y)
    pub y_min: f64,
    /// Top boundary (maximum y)
    pub y_max: f64,
}

impl Bounds2D {
    /// Create new domain bounds.
    ///
    /// # Panics
    ///
    /// Panics if `x_max <= x_min` or `y_max <= y_min`.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        assert!(
            x_max > x_min,
            "x_max ({}) must be greater than x_min ({})",
            x_max,
            x_min
        );
        assert!(
            y_max > y_min,
            "y_max ({}) must be greater than y_min ({})",
            y_max,
            y_min
        );

        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Square domain `[0, size] × [0, size]`.
    pub fn square(size: f64) -> Self {
        Self::new(0.0, size, 0.0, size)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Check if a point is inside the domain (inclusive).
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }

    /// Cell sizes `(dx, dy)` when the domain is divided into `res` cells.
    #[inline]
    pub fn cell_size(&self, res: Resolution2D) -> (f64, f64) {
        (
            self.width() / res.nx() as f64,
            self.height() / res.ny() as f64,
        )
    }
}

impl fmt::Display for Bounds2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.1}, {:.1}] × [{:.1}, {:.1}]",
            self.x_min, self.x_max, self.y_min, self.y_max
        )
    }
}
