//! Rectangular grids of sampled values (bathymetry, displacement).

use crate::grid::GridError;
use crate::types::Bounds2D;

/// Values sampled on a rectilinear grid of cell centres.
///
/// `values` is row-major over `(y, x)`: `values[iy * x.len() + ix]`.
/// Coordinates must be strictly ascending.
#[derive(Clone, Debug, PartialEq)]
pub struct GridData {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub values: Vec<f64>,
}

impl GridData {
    /// # Errors
    ///
    /// Returns [`GridError::EmptyGrid`] for empty coordinate arrays and
    /// [`GridError::DimensionMismatch`] when `values` does not hold
    /// `x.len() * y.len()` samples.
    pub fn new(x: Vec<f64>, y: Vec<f64>, values: Vec<f64>) -> Result<Self, GridError> {
        if x.is_empty() || y.is_empty() {
            return Err(GridError::EmptyGrid {
                nx: x.len(),
                ny: y.len(),
            });
        }
        if values.len() != x.len() * y.len() {
            return Err(GridError::DimensionMismatch {
                expected: x.len() * y.len(),
                actual: values.len(),
            });
        }
        Ok(Self { x, y, values })
    }

    #[inline]
    pub fn nx(&self) -> usize {
        self.x.len()
    }

    #[inline]
    pub fn ny(&self) -> usize {
        self.y.len()
    }

    /// Sample spacing `(dx, dy)`, taken from the first two coordinates.
    ///
    /// An axis with a single sample borrows the spacing of the other axis;
    /// a single-sample grid reports spacing 1.
    pub fn cell_size(&self) -> (f64, f64) {
        let spacing = |c: &[f64]| (c.len() > 1).then(|| c[1] - c[0]);
        match (spacing(&self.x), spacing(&self.y)) {
            (Some(dx), Some(dy)) => (dx, dy),
            (Some(d), None) | (None, Some(d)) => (d, d),
            (None, None) => (1.0, 1.0),
        }
    }

    #[inline]
    pub fn value(&self, ix: usize, iy: usize) -> f64 {
        self.values[iy * self.nx() + ix]
    }

    /// Extent covered by the cells around the samples.
    pub fn bounds(&self) -> Bounds2D {
        let (dx, dy) = self.cell_size();
        Bounds2D::new(
            self.x[0] - 0.5 * dx,
            self.x[self.nx() - 1] + 0.5 * dx,
            self.y[0] - 0.5 * dy,
            self.y[self.ny() - 1] + 0.5 * dy,
        )
    }

    /// Value of the sample nearest to `(x, y)`, or `None` outside [`bounds`](Self::bounds).
    pub fn nearest(&self, x: f64, y: f64) -> Option<f64> {
        if !self.bounds().contains(x, y) {
            return None;
        }
        Some(self.value(nearest_index(&self.x, x), nearest_index(&self.y, y)))
    }
}

/// Index of the coordinate closest to `v` in an ascending slice.
///
/// Binary search for the first coordinate not below `v`, then compare
/// with its predecessor; ties go to the lower index.
pub fn nearest_index(coords: &[f64], v: f64) -> usize {
    let k = coords.partition_point(|&c| c < v);
    if k == 0 {
        0
    } else if k == coords.len() {
        coords.len() - 1
    } else if v - coords[k - 1] <= coords[k] - v {
        k - 1
    } else {
        k
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> GridData {
        // 3 × 2 samples, value = 10·iy + ix
        GridData::new(
            vec![0.0, 10.0, 20.0],
            vec![5.0, 15.0],
            vec![0.0, 1.0, 2.0, 10.0, 11.0, 12.0],
        )
        .unwrap()
    }

    #[test]
    fn test_nearest_index() {
        let c = [0.0, 1.0, 2.0, 3.0];
        assert_eq!(nearest_index(&c, -5.0), 0);
        assert_eq!(nearest_index(&c, 0.4), 0);
        assert_eq!(nearest_index(&c, 0.5), 0);
        assert_eq!(nearest_index(&c, 0.6), 1);
        assert_eq!(nearest_index(&c, 2.9), 3);
        assert_eq!(nearest_index(&c, 9.0), 3);
    }

    #[test]
    fn test_bounds_and_cell_size() {
        let g = ramp();
        assert_eq!(g.cell_size(), (10.0, 10.0));
        assert_eq!(g.bounds(), Bounds2D::new(-5.0, 25.0, 0.0, 20.0));
    }

    #[test]
    fn test_single_row_takes_column_spacing() {
        let row = GridData::new(vec![50.0, 150.0, 250.0], vec![50.0], vec![0.0; 3]).unwrap();
        assert_eq!(row.cell_size(), (100.0, 100.0));
        assert_eq!(row.bounds(), Bounds2D::new(0.0, 300.0, 0.0, 100.0));

        let column = GridData::new(vec![5.0], vec![0.0, 2.0], vec![0.0; 2]).unwrap();
        assert_eq!(column.cell_size(), (2.0, 2.0));

        let point = GridData::new(vec![5.0], vec![5.0], vec![1.0]).unwrap();
        assert_eq!(point.bounds(), Bounds2D::new(4.5, 5.5, 4.5, 5.5));
    }

    #[test]
    fn test_nearest_lookup() {
        let g = ramp();
        assert_eq!(g.nearest(0.0, 5.0), Some(0.0));
        assert_eq!(g.nearest(19.0, 14.0), Some(12.0));
        assert_eq!(g.nearest(11.0, 4.0), Some(1.0));
        assert_eq!(g.nearest(30.0, 5.0), None);
    }

    #[test]
    fn test_rejects_bad_shapes() {
        assert!(GridData::new(vec![], vec![1.0], vec![]).is_err());
        assert!(GridData::new(vec![1.0, 2.0], vec![1.0], vec![1.0]).is_err());
    }
}
