//! Dense 2D field with a one-cell ghost ring.

use std::ops::{Index, IndexMut};

use super::GridError;

/// Dense 2D array over `[0, nx + 1] × [0, ny + 1]`.
///
/// The interior `[1, nx] × [1, ny]` is the computational domain and the
/// outer ring holds ghost values. Storage is one contiguous buffer laid
/// out column by column: all `ny + 2` values of a fixed x-index are
/// adjacent, so `field[(i, j)]` reads like the `[x][y]` indexing used
/// throughout the solver and a whole column can be handed out as a slice.
///
/// Dimensions are fixed at construction.
///
/// ```
/// use swe_tsunami::grid::Field;
///
/// let mut f = Field::new(3, 2);
/// f[(1, 2)] = 4.0;
/// assert_eq!(f.get(1, 2), 4.0);
/// assert_eq!(f.column(1), &[0.0, 0.0, 4.0, 0.0]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    nx: usize,
    ny: usize,
    data: Vec<f64>,
}

impl Field {
    /// Zero-initialised field for an `nx × ny` interior.
    pub fn new(nx: usize, ny: usize) -> Self {
        Self::filled(nx, ny, 0.0)
    }

    /// Field with every cell (ghosts included) set to `value`.
    pub fn filled(nx: usize, ny: usize, value: f64) -> Self {
        Self {
            nx,
            ny,
            data: vec![value; (nx + 2) * (ny + 2)],
        }
    }

    /// Wrap interior values given in `[x][y]` order (`values[(i - 1) * ny + (j - 1)]`).
    ///
    /// Ghost cells are zero.
    pub fn from_interior(nx: usize, ny: usize, values: &[f64]) -> Result<Self, GridError> {
        if nx == 0 || ny == 0 {
            return Err(GridError::EmptyGrid { nx, ny });
        }
        if values.len() != nx * ny {
            return Err(GridError::DimensionMismatch {
                expected: nx * ny,
                actual: values.len(),
            });
        }
        let mut field = Self::new(nx, ny);
        for (i, column) in values.chunks_exact(ny).enumerate() {
            field.column_mut(i + 1)[1..=ny].copy_from_slice(column);
        }
        Ok(field)
    }

    /// Take ownership of a full padded buffer (`(nx + 2) * (ny + 2)` values).
    pub fn from_padded(nx: usize, ny: usize, data: Vec<f64>) -> Result<Self, GridError> {
        let expected = (nx + 2) * (ny + 2);
        if data.len() != expected {
            return Err(GridError::DimensionMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { nx, ny, data })
    }

    #[inline]
    pub fn nx(&self) -> usize {
        self.nx
    }

    #[inline]
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Length of one column (`ny + 2`).
    #[inline]
    pub fn stride(&self) -> usize {
        self.ny + 2
    }

    #[inline]
    fn offset(&self, i: usize, j: usize) -> usize {
        debug_assert!(
            i <= self.nx + 1 && j <= self.ny + 1,
            "index ({}, {}) outside {}x{} field",
            i,
            j,
            self.nx + 2,
            self.ny + 2
        );
        i * (self.ny + 2) + j
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[self.offset(i, j)]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        let k = self.offset(i, j);
        self.data[k] = value;
    }

    /// All `ny + 2` values with x-index `i`.
    #[inline]
    pub fn column(&self, i: usize) -> &[f64] {
        let start = i * self.stride();
        &self.data[start..start + self.stride()]
    }

    #[inline]
    pub fn column_mut(&mut self, i: usize) -> &mut [f64] {
        let stride = self.stride();
        let start = i * stride;
        &mut self.data[start..start + stride]
    }

    /// Columns `0..=nx+1` as disjoint mutable slices.
    pub fn columns_mut(&mut self) -> std::slice::ChunksExactMut<'_, f64> {
        let stride = self.stride();
        self.data.chunks_exact_mut(stride)
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    /// Interior values in `[x][y]` order.
    pub fn interior(&self) -> impl Iterator<Item = f64> + '_ {
        (1..=self.nx).flat_map(move |i| self.column(i)[1..=self.ny].iter().copied())
    }

    /// Interior values in `[y][x]` (row-major) order, as stored by most
    /// gridded-data formats.
    pub fn interior_row_major(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.nx * self.ny);
        for j in 1..=self.ny {
            for i in 1..=self.nx {
                out.push(self.get(i, j));
            }
        }
        out
    }

    pub fn interior_sum(&self) -> f64 {
        self.interior().sum()
    }

    /// Largest absolute interior difference to a field of the same shape.
    pub fn max_abs_diff(&self, other: &Field) -> f64 {
        self.interior()
            .zip(other.interior())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }

    /// Rotate interior columns so that column `c` moves to
    /// `((c - 1 + shift) mod nx) + 1`. Ghost columns are left untouched.
    pub fn rotate_interior_x(&mut self, shift: usize) {
        if self.nx == 0 || shift % self.nx == 0 {
            return;
        }
        let shift = shift % self.nx;
        let stride = self.stride();
        let interior = &mut self.data[stride..stride * (self.nx + 1)];
        interior.rotate_right(shift * stride);
    }
}

impl Index<(usize, usize)> for Field {
    type Output = f64;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.data[self.offset(i, j)]
    }
}

impl IndexMut<(usize, usize)> for Field {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        let k = self.offset(i, j);
        &mut self.data[k]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_and_zeroes() {
        let f = Field::new(4, 3);
        assert_eq!(f.as_slice().len(), 6 * 5);
        assert!(f.as_slice().iter().all(|&v| v == 0.0));
        assert_eq!(f.stride(), 5);
    }

    #[test]
    fn test_from_interior_layout() {
        // [x][y] order: x = 1 -> (1, 2), x = 2 -> (3, 4)
        let f = Field::from_interior(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(f[(1, 1)], 1.0);
        assert_eq!(f[(1, 2)], 2.0);
        assert_eq!(f[(2, 1)], 3.0);
        assert_eq!(f[(2, 2)], 4.0);
        assert_eq!(f[(0, 0)], 0.0);
        assert_eq!(f[(3, 3)], 0.0);
        assert_eq!(f.interior_row_major(), vec![1.0, 3.0, 2.0, 4.0]);
    }

    #[test]
    fn test_from_interior_rejects_bad_length() {
        let err = Field::from_interior(2, 2, &[1.0; 3]).unwrap_err();
        assert!(matches!(
            err,
            GridError::DimensionMismatch {
                expected: 4,
                actual: 3
            }
        ));
    }

    #[test]
    fn test_interior_sum_ignores_ghosts() {
        let mut f = Field::filled(3, 3, 100.0);
        for i in 1..=3 {
            for j in 1..=3 {
                f[(i, j)] = 1.0;
            }
        }
        assert_eq!(f.interior_sum(), 9.0);
    }

    #[test]
    fn test_rotate_interior_x() {
        let mut f = Field::new(4, 1);
        for i in 0..6 {
            f[(i, 1)] = i as f64;
        }
        f.rotate_interior_x(2);
        let row: Vec<f64> = (0..6).map(|i| f[(i, 1)]).collect();
        // Interior 1 2 3 4 -> 3 4 1 2; ghosts 0 and 5 unchanged
        assert_eq!(row, vec![0.0, 3.0, 4.0, 1.0, 2.0, 5.0]);
    }

    #[test]
    fn test_rotate_full_turn_is_identity() {
        let mut f = Field::from_interior(3, 2, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let before = f.clone();
        f.rotate_interior_x(3);
        assert_eq!(f, before);
    }

    #[test]
    fn test_columns_mut_are_disjoint() {
        let mut f = Field::new(2, 2);
        for (i, col) in f.columns_mut().enumerate() {
            col.fill(i as f64);
        }
        assert_eq!(f[(3, 0)], 3.0);
        assert_eq!(f[(1, 3)], 1.0);
    }

    #[test]
    fn test_max_abs_diff() {
        let a = Field::filled(2, 2, 1.0);
        let mut b = a.clone();
        b[(2, 1)] = 1.5;
        b[(0, 0)] = 99.0;
        assert!((a.max_abs_diff(&b) - 0.5).abs() < 1e-15);
    }
}
