//! Block averaging of fields for reduced-resolution output.

use super::{Field, GridError};

/// Number of coarse cells along an axis of `n` fine cells.
///
/// Full groups of `factor` cells plus one extra cell for any remainder.
#[inline]
pub fn coarse_len(n: usize, factor: usize) -> usize {
    n.div_ceil(factor)
}

/// Average the interior of `field` over `factor × factor` blocks.
///
/// Averaging runs along x first, then along y. When `factor` does not
/// divide an axis, the trailing `n % factor` cells are averaged into one
/// extra coarse cell. The result has interior size
/// `coarse_len(nx, factor) × coarse_len(ny, factor)` and a zero ghost ring.
///
/// # Arguments
///
/// * `field` - Fine field (ghost values are ignored)
/// * `factor` - Coarsening factor; `1` returns a copy of the interior
///
/// # Errors
///
/// Returns [`GridError::InvalidCoarsenFactor`] if `factor` is zero.
///
/// # Example
///
/// ```
/// use swe_tsunami::grid::{coarsen, Field};
///
/// let fine = Field::filled(4, 4, 2.5);
/// let coarse = coarsen(&fine, 2).unwrap();
/// assert_eq!((coarse.nx(), coarse.ny()), (2, 2));
/// assert_eq!(coarse[(1, 1)], 2.5);
/// assert_eq!(coarse[(0, 0)], 0.0);
/// ```
pub fn coarsen(field: &Field, factor: usize) -> Result<Field, GridError> {
    if factor == 0 {
        return Err(GridError::InvalidCoarsenFactor(factor));
    }
    let (nx, ny) = (field.nx(), field.ny());
    let cx = coarse_len(nx, factor);
    let cy = coarse_len(ny, factor);

    // Pass 1: collapse x, keep full y resolution
    let mut along_x = Field::new(cx, ny);
    for x in 1..=cx {
        let first = (x - 1) * factor + 1;
        let last = (x * factor).min(nx);
        let count = (last - first + 1) as f64;
        for y in 1..=ny {
            let sum: f64 = (first..=last).map(|i| field.get(i, y)).sum();
            along_x[(x, y)] = sum / count;
        }
    }

    // Pass 2: collapse y
    let mut coarse = Field::new(cx, cy);
    for x in 1..=cx {
        let column = along_x.column(x);
        for y in 1..=cy {
            let first = (y - 1) * factor + 1;
            let last = (y * factor).min(ny);
            let sum: f64 = column[first..=last].iter().sum();
            coarse[(x, y)] = sum / (last - first + 1) as f64;
        }
    }

    Ok(coarse)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-3;

    #[test]
    fn test_coarse_len() {
        assert_eq!(coarse_len(10, 2), 5);
        assert_eq!(coarse_len(13, 3), 5);
        assert_eq!(coarse_len(7, 1), 7);
    }

    #[test]
    fn test_constant_interior_with_zero_border() {
        // 12x12 storage: -10 interior, 0 ghost ring
        let mut fine = Field::new(10, 10);
        for i in 1..=10 {
            for j in 1..=10 {
                fine[(i, j)] = -10.0;
            }
        }
        let coarse = coarsen(&fine, 2).unwrap();
        assert_eq!((coarse.nx(), coarse.ny()), (5, 5));
        for i in 1..=5 {
            for j in 1..=5 {
                assert_eq!(coarse[(i, j)], -10.0, "cell ({}, {})", i, j);
            }
        }
    }

    #[test]
    fn test_factor_three_with_remainder() {
        let rows: [[f64; 15]; 15] = [
            [0.0; 15],
            [0., 5., 4., 5., 6., 2., 6., 5., 4., 5., 6., 2., 6., 5., 0.],
            [0., 4., 3., 4., 5., 1., 5., 4., 3., 4., 5., 1., 5., 4., 0.],
            [0., 5., 4., 5., 6., 2., 6., 5., 4., 5., 6., 2., 6., 5., 0.],
            [0., 6., 5., 6., 7., 3., 7., 6., 5., 6., 7., 3., 7., 6., 0.],
            [0., 2., 1., 2., 3., -1., 3., 2., 1., 2., 3., -1., 3., 2., 0.],
            [0., 6., 5., 6., 7., 3., 7., 6., 5., 6., 7., 3., 7., 6., 0.],
            [0., 5., 4., 5., 6., 2., 6., 5., 4., 5., 6., 2., 6., 5., 0.],
            [0., 4., 3., 4., 5., 1., 5., 4., 3., 4., 5., 1., 5., 4., 0.],
            [0., 5., 4., 5., 6., 2., 6., 5., 4., 5., 6., 2., 6., 5., 0.],
            [0., 6., 5., 6., 7., 3., 7., 6., 5., 6., 7., 3., 7., 6., 0.],
            [0., 2., 1., 2., 3., -1., 3., 2., 1., 2., 3., -1., 3., 2., 0.],
            [0., 6., 5., 6., 7., 3., 7., 6., 5., 6., 7., 3., 7., 6., 0.],
            [0., 5., 4., 5., 6., 2., 6., 5., 4., 5., 6., 2., 6., 5., 0.],
            [0.0; 15],
        ];
        let data: Vec<f64> = rows.iter().flatten().copied().collect();
        let fine = Field::from_padded(13, 13, data).unwrap();

        let coarse = coarsen(&fine, 3).unwrap();
        assert_eq!((coarse.nx(), coarse.ny()), (5, 5));

        for i in 1..=5 {
            for j in 1..=5 {
                let expected = match (i == 5, j == 5) {
                    (true, true) => 5.0,
                    (true, false) | (false, true) => 14.0 / 3.0,
                    (false, false) => 13.0 / 3.0,
                };
                assert!(
                    (coarse[(i, j)] - expected).abs() < TOL,
                    "cell ({}, {}) = {}, expected {}",
                    i,
                    j,
                    coarse[(i, j)],
                    expected
                );
            }
        }
    }

    #[test]
    fn test_factor_one_is_identity() {
        let fine = Field::from_interior(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(coarsen(&fine, 1).unwrap(), fine);
    }

    #[test]
    fn test_zero_factor_rejected() {
        let fine = Field::new(4, 4);
        assert!(matches!(
            coarsen(&fine, 0),
            Err(GridError::InvalidCoarsenFactor(0))
        ));
    }
}
