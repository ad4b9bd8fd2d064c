//! Dense linear algebra for the normal equations
//!
//! The systems solved here are small (at most 21×21 for a degree-20 fit), so a
//! plain row-major matrix and Gauss-Jordan elimination are all that is needed.
//!
//! # Example
//! ```
//! # use polyreg::linalg::SquareMatrix;
//! // 2a + b = 5
//! //  a + 3b = 10
//! let a = SquareMatrix::<f64>::from_rows(&[vec![2.0, 1.0], vec![1.0, 3.0]]).unwrap();
//! let x = a.solve(&[5.0, 10.0]).unwrap();
//! assert!((x[0] - 1.0).abs() < 1e-12);
//! assert!((x[1] - 3.0).abs() < 1e-12);
//! ```
use std::ops::{Index, IndexMut};

use crate::{
    error::{Error, Result},
    value::Value,
};

/// Pivots with an absolute value below this are treated as zero.
pub const PIVOT_TOLERANCE: f64 = 1e-10;

/// A dense `n × n` matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix<T: Value = f64> {
    size: usize,
    data: Vec<T>,
}
impl<T: Value> SquareMatrix<T> {
    /// Creates an `n × n` matrix filled with zeros.
    #[must_use]
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            data: vec![T::zero(); size * size],
        }
    }

    /// Creates a matrix from a slice of rows.
    ///
    /// # Errors
    /// Returns [`Error::DimensionMismatch`] if any row's length differs from the number of rows.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for row in rows {
            if row.len() != size {
                return Err(Error::DimensionMismatch {
                    expected: size,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self { size, data })
    }

    /// Returns `n` for this `n × n` matrix.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns row `i` as a slice.
    ///
    /// # Panics
    /// Panics if `i` is out of bounds.
    #[must_use]
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.size..(i + 1) * self.size]
    }

    /// Solves `A·x = b` for `x` using Gauss-Jordan elimination with partial pivoting.
    ///
    /// Operates on a private augmented copy; `self` and `b` are left untouched.
    ///
    /// <div class="warning">
    ///
    /// **Technical Details**
    ///
    /// For each column `i`:
    /// 1. The row in `[i, n)` with the largest `|a_ri|` is swapped into row `i`.
    /// 2. If that pivot is below [`PIVOT_TOLERANCE`] the system is singular.
    /// 3. Row `i` is divided by the pivot, then column `i` is eliminated from every other row.
    ///
    /// The left block ends as the identity, so the solution is read straight off the
    /// augmented column without back-substitution.
    /// </div>
    ///
    /// # Errors
    /// - [`Error::DimensionMismatch`] if `b.len() != n`.
    /// - [`Error::SingularMatrix`] if a pivot falls below [`PIVOT_TOLERANCE`]. Both `n` and `k` are
    ///   the matrix size; fitting code replaces `n` with its point count.
    pub fn solve(&self, b: &[T]) -> Result<Vec<T>> {
        let n = self.size;
        if b.len() != n {
            return Err(Error::DimensionMismatch {
                expected: n,
                found: b.len(),
            });
        }

        let tolerance = T::constant(PIVOT_TOLERANCE);

        // Augmented [A | b], width n + 1
        let width = n + 1;
        let mut aug = Vec::with_capacity(n * width);
        for i in 0..n {
            aug.extend_from_slice(self.row(i));
            aug.push(b[i]);
        }

        for i in 0..n {
            let mut pivot_row = i;
            let mut pivot_abs = aug[i * width + i].abs();
            for r in (i + 1)..n {
                let candidate = aug[r * width + i].abs();
                if candidate > pivot_abs {
                    pivot_row = r;
                    pivot_abs = candidate;
                }
            }

            // NaN never compares below the tolerance, so check it explicitly
            if pivot_abs < tolerance || pivot_abs.is_nan() {
                tracing::trace!(column = i, "pivot below tolerance");
                return Err(Error::SingularMatrix { n, k: n });
            }

            if pivot_row != i {
                for c in 0..width {
                    aug.swap(i * width + c, pivot_row * width + c);
                }
            }

            let pivot = aug[i * width + i];
            for c in i..width {
                aug[i * width + c] = aug[i * width + c] / pivot;
            }

            for r in 0..n {
                if r == i {
                    continue;
                }

                let factor = aug[r * width + i];
                if factor == T::zero() {
                    continue;
                }

                for c in i..width {
                    aug[r * width + c] = aug[r * width + c] - factor * aug[i * width + c];
                }
            }
        }

        Ok((0..n).map(|i| aug[i * width + n]).collect())
    }
}

impl<T: Value> Index<(usize, usize)> for SquareMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.size + col]
    }
}
impl<T: Value> IndexMut<(usize, usize)> for SquareMatrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.size + col]
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::assert_all_close;

    #[test]
    fn solves_identity() {
        let mut a = SquareMatrix::<f64>::zeros(3);
        for i in 0..3 {
            a[(i, i)] = 1.0;
        }
        let x = a.solve(&[4.0, -2.0, 0.5]).unwrap();
        assert_eq!(x, vec![4.0, -2.0, 0.5]);
    }

    #[test]
    fn solves_with_row_swap() {
        // Zero in the (0, 0) position forces a pivot swap
        let a = SquareMatrix::from_rows(&[
            vec![0.0, 2.0, 1.0],
            vec![1.0, 1.0, 1.0],
            vec![2.0, 1.0, 3.0],
        ])
        .unwrap();
        let expected = [1.0, 2.0, 3.0];
        let b: Vec<f64> = (0..3)
            .map(|i| a.row(i).iter().zip(&expected).map(|(a, x)| a * x).sum())
            .collect();

        let x = a.solve(&b).unwrap();
        assert_all_close!(x, expected, 1e-12);
    }

    #[test]
    fn inputs_are_not_mutated() {
        let a = SquareMatrix::from_rows(&[vec![4.0, 1.0], vec![2.0, 3.0]]).unwrap();
        let b = vec![1.0, 2.0];
        let a_before = a.clone();
        let b_before = b.clone();

        a.solve(&b).unwrap();
        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }

    #[test]
    fn singular_matrix_is_rejected() {
        let a = SquareMatrix::from_rows(&[vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
        let err = a.solve(&[1.0, 2.0]).unwrap_err();
        assert_eq!(err, Error::SingularMatrix { n: 2, k: 2 });
    }

    #[test]
    fn singular_error_reports_matrix_size() {
        // Third row is the sum of the first two
        let a = SquareMatrix::from_rows(&[
            vec![1.0, 0.0, 2.0],
            vec![0.0, 1.0, 1.0],
            vec![1.0, 1.0, 3.0],
        ])
        .unwrap();
        assert_eq!(
            a.solve(&[1.0, 1.0, 2.0]).unwrap_err(),
            Error::SingularMatrix { n: 3, k: 3 }
        );
    }

    #[test]
    fn tiny_pivot_is_singular() {
        // Absolute, not relative, tolerance
        let a = SquareMatrix::from_rows(&[vec![1e-11, 0.0], vec![0.0, 1e-11]]).unwrap();
        assert!(matches!(
            a.solve(&[1.0, 1.0]),
            Err(Error::SingularMatrix { .. })
        ));
    }

    #[test]
    fn nan_pivot_is_singular() {
        let a = SquareMatrix::from_rows(&[vec![f64::NAN, 0.0], vec![0.0, 1.0]]).unwrap();
        assert!(a.solve(&[1.0, 1.0]).is_err());
    }

    #[test]
    fn dimension_checks() {
        assert_eq!(
            SquareMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err(),
            Error::DimensionMismatch {
                expected: 2,
                found: 1
            }
        );

        let a = SquareMatrix::<f64>::zeros(2);
        assert_eq!(
            a.solve(&[1.0]).unwrap_err(),
            Error::DimensionMismatch {
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn empty_system() {
        let a = SquareMatrix::<f64>::zeros(0);
        assert_eq!(a.solve(&[]).unwrap(), Vec::<f64>::new());
    }
}
