use std::ops::Index;

use crate::error::{MatrixError, Result};

/// Pivot magnitudes at or below this threshold are treated as zero.
///
/// Catches systems that are singular only after rounding, such as two
/// interpolation nodes separated by less than machine precision.
pub const PIVOT_EPSILON: f64 = 1e-12;

/// A simple, rectangular matrix of `f64` entries.
///
/// Mirrors the ergonomics of [`crate::poly::Polynomial`]:
/// - fallible (`try_*`) and panicking variants for shape-checked operations
/// - row-major storage, borrowable as a slice of rows
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: Vec<Vec<f64>>,
}

impl Matrix {
    /// Construct a new matrix from rows. Panics if rows have differing lengths.
    pub fn new(rows: Vec<Vec<f64>>) -> Self {
        Self::try_new(rows).expect("All matrix rows must have the same length")
    }

    /// Fallible constructor that validates the matrix shape.
    pub fn try_new(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        Self::ensure_rectangular_rows(&rows)?;
        Ok(Self { rows })
    }

    /// Build the Vandermonde matrix for the given sample x-values.
    ///
    /// Row i is `[x_i^0, x_i^1, ..., x_i^(n-1)]`, so solving against the
    /// sampled y-values yields polynomial coefficients lowest degree first.
    pub fn vandermonde(xs: &[f64]) -> Self {
        let n = xs.len();
        let rows = xs
            .iter()
            .map(|&x| {
                let mut row = Vec::with_capacity(n);
                let mut power = 1.0;
                for _ in 0..n {
                    row.push(power);
                    power *= x;
                }
                row
            })
            .collect();
        Self { rows }
    }

    /// Borrow the underlying rows.
    pub fn as_slice(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (0 if empty).
    pub fn cols(&self) -> usize {
        if self.rows.is_empty() {
            0
        } else {
            self.rows[0].len()
        }
    }

    /// (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    /// Fallible matrix-vector multiplication with shape checks.
    pub fn try_mul_vector(&self, v: &[f64]) -> Result<Vec<f64>, MatrixError> {
        if self.rows.is_empty() {
            return Err(MatrixError::Empty);
        }
        if self.cols() != v.len() {
            return Err(MatrixError::VectorShapeMismatch {
                matrix_cols: self.cols(),
                vector_len: v.len(),
            });
        }
        Ok(self
            .rows
            .iter()
            .map(|row| row.iter().zip(v).map(|(a, b)| a * b).sum())
            .collect())
    }

    /// Panicking matrix-vector multiplication (asserts on shape mismatch).
    pub fn mul_vector(&self, v: &[f64]) -> Vec<f64> {
        self.try_mul_vector(v).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Solve `A x = rhs` by Gauss-Jordan elimination with partial pivoting.
    ///
    /// Each column pivots on the row with the largest in-column magnitude; a
    /// pivot at or below [`PIVOT_EPSILON`] aborts with
    /// [`MatrixError::Singular`] instead of letting NaN or Infinity flow
    /// through the arithmetic.
    pub fn try_solve(&self, rhs: &[f64]) -> Result<Vec<f64>, MatrixError> {
        let n = self.rows.len();
        if n == 0 {
            return Err(MatrixError::Empty);
        }
        if self.cols() != n {
            return Err(MatrixError::NotSquare {
                rows: n,
                cols: self.cols(),
            });
        }
        if rhs.len() != n {
            return Err(MatrixError::RhsLengthMismatch {
                expected: n,
                found: rhs.len(),
            });
        }

        let mut a = self.rows.clone();
        let mut b = rhs.to_vec();

        for col in 0..n {
            let mut pivot_row = col;
            for row in col + 1..n {
                if a[row][col].abs() > a[pivot_row][col].abs() {
                    pivot_row = row;
                }
            }
            let pivot = a[pivot_row][col];
            if !(pivot.abs() > PIVOT_EPSILON) {
                return Err(MatrixError::Singular { column: col, pivot });
            }
            a.swap(col, pivot_row);
            b.swap(col, pivot_row);

            // Normalize the pivot row to put a 1 on the diagonal.
            for entry in &mut a[col] {
                *entry /= pivot;
            }
            b[col] /= pivot;

            // Clear the column everywhere else (full reduction, no
            // back-substitution pass needed).
            for row in 0..n {
                if row == col {
                    continue;
                }
                let factor = a[row][col];
                if factor == 0.0 {
                    continue;
                }
                let pivot_row_values = a[col].clone();
                for (entry, pivot_entry) in
                    a[row].iter_mut().zip(&pivot_row_values)
                {
                    *entry -= factor * pivot_entry;
                }
                b[row] -= factor * b[col];
            }
        }

        Ok(b)
    }

    fn ensure_rectangular_rows(
        rows: &[Vec<f64>],
    ) -> Result<(), MatrixError> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(MatrixError::Empty);
        }
        let expected = rows[0].len();
        for (row, values) in rows.iter().enumerate() {
            if values.len() != expected {
                return Err(MatrixError::Ragged {
                    row,
                    expected,
                    found: values.len(),
                });
            }
        }
        Ok(())
    }
}

/// Immutable indexing by row.
impl Index<usize> for Matrix {
    type Output = Vec<f64>;

    fn index(&self, i: usize) -> &Self::Output {
        &self.rows[i]
    }
}
