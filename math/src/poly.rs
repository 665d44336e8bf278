//! Dense univariate polynomials over `f64` and the two interpolation
//! routines that produce them from sample points.

use crate::error::{PolynomialError, Result};
use crate::matrix::Matrix;

/// Interpolation nodes closer than this are considered coincident.
const NODE_EPSILON: f64 = 1e-12;

/// A dense univariate polynomial over `f64`.
///
/// Coefficients are stored lowest degree first: index k holds the
/// coefficient of x^k. The length is meaningful to callers (it equals the
/// number of fitted sample points), so trailing zeros are never trimmed.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// Wrap a coefficient vector, lowest degree first.
    pub fn new(coeffs: Vec<f64>) -> Self {
        Self { coeffs }
    }

    /// Borrow the coefficients, lowest degree first.
    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    /// Take ownership of the coefficients.
    pub fn into_coefficients(self) -> Vec<f64> {
        self.coeffs
    }

    /// Number of stored coefficients.
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Check if all coefficients are zero.
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|&c| c == 0.0)
    }

    /// Index of the highest non-zero coefficient, or `None` for the zero
    /// polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.iter().rposition(|&c| c != 0.0)
    }

    /// Evaluate the polynomial at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        Self::eval(&self.coeffs, x)
    }

    /// Evaluate a bare coefficient slice at `x` using Horner's method.
    ///
    /// For callers that persist coefficient vectors without carrying the
    /// wrapper type around.
    pub fn eval(coeffs: &[f64], x: f64) -> f64 {
        coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
    }

    /// Fit the unique degree-(n-1) polynomial through n sample points by
    /// solving the Vandermonde system with Gauss-Jordan elimination.
    ///
    /// Duplicate x-values make the system singular and surface as
    /// [`crate::error::MatrixError::Singular`].
    pub fn vandermonde_fit(xs: &[f64], ys: &[f64]) -> Result<Self> {
        validate_samples(xs, ys)?;
        let coeffs = Matrix::vandermonde(xs).try_solve(ys)?;
        Ok(Self { coeffs })
    }

    /// Fit the same polynomial by accumulating scaled Lagrange basis
    /// polynomials.
    ///
    /// For each node i, the basis that is 1 at x_i and 0 at every other x_j
    /// is built by repeated in-place multiplication by (x - x_j)/(x_i - x_j),
    /// then scaled by y_i and added to the result.
    pub fn lagrange_fit(xs: &[f64], ys: &[f64]) -> Result<Self> {
        validate_samples(xs, ys)?;
        let n = xs.len();
        let mut coeffs = vec![0.0; n];

        for i in 0..n {
            let mut basis = vec![0.0; n];
            basis[0] = 1.0;

            for j in 0..n {
                if j == i {
                    continue;
                }
                let gap = xs[i] - xs[j];
                if !(gap.abs() > NODE_EPSILON) {
                    return Err(
                        PolynomialError::CoincidentNodes { i, j }.into()
                    );
                }
                let scale = 1.0 / gap;
                for k in (0..n).rev() {
                    let lower = if k == 0 { 0.0 } else { basis[k - 1] };
                    basis[k] = basis[k] * (-xs[j]) * scale + lower * scale;
                }
            }

            for (coeff, basis_coeff) in coeffs.iter_mut().zip(&basis) {
                *coeff += ys[i] * basis_coeff;
            }
        }

        Ok(Self { coeffs })
    }
}

fn validate_samples(xs: &[f64], ys: &[f64]) -> Result<(), PolynomialError> {
    if xs.is_empty() {
        return Err(PolynomialError::EmptyInput);
    }
    if xs.len() != ys.len() {
        return Err(PolynomialError::LengthMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }
    Ok(())
}
