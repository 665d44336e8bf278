//! Enrollment: turn a set of reference clicks into a persistable credential.

use math::{
    error::{MathError, MatrixError, PolynomialError},
    poly::Polynomial,
};

use crate::{
    credential::{CoefficientVector, Credential},
    error::{AuthError, DegenerateInput, Result},
    params::{Scheme, VerifyConfig, DISTINCT_X_EPSILON, MIN_ENROLLED_POINTS},
    point::{find_duplicate_x, Point},
};

/// Which algorithm derives the stored coefficients.
///
/// Both construct the same unique degree-(n-1) polynomial through the
/// enrolled points, up to floating-point rounding, and are freely
/// interchangeable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InterpolationMethod {
    /// Solve the Vandermonde system with Gauss-Jordan elimination.
    #[default]
    GaussJordan,
    /// Accumulate scaled Lagrange basis polynomials.
    Lagrange,
}

/// Derive the coefficient vector for a set of enrollment points.
///
/// Requires at least [`MIN_ENROLLED_POINTS`] points with pairwise-distinct,
/// finite x-values. Violations surface as typed errors before or inside the
/// solver, never as NaN coefficients in the credential.
pub fn interpolate(
    points: &[Point],
    method: InterpolationMethod,
) -> Result<CoefficientVector> {
    if points.len() < MIN_ENROLLED_POINTS {
        return Err(AuthError::InsufficientPoints {
            required: MIN_ENROLLED_POINTS,
            provided: points.len(),
        });
    }
    ensure_finite(points)?;
    if let Some((first, second)) =
        find_duplicate_x(points, DISTINCT_X_EPSILON)
    {
        return Err(DegenerateInput::DuplicateX {
            first,
            second,
            x: points[first].x,
        }
        .into());
    }

    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let fitted = match method {
        InterpolationMethod::GaussJordan => {
            Polynomial::vandermonde_fit(&xs, &ys)
        }
        InterpolationMethod::Lagrange => Polynomial::lagrange_fit(&xs, &ys),
    }
    .map_err(map_math_error)?;

    CoefficientVector::new(fitted.into_coefficients())
}

/// Produce the credential to persist for `points` under the configured
/// scheme.
pub fn enroll(
    points: &[Point],
    config: &VerifyConfig,
    method: InterpolationMethod,
) -> Result<Credential> {
    match config.scheme {
        Scheme::Polynomial => {
            interpolate(points, method).map(Credential::Coefficients)
        }
        Scheme::DirectPoints => {
            if points.is_empty() {
                return Err(AuthError::InsufficientPoints {
                    required: 1,
                    provided: 0,
                });
            }
            ensure_finite(points)?;
            Ok(Credential::Points(points.to_vec()))
        }
    }
}

fn ensure_finite(points: &[Point]) -> Result<()> {
    match points.iter().position(|p| !p.is_finite()) {
        Some(index) => {
            Err(DegenerateInput::NonFiniteCoordinate { index }.into())
        }
        None => Ok(()),
    }
}

/// Collapse math-layer failures into the credential error taxonomy.
///
/// A singular system or coincident nodes both mean the enrollment input was
/// degenerate; anything else is reported as-is.
fn map_math_error(err: MathError) -> AuthError {
    match err {
        MathError::Matrix(MatrixError::Singular { column, pivot }) => {
            DegenerateInput::SingularSystem { column, pivot }.into()
        }
        MathError::Polynomial(PolynomialError::CoincidentNodes { i, j }) => {
            DegenerateInput::CoincidentNodes { i, j }.into()
        }
        other => AuthError::Math(other),
    }
}
