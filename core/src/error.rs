use thiserror::Error;

use math::error::MathError;

/// Result type specialized for credential operations.
pub type Result<T> = std::result::Result<T, AuthError>;

/// Errors that can arise while enrolling or verifying a click-point
/// credential.
///
/// A login attempt that merely misses the tolerance is not an error: it is a
/// legitimate `Ok(false)` from [`crate::verify::verify`].
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    #[error("Insufficient enrollment points: need at least {required}, got {provided}")]
    InsufficientPoints { required: usize, provided: usize },
    #[error("Degenerate enrollment input: {0}")]
    DegenerateInput(#[from] DegenerateInput),
    #[error("Corrupt credential: {reason}")]
    CorruptCredential { reason: &'static str },
    #[error("Point count mismatch: credential expects {expected}, attempt has {provided}")]
    PointCountMismatch { expected: usize, provided: usize },
    #[error("Invalid tolerance: {0}")]
    InvalidTolerance(f64),
    #[error(transparent)]
    Math(MathError),
}

/// The ways an enrollment point set can defeat unique interpolation.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DegenerateInput {
    #[error("points {first} and {second} share x = {x}")]
    DuplicateX { first: usize, second: usize, x: f64 },
    #[error("coordinate of point {index} is not a finite number")]
    NonFiniteCoordinate { index: usize },
    #[error("interpolation system is singular (pivot {pivot:e} in column {column})")]
    SingularSystem { column: usize, pivot: f64 },
    #[error("interpolation nodes {i} and {j} coincide")]
    CoincidentNodes { i: usize, j: usize },
}
