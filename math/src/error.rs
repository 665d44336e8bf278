use thiserror::Error;

pub mod matrix {
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("Matrix cannot be empty")]
        Empty,
        #[error("matrix is ragged: row {row} has {found} columns but expected {expected}")]
        Ragged {
            row: usize,
            expected: usize,
            found: usize,
        },
        #[error("matrix is {rows}x{cols} but elimination requires a square system")]
        NotSquare { rows: usize, cols: usize },
        #[error("right-hand side has {found} entries but the system has {expected} rows")]
        RhsLengthMismatch { expected: usize, found: usize },
        #[error("Matrix columns ({matrix_cols}) must match vector length ({vector_len})")]
        VectorShapeMismatch {
            matrix_cols: usize,
            vector_len: usize,
        },
        #[error("system is singular: pivot magnitude {pivot:e} in column {column}")]
        Singular { column: usize, pivot: f64 },
    }
}

pub mod polynomial {
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("at least one sample point is required")]
        EmptyInput,
        #[error("got {xs} x-values but {ys} y-values")]
        LengthMismatch { xs: usize, ys: usize },
        #[error("interpolation nodes {i} and {j} coincide")]
        CoincidentNodes { i: usize, j: usize },
    }
}

pub use matrix::Error as MatrixError;
pub use polynomial::Error as PolynomialError;

/// Common result type used across this crate.
pub type Result<T, E = MathError> = core::result::Result<T, E>;

/// Top-level error type to keep error management simple for users.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum MathError {
    #[error(transparent)]
    Matrix(#[from] MatrixError),
    #[error(transparent)]
    Polynomial(#[from] PolynomialError),
}

pub type Error = MathError;
