pub use crate::{
    error::{MathError, MatrixError, PolynomialError, Result},
    matrix::Matrix,
    poly::Polynomial,
};
