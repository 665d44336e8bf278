pub mod error;
pub mod matrix;
pub mod poly;
pub mod prelude;

pub use matrix::Matrix;
pub use poly::Polynomial;
