//! Core verification logic for click-point graphical authentication.
//!
//! Enrollment captures a user's reference clicks on an image and derives a
//! compact credential from them: either the coefficients of the unique
//! polynomial through the points, or the points themselves for the direct
//! comparison scheme. Login attempts are then checked against the stored
//! credential within a configured tolerance.
//!
//! The surrounding authentication stack (HTTP, storage, password hashing,
//! sessions) lives elsewhere; this crate only maps point sets to credentials
//! and credentials plus attempts to accept/reject decisions.

pub mod credential;
pub mod enroll;
pub mod error;
pub mod image;
pub mod params;
pub mod point;
pub mod verify;

pub use credential::{CoefficientVector, Credential};
pub use enroll::{enroll, interpolate, InterpolationMethod};
pub use error::{AuthError, DegenerateInput, Result};
pub use image::{verify_image, ImageDigest};
pub use params::{CoordinateSpace, Scheme, VerifyConfig};
pub use point::Point;
pub use verify::verify;
