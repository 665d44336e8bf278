//! Deployment parameters: coordinate spaces, tolerances, and scheme
//! selection.
//!
//! The prototypes this core replaces hardcoded two different tolerances
//! (0.05 against normalized coordinates, 50 against raw pixels). Those are
//! not inconsistent policies, they belong to different coordinate spaces, so
//! here the space and its tolerance travel together as explicit
//! configuration instead of hidden constants.

use crate::error::{AuthError, Result};

/// Default absolute tolerance for normalized `[0, 1]` coordinates.
pub const NORMALIZED_TOLERANCE: f64 = 0.05;

/// Default absolute tolerance for raw pixel coordinates.
pub const PIXEL_TOLERANCE: f64 = 50.0;

/// Enrollment x-values closer than this are treated as duplicates.
pub const DISTINCT_X_EPSILON: f64 = 1e-9;

/// Minimum enrollment points for a non-constant polynomial.
pub const MIN_ENROLLED_POINTS: usize = 2;

/// Coordinate space the client submits points in.
///
/// Points must arrive in the same space at enrollment and at login; the
/// client performs any display scaling before submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CoordinateSpace {
    /// Click positions divided by the rendered image size, in `[0, 1]`.
    Normalized,
    /// Raw pixel offsets into the image.
    Pixel,
}

impl CoordinateSpace {
    /// The tolerance observed to suit this coordinate space in practice.
    #[inline]
    pub const fn default_tolerance(self) -> f64 {
        match self {
            CoordinateSpace::Normalized => NORMALIZED_TOLERANCE,
            CoordinateSpace::Pixel => PIXEL_TOLERANCE,
        }
    }
}

/// Which credential scheme a deployment uses.
///
/// The schemes are alternatives, not layers: a deployment picks one and its
/// credentials are only meaningful under that scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// Persist polynomial coefficients fitted through the enrolled points
    /// and check login clicks against the curve.
    #[default]
    Polynomial,
    /// Persist the enrolled points themselves and compare login clicks
    /// pairwise by index.
    DirectPoints,
}

/// Everything the verifier needs besides the credential and the attempt.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VerifyConfig {
    pub scheme: Scheme,
    pub space: CoordinateSpace,
    pub tolerance: f64,
}

impl VerifyConfig {
    /// Configuration with the default tolerance for `space`.
    pub fn for_space(scheme: Scheme, space: CoordinateSpace) -> Self {
        Self {
            scheme,
            space,
            tolerance: space.default_tolerance(),
        }
    }

    /// Override the tolerance. Rejects negative or non-finite values.
    pub fn with_tolerance(mut self, tolerance: f64) -> Result<Self> {
        if !validate_tolerance(tolerance) {
            return Err(AuthError::InvalidTolerance(tolerance));
        }
        self.tolerance = tolerance;
        Ok(self)
    }
}

/// A usable tolerance is a finite, non-negative number.
pub fn validate_tolerance(tolerance: f64) -> bool {
    tolerance.is_finite() && tolerance >= 0.0
}
