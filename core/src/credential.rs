use serde::{Deserialize, Serialize};

use math::poly::Polynomial;

use crate::{
    error::{AuthError, Result},
    point::Point,
};

/// Polynomial coefficients derived at enrollment, lowest degree first.
///
/// This is what the external user store persists instead of the raw
/// reference points: the raw clicks can be discarded once the coefficients
/// exist, and the vector is never regenerated except on re-enrollment. The
/// length equals the number of enrolled points.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoefficientVector(Vec<f64>);

impl CoefficientVector {
    /// Wrap raw coefficients, rejecting empty or non-finite input.
    ///
    /// Deserialization bypasses this check, so the verifier re-validates
    /// before evaluating anything (stored blobs are untrusted).
    pub fn new(coeffs: Vec<f64>) -> Result<Self> {
        if coeffs.is_empty() {
            return Err(AuthError::CorruptCredential {
                reason: "empty coefficient vector",
            });
        }
        if coeffs.iter().any(|c| !c.is_finite()) {
            return Err(AuthError::CorruptCredential {
                reason: "non-finite coefficient",
            });
        }
        Ok(Self(coeffs))
    }

    /// Build a vector without validation, to exercise the verifier's
    /// handling of corrupted store contents.
    #[cfg(test)]
    pub(crate) fn new_unchecked(coeffs: Vec<f64>) -> Self {
        Self(coeffs)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Evaluate the stored polynomial at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        Polynomial::eval(&self.0, x)
    }
}

/// Persisted verification material for one identity.
///
/// Opaque to the credential store that owns it; which variant a deployment
/// produces is decided by [`crate::params::Scheme`] at enrollment time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Credential {
    /// Fitted polynomial for the interpolation scheme.
    Coefficients(CoefficientVector),
    /// Reference points for the direct-comparison scheme.
    Points(Vec<Point>),
}

impl Credential {
    /// Number of attempt points this credential expects.
    pub fn expected_points(&self) -> usize {
        match self {
            Credential::Coefficients(coeffs) => coeffs.len(),
            Credential::Points(points) => points.len(),
        }
    }
}
