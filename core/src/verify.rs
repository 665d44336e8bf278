//! Verification: check a login attempt against a stored credential.
//!
//! Pure functions over in-memory values; no shared state, safe to call from
//! concurrent requests.

use math::poly::Polynomial;

use crate::{
    credential::Credential,
    error::{AuthError, Result},
    params::{validate_tolerance, Scheme, VerifyConfig},
    point::Point,
};

/// Check a login attempt against a stored credential.
///
/// Returns `Ok(true)` only when **every** attempt point individually passes
/// the configured tolerance (evaluation short-circuits on the first
/// failure). Tolerance misses are `Ok(false)`; errors are reserved for
/// malformed credentials, cardinality mismatches, and bad configuration.
pub fn verify(
    credential: &Credential,
    attempt: &[Point],
    config: &VerifyConfig,
) -> Result<bool> {
    if !validate_tolerance(config.tolerance) {
        return Err(AuthError::InvalidTolerance(config.tolerance));
    }
    match (config.scheme, credential) {
        (Scheme::Polynomial, Credential::Coefficients(coeffs)) => {
            verify_polynomial(coeffs.as_slice(), attempt, config.tolerance)
        }
        (Scheme::DirectPoints, Credential::Points(reference)) => {
            verify_direct(reference, attempt, config.tolerance)
        }
        _ => Err(AuthError::CorruptCredential {
            reason: "credential does not match the configured scheme",
        }),
    }
}

/// Polynomial mode: every click must land on the stored curve.
fn verify_polynomial(
    coeffs: &[f64],
    attempt: &[Point],
    tolerance: f64,
) -> Result<bool> {
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
    if attempt.len() != coeffs.len() {
        return Err(AuthError::PointCountMismatch {
            expected: coeffs.len(),
            provided: attempt.len(),
        });
    }

    for point in attempt {
        let predicted = Polynomial::eval(coeffs, point.x);
        let deviation = (predicted - point.y).abs();
        // NaN deviations must fail, so test acceptance rather than
        // rejection.
        if !(deviation <= tolerance) {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Direct mode: clicks are compared to the enrolled points pairwise by
/// index, on both axes.
fn verify_direct(
    reference: &[Point],
    attempt: &[Point],
    tolerance: f64,
) -> Result<bool> {
    if reference.is_empty() {
        return Err(AuthError::CorruptCredential {
            reason: "empty reference point set",
        });
    }
    if reference.iter().any(|p| !p.is_finite()) {
        return Err(AuthError::CorruptCredential {
            reason: "non-finite reference point",
        });
    }
    if attempt.len() != reference.len() {
        return Err(AuthError::PointCountMismatch {
            expected: reference.len(),
            provided: attempt.len(),
        });
    }

    for (enrolled, candidate) in reference.iter().zip(attempt) {
        let dx = (enrolled.x - candidate.x).abs();
        let dy = (enrolled.y - candidate.y).abs();
        if !(dx <= tolerance && dy <= tolerance) {
            return Ok(false);
        }
    }
    Ok(true)
}
