//! Image-identity factor: the user must present the same image they
//! enrolled with, checked by SHA-256 digest.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{AuthError, Result};

/// SHA-256 digest of the image a credential was enrolled against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDigest([u8; 32]);

impl ImageDigest {
    /// Digest raw image bytes.
    pub fn of(bytes: &[u8]) -> Self {
        Self(Sha256::digest(bytes).into())
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex rendering, the form user records store.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse the 64-character hex form.
    pub fn parse_hex(digest: &str) -> Result<Self> {
        let mut out = [0u8; 32];
        hex::decode_to_slice(digest, &mut out).map_err(|err| match err {
            hex::FromHexError::InvalidHexCharacter { .. } => {
                AuthError::CorruptCredential {
                    reason: "invalid hex in image digest",
                }
            }
            _ => AuthError::CorruptCredential {
                reason: "image digest must be 64 hex characters",
            },
        })?;
        Ok(Self(out))
    }

    pub fn matches(&self, other: &ImageDigest) -> bool {
        self == other
    }
}

impl fmt::Display for ImageDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// True when the presented image bytes hash to the enrolled digest.
pub fn verify_image(enrolled: &ImageDigest, presented: &[u8]) -> bool {
    enrolled.matches(&ImageDigest::of(presented))
}

#[cfg(test)]
mod tests {
    use super::*;

    // SHA-256 of the empty input, a fixed vector from FIPS 180-4.
    const EMPTY_SHA256: &str =
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    #[test]
    fn digest_of_empty_input_matches_known_vector() {
        assert_eq!(ImageDigest::of(b"").to_hex(), EMPTY_SHA256);
    }

    #[test]
    fn hex_round_trip() {
        let digest = ImageDigest::of(b"enrollment image bytes");
        let parsed = ImageDigest::parse_hex(&digest.to_hex()).unwrap();
        assert_eq!(parsed, digest);
        assert_eq!(format!("{digest}"), digest.to_hex());
    }

    #[test]
    fn parse_accepts_uppercase() {
        let upper = EMPTY_SHA256.to_uppercase();
        assert_eq!(
            ImageDigest::parse_hex(&upper).unwrap(),
            ImageDigest::of(b"")
        );
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(
            ImageDigest::parse_hex("abc"),
            Err(AuthError::CorruptCredential {
                reason: "image digest must be 64 hex characters"
            })
        );
        let bad = "g".repeat(64);
        assert_eq!(
            ImageDigest::parse_hex(&bad),
            Err(AuthError::CorruptCredential {
                reason: "invalid hex in image digest"
            })
        );
    }

    #[test]
    fn same_image_verifies_different_image_does_not() {
        let enrolled = ImageDigest::of(b"the enrolled image");
        assert!(verify_image(&enrolled, b"the enrolled image"));
        assert!(!verify_image(&enrolled, b"a different image"));
    }
}
