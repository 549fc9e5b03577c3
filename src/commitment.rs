//! Commitment hashing and verification.
//!
//! Before a round begins the server publishes
//! `SHA-256(secret || salt)`. After the round it reveals the secret and
//! salt, and anyone can recompute the digest to confirm the secret was
//! fixed in advance. The concatenation has no separator; the salt only
//! widens the preimage so short secrets cannot be brute-forced from the
//! published hash.

use crate::error::{FairnessError, InputField};
use crate::policy::ValidationPolicy;
use sha2::{Digest, Sha256};

/// Length of the commitment hash in hex characters.
pub const COMMITMENT_HEX_LEN: usize = 64;

/// Computes the public commitment hash for a secret and salt.
///
/// Returns 64 lowercase hex characters. Pure and deterministic; this is
/// the raw transform and accepts empty inputs the way SHA-256 does. Use
/// [`CommitmentHasher::hash`] to apply an input policy first.
pub fn calculate_public_hash(secret: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hasher.update(salt.as_bytes());
    hex::encode(hasher.finalize())
}

/// Policy-checked commitment hashing and verification.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommitmentHasher {
    policy: ValidationPolicy,
}

impl CommitmentHasher {
    /// Creates a hasher with the given validation policy.
    pub fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    /// Validates the inputs per policy, then computes the commitment.
    pub fn hash(&self, secret: &str, salt: &str) -> Result<String, FairnessError> {
        self.policy.check(InputField::Secret, secret)?;
        self.policy.check(InputField::Salt, salt)?;
        Ok(calculate_public_hash(secret, salt))
    }

    /// Checks a revealed secret and salt against a published hash.
    ///
    /// The recomputed digest is always lowercase; published hashes in
    /// the wild appear in either case, so the comparison ignores case.
    pub fn verify(
        &self,
        revealed_secret: &str,
        salt: &str,
        published_hash: &str,
    ) -> Result<bool, FairnessError> {
        let expected = self.hash(revealed_secret, salt)?;
        Ok(published_hash.len() == COMMITMENT_HEX_LEN
            && expected.eq_ignore_ascii_case(published_hash))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SECRET: &str = "819e9c8b09b28f9875d7a14bce2161bf";
    const SALT: &str = "8f0381b8cbbfe822ef56e6044d9c5912";
    const EXPECTED: &str = "37095a43325c6b084911b7a45bbc7ff28f0b53e78191d260b6895e694a86d7a9";

    #[test]
    fn test_reference_vector() {
        assert_eq!(calculate_public_hash(SECRET, SALT), EXPECTED);
    }

    #[test]
    fn test_simple_vector() {
        assert_eq!(
            calculate_public_hash("secret", "salt"),
            "f84fa2149dbb62ed4e0cf1f550d2949b33a6513d3a7707e08502511c79ccb0ee"
        );
    }

    #[test]
    fn test_concatenation_order_matters() {
        assert_eq!(
            calculate_public_hash("salt", "secret"),
            "bede90386d450cea8b77b822f8887065e4e5abf132c2f9dccfcc7fbd4cba5e35"
        );
        assert_ne!(
            calculate_public_hash("secret", "salt"),
            calculate_public_hash("salt", "secret")
        );
    }

    #[test]
    fn test_verify_accepts_published_hash() {
        let hasher = CommitmentHasher::default();
        assert!(hasher.verify(SECRET, SALT, EXPECTED).unwrap());
        assert!(hasher.verify(SECRET, SALT, &EXPECTED.to_uppercase()).unwrap());
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let hasher = CommitmentHasher::default();
        assert!(!hasher.verify("b1e09ba4298225e04682e44a0f95c1ad", SALT, EXPECTED).unwrap());
    }

    #[test]
    fn test_verify_rejects_malformed_hash_length() {
        let hasher = CommitmentHasher::default();
        let malformed = format!("{EXPECTED}0");
        assert!(!hasher.verify(SECRET, SALT, &malformed).unwrap());
    }

    #[test]
    fn test_policy_rejects_empty_secret() {
        let hasher = CommitmentHasher::default();
        assert_eq!(
            hasher.hash("", SALT),
            Err(FairnessError::EmptyInput {
                field: InputField::Secret
            })
        );
        assert_eq!(
            hasher.hash(SECRET, ""),
            Err(FairnessError::EmptyInput {
                field: InputField::Salt
            })
        );
    }

    proptest! {
        #[test]
        fn prop_commitment_format(
            secret in "[ -~]{1,64}",
            salt in "[ -~]{1,64}",
        ) {
            let hash = calculate_public_hash(&secret, &salt);
            prop_assert_eq!(hash.len(), COMMITMENT_HEX_LEN);
            prop_assert!(hash
                .chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }

        #[test]
        fn prop_commitment_is_deterministic(
            secret in "[ -~]{1,64}",
            salt in "[ -~]{1,64}",
        ) {
            prop_assert_eq!(
                calculate_public_hash(&secret, &salt),
                calculate_public_hash(&secret, &salt)
            );
        }
    }
}
