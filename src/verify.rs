//! After-the-fact round verification.
//!
//! Once the server reveals its seed and salt, a player holds everything
//! needed to re-derive the round: the roll must match what was paid out
//! and the commitment hash must match what was published before the
//! round. This module recomputes both and reports each comparison
//! separately so a verifier can tell a forged roll from a swapped seed.

use crate::commitment::{calculate_public_hash, COMMITMENT_HEX_LEN};
use crate::error::{FairnessError, InputField};
use crate::policy::ValidationPolicy;
use crate::roll::generate_roll;
use serde::{Deserialize, Serialize};

/// A fully disclosed round, as published by the server after reveal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealedRound {
    /// The revealed server seed.
    pub server_seed: String,
    /// The revealed commitment salt.
    pub secret_salt: String,
    /// The commitment hash published before the round.
    pub public_hash: String,
    /// The client seed used for the round.
    pub client_seed: String,
    /// The round nonce.
    pub nonce: u64,
    /// The roll the server reported.
    pub roll: u32,
}

/// Result of re-deriving a disclosed round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// The roll recomputed from the revealed seeds.
    pub expected_roll: u32,
    /// Whether the recomputed roll matches the reported one.
    pub roll_matches: bool,
    /// The commitment hash recomputed from seed and salt.
    pub expected_hash: String,
    /// Whether the recomputed hash matches the published one.
    pub hash_matches: bool,
}

impl RoundOutcome {
    /// True when both the roll and the commitment check out.
    pub fn is_fair(&self) -> bool {
        self.roll_matches && self.hash_matches
    }
}

/// Re-derives a disclosed round and compares it to the server's claims.
pub fn verify_round(
    round: &RevealedRound,
    policy: &ValidationPolicy,
) -> Result<RoundOutcome, FairnessError> {
    policy.check(InputField::ServerSeed, &round.server_seed)?;
    policy.check(InputField::ClientSeed, &round.client_seed)?;
    policy.check(InputField::Salt, &round.secret_salt)?;

    let expected_roll = generate_roll(&round.server_seed, &round.client_seed, round.nonce);
    let expected_hash = calculate_public_hash(&round.server_seed, &round.secret_salt);
    let hash_matches = round.public_hash.len() == COMMITMENT_HEX_LEN
        && expected_hash.eq_ignore_ascii_case(&round.public_hash);

    Ok(RoundOutcome {
        expected_roll,
        roll_matches: expected_roll == round.roll,
        expected_hash,
        hash_matches,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disclosed_round() -> RevealedRound {
        RevealedRound {
            server_seed: "819e9c8b09b28f9875d7a14bce2161bf".into(),
            secret_salt: "8f0381b8cbbfe822ef56e6044d9c5912".into(),
            public_hash: "37095a43325c6b084911b7a45bbc7ff28f0b53e78191d260b6895e694a86d7a9"
                .into(),
            client_seed: "0x4babc432f015985c0c6f42177082fb4a6926436f".into(),
            nonce: 71,
            roll: 78011,
        }
    }

    #[test]
    fn test_honest_round_verifies() {
        let outcome = verify_round(&disclosed_round(), &ValidationPolicy::default()).unwrap();
        assert_eq!(outcome.expected_roll, 78011);
        assert!(outcome.roll_matches);
        assert!(outcome.hash_matches);
        assert!(outcome.is_fair());
    }

    #[test]
    fn test_forged_roll_detected() {
        let mut round = disclosed_round();
        round.roll = 78012;
        let outcome = verify_round(&round, &ValidationPolicy::default()).unwrap();
        assert!(!outcome.roll_matches);
        assert!(outcome.hash_matches);
        assert!(!outcome.is_fair());
    }

    #[test]
    fn test_swapped_seed_detected() {
        // A server seed that doesn't match the commitment produces a
        // different roll and a different hash.
        let mut round = disclosed_round();
        round.server_seed = "b1e09ba4298225e04682e44a0f95c1ad".into();
        let outcome = verify_round(&round, &ValidationPolicy::default()).unwrap();
        assert!(!outcome.hash_matches);
        assert!(!outcome.is_fair());
    }

    #[test]
    fn test_empty_seed_rejected_by_policy() {
        let mut round = disclosed_round();
        round.server_seed = String::new();
        assert_eq!(
            verify_round(&round, &ValidationPolicy::default()),
            Err(FairnessError::EmptyInput {
                field: InputField::ServerSeed
            })
        );
        assert!(verify_round(&round, &ValidationPolicy::permissive()).is_ok());
    }

    #[test]
    fn test_round_record_round_trips_through_toml() {
        let round = disclosed_round();
        let encoded = toml::to_string(&round).unwrap();
        let decoded: RevealedRound = toml::from_str(&encoded).unwrap();
        assert_eq!(decoded, round);
    }
}
