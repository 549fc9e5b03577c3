//! Deterministic roll derivation.
//!
//! The roll is a keyed-hash reduction: HMAC-SHA512 over
//! `"{client_seed}-{nonce}"` with the server seed as the key, then the
//! first [`ROLL_CHARS`] hex characters reduced modulo [`ROLL_MAX`].
//! The server seed is the HMAC key, not part of the message, so a
//! player choosing the client seed cannot bias the outcome.
//!
//! The modulo reduction carries a slight bias toward the low end of the
//! range because 16^15 is not a multiple of 100000. That bias is part
//! of the scheme: independent verifiers must reproduce it bit-for-bit,
//! so no rejection sampling is applied.

use crate::error::{FairnessError, InputField};
use crate::policy::ValidationPolicy;
use hmac::{Hmac, Mac};
use sha2::Sha512;

type HmacSha512 = Hmac<Sha512>;

/// Number of leading hex characters of the digest used for the roll.
pub const ROLL_CHARS: usize = 15;

/// Modulus applied to the sub-hash value.
pub const ROLL_MAX: u64 = 100_000;

/// Smallest possible roll.
pub const MIN_ROLL: u32 = 1;

/// Largest possible roll.
pub const MAX_ROLL: u32 = ROLL_MAX as u32;

/// Computes the HMAC-SHA512 digest for a round.
fn roll_digest(server_seed: &str, client_seed: &str, nonce: u64) -> [u8; 64] {
    let mut mac = HmacSha512::new_from_slice(server_seed.as_bytes()).expect("HMAC key");
    mac.update(format!("{client_seed}-{nonce}").as_bytes());
    let mut digest = [0u8; 64];
    digest.copy_from_slice(&mac.finalize().into_bytes());
    digest
}

/// Returns the full round digest as 128 lowercase hex characters.
///
/// Auditors display this alongside the roll so players can follow the
/// reduction by hand.
pub fn roll_digest_hex(server_seed: &str, client_seed: &str, nonce: u64) -> String {
    hex::encode(roll_digest(server_seed, client_seed, nonce))
}

/// Value of the first [`ROLL_CHARS`] hex characters of the digest.
///
/// Fifteen hex characters are the first seven bytes plus the high
/// nibble of the eighth, 60 bits in total.
fn sub_hash_value(digest: &[u8; 64]) -> u64 {
    let mut value = 0u64;
    for &byte in &digest[..ROLL_CHARS / 2] {
        value = (value << 8) | u64::from(byte);
    }
    (value << 4) | u64::from(digest[ROLL_CHARS / 2] >> 4)
}

/// Derives the roll for a round.
///
/// Pure and deterministic: identical inputs always produce the
/// identical roll in `[MIN_ROLL, MAX_ROLL]`. This is the raw transform;
/// it accepts empty seeds the way the hash functions do. Use
/// [`RollGenerator::generate`] to apply an input policy first.
pub fn generate_roll(server_seed: &str, client_seed: &str, nonce: u64) -> u32 {
    let digest = roll_digest(server_seed, client_seed, nonce);
    (sub_hash_value(&digest) % ROLL_MAX) as u32 + 1
}

/// Policy-checked roll derivation.
///
/// Wraps [`generate_roll`] with the deployment's input validation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RollGenerator {
    policy: ValidationPolicy,
}

impl RollGenerator {
    /// Creates a generator with the given validation policy.
    pub fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    /// Validates the seeds per policy, then derives the roll.
    pub fn generate(
        &self,
        server_seed: &str,
        client_seed: &str,
        nonce: u64,
    ) -> Result<u32, FairnessError> {
        self.policy.check(InputField::ServerSeed, server_seed)?;
        self.policy.check(InputField::ClientSeed, client_seed)?;
        Ok(generate_roll(server_seed, client_seed, nonce))
    }
}
