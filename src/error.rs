//! Error types for roll derivation and commitment hashing.
//!
//! The transforms are pure, so every failure is detected synchronously
//! at the offending input and surfaced as the error kind plus the field
//! it applies to. Retrying with unchanged inputs can never succeed.

use std::fmt;
use thiserror::Error;

/// Input fields that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    /// The server-held secret seed used as the HMAC key.
    ServerSeed,
    /// The client-supplied seed embedded in the hashed message.
    ClientSeed,
    /// The secret being committed to.
    Secret,
    /// The salt appended to the secret before commitment hashing.
    Salt,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputField::ServerSeed => "server seed",
            InputField::ClientSeed => "client seed",
            InputField::Secret => "secret",
            InputField::Salt => "salt",
        };
        f.write_str(name)
    }
}

/// Errors produced by the policy-checked derivation entry points.
///
/// Rust's type system already rules out the malformed inputs the scheme
/// must reject elsewhere: `&str` arguments are valid UTF-8 by
/// construction, and a `u64` nonce cannot be negative. What remains is
/// the empty-input check, which is a deployment policy rather than an
/// algorithmic requirement (the hash functions accept empty input).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FairnessError {
    /// An input was empty and the active policy rejects empty inputs.
    #[error("{field} must not be empty")]
    EmptyInput {
        /// Which input failed the check.
        field: InputField,
    },
}
