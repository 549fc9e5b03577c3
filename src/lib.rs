//! Provably Fair Verification Library
//!
//! Deterministic derivation and verification primitives for
//! "provably fair" random-number schemes: a server commits to a secret
//! seed before a round, derives each roll from
//! (server seed, client seed, nonce), and reveals the seed afterwards
//! so players can re-derive every outcome themselves.
//!
//! # Scheme
//!
//! ```text
//! commit:  public_hash = SHA-256(server_seed || salt)     (published first)
//! derive:  roll = HMAC-SHA512(key = server_seed,
//!                             msg = "{client_seed}-{nonce}")
//!          → first 15 hex chars → mod 100000 → + 1
//! reveal:  server_seed, salt                              (published last)
//! ```
//!
//! Both transforms are pure and must be reproduced bit-for-bit by every
//! independent verifier, including the inherent modulo bias of the
//! reduction. This crate holds no seed state and performs no I/O; seed
//! lifecycle, reveal timing, and transport belong to the caller.
//!
//! # Example
//!
//! ```
//! use provably_fair::{
//!     generate_roll, calculate_public_hash,
//!     verify_round, RevealedRound, ValidationPolicy,
//! };
//!
//! // Server side, before the round: publish the commitment.
//! let commitment = calculate_public_hash("server-seed", "salt");
//!
//! // Server side, per round: derive the roll.
//! let roll = generate_roll("server-seed", "client-seed", 0);
//! assert!((1..=100_000).contains(&roll));
//!
//! // Player side, after reveal: re-derive everything.
//! let outcome = verify_round(
//!     &RevealedRound {
//!         server_seed: "server-seed".into(),
//!         secret_salt: "salt".into(),
//!         public_hash: commitment,
//!         client_seed: "client-seed".into(),
//!         nonce: 0,
//!         roll,
//!     },
//!     &ValidationPolicy::default(),
//! )
//! .unwrap();
//! assert!(outcome.is_fair());
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod commitment;
pub mod error;
pub mod policy;
pub mod roll;
pub mod verify;

// Re-export commonly used types at crate root
pub use commitment::{calculate_public_hash, CommitmentHasher, COMMITMENT_HEX_LEN};
pub use error::{FairnessError, InputField};
pub use policy::{PolicyFile, PolicyFileError, ValidationPolicy};
pub use roll::{generate_roll, roll_digest_hex, RollGenerator, MAX_ROLL, MIN_ROLL};
pub use verify::{verify_round, RevealedRound, RoundOutcome};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
