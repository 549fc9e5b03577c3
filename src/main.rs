//! Provably Fair Verification CLI
//!
//! Command-line demonstration that re-derives a disclosed round and
//! checks it against the server's published commitment and roll.

use provably_fair::{
    roll_digest_hex, verify_round, RevealedRound, ValidationPolicy,
};
use tracing::{info, warn};

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Provably Fair Verifier v{}", provably_fair::VERSION);
    info!("Re-deriving a disclosed reference round");

    // A round as a server would disclose it after reveal.
    let round = RevealedRound {
        server_seed: "819e9c8b09b28f9875d7a14bce2161bf".into(),
        secret_salt: "8f0381b8cbbfe822ef56e6044d9c5912".into(),
        public_hash: "37095a43325c6b084911b7a45bbc7ff28f0b53e78191d260b6895e694a86d7a9".into(),
        client_seed: "0x4babc432f015985c0c6f42177082fb4a6926436f".into(),
        nonce: 71,
        roll: 78011,
    };

    let outcome = match verify_round(&round, &ValidationPolicy::default()) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Round rejected before verification: {}", e);
            std::process::exit(1);
        }
    };

    info!(
        "Round digest: {}",
        roll_digest_hex(&round.server_seed, &round.client_seed, round.nonce)
    );
    info!(
        "Recomputed roll {} (reported {}), match: {}",
        outcome.expected_roll, round.roll, outcome.roll_matches
    );
    info!(
        "Recomputed commitment {}, match: {}",
        outcome.expected_hash, outcome.hash_matches
    );

    if outcome.is_fair() {
        println!("Round verified: roll and commitment both match");
    } else {
        warn!("Round FAILED verification");
        println!(
            "Round NOT verified: roll_matches={}, hash_matches={}",
            outcome.roll_matches, outcome.hash_matches
        );
        std::process::exit(2);
    }
}
