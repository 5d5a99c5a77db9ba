use super::config::StakeProofConfig;
use super::read_input;
use stakeproof::request::{build_proof, ProofRequest};
use tracing::{info, warn};

/// Build a proof from a request file and print it as JSON
///
/// Every stake is checked against the built proof id before output. A stake
/// whose signature does not verify is reported but still emitted, matching
/// the library's "build never fails" behaviour.
pub fn execute(
    config: &StakeProofConfig,
    request_path: String,
    output: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let request = ProofRequest::from_json(&read_input(&request_path)?)?;
    let built = build_proof(request, &config.proof)?;

    for (index, signed) in built.proof.stakes().iter().enumerate() {
        if !signed.verify(&built.proof_id) {
            warn!(index, utxo = %signed.stake().utxo(), "stake signature does not verify");
        }
    }
    info!(
        proof_id = %built.proof_id,
        stakes = built.proof.stakes().len(),
        staked_amount = %built.staked_amount,
        "proof built"
    );

    let json = if config.output.pretty {
        serde_json::to_string_pretty(&built)?
    } else {
        serde_json::to_string(&built)?
    };

    match output {
        Some(path) => std::fs::write(&path, json + "\n")
            .map_err(|e| format!("Failed to write proof to '{}': {}", path, e))?,
        None => println!("{}", json),
    }
    Ok(())
}
