use super::config::StakeProofConfig;
use super::read_input;
use stakeproof::request::{proof_id_for, ProofRequest};

/// Print the proof id a request would produce
pub fn execute(
    config: &StakeProofConfig,
    request_path: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let request = ProofRequest::from_json(&read_input(&request_path)?)?;
    let proof_id = proof_id_for(request, &config.proof)?;
    println!("{}", proof_id);
    Ok(())
}
