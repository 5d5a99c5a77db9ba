//! JSON proof requests
//!
//! A request describes a whole proof in one document: master key, optional
//! sequence/expiration, and the coins to stake with their private keys.
//!
//! ```json
//! {
//!   "sequence": 0,
//!   "expiration": 0,
//!   "master": "<hex public key>",
//!   "stakes": [
//!     { "txid": "<hex>", "vout": 0, "amount": 5000, "height": 100,
//!       "iscoinbase": false, "privatekey": "<hex>" }
//!   ]
//! }
//! ```
//!
//! Numeric fields are parsed as signed integers so that negative values get a
//! specific error instead of a generic JSON failure.

use crate::crypto::{PrivateKey, PublicKey};
use crate::proof::{Amount, OutPoint, Proof, ProofBuilder, ProofId, TxId};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors produced while turning a request into a proof
#[derive(Debug, Error)]
pub enum RequestError {
    /// The document is not valid JSON or has the wrong shape
    #[error("Invalid request: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid master public key")]
    InvalidMaster,

    #[error("txid must be hexadecimal string")]
    InvalidTxid,

    #[error("vout must be positive")]
    NegativeVout,

    #[error("vout out of range")]
    VoutOutOfRange,

    #[error("height must be positive")]
    NonPositiveHeight,

    #[error("height out of range")]
    HeightOutOfRange,

    #[error("Missing amount")]
    MissingAmount,

    #[error("Amount out of range")]
    AmountOutOfRange,

    #[error("Invalid private key")]
    InvalidPrivateKey,
}

/// Fallback values for fields a request may omit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofDefaults {
    /// Sequence number used when the request has none
    #[serde(default)]
    pub sequence: u64,

    /// Expiration time used when the request has none
    #[serde(default)]
    pub expiration: i64,
}

/// One coin to stake
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StakeRequest {
    pub txid: String,
    pub vout: i64,
    #[serde(default)]
    pub amount: Option<i64>,
    pub height: i64,
    #[serde(default)]
    pub iscoinbase: bool,
    pub privatekey: String,
}

/// A full proof request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofRequest {
    #[serde(default)]
    pub sequence: Option<u64>,
    #[serde(default)]
    pub expiration: Option<i64>,
    pub master: String,
    #[serde(default)]
    pub stakes: Vec<StakeRequest>,
}

/// A built proof with its id, as printed by the CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuiltProof {
    pub proof_id: ProofId,
    pub staked_amount: Amount,
    pub proof: Proof,
}

impl ProofRequest {
    pub fn from_json(input: &str) -> Result<Self, RequestError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Validate every field and load the stakes into a builder.
    ///
    /// Stakes are checked in order; the first failure aborts the whole request.
    pub fn into_builder(self, defaults: &ProofDefaults) -> Result<ProofBuilder, RequestError> {
        let master = PublicKey::from_hex(&self.master).map_err(|_| RequestError::InvalidMaster)?;
        let mut builder = ProofBuilder::new(
            self.sequence.unwrap_or(defaults.sequence),
            self.expiration.unwrap_or(defaults.expiration),
            master,
        );

        for stake in self.stakes {
            stake.add_to(&mut builder)?;
        }

        debug!(
            sequence = builder.sequence(),
            expiration = builder.expiration_time(),
            stakes = builder.stake_count(),
            "request loaded"
        );
        Ok(builder)
    }
}

impl StakeRequest {
    fn add_to(self, builder: &mut ProofBuilder) -> Result<(), RequestError> {
        let txid = TxId::from_hex(&self.txid).map_err(|_| RequestError::InvalidTxid)?;

        if self.vout < 0 {
            return Err(RequestError::NegativeVout);
        }
        let vout = u32::try_from(self.vout).map_err(|_| RequestError::VoutOutOfRange)?;

        if self.height < 1 {
            return Err(RequestError::NonPositiveHeight);
        }
        let height = u32::try_from(self.height).map_err(|_| RequestError::HeightOutOfRange)?;

        let amount = self.amount.ok_or(RequestError::MissingAmount)?;
        if amount < 0 {
            return Err(RequestError::AmountOutOfRange);
        }

        let key =
            PrivateKey::from_hex(&self.privatekey).map_err(|_| RequestError::InvalidPrivateKey)?;

        let added = builder.add_utxo(
            OutPoint::new(txid, vout),
            Amount::from_units(amount),
            height,
            self.iscoinbase,
            key,
        );
        if !added {
            return Err(RequestError::InvalidPrivateKey);
        }
        Ok(())
    }
}

/// Build and sign the proof a request describes.
pub fn build_proof(
    request: ProofRequest,
    defaults: &ProofDefaults,
) -> Result<BuiltProof, RequestError> {
    let proof = request.into_builder(defaults)?.build();
    Ok(BuiltProof {
        proof_id: proof.id(),
        staked_amount: proof.staked_amount(),
        proof,
    })
}

/// The id a request would produce, without signing anything.
pub fn proof_id_for(
    request: ProofRequest,
    defaults: &ProofDefaults,
) -> Result<ProofId, RequestError> {
    Ok(request.into_builder(defaults)?.proof_id())
}
