//! Stakes: claims over individual coins

use super::proof::ProofId;
use super::types::{Amount, OutPoint};
use crate::crypto::{PublicKey, SchnorrSig};
use crate::hash::{Hash256, HashWriter};
use crate::serialization::{Encodable, Sink};
use serde::{Deserialize, Serialize};

/// A claim over one coin
///
/// Immutable once constructed. The encoded form is the "unsigned content" that
/// goes into a proof id:
///
/// ```text
/// txid (32) || vout (u32) || amount (i64) || height << 1 | coinbase (u32) || pubkey
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stake {
    utxo: OutPoint,
    amount: Amount,
    height: u32,
    is_coinbase: bool,
    pubkey: PublicKey,
}

impl Stake {
    pub fn new(
        utxo: OutPoint,
        amount: Amount,
        height: u32,
        is_coinbase: bool,
        pubkey: PublicKey,
    ) -> Self {
        Self {
            utxo,
            amount,
            height,
            is_coinbase,
            pubkey,
        }
    }

    pub fn utxo(&self) -> &OutPoint {
        &self.utxo
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_coinbase(&self) -> bool {
        self.is_coinbase
    }

    pub fn pubkey(&self) -> &PublicKey {
        &self.pubkey
    }

    /// The digest a stake signature commits to: this stake bound to one proof.
    ///
    /// Preimage is `stake bytes || proof_id`.
    pub fn hash(&self, proof_id: &ProofId) -> Hash256 {
        HashWriter::new().write(self).write(proof_id).finalize()
    }
}

impl Encodable for Stake {
    fn encode<S: Sink + ?Sized>(&self, sink: &mut S) {
        self.utxo.encode(sink);
        self.amount.encode(sink);
        // Height and coinbase flag share one word; the top bit of height is lost.
        let height_and_coinbase = (self.height << 1) | u32::from(self.is_coinbase);
        height_and_coinbase.encode(sink);
        self.pubkey.encode(sink);
    }
}

/// A stake together with its owner's signature for one specific proof
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedStake {
    stake: Stake,
    signature: SchnorrSig,
}

impl SignedStake {
    pub fn new(stake: Stake, signature: SchnorrSig) -> Self {
        Self { stake, signature }
    }

    pub fn stake(&self) -> &Stake {
        &self.stake
    }

    pub fn signature(&self) -> &SchnorrSig {
        &self.signature
    }

    /// Whether the signature is the zero sentinel left by a failed signing.
    pub fn is_poisoned(&self) -> bool {
        self.signature.is_zero()
    }

    /// Check the signature against the stake's own key, in the context of `proof_id`.
    pub fn verify(&self, proof_id: &ProofId) -> bool {
        self.stake
            .pubkey
            .verify_schnorr(&self.stake.hash(proof_id), &self.signature)
    }
}
