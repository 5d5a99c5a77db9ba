//! Finished proofs and the proof id commitment

use super::stake::{SignedStake, Stake};
use super::types::Amount;
use crate::crypto::PublicKey;
use crate::hash::{Hash256, HashWriter};
use crate::serialization::{write_compact_size, Encodable, Sink};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Content-derived identifier of a proof
///
/// Every stake signature in a proof commits to this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProofId(Hash256);

impl ProofId {
    pub fn as_hash(&self) -> &Hash256 {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl From<Hash256> for ProofId {
    fn from(hash: Hash256) -> Self {
        ProofId(hash)
    }
}

impl fmt::Display for ProofId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Encodable for ProofId {
    fn encode<S: Sink + ?Sized>(&self, sink: &mut S) {
        self.0.encode(sink);
    }
}

/// Compute a proof id from unsigned content.
///
/// Two stages:
///
/// ```text
/// inner = H(sequence || expiration || compact_size(n) || stake_1 || ... || stake_n)
/// id    = H(inner || master)
/// ```
///
/// The inner digest covers what is claimed, the outer one who claims it.
/// Stake order matters.
pub fn compute_proof_id<'a, I>(
    sequence: u64,
    expiration_time: i64,
    stakes: I,
    master: &PublicKey,
) -> ProofId
where
    I: ExactSizeIterator<Item = &'a Stake>,
{
    let mut inner = HashWriter::new().write(&sequence).write(&expiration_time);
    write_compact_size(&mut inner, stakes.len() as u64);
    for stake in stakes {
        stake.encode(&mut inner);
    }

    let outer = HashWriter::new().write(&inner.finalize()).write(master);
    ProofId(outer.finalize())
}

/// A finished stake proof
///
/// Immutable. Owns its signed stakes in the order they were added to the builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proof {
    sequence: u64,
    expiration_time: i64,
    master: PublicKey,
    stakes: Vec<SignedStake>,
}

impl Proof {
    pub fn new(
        sequence: u64,
        expiration_time: i64,
        master: PublicKey,
        stakes: Vec<SignedStake>,
    ) -> Self {
        Self {
            sequence,
            expiration_time,
            master,
            stakes,
        }
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn expiration_time(&self) -> i64 {
        self.expiration_time
    }

    pub fn master(&self) -> &PublicKey {
        &self.master
    }

    pub fn stakes(&self) -> &[SignedStake] {
        &self.stakes
    }

    /// Recompute the id from this proof's own unsigned content.
    pub fn id(&self) -> ProofId {
        compute_proof_id(
            self.sequence,
            self.expiration_time,
            self.stakes.iter().map(SignedStake::stake),
            &self.master,
        )
    }

    /// Total value claimed across all stakes
    pub fn staked_amount(&self) -> Amount {
        self.stakes.iter().map(|s| s.stake().amount()).sum()
    }
}
