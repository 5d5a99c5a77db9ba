//! Proof assembly
//!
//! Order of operations is the whole point here:
//!
//! 1. Compute the proof id over the *unsigned* stakes
//! 2. Sign every stake against that id, in insertion order
//! 3. Assemble the proof from the signed stakes
//!
//! Because the id is computed once from the same list that is then drained
//! for signing, the set of stakes signed is exactly the set hashed, in the
//! same order.

use super::proof::{compute_proof_id, Proof, ProofId};
use super::stake::{SignedStake, Stake};
use super::types::{Amount, OutPoint};
use crate::crypto::{PrivateKey, PublicKey, SchnorrSig};
use tracing::{debug, warn};

/// An unsigned stake paired with the key that will sign it
///
/// Single use: [`StakeSigner::sign`] consumes it, moving the stake into the
/// result and dropping (zeroizing) the key.
#[derive(Debug)]
pub struct StakeSigner {
    stake: Stake,
    key: PrivateKey,
}

impl StakeSigner {
    pub fn new(stake: Stake, key: PrivateKey) -> Self {
        Self { stake, key }
    }

    pub fn stake(&self) -> &Stake {
        &self.stake
    }

    /// Sign the stake for `proof_id`.
    ///
    /// If the key cannot produce a signature, the all-zero signature is used
    /// instead. The proof still assembles and the bad stake fails whoever
    /// verifies it.
    pub fn sign(self, proof_id: &ProofId) -> SignedStake {
        let StakeSigner { stake, key } = self;
        let hash = stake.hash(proof_id);

        let signature = key.sign_schnorr(&hash).unwrap_or_else(|| {
            warn!(
                utxo = %stake.utxo(),
                proof_id = %proof_id,
                "stake signing failed, using zero signature"
            );
            SchnorrSig::zero()
        });

        SignedStake::new(stake, signature)
    }
}

/// Accumulates stakes and produces a signed [`Proof`]
///
/// ```rust,ignore
/// let mut builder = ProofBuilder::new(0, expiration, master);
/// if !builder.add_utxo(utxo, amount, height, false, key) {
///     // invalid key, nothing was added
/// }
/// let proof = builder.build();
/// ```
///
/// `build` drains the builder. Calling it again yields a valid proof with no
/// stakes; callers should not rely on reuse.
#[derive(Debug)]
pub struct ProofBuilder {
    sequence: u64,
    expiration_time: i64,
    master: PublicKey,
    stakes: Vec<StakeSigner>,
}

impl ProofBuilder {
    pub fn new(sequence: u64, expiration_time: i64, master: PublicKey) -> Self {
        Self {
            sequence,
            expiration_time,
            master,
            stakes: Vec::new(),
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

    /// Number of stakes waiting to be signed
    pub fn stake_count(&self) -> usize {
        self.stakes.len()
    }

    /// Add a coin to the proof, owned by `key`.
    ///
    /// Returns `false` and leaves the builder untouched if `key` is not a
    /// valid signing key.
    #[must_use]
    pub fn add_utxo(
        &mut self,
        utxo: OutPoint,
        amount: Amount,
        height: u32,
        is_coinbase: bool,
        key: PrivateKey,
    ) -> bool {
        let Some(pubkey) = key.public_key() else {
            warn!(%utxo, "rejecting stake with invalid private key");
            return false;
        };

        self.stakes.push(StakeSigner::new(
            Stake::new(utxo, amount, height, is_coinbase, pubkey),
            key,
        ));
        debug!(
            %utxo,
            %amount,
            height,
            is_coinbase,
            stakes = self.stakes.len(),
            "stake added"
        );
        true
    }

    /// The id the proof would have if built now.
    pub fn proof_id(&self) -> ProofId {
        compute_proof_id(
            self.sequence,
            self.expiration_time,
            self.stakes.iter().map(StakeSigner::stake),
            &self.master,
        )
    }

    /// Sign every stake and assemble the proof. Never fails.
    pub fn build(&mut self) -> Proof {
        let proof_id = self.proof_id();

        let signed: Vec<SignedStake> = self
            .stakes
            .drain(..)
            .map(|signer| signer.sign(&proof_id))
            .collect();

        debug!(%proof_id, stakes = signed.len(), "proof built");
        Proof::new(self.sequence, self.expiration_time, self.master, signed)
    }
}
