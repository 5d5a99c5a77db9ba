//! stakeproof - signed stake proofs
//!
//! Builds proofs that bundle claimed coins ("stakes") under one master key.
//! Each stake is signed against the proof id, which commits to the sequence
//! number, expiration time, every unsigned stake in order, and the master key.
//!
//! Key principles:
//! - Id first, signatures second: stakes are signed against the id of the
//!   unsigned content
//! - Byte-exact preimages (see `serialization`)
//! - Building never fails once stakes are accepted; failed signatures become
//!   all-zero sentinels

pub mod crypto;
pub mod hash;
pub mod proof;
pub mod request;
pub mod serialization;

pub use crypto::{PrivateKey, PublicKey, SchnorrSig};
pub use proof::{Amount, OutPoint, Proof, ProofBuilder, ProofId, SignedStake, Stake, TxId};
