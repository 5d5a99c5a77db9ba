//! Stake proofs
//!
//! A proof bundles signed claims over coins ("stakes") under one master key,
//! sequence number, and expiration time. Each stake signature commits to the
//! proof id, so it cannot be lifted into a different proof:
//!
//! ```text
//!   stakes (unsigned) ──┐
//!   sequence ───────────┼─► inner digest ──┐
//!   expiration ─────────┘                  ├─► proof id ──► H(stake || proof id) ──► signature
//!   master key ────────────────────────────┘
//! ```
//!
//! ## Security Properties
//! - Determinism: same unsigned content and master key give the same id
//! - Order sensitivity: reordering stakes changes the id
//! - Binding: a stake signature only verifies under the id it was made for

pub mod builder;
#[allow(clippy::module_inception)]
pub mod proof;
pub mod stake;
pub mod types;

#[cfg(test)]
mod proptests;

pub use builder::{ProofBuilder, StakeSigner};
pub use proof::{compute_proof_id, Proof, ProofId};
pub use stake::{SignedStake, Stake};
pub use types::{Amount, OutPoint, TxId};
