/// Signing primitives for stake proofs
///
/// This module implements:
/// - Private keys with validity checks and zeroization
/// - Public keys with the length-prefixed preimage encoding
/// - Schnorr-family (Ed25519) signatures over 32-byte digests
pub mod keys;

pub use keys::{KeyError, PrivateKey, PublicKey, SchnorrSig};
