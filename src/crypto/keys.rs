//! Stake and master keys
//!
//! Stakes are signed with Ed25519 (a Schnorr-family scheme) through `ring`.
//! Signatures are made over a 32-byte digest, never over raw messages, so the
//! caller decides what a signature commits to.
//!
//! ## Key validity
//!
//! A private key is a 32-byte seed. The all-zero seed is treated as "unset"
//! and is never valid, which gives callers a single well-defined rejection
//! case. Any seed `ring` refuses to expand is invalid as well.
//!
//! ## Zeroization
//!
//! `PrivateKey` clears its seed on drop.

use crate::hash::Hash256;
use crate::serialization::{decode_hex_array, write_compact_size, Encodable, EncodingError, Sink};
use rand::RngCore;
use ring::signature::{self, Ed25519KeyPair, KeyPair, UnparsedPublicKey};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Public key length in bytes
pub const PUBLIC_KEY_LEN: usize = 32;

/// Signature length in bytes
pub const SIGNATURE_LEN: usize = 64;

/// Errors that can occur while parsing keys
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    /// Hex decoding or length check failed
    #[error("Malformed key: {0}")]
    Malformed(#[from] EncodingError),

    /// Bytes decode but do not form a usable key
    #[error("Invalid key")]
    Invalid,
}

/// A private signing key (Ed25519 seed).
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey([u8; 32]);

impl PrivateKey {
    /// Wrap raw seed bytes. No validation happens here; see [`PrivateKey::is_valid`].
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parse a 64-character hex seed. Structural errors only; validity is
    /// checked separately.
    pub fn from_hex(input: &str) -> Result<Self, KeyError> {
        Ok(Self(decode_hex_array(input)?))
    }

    /// Generate a fresh random key from the OS RNG.
    pub fn generate() -> Self {
        let mut seed = [0u8; 32];
        loop {
            rand::rngs::OsRng.fill_bytes(&mut seed);
            let key = Self(seed);
            if key.is_valid() {
                seed.zeroize();
                return key;
            }
        }
    }

    /// Hex encoding of the seed. Handle with care.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn is_valid(&self) -> bool {
        self.0.iter().any(|b| *b != 0) && self.key_pair().is_some()
    }

    /// The matching public key, or `None` for an invalid key.
    pub fn public_key(&self) -> Option<PublicKey> {
        if !self.is_valid() {
            return None;
        }
        let pair = self.key_pair()?;
        let mut bytes = [0u8; PUBLIC_KEY_LEN];
        bytes.copy_from_slice(pair.public_key().as_ref());
        Some(PublicKey(bytes))
    }

    /// Sign a 32-byte digest.
    ///
    /// Returns `None` when the key cannot produce a signature.
    pub fn sign_schnorr(&self, hash: &Hash256) -> Option<SchnorrSig> {
        if !self.is_valid() {
            return None;
        }
        let pair = self.key_pair()?;
        let sig = pair.sign(hash.as_bytes());
        let mut bytes = [0u8; SIGNATURE_LEN];
        bytes.copy_from_slice(sig.as_ref());
        Some(SchnorrSig(bytes))
    }

    fn key_pair(&self) -> Option<Ed25519KeyPair> {
        Ed25519KeyPair::from_seed_unchecked(&self.0).ok()
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(<redacted>)")
    }
}

/// A public key identifying a stake owner or a proof master.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublicKey(#[serde(with = "crate::serialization::hex_array")] [u8; PUBLIC_KEY_LEN]);

impl PublicKey {
    /// Parse a public key from its hex encoding.
    ///
    /// Only the length is checked; a key that is not a curve point simply
    /// never verifies anything.
    pub fn from_hex(input: &str) -> Result<Self, KeyError> {
        Ok(Self(decode_hex_array(input)?))
    }

    pub fn from_bytes(bytes: [u8; PUBLIC_KEY_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Check a signature over a 32-byte digest.
    pub fn verify_schnorr(&self, hash: &Hash256, sig: &SchnorrSig) -> bool {
        UnparsedPublicKey::new(&signature::ED25519, &self.0)
            .verify(hash.as_bytes(), &sig.0)
            .is_ok()
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.to_hex())
    }
}

/// Length-prefixed, like any variable-length byte string in a preimage.
impl Encodable for PublicKey {
    fn encode<S: Sink + ?Sized>(&self, sink: &mut S) {
        write_compact_size(sink, PUBLIC_KEY_LEN as u64);
        sink.put(&self.0);
    }
}

/// A 64-byte Schnorr-family signature.
///
/// The all-zero value is the sentinel for "signing failed"; it never verifies.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchnorrSig(#[serde(with = "crate::serialization::hex_array")] [u8; SIGNATURE_LEN]);

impl SchnorrSig {
    /// The all-zero sentinel signature.
    pub const fn zero() -> Self {
        Self([0u8; SIGNATURE_LEN])
    }

    pub fn from_bytes(bytes: [u8; SIGNATURE_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LEN] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

impl fmt::Debug for SchnorrSig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SchnorrSig({})", hex::encode(self.0))
    }
}
