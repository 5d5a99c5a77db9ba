//! Double SHA-256 hash writer and the 256-bit digest type.
//!
//! Every commitment in a stake proof is `SHA256(SHA256(preimage))` over the
//! byte layout defined in [`crate::serialization`]. The writer streams the
//! preimage so callers never assemble it in memory.

use crate::serialization::{decode_hex_array, Encodable, EncodingError, Sink};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// A 256-bit digest.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Hash256(#[serde(with = "crate::serialization::hex_array")] pub [u8; 32]);

impl Hash256 {
    /// Returns the raw bytes of the digest
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Parse a 64-character hex string.
    pub fn from_hex(input: &str) -> Result<Self, EncodingError> {
        decode_hex_array(input).map(Self)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Encodable for Hash256 {
    fn encode<S: Sink + ?Sized>(&self, sink: &mut S) {
        sink.put(&self.0);
    }
}

/// Streaming double SHA-256.
#[derive(Clone, Default)]
pub struct HashWriter {
    inner: Sha256,
}

impl HashWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an encodable value and return the writer for chaining.
    pub fn write<T: Encodable + ?Sized>(mut self, value: &T) -> Self {
        value.encode(&mut self);
        self
    }

    /// Finish the stream: `SHA256(SHA256(bytes written))`.
    pub fn finalize(self) -> Hash256 {
        let first = self.inner.finalize();
        Hash256(Sha256::digest(first).into())
    }
}

impl Sink for HashWriter {
    fn put(&mut self, bytes: &[u8]) {
        self.inner.update(bytes);
    }
}
