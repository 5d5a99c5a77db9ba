//! Byte-exact encoding for hash preimages.
//!
//! Proof ids and stake signing hashes are computed over a fixed binary layout:
//! - Integers are little-endian, fixed width
//! - Collections and variable-length byte strings carry a `compact_size` prefix
//! - Hashes are written as 32 raw bytes
//!
//! The layout is the commitment, so it must never change shape silently.
//! Anything that feeds a digest implements [`Encodable`].

use thiserror::Error;

/// Encoding errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodingError {
    /// Input was not valid hexadecimal.
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// Decoded byte string had the wrong length.
    #[error("expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

/// Destination for encoded bytes.
///
/// Both in-memory buffers and hash writers accept bytes without failing, so
/// encoding is infallible.
pub trait Sink {
    fn put(&mut self, bytes: &[u8]);
}

impl Sink for Vec<u8> {
    fn put(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }
}

/// A value with a canonical preimage encoding.
pub trait Encodable {
    fn encode<S: Sink + ?Sized>(&self, sink: &mut S);

    /// Encode into a fresh buffer.
    fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        self.encode(&mut bytes);
        bytes
    }
}

impl Encodable for u32 {
    fn encode<S: Sink + ?Sized>(&self, sink: &mut S) {
        sink.put(&self.to_le_bytes());
    }
}

impl Encodable for u64 {
    fn encode<S: Sink + ?Sized>(&self, sink: &mut S) {
        sink.put(&self.to_le_bytes());
    }
}

impl Encodable for i64 {
    fn encode<S: Sink + ?Sized>(&self, sink: &mut S) {
        sink.put(&self.to_le_bytes());
    }
}

/// Write a variable-length count prefix.
///
/// | value               | encoding           |
/// |---------------------|--------------------|
/// | `< 0xfd`            | 1 byte             |
/// | `<= 0xffff`         | `0xfd` + u16 LE    |
/// | `<= 0xffff_ffff`    | `0xfe` + u32 LE    |
/// | otherwise           | `0xff` + u64 LE    |
pub fn write_compact_size<S: Sink + ?Sized>(sink: &mut S, size: u64) {
    if size < 0xfd {
        sink.put(&[size as u8]);
    } else if size <= 0xffff {
        sink.put(&[0xfd]);
        sink.put(&(size as u16).to_le_bytes());
    } else if size <= 0xffff_ffff {
        sink.put(&[0xfe]);
        sink.put(&(size as u32).to_le_bytes());
    } else {
        sink.put(&[0xff]);
        sink.put(&size.to_le_bytes());
    }
}

/// Decode a hex string into a fixed-size array.
pub fn decode_hex_array<const N: usize>(input: &str) -> Result<[u8; N], EncodingError> {
    let bytes = hex::decode(input).map_err(|e| EncodingError::InvalidHex(e.to_string()))?;
    bytes
        .as_slice()
        .try_into()
        .map_err(|_| EncodingError::InvalidLength {
            expected: N,
            actual: bytes.len(),
        })
}

/// Serde adapter for fixed-size byte arrays carried as hex strings in JSON.
///
/// Use with `#[serde(with = "crate::serialization::hex_array")]`.
pub mod hex_array {
    use super::decode_hex_array;
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer, const N: usize>(
        bytes: &[u8; N],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>, const N: usize>(
        deserializer: D,
    ) -> Result<[u8; N], D::Error> {
        let s = String::deserialize(deserializer)?;
        decode_hex_array(&s).map_err(D::Error::custom)
    }
}
