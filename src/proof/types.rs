//! Coin primitives referenced by stakes

use crate::hash::Hash256;
use crate::serialization::{Encodable, EncodingError, Sink};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;

/// Identifier of the transaction that created a coin
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxId(pub Hash256);

impl TxId {
    pub fn from_hex(input: &str) -> Result<Self, EncodingError> {
        Hash256::from_hex(input).map(Self)
    }
}

impl fmt::Display for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A reference to one transaction output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OutPoint {
    /// Transaction that created the output
    pub txid: TxId,

    /// Output index within that transaction
    pub vout: u32,
}

impl OutPoint {
    pub fn new(txid: TxId, vout: u32) -> Self {
        Self { txid, vout }
    }
}

impl fmt::Display for OutPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.txid, self.vout)
    }
}

impl Encodable for OutPoint {
    fn encode<S: Sink + ?Sized>(&self, sink: &mut S) {
        self.txid.0.encode(sink);
        self.vout.encode(sink);
    }
}

/// A coin value in base units
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub const fn from_units(units: i64) -> Self {
        Self(units)
    }

    pub const fn to_units(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Encodable for Amount {
    fn encode<S: Sink + ?Sized>(&self, sink: &mut S) {
        self.0.encode(sink);
    }
}

/// Saturates instead of overflowing; stake sums are informational.
impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        Amount(iter.fold(0i64, |acc, a| acc.saturating_add(a.0)))
    }
}
